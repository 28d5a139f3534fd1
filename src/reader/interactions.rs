impl ReaderView {
    /// Session-scoped keyboard shortcuts. Bound to the reading view's own
    /// element tree, so they live and die with the session, and they are
    /// fully suppressed while the page field owns focus.
    fn handle_key_down(
        &mut self,
        event: &gpui::KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.screen != Screen::Reading {
            return;
        }
        if self.page_input_focused {
            return;
        }

        match event.keystroke.key.as_str() {
            "right" => {
                self.next_page(cx);
                cx.stop_propagation();
            }
            "left" => {
                self.prev_page(cx);
                cx.stop_propagation();
            }
            "escape" => {
                self.leave_reading(cx);
                cx.stop_propagation();
            }
            _ => {}
        }
    }

    /// Leave the reading session: cancel the pending debounce, invalidate
    /// every in-flight load/render/flip task, and drop the session state.
    pub(super) fn leave_reading(&mut self, cx: &mut Context<Self>) {
        if self.screen != Screen::Reading {
            return;
        }

        self.page_settler.cancel();
        self.load_epoch = self.load_epoch.wrapping_add(1);
        self.flip_epoch = self.flip_epoch.wrapping_add(1);
        self.reading = None;
        self.screen = Screen::Home;
        self.needs_root_refocus = true;
        cx.notify();
    }

    pub(super) fn sign_out(&mut self, cx: &mut Context<Self>) {
        self.session_store.clear();
        self.session_expired = false;
        self.page_settler.cancel();
        self.load_epoch = self.load_epoch.wrapping_add(1);
        self.flip_epoch = self.flip_epoch.wrapping_add(1);
        self.reading = None;
        self.screen = Screen::SignedOut;
        cx.notify();
    }

    pub(super) fn open_book_from_input(&mut self, cx: &mut Context<Self>) {
        let book_id = self.book_id_input_state.read(cx).value().to_string();
        self.open_book(&book_id, cx);
    }

    pub(super) fn open_recent_book(&mut self, book_id: String, cx: &mut Context<Self>) {
        self.open_book(&book_id, cx);
    }

    pub(super) fn zoom_in(&mut self, cx: &mut Context<Self>) {
        if let Some(reading) = self.reading.as_mut()
            && reading.session.zoom_in()
        {
            cx.notify();
        }
    }

    pub(super) fn zoom_out(&mut self, cx: &mut Context<Self>) {
        if let Some(reading) = self.reading.as_mut()
            && reading.session.zoom_out()
        {
            cx.notify();
        }
    }

    pub(super) fn zoom_reset(&mut self, cx: &mut Context<Self>) {
        if let Some(reading) = self.reading.as_mut()
            && reading.session.zoom_reset()
        {
            cx.notify();
        }
    }

    pub(super) fn open_logs_directory(&self) {
        let Some(log_file_path) = crate::logger::log_file_path() else {
            crate::debug_log!("[log] cannot open logs directory: unresolved log path");
            return;
        };

        let log_dir = log_file_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or(log_file_path);

        let status = {
            #[cfg(target_os = "macos")]
            {
                std::process::Command::new("open").arg(&log_dir).status()
            }
            #[cfg(target_os = "windows")]
            {
                std::process::Command::new("explorer")
                    .arg(&log_dir)
                    .status()
            }
            #[cfg(all(unix, not(target_os = "macos")))]
            {
                std::process::Command::new("xdg-open")
                    .arg(&log_dir)
                    .status()
            }
        };

        match status {
            Ok(exit_status) if exit_status.success() => {
                crate::debug_log!("[log] opened logs directory: {}", log_dir.display());
            }
            Ok(exit_status) => {
                crate::debug_log!(
                    "[log] failed to open logs directory: {} | exit={}",
                    log_dir.display(),
                    exit_status
                );
            }
            Err(err) => {
                crate::debug_log!(
                    "[log] failed to open logs directory: {} | {}",
                    log_dir.display(),
                    err
                );
            }
        }
    }
}
