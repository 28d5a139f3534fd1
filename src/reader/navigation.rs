impl ReaderView {
    pub(super) fn next_page(&mut self, cx: &mut Context<Self>) {
        let Some(reading) = self.reading.as_mut() else {
            return;
        };
        if !reading.is_ready() {
            return;
        }
        if reading.flipbook.flip_next() {
            self.start_flip_ticker(cx);
            cx.notify();
        }
    }

    pub(super) fn prev_page(&mut self, cx: &mut Context<Self>) {
        let Some(reading) = self.reading.as_mut() else {
            return;
        };
        if !reading.is_ready() {
            return;
        }
        if reading.flipbook.flip_prev() {
            self.start_flip_ticker(cx);
            cx.notify();
        }
    }

    /// Validated direct jump. Out-of-range targets, the current page, and
    /// requests made while the document is loading or a turn is animating
    /// are silently ignored.
    pub(super) fn jump_to_page(&mut self, page: usize, cx: &mut Context<Self>) {
        let Some(reading) = self.reading.as_mut() else {
            return;
        };
        if !reading.is_ready() || reading.flipbook.is_animating() {
            return;
        }
        if !reading.session.jump_to(page) {
            return;
        }

        reading.flipbook.flip_to_page(page - 1);
        self.schedule_page_input_sync();
        self.start_flip_ticker(cx);
        cx.notify();
    }

    /// Keystrokes in the page field settle through the debounce; only the
    /// final stable value triggers a jump.
    pub(super) fn on_page_input_changed(&mut self, value: String, cx: &mut Context<Self>) {
        if self.screen != Screen::Reading {
            return;
        }

        self.page_settler.update(value, Instant::now());
        let delay = self.page_settler.delay() + Duration::from_millis(PAGE_INPUT_DEBOUNCE_GRACE_MS);
        cx.spawn(async move |view, cx| {
            cx.background_executor().timer(delay).await;
            let _ = view.update(cx, |this, cx| this.apply_settled_page_input(cx));
        })
        .detach();
    }

    fn apply_settled_page_input(&mut self, cx: &mut Context<Self>) {
        let Some(raw) = self.page_settler.poll(Instant::now()) else {
            return;
        };
        if let Ok(page) = raw.trim().parse::<usize>() {
            self.jump_to_page(page, cx);
        }
    }

    /// Enter bypasses the debounce: jump immediately with the field's value
    /// and hand focus back to the reading surface.
    pub(super) fn on_page_input_enter(&mut self, cx: &mut Context<Self>) {
        if self.screen != Screen::Reading {
            return;
        }

        self.page_settler.cancel();
        let raw = self.page_input_state.read(cx).value().to_string();
        if let Ok(page) = raw.trim().parse::<usize>() {
            self.jump_to_page(page, cx);
        }
        self.schedule_page_input_sync();
        self.needs_root_refocus = true;
        cx.notify();
    }

    /// Drive the running flip animation. A single ticker runs per turn and
    /// dies with the flip epoch, so nothing advances after the session ends.
    fn start_flip_ticker(&mut self, cx: &mut Context<Self>) {
        let animating = self
            .reading
            .as_ref()
            .map(|reading| reading.flipbook.is_animating())
            .unwrap_or(false);
        if !animating || self.flip_ticker_running {
            return;
        }

        self.flip_ticker_running = true;
        let epoch = self.flip_epoch;

        cx.spawn(async move |view, cx| {
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(FLIP_FRAME_MS))
                    .await;

                let keep_going = view.update(cx, |this, cx| {
                    if this.flip_epoch != epoch {
                        this.flip_ticker_running = false;
                        return false;
                    }

                    let mut landed = false;
                    let mut still_animating = false;
                    if let Some(reading) = this.reading.as_mut() {
                        if let Some(landing_index) = reading.flipbook.advance(FLIP_FRAME_MS as f32)
                        {
                            landed = reading.session.set_current_page(landing_index + 1);
                        }
                        still_animating = reading.flipbook.is_animating();
                    }

                    if landed {
                        this.schedule_page_input_sync();
                    }
                    if !still_animating {
                        this.flip_ticker_running = false;
                    }
                    cx.notify();
                    still_animating
                });

                if !matches!(keep_going, Ok(true)) {
                    break;
                }
            }
        })
        .detach();
    }
}
