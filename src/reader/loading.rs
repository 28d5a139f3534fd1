impl ReaderView {
    /// Enter the reading screen for `book_id` and run the load pipeline:
    /// metadata fetch, signed asset URL, download, parse. Each stage is
    /// guarded by the load epoch so a session left mid-flight goes quiet.
    pub(super) fn open_book(&mut self, book_id: &str, cx: &mut Context<Self>) {
        let book_id = book_id.trim().to_string();
        if book_id.is_empty() {
            return;
        }

        let Some(access_token) = self.session_store.access_token() else {
            self.reading = None;
            self.screen = Screen::SignedOut;
            cx.notify();
            return;
        };

        // One metadata fetch per (book id, token) pair: reopening the book
        // that is already loading or loaded with the same token is a no-op.
        if self.screen == Screen::Reading
            && let Some(reading) = self.reading.as_ref()
            && reading.book_id == book_id
            && reading.access_token == access_token
            && !matches!(reading.phase, ReadingPhase::Failed(_))
        {
            return;
        }

        self.page_settler.cancel();
        self.load_epoch = self.load_epoch.wrapping_add(1);
        self.flip_epoch = self.flip_epoch.wrapping_add(1);
        let epoch = self.load_epoch;

        self.reading = Some(ReadingState::new(book_id.clone(), access_token.clone()));
        self.screen = Screen::Reading;
        self.pending_page_input_sync = Some("1".to_string());
        self.needs_root_refocus = true;
        cx.notify();

        let language = self.language;
        cx.spawn(async move |view, cx| {
            let metadata = cx
                .background_executor()
                .spawn({
                    let book_id = book_id.clone();
                    let access_token = access_token.clone();
                    async move { crate::library::fetch_book(&book_id, &access_token) }
                })
                .await;

            let directive =
                view.update(cx, |this, cx| this.apply_metadata_result(epoch, metadata, cx));
            let Ok(Some((asset_url, cache_path))) = directive else {
                return;
            };

            let downloaded = cx
                .background_executor()
                .spawn({
                    let cache_path = cache_path.clone();
                    async move {
                        if cache_path.is_file() {
                            crate::debug_log!("[reader] asset cache hit: {}", cache_path.display());
                            Ok(())
                        } else {
                            crate::library::download_asset(&asset_url, &cache_path)
                        }
                    }
                })
                .await;

            let proceed =
                view.update(cx, |this, cx| this.apply_download_result(epoch, downloaded, cx));
            if !matches!(proceed, Ok(true)) {
                return;
            }

            let parsed = cx
                .background_executor()
                .spawn({
                    let cache_path = cache_path.clone();
                    async move { load_document_summary(&cache_path, language) }
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                this.apply_parse_result(epoch, cache_path, parsed, cx)
            });
        })
        .detach();
    }

    /// First stage: decide whether the pipeline continues to the download.
    /// Returns the signed asset URL and cache destination when it does.
    fn apply_metadata_result(
        &mut self,
        epoch: u64,
        result: Result<crate::library::BookRecord, LibraryError>,
        cx: &mut Context<Self>,
    ) -> Option<(String, PathBuf)> {
        if epoch != self.load_epoch {
            return None;
        }

        let book = match result {
            Ok(book) => book,
            Err(LibraryError::Unauthorized) => {
                self.handle_unauthorized(cx);
                return None;
            }
            Err(LibraryError::NotFound(message)) => {
                self.set_reading_error(ReadError::NotFound(message), cx);
                return None;
            }
            Err(LibraryError::Transport(message)) => {
                self.set_reading_error(ReadError::Transport(message), cx);
                return None;
            }
        };

        let book_id = self.reading.as_ref()?.book_id.clone();
        crate::debug_log!(
            "[reader] metadata ok: id={} title={}",
            book.id,
            book.title
        );
        self.remember_recent_book(&book_id, &book);

        let reading = self.reading.as_mut()?;
        let access_token = reading.access_token.clone();
        reading.book = Some(book.clone());

        let Some(file_id) = book.file_id else {
            self.set_reading_error(ReadError::NoAttachment, cx);
            return None;
        };

        // A token without a signature segment cannot authorize downloads;
        // treat it like any other rejected session.
        let Some(url) = crate::library::asset_url(&file_id, &access_token) else {
            self.handle_unauthorized(cx);
            return None;
        };

        if let Some(reading) = self.reading.as_mut() {
            reading.phase = ReadingPhase::Downloading;
        }
        cx.notify();

        Some((url, crate::library::asset_cache_path(&file_id)))
    }

    fn apply_download_result(
        &mut self,
        epoch: u64,
        result: Result<(), LibraryError>,
        cx: &mut Context<Self>,
    ) -> bool {
        if epoch != self.load_epoch {
            return false;
        }

        match result {
            Ok(()) => {
                if let Some(reading) = self.reading.as_mut() {
                    reading.phase = ReadingPhase::Parsing;
                }
                cx.notify();
                true
            }
            Err(LibraryError::Unauthorized) => {
                self.handle_unauthorized(cx);
                false
            }
            Err(err) => {
                self.set_reading_error(ReadError::Transport(err.to_string()), cx);
                false
            }
        }
    }

    fn apply_parse_result(
        &mut self,
        epoch: u64,
        asset_path: PathBuf,
        result: anyhow::Result<usize>,
        cx: &mut Context<Self>,
    ) {
        if epoch != self.load_epoch {
            return;
        }

        let page_count = match result {
            Ok(page_count) if page_count > 0 => page_count,
            Ok(_) => {
                self.set_reading_error(ReadError::ParseFailure, cx);
                return;
            }
            Err(err) => {
                crate::debug_log!("[reader] parse failed: {:#}", err);
                self.set_reading_error(ReadError::ParseFailure, cx);
                return;
            }
        };

        let Some(reading) = self.reading.as_mut() else {
            return;
        };

        reading.pages = (0..page_count).map(|_| PageSlot::new()).collect();
        reading.session.set_total_pages(page_count);
        reading.flipbook = FlipBook::new(page_count);
        reading.asset_path = Some(asset_path);
        reading.phase = ReadingPhase::Ready;

        self.schedule_page_input_sync();
        cx.notify();
    }
}
