impl ReaderView {
    const LOCAL_STATE_DB_DIR_NAME: &'static str = "folio_db";

    fn i18n(&self) -> I18n {
        I18n::new(self.language)
    }

    fn now_unix_secs() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0)
    }

    fn local_state_db_path() -> PathBuf {
        if let Some(app_data) = std::env::var_os("APPDATA") {
            return PathBuf::from(app_data)
                .join("Folio")
                .join(Self::LOCAL_STATE_DB_DIR_NAME);
        }

        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".folio")
                .join(Self::LOCAL_STATE_DB_DIR_NAME);
        }

        PathBuf::from(".folio").join(Self::LOCAL_STATE_DB_DIR_NAME)
    }

    fn open_persistent_stores() -> (
        Option<sled::Tree>,
        Option<sled::Tree>,
        Option<sled::Tree>,
    ) {
        let db_path = Self::local_state_db_path();
        if let Some(parent) = db_path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                crate::debug_log!("[store] create dir failed: {}", parent.to_string_lossy());
                return (None, None, None);
            }
        }

        let db = match sled::open(&db_path) {
            Ok(db) => db,
            Err(err) => {
                crate::debug_log!(
                    "[store] open db failed: {} | {}",
                    db_path.to_string_lossy(),
                    err
                );
                return (None, None, None);
            }
        };

        let window_size_store = match db.open_tree(WINDOW_SIZE_TREE) {
            Ok(tree) => Some(tree),
            Err(err) => {
                crate::debug_log!("[store] open tree failed: {} | {}", WINDOW_SIZE_TREE, err);
                None
            }
        };
        let recent_store = match db.open_tree(RECENT_BOOKS_TREE) {
            Ok(tree) => Some(tree),
            Err(err) => {
                crate::debug_log!("[store] open tree failed: {} | {}", RECENT_BOOKS_TREE, err);
                None
            }
        };
        let session_store = match db.open_tree(SESSION_TREE) {
            Ok(tree) => Some(tree),
            Err(err) => {
                crate::debug_log!("[store] open tree failed: {} | {}", SESSION_TREE, err);
                None
            }
        };

        crate::debug_log!(
            "[store] init window_size={} recent_books={} session={} path={}",
            window_size_store.is_some(),
            recent_store.is_some(),
            session_store.is_some(),
            db_path.to_string_lossy()
        );

        (window_size_store, recent_store, session_store)
    }

    fn load_recent_books_from_store(store: &sled::Tree) -> Vec<RecentBook> {
        let mut indexed_books = Vec::new();
        for entry in store.iter() {
            let (key, value) = match entry {
                Ok(entry) => entry,
                Err(_) => continue,
            };
            if key.len() != 4 {
                continue;
            }
            let book_index = u32::from_be_bytes([key[0], key[1], key[2], key[3]]) as usize;
            let book = match serde_json::from_slice::<RecentBook>(&value) {
                Ok(book) => book,
                Err(_) => continue,
            };
            if book.book_id.is_empty() {
                continue;
            }
            indexed_books.push((book_index, book));
        }
        indexed_books.sort_by_key(|(index, _)| *index);
        indexed_books
            .into_iter()
            .map(|(_, book)| book)
            .take(MAX_RECENT_BOOKS)
            .collect()
    }

    fn persist_recent_books(&self) {
        let Some(store) = self.recent_store.as_ref() else {
            return;
        };

        if store.clear().is_err() {
            return;
        }

        for (index, book) in self.recent_books.iter().take(MAX_RECENT_BOOKS).enumerate() {
            let key = (index as u32).to_be_bytes();
            let Ok(value) = serde_json::to_vec(book) else {
                continue;
            };
            if store.insert(key, value).is_err() {
                return;
            }
        }

        let _ = store.flush();
    }

    fn remember_recent_book(&mut self, book_id: &str, book: &crate::library::BookRecord) {
        let i18n = self.i18n();
        let title = if book.title.is_empty() {
            i18n.unknown_title.to_string()
        } else {
            book.title.clone()
        };
        let author = if book.author.is_empty() {
            i18n.unknown_author.to_string()
        } else {
            book.author.clone()
        };

        self.recent_books.retain(|entry| entry.book_id != book_id);
        self.recent_books.insert(
            0,
            RecentBook {
                book_id: book_id.to_string(),
                title,
                author,
                opened_at_unix_secs: Self::now_unix_secs(),
            },
        );
        self.recent_books.truncate(MAX_RECENT_BOOKS);
        self.persist_recent_books();
    }

    fn save_window_size(&self, width: f32, height: f32) {
        let Some(store) = self.window_size_store.as_ref() else {
            return;
        };
        let width_bytes = width.to_be_bytes();
        let height_bytes = height.to_be_bytes();
        if store
            .insert(WINDOW_SIZE_KEY_WIDTH, width_bytes.as_slice())
            .is_err()
        {
            crate::debug_log!("[window_size] save width failed");
        }
        if store
            .insert(WINDOW_SIZE_KEY_HEIGHT, height_bytes.as_slice())
            .is_err()
        {
            crate::debug_log!("[window_size] save height failed");
        }
        let _ = store.flush();
    }

    /// Current footer height. The footer grows when the page total becomes
    /// available, and the layout recomputes from this measurement.
    fn footer_height(&self) -> f32 {
        let ready = self
            .reading
            .as_ref()
            .map(|reading| reading.session.is_loaded())
            .unwrap_or(false);
        if ready {
            FOOTER_HEIGHT_READY
        } else {
            FOOTER_HEIGHT_COMPACT
        }
    }

    fn set_reading_error(&mut self, error: ReadError, cx: &mut Context<Self>) {
        if let Some(reading) = self.reading.as_mut() {
            crate::debug_log!("[reader] {} failed: {:?}", reading.book_id, error);
            reading.phase = ReadingPhase::Failed(error);
            cx.notify();
        }
    }

    /// The backend rejected the session token. The stored token is cleared
    /// exactly once and the app falls back to the signed-out boundary; the
    /// load epoch bump stops any still-running stage of this session.
    fn handle_unauthorized(&mut self, cx: &mut Context<Self>) {
        self.session_store.clear();
        self.session_expired = true;
        self.load_epoch = self.load_epoch.wrapping_add(1);
        self.flip_epoch = self.flip_epoch.wrapping_add(1);
        self.page_settler.cancel();
        self.reading = None;
        self.screen = Screen::SignedOut;
        cx.notify();
    }

    fn schedule_page_input_sync(&mut self) {
        if let Some(reading) = self.reading.as_ref() {
            self.pending_page_input_sync = Some(reading.session.current_page().to_string());
        }
    }
}
