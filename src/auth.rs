const ACCESS_TOKEN_KEY: &str = "access_token";
const ACCESS_TOKEN_ENV: &str = "FOLIO_ACCESS_TOKEN";

/// Local session storage. The login boundary itself lives in the library
/// portal; Folio only keeps the session token it was handed, either through
/// the environment or from a previous launch.
pub struct SessionStore {
    tree: Option<sled::Tree>,
}

impl SessionStore {
    pub fn new(tree: Option<sled::Tree>) -> Self {
        Self { tree }
    }

    /// Resolve the current access token. A token in the environment wins and
    /// is remembered for later launches.
    pub fn access_token(&self) -> Option<String> {
        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            let token = token.trim().to_string();
            if !token.is_empty() {
                self.remember_token(&token);
                return Some(token);
            }
        }

        self.stored_token()
    }

    fn stored_token(&self) -> Option<String> {
        let store = self.tree.as_ref()?;
        let raw = store.get(ACCESS_TOKEN_KEY).ok().flatten()?;
        let token = String::from_utf8(raw.to_vec()).ok()?;
        if token.is_empty() {
            return None;
        }
        Some(token)
    }

    pub fn remember_token(&self, token: &str) {
        let Some(store) = self.tree.as_ref() else {
            return;
        };

        if store.insert(ACCESS_TOKEN_KEY, token.as_bytes()).is_err() {
            crate::debug_log!("[session] failed to persist access token");
            return;
        }
        let _ = store.flush();
    }

    /// Sign out: drop the stored token.
    pub fn clear(&self) {
        let Some(store) = self.tree.as_ref() else {
            return;
        };

        if store.remove(ACCESS_TOKEN_KEY).is_err() {
            crate::debug_log!("[session] failed to clear access token");
            return;
        }
        let _ = store.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_tree() -> sled::Tree {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .expect("temporary sled db");
        db.open_tree("session").expect("session tree")
    }

    #[test]
    fn stores_and_clears_token() {
        let store = SessionStore::new(Some(temp_tree()));

        assert_eq!(store.stored_token(), None);

        store.remember_token("aaa.bbb.ccc");
        assert_eq!(store.stored_token(), Some("aaa.bbb.ccc".to_string()));

        store.clear();
        assert_eq!(store.stored_token(), None);

        // Clearing an already-empty store stays empty.
        store.clear();
        assert_eq!(store.stored_token(), None);
    }

    #[test]
    fn missing_tree_degrades_to_no_session() {
        let store = SessionStore::new(None);
        assert_eq!(store.stored_token(), None);
        store.remember_token("aaa.bbb.ccc");
        assert_eq!(store.stored_token(), None);
    }
}
