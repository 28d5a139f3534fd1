pub const ZOOM_MIN_PERCENT: u32 = 50;
pub const ZOOM_MAX_PERCENT: u32 = 200;
pub const ZOOM_STEP_PERCENT: u32 = 10;
pub const ZOOM_DEFAULT_PERCENT: u32 = 100;

/// Page and zoom state for one reading session. Pages are 1-indexed; the
/// total is unknown until the document has been parsed, and every navigation
/// request is a structural no-op until then.
#[derive(Debug, Clone)]
pub struct ReadingSession {
    current_page: usize,
    total_pages: Option<usize>,
    zoom_percent: u32,
}

impl Default for ReadingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingSession {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            total_pages: None,
            zoom_percent: ZOOM_DEFAULT_PERCENT,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<usize> {
        self.total_pages
    }

    pub fn zoom_percent(&self) -> u32 {
        self.zoom_percent
    }

    pub fn is_loaded(&self) -> bool {
        self.total_pages.is_some()
    }

    pub fn set_total_pages(&mut self, count: usize) {
        let count = count.max(1);
        self.total_pages = Some(count);
        self.current_page = self.current_page.clamp(1, count);
    }

    /// Move directly to `page`. Valid only once the total is known, for
    /// `1 <= page <= total` and `page != current`; anything else is silently
    /// ignored.
    pub fn jump_to(&mut self, page: usize) -> bool {
        let Some(total) = self.total_pages else {
            return false;
        };
        if page < 1 || page > total || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    /// Record the page a completed flip landed on.
    pub fn set_current_page(&mut self, page: usize) -> bool {
        let Some(total) = self.total_pages else {
            return false;
        };
        let page = page.clamp(1, total);
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        let next = (self.zoom_percent + ZOOM_STEP_PERCENT).min(ZOOM_MAX_PERCENT);
        let changed = next != self.zoom_percent;
        self.zoom_percent = next;
        changed
    }

    pub fn zoom_out(&mut self) -> bool {
        let next = self
            .zoom_percent
            .saturating_sub(ZOOM_STEP_PERCENT)
            .max(ZOOM_MIN_PERCENT);
        let changed = next != self.zoom_percent;
        self.zoom_percent = next;
        changed
    }

    pub fn zoom_reset(&mut self) -> bool {
        let changed = self.zoom_percent != ZOOM_DEFAULT_PERCENT;
        self.zoom_percent = ZOOM_DEFAULT_PERCENT;
        changed
    }

    /// Visual scale factor applied to the spread container.
    pub fn zoom_scale(&self) -> f32 {
        self.zoom_percent as f32 / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_session(total: usize) -> ReadingSession {
        let mut session = ReadingSession::new();
        session.set_total_pages(total);
        session
    }

    #[test]
    fn jump_round_trips_for_every_valid_page() {
        let mut session = loaded_session(12);
        for page in 2..=12 {
            assert!(session.jump_to(page));
            assert_eq!(session.current_page(), page);
        }
    }

    #[test]
    fn invalid_jumps_leave_state_unchanged() {
        let mut session = loaded_session(10);
        assert!(session.jump_to(4));

        assert!(!session.jump_to(0));
        assert_eq!(session.current_page(), 4);
        assert!(!session.jump_to(11));
        assert_eq!(session.current_page(), 4);
        // Same page is a no-op, not an error.
        assert!(!session.jump_to(4));
        assert_eq!(session.current_page(), 4);
    }

    #[test]
    fn jumps_are_ignored_while_total_is_unknown() {
        let mut session = ReadingSession::new();
        assert!(!session.jump_to(3));
        assert_eq!(session.current_page(), 1);
        assert!(!session.is_loaded());
    }

    #[test]
    fn total_arriving_clamps_the_current_page() {
        let mut session = loaded_session(20);
        assert!(session.jump_to(18));
        session.set_total_pages(5);
        assert_eq!(session.current_page(), 5);
    }

    #[test]
    fn zoom_caps_at_the_bounds() {
        let mut session = loaded_session(1);
        assert_eq!(session.zoom_percent(), 100);

        for _ in 0..10 {
            session.zoom_in();
        }
        assert_eq!(session.zoom_percent(), ZOOM_MAX_PERCENT);
        assert!(!session.zoom_in());

        for _ in 0..20 {
            session.zoom_out();
        }
        assert_eq!(session.zoom_percent(), ZOOM_MIN_PERCENT);
        assert!(!session.zoom_out());

        assert!(session.zoom_reset());
        assert_eq!(session.zoom_percent(), ZOOM_DEFAULT_PERCENT);
        assert!(!session.zoom_reset());
    }
}
