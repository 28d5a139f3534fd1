/// Duration of one animated page turn.
pub const FLIP_DURATION_MS: f32 = 320.0;

/// One in-flight page turn. `progress` runs 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipAnimation {
    pub from_spread: usize,
    pub to_spread: usize,
    pub progress: f32,
}

impl FlipAnimation {
    pub fn is_forward(&self) -> bool {
        self.to_spread > self.from_spread
    }
}

/// Two-page spread presentation over a parsed document: the cover sits alone
/// on spread 0, then pages pair up as facing spreads. Flip requests received
/// while a turn is animating are dropped, so navigation can never race an
/// in-flight transition.
#[derive(Debug, Clone)]
pub struct FlipBook {
    page_count: usize,
    spread: usize,
    animation: Option<FlipAnimation>,
}

impl FlipBook {
    pub fn new(page_count: usize) -> Self {
        Self {
            page_count,
            spread: 0,
            animation: None,
        }
    }

    /// Spread holding a 0-indexed page: the cover alone, then (1,2), (3,4)...
    pub fn spread_of_page(page_index: usize) -> usize {
        if page_index == 0 { 0 } else { (page_index + 1) / 2 }
    }

    /// The page index a flip to `spread` reports on completion (the first
    /// page of the spread).
    pub fn landing_page(spread: usize) -> usize {
        if spread == 0 { 0 } else { 2 * spread - 1 }
    }

    pub fn spread_count(&self) -> usize {
        if self.page_count == 0 {
            0
        } else {
            Self::spread_of_page(self.page_count - 1) + 1
        }
    }

    pub fn current_spread(&self) -> usize {
        self.spread
    }

    /// (left, right) page indices shown on a spread; either side may be
    /// missing on the cover and on a trailing odd page.
    pub fn pages_in_spread(&self, spread: usize) -> (Option<usize>, Option<usize>) {
        if spread == 0 {
            return (None, (self.page_count > 0).then_some(0));
        }
        let left = 2 * spread - 1;
        let right = 2 * spread;
        (
            (left < self.page_count).then_some(left),
            (right < self.page_count).then_some(right),
        )
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn animation(&self) -> Option<&FlipAnimation> {
        self.animation.as_ref()
    }

    pub fn flip_next(&mut self) -> bool {
        if self.spread + 1 >= self.spread_count() {
            return false;
        }
        self.start_flip(self.spread + 1)
    }

    pub fn flip_prev(&mut self) -> bool {
        if self.spread == 0 {
            return false;
        }
        self.start_flip(self.spread - 1)
    }

    /// Animate directly to the spread holding a 0-indexed page.
    pub fn flip_to_page(&mut self, page_index: usize) -> bool {
        if page_index >= self.page_count {
            return false;
        }
        let target = Self::spread_of_page(page_index);
        if target == self.spread {
            return false;
        }
        self.start_flip(target)
    }

    fn start_flip(&mut self, to_spread: usize) -> bool {
        if self.animation.is_some() {
            return false;
        }
        self.animation = Some(FlipAnimation {
            from_spread: self.spread,
            to_spread,
            progress: 0.0,
        });
        true
    }

    /// Advance the running animation; on completion, commit the target
    /// spread and report the landing page index.
    pub fn advance(&mut self, delta_ms: f32) -> Option<usize> {
        let animation = self.animation.as_mut()?;
        animation.progress += delta_ms / FLIP_DURATION_MS;
        if animation.progress < 1.0 {
            return None;
        }

        let to_spread = animation.to_spread;
        self.animation = None;
        self.spread = to_spread;
        Some(Self::landing_page(to_spread))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finish_flip(book: &mut FlipBook) -> Option<usize> {
        let mut landed = None;
        for _ in 0..100 {
            landed = book.advance(FLIP_DURATION_MS / 4.0);
            if landed.is_some() {
                break;
            }
        }
        landed
    }

    #[test]
    fn cover_sits_alone_then_pages_pair_up() {
        let book = FlipBook::new(5);
        assert_eq!(book.spread_count(), 3);
        assert_eq!(book.pages_in_spread(0), (None, Some(0)));
        assert_eq!(book.pages_in_spread(1), (Some(1), Some(2)));
        assert_eq!(book.pages_in_spread(2), (Some(3), Some(4)));
    }

    #[test]
    fn trailing_odd_page_has_an_empty_right_side() {
        let book = FlipBook::new(4);
        assert_eq!(book.spread_count(), 3);
        assert_eq!(book.pages_in_spread(2), (Some(3), None));
    }

    #[test]
    fn spread_and_landing_round_trip() {
        for page in 0..20 {
            let spread = FlipBook::spread_of_page(page);
            let landing = FlipBook::landing_page(spread);
            assert!(landing <= page);
            assert_eq!(FlipBook::spread_of_page(landing), spread);
        }
    }

    #[test]
    fn next_at_the_last_spread_is_a_no_op() {
        let mut book = FlipBook::new(3);
        assert!(book.flip_next());
        finish_flip(&mut book);
        assert_eq!(book.current_spread(), 1);
        assert!(!book.flip_next());
        assert!(!book.is_animating());
        assert_eq!(book.current_spread(), 1);
    }

    #[test]
    fn prev_at_the_cover_is_a_no_op() {
        let mut book = FlipBook::new(3);
        assert!(!book.flip_prev());
        assert!(!book.is_animating());
        assert_eq!(book.current_spread(), 0);
    }

    #[test]
    fn completed_flip_reports_the_landing_page() {
        let mut book = FlipBook::new(10);
        assert!(book.flip_next());
        assert_eq!(finish_flip(&mut book), Some(1));
        assert_eq!(book.current_spread(), 1);

        assert!(book.flip_to_page(6));
        assert_eq!(finish_flip(&mut book), Some(5));
        assert_eq!(book.current_spread(), 3);
    }

    #[test]
    fn requests_are_dropped_while_animating() {
        let mut book = FlipBook::new(10);
        assert!(book.flip_next());
        assert!(!book.flip_next());
        assert!(!book.flip_prev());
        assert!(!book.flip_to_page(8));

        // The original target wins once the turn finishes.
        assert_eq!(finish_flip(&mut book), Some(1));
    }

    #[test]
    fn flip_to_the_current_spread_is_a_no_op() {
        let mut book = FlipBook::new(10);
        assert!(book.flip_to_page(3));
        finish_flip(&mut book);
        assert_eq!(book.current_spread(), 2);
        // Pages 3 and 4 share the spread.
        assert!(!book.flip_to_page(3));
        assert!(!book.flip_to_page(4));
        assert!(!book.is_animating());
    }

    #[test]
    fn empty_document_has_no_spreads() {
        let mut book = FlipBook::new(0);
        assert_eq!(book.spread_count(), 0);
        assert_eq!(book.pages_in_spread(0), (None, None));
        assert!(!book.flip_next());
    }
}
