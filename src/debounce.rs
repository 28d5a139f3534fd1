use std::time::{Duration, Instant};

/// Holds the most recent value of a rapidly changing input and releases it
/// only once the input has stayed unchanged for the configured delay.
///
/// The settler is pure state plus an injected clock; the caller is expected
/// to schedule a wakeup after `delay` on every `update` and call `poll` when
/// it fires. A newer `update` pushes the deadline forward, so wakeups that
/// belong to superseded updates simply poll `None`.
pub struct Settler<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
}

struct Pending<T> {
    value: T,
    updated_at: Instant,
}

impl<T> Settler<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value and restart the settling window.
    pub fn update(&mut self, value: T, now: Instant) {
        self.pending = Some(Pending {
            value,
            updated_at: now,
        });
    }

    /// Take the pending value if it has been stable for the full delay.
    /// Returns the value at most once per settled update.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let settled = self
            .pending
            .as_ref()
            .map(|pending| now.duration_since(pending.updated_at) >= self.delay)
            .unwrap_or(false);

        if !settled {
            return None;
        }

        self.pending.take().map(|pending| pending.value)
    }

    /// Drop any pending value. A later poll yields nothing, so wakeups that
    /// outlive their session cannot fire.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(800);

    #[test]
    fn does_not_settle_before_delay() {
        let mut settler = Settler::new(DELAY);
        let start = Instant::now();

        settler.update(7, start);
        assert_eq!(settler.poll(start), None);
        assert_eq!(settler.poll(start + Duration::from_millis(799)), None);
        assert!(settler.is_pending());
    }

    #[test]
    fn settles_once_after_delay() {
        let mut settler = Settler::new(DELAY);
        let start = Instant::now();

        settler.update(42, start);
        assert_eq!(settler.poll(start + DELAY), Some(42));
        // The value is released exactly once.
        assert_eq!(settler.poll(start + DELAY * 2), None);
        assert!(!settler.is_pending());
    }

    #[test]
    fn rapid_updates_collapse_to_final_value() {
        let mut settler = Settler::new(DELAY);
        let start = Instant::now();

        settler.update("1", start);
        settler.update("12", start + Duration::from_millis(200));
        settler.update("123", start + Duration::from_millis(400));

        // Wakeups from the first two updates find the window restarted.
        assert_eq!(settler.poll(start + DELAY), None);
        assert_eq!(settler.poll(start + Duration::from_millis(200) + DELAY), None);

        // Only the wakeup for the last update sees a stable value.
        assert_eq!(
            settler.poll(start + Duration::from_millis(400) + DELAY),
            Some("123")
        );
    }

    #[test]
    fn cancel_prevents_late_settling() {
        let mut settler = Settler::new(DELAY);
        let start = Instant::now();

        settler.update(9, start);
        settler.cancel();

        assert!(!settler.is_pending());
        assert_eq!(settler.poll(start + DELAY * 10), None);
    }

    #[test]
    fn update_after_settle_starts_a_fresh_window() {
        let mut settler = Settler::new(DELAY);
        let start = Instant::now();

        settler.update(1, start);
        assert_eq!(settler.poll(start + DELAY), Some(1));

        settler.update(2, start + DELAY);
        assert_eq!(settler.poll(start + DELAY), None);
        assert_eq!(settler.poll(start + DELAY * 2), Some(2));
    }
}
