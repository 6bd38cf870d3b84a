//! Staggered entrance animation for section content
//!
//! Cards fade in one after another when a section is entered, each with
//! its own eased slide. Restarted on every section entry; any key skips
//! straight to fully revealed.

use std::time::{Duration, Instant};

/// Gap between the start of one card's entrance and the next
const STAGGER_DELAY: Duration = Duration::from_millis(100);
/// Duration of a single card's entrance
const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Entrance animation over an ordered list of items
#[derive(Debug, Clone)]
pub struct RevealState {
    start_time: Instant,
    item_count: usize,
    skipped: bool,
}

impl RevealState {
    pub fn new(item_count: usize, now: Instant) -> Self {
        Self {
            start_time: now,
            item_count,
            skipped: false,
        }
    }

    /// Eased progress (0.0..=1.0) of one item's entrance
    pub fn progress(&self, index: usize, now: Instant) -> f32 {
        if self.skipped {
            return 1.0;
        }
        let item_start = self.start_time + STAGGER_DELAY * index as u32;
        let elapsed = now.saturating_duration_since(item_start);
        let linear = (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(linear)
    }

    /// Check if every item has finished its entrance
    pub fn is_complete(&self, now: Instant) -> bool {
        if self.skipped {
            return true;
        }
        let last = self.item_count.saturating_sub(1) as u32;
        now.saturating_duration_since(self.start_time) >= STAGGER_DELAY * last + REVEAL_DURATION
    }

    /// Skip to fully revealed (user pressed a key)
    pub fn skip(&mut self) {
        self.skipped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_unrevealed() {
        let now = Instant::now();
        let reveal = RevealState::new(3, now);
        assert!(!reveal.is_complete(now));
        assert_eq!(reveal.progress(0, now), 0.0);
    }

    #[test]
    fn test_items_reveal_in_stagger_order() {
        let now = Instant::now();
        let reveal = RevealState::new(3, now);

        let later = now + STAGGER_DELAY + Duration::from_millis(50);
        assert!(reveal.progress(0, later) > reveal.progress(1, later));
        assert_eq!(reveal.progress(2, later), 0.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let now = Instant::now();
        let reveal = RevealState::new(1, now);

        let quarter = reveal.progress(0, now + REVEAL_DURATION / 4);
        let half = reveal.progress(0, now + REVEAL_DURATION / 2);
        let full = reveal.progress(0, now + REVEAL_DURATION);
        assert!(quarter < half);
        assert!(half < full);
        assert_eq!(full, 1.0);
    }

    #[test]
    fn test_complete_after_last_item_finishes() {
        let now = Instant::now();
        let reveal = RevealState::new(3, now);

        let almost = now + STAGGER_DELAY * 2 + REVEAL_DURATION - Duration::from_millis(1);
        assert!(!reveal.is_complete(almost));

        let done = now + STAGGER_DELAY * 2 + REVEAL_DURATION;
        assert!(reveal.is_complete(done));
    }

    #[test]
    fn test_skip_completes_immediately() {
        let now = Instant::now();
        let mut reveal = RevealState::new(5, now);
        reveal.skip();
        assert!(reveal.is_complete(now));
        assert_eq!(reveal.progress(4, now), 1.0);
    }

    #[test]
    fn test_empty_list_is_trivially_complete() {
        let now = Instant::now();
        let reveal = RevealState::new(0, now);
        assert!(reveal.is_complete(now + REVEAL_DURATION));
    }
}
