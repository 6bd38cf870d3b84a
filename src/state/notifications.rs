//! Toast notification state
//!
//! One toast at a time: a new notification replaces whatever is on
//! screen. Each toast walks Entering -> Visible -> Leaving -> Removed,
//! driven by [`NotificationCenter::update`] against the timestamps
//! recorded when the toast was created or dismissed. Timers are injected
//! as `Instant`s so transitions stay deterministic under test.

use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity of a user-visible notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Lifecycle phase of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Created, sliding in; not yet counted as shown
    Entering,
    /// Fully on screen, auto-dismiss timer running
    Visible,
    /// Sliding out after a close or the auto timer
    Leaving,
    /// Slide-out finished; pruned on the next update
    Removed,
}

/// Delay before an entering toast counts as visible
pub const ENTER_DELAY: Duration = Duration::from_millis(100);
/// Time from creation until the toast dismisses itself
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);
/// Duration of the slide-out before the toast is removed
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// A transient user-visible message with a timed lifecycle
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub phase: ToastPhase,
    created_at: Instant,
    leaving_at: Option<Instant>,
}

impl Notification {
    fn new(message: String, severity: Severity, now: Instant) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            severity,
            phase: ToastPhase::Entering,
            created_at: now,
            leaving_at: None,
        }
    }

    /// Linear progress (0.0..=1.0) through the current phase's slide
    /// animation. Entering counts up as the toast slides in, Leaving
    /// counts up as it slides out; settled phases report 1.0.
    pub fn phase_progress(&self, now: Instant) -> f32 {
        let ratio = |start: Instant, duration: Duration| -> f32 {
            let elapsed = now.saturating_duration_since(start);
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };
        match self.phase {
            ToastPhase::Entering => ratio(self.created_at, ENTER_DELAY),
            ToastPhase::Leaving => match self.leaving_at {
                Some(left) => ratio(left, EXIT_DURATION),
                None => 1.0,
            },
            ToastPhase::Visible | ToastPhase::Removed => 1.0,
        }
    }
}

/// Owns the transient toast queue and every toast's timers
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a new toast, replacing (immediately, without an exit
    /// animation) every toast currently displayed.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> Uuid {
        self.toasts.clear();
        let toast = Notification::new(message.into(), severity, now);
        let id = toast.id;
        self.toasts.push(toast);
        id
    }

    /// Start the slide-out for a toast. Explicit close and the auto
    /// timeout both land here; whichever fires first wins and the other
    /// becomes a no-op.
    pub fn dismiss(&mut self, id: Uuid, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            match toast.phase {
                // A toast closed while still entering passes through
                // Visible implicitly; its entrance is simply cut short.
                ToastPhase::Entering | ToastPhase::Visible => {
                    toast.phase = ToastPhase::Leaving;
                    toast.leaving_at = Some(now);
                }
                // Already on the way out
                ToastPhase::Leaving | ToastPhase::Removed => {}
            }
        }
    }

    /// Close the toast currently on screen, if any
    pub fn dismiss_front(&mut self, now: Instant) {
        if let Some(id) = self.toasts.first().map(|t| t.id) {
            self.dismiss(id, now);
        }
    }

    /// Timer tick: advance phases whose deadline has passed and release
    /// finished toasts.
    pub fn update(&mut self, now: Instant) {
        for toast in &mut self.toasts {
            match toast.phase {
                ToastPhase::Entering => {
                    if now.saturating_duration_since(toast.created_at) >= ENTER_DELAY {
                        toast.phase = ToastPhase::Visible;
                    }
                }
                ToastPhase::Visible => {
                    if now.saturating_duration_since(toast.created_at) >= AUTO_DISMISS {
                        toast.phase = ToastPhase::Leaving;
                        toast.leaving_at = Some(now);
                    }
                }
                ToastPhase::Leaving => {
                    if let Some(left) = toast.leaving_at {
                        if now.saturating_duration_since(left) >= EXIT_DURATION {
                            toast.phase = ToastPhase::Removed;
                        }
                    }
                }
                ToastPhase::Removed => {}
            }
        }
        self.toasts.retain(|t| t.phase != ToastPhase::Removed);
    }

    /// Toasts to render, in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[allow(dead_code)]
    pub fn visible_count(&self) -> usize {
        self.toasts
            .iter()
            .filter(|t| t.phase == ToastPhase::Visible)
            .count()
    }

    /// True while any toast is on screen (drives the faster poll rate)
    pub fn is_active(&self) -> bool {
        !self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> Instant {
        Instant::now()
    }

    mod lifecycle {
        use super::*;

        #[test]
        fn test_notify_creates_entering_toast() {
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, t0());

            let toast = center.iter().next().unwrap();
            assert_eq!(toast.phase, ToastPhase::Entering);
            assert_eq!(toast.severity, Severity::Success);
            assert_eq!(toast.message, "Saved");
        }

        #[test]
        fn test_entering_becomes_visible_after_enter_delay() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);

            center.update(start + ENTER_DELAY - Duration::from_millis(1));
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Entering);

            center.update(start + ENTER_DELAY);
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Visible);
        }

        #[test]
        fn test_auto_dismiss_after_timeout() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);

            center.update(start + ENTER_DELAY);
            center.update(start + AUTO_DISMISS);
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Leaving);

            center.update(start + AUTO_DISMISS + EXIT_DURATION);
            assert_eq!(center.iter().count(), 0);
        }

        #[test]
        fn test_update_without_toasts_is_noop() {
            let mut center = NotificationCenter::new();
            center.update(t0());
            assert!(!center.is_active());
        }

        #[test]
        fn test_is_active_until_removed() {
            let start = t0();
            let mut center = NotificationCenter::new();
            assert!(!center.is_active());

            let id = center.notify("Saved", Severity::Success, start);
            assert!(center.is_active());

            center.update(start + ENTER_DELAY);
            center.dismiss(id, start + ENTER_DELAY);
            assert!(center.is_active());

            center.update(start + ENTER_DELAY + EXIT_DURATION);
            assert!(!center.is_active());
        }
    }

    mod replacement {
        use super::*;

        #[test]
        fn test_notify_purges_visible_toast() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let first = center.notify("First", Severity::Success, start);
            center.update(start + ENTER_DELAY);
            assert_eq!(center.visible_count(), 1);

            let second = center.notify("Second", Severity::Error, start + Duration::from_secs(1));

            // The old toast is gone immediately, no exit animation
            assert_eq!(center.iter().count(), 1);
            let toast = center.iter().next().unwrap();
            assert_eq!(toast.id, second);
            assert_ne!(toast.id, first);
            assert_eq!(toast.phase, ToastPhase::Entering);
            // Never two visible at once
            assert!(center.visible_count() <= 1);
        }

        #[test]
        fn test_notify_purges_leaving_toast_too() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let first = center.notify("First", Severity::Success, start);
            center.update(start + ENTER_DELAY);
            center.dismiss(first, start + Duration::from_secs(1));

            center.notify("Second", Severity::Success, start + Duration::from_secs(1));
            assert_eq!(center.iter().count(), 1);
        }
    }

    mod dismissal {
        use super::*;

        #[test]
        fn test_dismiss_starts_slide_out() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let id = center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            let closed_at = start + Duration::from_secs(2);
            center.dismiss(id, closed_at);
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Leaving);

            center.update(closed_at + EXIT_DURATION);
            assert_eq!(center.iter().count(), 0);
        }

        #[test]
        fn test_dismiss_is_idempotent() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let id = center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            let closed_at = start + Duration::from_secs(2);
            center.dismiss(id, closed_at);
            // Second dismiss (manual close racing the auto timer) must not
            // restart the slide-out clock
            center.dismiss(id, closed_at + Duration::from_secs(1));

            // Removal still happens on the schedule set by the first call
            center.update(closed_at + EXIT_DURATION);
            assert_eq!(center.iter().count(), 0);
        }

        #[test]
        fn test_manual_close_wins_over_auto_timer() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let id = center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            let closed_at = start + Duration::from_secs(1);
            center.dismiss(id, closed_at);

            // The auto timer fires later but finds the toast already leaving
            center.update(start + AUTO_DISMISS);
            assert_eq!(center.iter().count(), 0);
        }

        #[test]
        fn test_dismiss_entering_toast_cuts_entrance_short() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let id = center.notify("Saved", Severity::Success, start);

            center.dismiss(id, start + Duration::from_millis(50));
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Leaving);
        }

        #[test]
        fn test_dismiss_unknown_id_is_noop() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);
            center.dismiss(Uuid::new_v4(), start);
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Entering);
        }

        #[test]
        fn test_dismiss_front_targets_current_toast() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            center.dismiss_front(start + Duration::from_secs(1));
            assert_eq!(center.iter().next().unwrap().phase, ToastPhase::Leaving);
        }

        #[test]
        fn test_dismiss_front_without_toast_is_noop() {
            let mut center = NotificationCenter::new();
            center.dismiss_front(t0());
            assert!(!center.is_active());
        }
    }

    mod progress {
        use super::*;

        #[test]
        fn test_entering_progress_counts_up() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);

            let toast = center.iter().next().unwrap();
            assert_eq!(toast.phase_progress(start), 0.0);
            let halfway = toast.phase_progress(start + ENTER_DELAY / 2);
            assert!(halfway > 0.4 && halfway < 0.6);
            assert_eq!(toast.phase_progress(start + ENTER_DELAY), 1.0);
        }

        #[test]
        fn test_visible_progress_is_settled() {
            let start = t0();
            let mut center = NotificationCenter::new();
            center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            let toast = center.iter().next().unwrap();
            assert_eq!(toast.phase_progress(start + Duration::from_secs(1)), 1.0);
        }

        #[test]
        fn test_leaving_progress_counts_up_from_dismissal() {
            let start = t0();
            let mut center = NotificationCenter::new();
            let id = center.notify("Saved", Severity::Success, start);
            center.update(start + ENTER_DELAY);

            let closed_at = start + Duration::from_secs(2);
            center.dismiss(id, closed_at);

            let toast = center.iter().next().unwrap();
            assert_eq!(toast.phase_progress(closed_at), 0.0);
            assert_eq!(toast.phase_progress(closed_at + EXIT_DURATION), 1.0);
        }
    }
}
