//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static banner display
    Display,
    /// Banner animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(900);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(600);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        // A skip is final; elapsed time must not resurrect the animation
        if self.phase == SplashPhase::Complete {
            return;
        }

        let elapsed = self.start_time.elapsed();

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-out so the banner decelerates as it leaves
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}
