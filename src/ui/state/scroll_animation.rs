// SPDX-License-Identifier: MPL-2.0
//! Animated scrolling between two offsets.
//!
//! A nav link or call-to-action does not jump the viewport; it starts one of
//! these tweens, and each tick moves the scrollable a little further along an
//! eased curve until the target offset is reached.

use std::time::Duration;

use crate::ui::design_tokens::motion;
use crate::ui::motion::Easing;

/// An in-flight smooth scroll from one offset to another.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    elapsed: Duration,
}

impl ScrollAnimation {
    /// Starts a tween between the two offsets.
    #[must_use]
    pub fn start(from: f32, to: f32) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
        }
    }

    /// Advances the tween by one tick.
    pub fn advance(&mut self, step: Duration) {
        self.elapsed = (self.elapsed + step).min(motion::SMOOTH_SCROLL_DURATION);
    }

    /// The offset the scrollable should sit at right now.
    #[must_use]
    pub fn current_offset(&self) -> f32 {
        let progress = Easing::EaseInOut.progress(self.elapsed, motion::SMOOTH_SCROLL_DURATION);
        self.from + (self.to - self.from) * progress
    }

    /// The offset the tween is heading for.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= motion::SMOOTH_SCROLL_DURATION
    }
}
