// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the page's tweened animations.

use std::time::Duration;

/// An easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-in: slow start.
    EaseIn,
    /// Cubic ease-out: slow end.
    #[default]
    EaseOut,
    /// Cubic ease-in-out: slow start and end.
    EaseInOut,
}

impl Easing {
    /// Applies the curve to `t`, clamping the input to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// Eased progress of a tween that started `elapsed` ago and runs for
    /// `duration`. Saturates at `1.0`.
    pub fn progress(self, elapsed: Duration, duration: Duration) -> f32 {
        self.apply(linear_progress(elapsed, duration))
    }
}

/// Raw completion fraction of a tween, clamped to `[0, 1]`. A zero duration
/// counts as already complete.
pub fn linear_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
