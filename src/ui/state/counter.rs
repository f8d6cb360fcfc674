// SPDX-License-Identifier: MPL-2.0
//! The animated statistic counter.
//!
//! The market section's headline figure counts up from zero the first time
//! at least half of the stat block is visible. The count advances in fixed
//! ticks, renders only whole numbers on the way up, and finishes by snapping
//! to the exact authored figure. It runs once per launch.

use std::time::Duration;

use crate::content::StatBlock;
use crate::ui::design_tokens::motion;

/// Lifecycle of the count-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum CounterPhase {
    /// Waiting for the stat block to become sufficiently visible.
    #[default]
    Armed,
    /// Counting toward `target`.
    Running { target: u32, elapsed: Duration },
    /// Finished; the exact authored text is shown from here on.
    Done,
}

/// One-shot count-up animation for the stat block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StatCounter {
    phase: CounterPhase,
}

impl StatCounter {
    /// Starts the count toward `target`.
    ///
    /// Only an armed counter starts; once running or done, further triggers
    /// are ignored and the counter never re-arms.
    pub fn trigger(&mut self, target: u32) {
        if self.phase == CounterPhase::Armed {
            self.phase = CounterPhase::Running {
                target,
                elapsed: Duration::ZERO,
            };
        }
    }

    /// Advances a running count by one tick.
    pub fn advance(&mut self, step: Duration) {
        if let CounterPhase::Running { target, elapsed } = self.phase {
            let elapsed = elapsed + step;
            if value_at(elapsed, target) >= target as f32 {
                self.phase = CounterPhase::Done;
            } else {
                self.phase = CounterPhase::Running { target, elapsed };
            }
        }
    }

    /// The text the stat block should display right now.
    ///
    /// While running, the fractional count is floored so the figure climbs
    /// through whole numbers; on completion the authored text is used
    /// verbatim rather than a formatted value.
    #[must_use]
    pub fn display_text(&self, stat: &StatBlock) -> String {
        match self.phase {
            CounterPhase::Armed => format!("{}0{}", stat.prefix, stat.suffix),
            CounterPhase::Running { target, elapsed } => {
                let value = value_at(elapsed, target).floor() as u32;
                format!("{}{}{}", stat.prefix, value, stat.suffix)
            }
            CounterPhase::Done => stat.final_text(),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    /// Whether the counter has left its armed state, running or done.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.phase != CounterPhase::Armed
    }
}

/// The counter's value after `elapsed` time, capped at `target`.
///
/// The value climbs by a fixed increment per whole tick interval, sized so
/// an uninterrupted run spans the configured duration.
#[must_use]
pub fn value_at(elapsed: Duration, target: u32) -> f32 {
    // Whole ticks are counted in integer milliseconds; a float division here
    // can land a hair under a tick boundary and lose a step to the floor.
    let total_steps =
        motion::COUNTER_DURATION.as_millis() as f32 / motion::COUNTER_STEP.as_millis() as f32;
    let increment = target as f32 / total_steps;
    let ticks = (elapsed.as_millis() / motion::COUNTER_STEP.as_millis()) as f32;
    (increment * ticks).min(target as f32)
}
