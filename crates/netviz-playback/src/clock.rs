//! Playback clock: current time, signed step, play/pause mode.
//!
//! The clock only does arithmetic. Dispatching events for a time change is
//! the scene's job; it asks the clock where the next tick lands with
//! [`next_tick`](PlaybackClock::next_tick) and moves it with
//! [`jump_to`](PlaybackClock::jump_to).

use netviz_core::{SimTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the clock advances on each tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayMode {
    /// Ticks leave time unchanged.
    #[default]
    Paused,
    /// Each tick advances time by the step.
    Playing,
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paused => write!(f, "paused"),
            Self::Playing => write!(f, "playing"),
        }
    }
}

/// Direction of a single manual step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepDirection {
    /// Toward the end bound.
    Forward,
    /// Toward zero.
    Backward,
}

impl StepDirection {
    /// `step`'s magnitude signed for this direction.
    pub fn apply(self, step: TimeDelta) -> TimeDelta {
        match self {
            Self::Forward => step.abs(),
            Self::Backward => -step.abs(),
        }
    }
}

/// Where a tick's step lands after range clamping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickTarget {
    /// Time the clock should move to.
    pub time: SimTime,
    /// Whether the step reached the end bound (forward) or zero
    /// (backward) and was clamped to it.
    pub hit_bound: bool,
}

/// Simulation clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackClock {
    now: SimTime,
    step: TimeDelta,
    mode: PlayMode,
    end: Option<SimTime>,
}

impl PlaybackClock {
    /// A paused clock at zero.
    pub fn new(step: TimeDelta, end: Option<SimTime>) -> Self {
        Self {
            now: SimTime::ZERO,
            step,
            mode: PlayMode::Paused,
            end,
        }
    }

    /// Current simulation time.
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// Per-tick step; negative steps rewind.
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Current mode.
    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    /// Whether the clock is playing.
    pub fn is_playing(&self) -> bool {
        self.mode == PlayMode::Playing
    }

    /// Configured end of the playable range.
    pub fn end(&self) -> Option<SimTime> {
        self.end
    }

    /// Change mode. Returns `true` if the mode actually changed.
    pub fn set_mode(&mut self, mode: PlayMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Replace the per-tick step.
    pub fn set_step(&mut self, step: TimeDelta) {
        self.step = step;
    }

    /// Replace the end bound.
    pub fn set_end(&mut self, end: Option<SimTime>) {
        self.end = end;
    }

    /// Where one step from `now` lands, clamped to `[0, end]`.
    ///
    /// A step that reaches the bound exactly counts as hitting it.
    pub fn next_tick(&self) -> TickTarget {
        self.target_for(self.step)
    }

    /// Where an arbitrary `step` from `now` lands, clamped to `[0, end]`.
    ///
    /// A seek may leave `now` outside the range. A step toward the bound
    /// already passed stays at `now` and reports the bound as hit; it never
    /// moves time against the step direction.
    pub fn target_for(&self, step: TimeDelta) -> TickTarget {
        let raw = self.now + step;
        if step.is_forward() {
            if let Some(end) = self.end {
                if raw >= end {
                    return TickTarget {
                        time: end.max(self.now),
                        hit_bound: true,
                    };
                }
            }
        } else if step.is_backward() && raw <= SimTime::ZERO {
            return TickTarget {
                time: SimTime::ZERO.min(self.now),
                hit_bound: true,
            };
        }
        TickTarget {
            time: raw,
            hit_bound: false,
        }
    }

    /// Move to `time`, returning the applied delta.
    pub fn jump_to(&mut self, time: SimTime) -> TimeDelta {
        let delta = time.since(self.now);
        self.now = time;
        delta
    }

    /// Back to zero and paused, keeping step and end.
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
        self.mode = PlayMode::Paused;
    }
}
