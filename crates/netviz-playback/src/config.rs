//! Scenario configuration, validation, and error types.
//!
//! [`ScenarioConfig`] is deserialized alongside a scenario's entities and
//! events. [`validate()`](ScenarioConfig::validate) runs before anything is
//! installed in a [`Scene`](crate::Scene); a config that fails leaves the
//! current scene untouched.

use std::error::Error;
use std::fmt;

use netviz_core::{Bounds, SimTime, TimeDelta};
use serde::{Deserialize, Serialize};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ScenarioConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `milliseconds_per_frame` is NaN, infinite, or rounds to a zero
    /// nanosecond step.
    InvalidTimeStep {
        /// The invalid value.
        value: f64,
    },
    /// `end_time` is zero or negative.
    InvalidEndTime {
        /// The invalid value.
        value: SimTime,
    },
    /// `trail_capacity` is zero.
    TrailCapacityZero,
    /// `bounds.min` exceeds `bounds.max` on some axis, or a corner is not
    /// finite.
    InvalidBounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeStep { value } => {
                write!(
                    f,
                    "milliseconds_per_frame must be finite and at least 1ns, got {value}"
                )
            }
            Self::InvalidEndTime { value } => {
                write!(f, "end_time must be positive, got {value}")
            }
            Self::TrailCapacityZero => write!(f, "trail_capacity must be at least 1"),
            Self::InvalidBounds => write!(f, "bounds min must not exceed max"),
        }
    }
}

impl Error for ConfigError {}

// ── ScenarioConfig ─────────────────────────────────────────────────

fn default_milliseconds_per_frame() -> f64 {
    10.0
}

fn default_trail_capacity() -> usize {
    100
}

/// Playback parameters for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Simulated milliseconds advanced per tick. Negative plays backward.
    /// Default: 10.
    #[serde(default = "default_milliseconds_per_frame")]
    pub milliseconds_per_frame: f64,
    /// End of the playable range. `None` leaves forward playback unbounded.
    #[serde(default)]
    pub end_time: Option<SimTime>,
    /// Positions retained per node trail. Default: 100.
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,
    /// Scene extent, used by hosts to frame the camera.
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            milliseconds_per_frame: default_milliseconds_per_frame(),
            end_time: None,
            trail_capacity: default_trail_capacity(),
            bounds: None,
        }
    }
}

impl ScenarioConfig {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let step = self.milliseconds_per_frame;
        if !step.is_finite() || self.time_step() == TimeDelta::ZERO {
            return Err(ConfigError::InvalidTimeStep { value: step });
        }
        if let Some(end) = self.end_time {
            if end <= SimTime::ZERO {
                return Err(ConfigError::InvalidEndTime { value: end });
            }
        }
        if self.trail_capacity == 0 {
            return Err(ConfigError::TrailCapacityZero);
        }
        if let Some(bounds) = &self.bounds {
            if !bounds.is_valid() {
                return Err(ConfigError::InvalidBounds);
            }
        }
        Ok(())
    }

    /// The per-tick step as a [`TimeDelta`].
    pub fn time_step(&self) -> TimeDelta {
        TimeDelta::from_millis_f64(self.milliseconds_per_frame)
    }
}
