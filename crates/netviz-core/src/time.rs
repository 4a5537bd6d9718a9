//! Simulation time and signed time deltas.
//!
//! Both types count integer nanoseconds so that accumulating many clock
//! steps never drifts and so that equality against event timestamps is
//! exact. Millisecond helpers exist for configuration and display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// An absolute point on the simulation timeline, in nanoseconds.
///
/// Valid scenario times are non-negative; arithmetic is signed so that a
/// rewinding clock can be computed before it is clamped to zero.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(pub i64);

impl SimTime {
    /// The start of the timeline.
    pub const ZERO: SimTime = SimTime(0);

    /// Build a time from whole milliseconds.
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(NANOS_PER_MILLI))
    }

    /// Build a time from fractional milliseconds, rounding to the
    /// nearest nanosecond.
    pub fn from_millis_f64(ms: f64) -> Self {
        Self((ms * NANOS_PER_MILLI as f64).round() as i64)
    }

    /// This time as fractional milliseconds.
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_MILLI as f64
    }

    /// Raw nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Signed distance from `earlier` to `self`.
    pub fn since(self, earlier: SimTime) -> TimeDelta {
        TimeDelta(self.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}ms", self.as_millis_f64())
    }
}

impl Add<TimeDelta> for SimTime {
    type Output = SimTime;

    fn add(self, rhs: TimeDelta) -> SimTime {
        SimTime(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign<TimeDelta> for SimTime {
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = *self + rhs;
    }
}

impl Sub for SimTime {
    type Output = TimeDelta;

    fn sub(self, rhs: SimTime) -> TimeDelta {
        self.since(rhs)
    }
}

/// A signed span of simulation time, in nanoseconds.
///
/// Used for the clock's per-tick step (negative = rewind), for the delta
/// reported in time-changed notices, and for transmit durations.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TimeDelta(pub i64);

impl TimeDelta {
    /// The empty span.
    pub const ZERO: TimeDelta = TimeDelta(0);

    /// Build a delta from whole milliseconds.
    pub const fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(NANOS_PER_MILLI))
    }

    /// Build a delta from fractional milliseconds, rounding to the
    /// nearest nanosecond.
    pub fn from_millis_f64(ms: f64) -> Self {
        Self((ms * NANOS_PER_MILLI as f64).round() as i64)
    }

    /// This delta as fractional milliseconds.
    pub fn as_millis_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_MILLI as f64
    }

    /// Raw nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Whether this delta moves time forward.
    pub const fn is_forward(self) -> bool {
        self.0 > 0
    }

    /// Whether this delta moves time backward.
    pub const fn is_backward(self) -> bool {
        self.0 < 0
    }

    /// Absolute magnitude.
    pub const fn abs(self) -> TimeDelta {
        TimeDelta(self.0.saturating_abs())
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.3}ms", self.as_millis_f64())
    }
}

impl Neg for TimeDelta {
    type Output = TimeDelta;

    fn neg(self) -> TimeDelta {
        TimeDelta(self.0.saturating_neg())
    }
}
