//! Dispatch counters.
//!
//! [`DispatchStats`] describes one time change; [`PlaybackMetrics`]
//! accumulates them over a scene's lifetime until the next reset.

use std::ops::AddAssign;

/// Counts from a single forward or undo drain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Forward events applied and pushed to history.
    pub applied: u32,
    /// History records undone and returned to the pending queue.
    pub undone: u32,
    /// Events or records discarded because their target is unknown.
    pub dropped: u32,
}

impl DispatchStats {
    /// Whether the drain changed nothing.
    pub fn is_empty(&self) -> bool {
        self.applied == 0 && self.undone == 0 && self.dropped == 0
    }
}

impl AddAssign for DispatchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.undone += rhs.undone;
        self.dropped += rhs.dropped;
    }
}

/// Cumulative playback counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackMetrics {
    /// Playing ticks that moved the clock.
    pub ticks: u64,
    /// Drain passes of any origin: ticks, seeks, single steps and late-event
    /// replays.
    pub time_changes: u64,
    /// Cumulative forward events applied.
    pub events_applied: u64,
    /// Cumulative history records undone.
    pub events_undone: u64,
    /// Cumulative events dropped at dispatch for an unknown target.
    pub events_dropped: u64,
    /// Cumulative events rejected at ingestion for an unknown target.
    pub events_rejected: u64,
    /// Wall-clock time of the most recent drain, in microseconds.
    pub last_dispatch_us: u64,
}

impl PlaybackMetrics {
    pub(crate) fn record(&mut self, stats: DispatchStats, elapsed_us: u64) {
        self.time_changes += 1;
        self.events_applied += u64::from(stats.applied);
        self.events_undone += u64::from(stats.undone);
        self.events_dropped += u64::from(stats.dropped);
        self.last_dispatch_us = elapsed_us;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = PlaybackMetrics::default();
        assert_eq!(m.ticks, 0);
        assert_eq!(m.events_applied, 0);
        assert_eq!(m.events_undone, 0);
        assert_eq!(m.events_dropped, 0);
        assert_eq!(m.last_dispatch_us, 0);
    }

    #[test]
    fn record_accumulates() {
        let mut m = PlaybackMetrics::default();
        m.record(
            DispatchStats {
                applied: 3,
                undone: 0,
                dropped: 1,
            },
            12,
        );
        m.record(
            DispatchStats {
                applied: 0,
                undone: 2,
                dropped: 0,
            },
            7,
        );
        assert_eq!(m.time_changes, 2);
        assert_eq!(m.events_applied, 3);
        assert_eq!(m.events_undone, 2);
        assert_eq!(m.events_dropped, 1);
        assert_eq!(m.last_dispatch_us, 7);
    }

    #[test]
    fn stats_add_and_empty() {
        let mut s = DispatchStats::default();
        assert!(s.is_empty());
        s += DispatchStats {
            applied: 1,
            undone: 2,
            dropped: 0,
        };
        assert_eq!(s.applied, 1);
        assert_eq!(s.undone, 2);
        assert!(!s.is_empty());
    }
}
