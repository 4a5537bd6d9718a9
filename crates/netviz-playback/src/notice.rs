//! Notifications queued for the host after playback state changes.

use netviz_core::{SimTime, TimeDelta};

use crate::clock::PlayMode;

/// A change the host may want to reflect in its UI.
///
/// Queued by the [`Scene`](crate::Scene) and drained with
/// [`take_notices`](crate::Scene::take_notices).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackNotice {
    /// The clock moved.
    TimeChanged {
        /// New simulation time.
        time: SimTime,
        /// Signed change from the previous time.
        delta: TimeDelta,
    },
    /// Play/pause state changed.
    ModeChanged(PlayMode),
    /// The per-tick step changed.
    StepChanged(TimeDelta),
    /// The scene was cleared or replaced by a load.
    SceneReset,
}
