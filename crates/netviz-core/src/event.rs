//! Forward events and their undo records.
//!
//! A forward event describes a state change at a point in time. Applying
//! one to its target entity yields an undo record that captures exactly
//! the prior state that the event overwrote, plus a copy of the event
//! itself so that rewinding past it can put it back on the pending queue.
//!
//! Node and decoration events are separate enums: decorations only accept
//! the transform subset, and the type system enforces it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::geometry::{Orientation, Rgb, Vec3};
use crate::id::{DecorationId, EntityRef, NodeId};
use crate::time::{SimTime, TimeDelta};

/// Which of a node's two color overrides an event targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSlot {
    /// The model's base color.
    Base,
    /// The selection/highlight tint.
    Highlight,
}

/// An in-flight transmission effect on a node.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransmitState {
    /// When the transmission started.
    pub start: SimTime,
    /// How long the bubble grows for.
    pub duration: TimeDelta,
    /// Bubble radius at full growth.
    pub target_size: f32,
    /// Bubble color.
    pub color: Rgb,
}

impl TransmitState {
    /// `start + duration`.
    pub fn stop_time(&self) -> SimTime {
        self.start + self.duration
    }
}

// ── Node events ────────────────────────────────────────────────

/// A timed state change targeting a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeEvent {
    /// When the event takes effect.
    pub time: SimTime,
    /// Target node.
    pub node: NodeId,
    /// What changes.
    pub kind: NodeEventKind,
}

/// Payload of a [`NodeEvent`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeEventKind {
    /// Move to `position`, given in simulator coordinates.
    Move {
        /// Destination, simulator frame.
        position: Vec3,
    },
    /// Replace the orientation.
    Orientation {
        /// New per-axis angles.
        orientation: Orientation,
    },
    /// Set or clear one color override.
    Color {
        /// Which override.
        slot: ColorSlot,
        /// New value; `None` clears the override.
        color: Option<Rgb>,
    },
    /// Begin a transmission effect at the event time.
    TransmitStart {
        /// Growth duration.
        duration: TimeDelta,
        /// Bubble radius at full growth.
        target_size: f32,
        /// Bubble color.
        color: Rgb,
    },
    /// End the current transmission effect.
    TransmitEnd,
}

/// Trail ring-buffer changes made by one move, in push order.
///
/// Each entry is the position evicted from the front of the ring by that
/// push, or `None` if the ring had room. A move pushes once, or twice when
/// it seeds an empty trail with the pre-move position first.
pub type TrailDelta = SmallVec<[Option<Vec3>; 2]>;

/// Node state overwritten by a forward event.
#[derive(Clone, Debug, PartialEq)]
pub enum NodePrior {
    /// Position before a move, plus the trail changes it made.
    Move {
        /// Render-frame position before the move.
        position: Vec3,
        /// Trail pushes to reverse, in push order.
        trail: TrailDelta,
    },
    /// Orientation before an orientation change.
    Orientation {
        /// Prior angles.
        orientation: Orientation,
    },
    /// Override value before a color change.
    Color {
        /// Which override was changed.
        slot: ColorSlot,
        /// Prior value, possibly unset.
        color: Option<Rgb>,
    },
    /// Transmit state before a transmit start.
    TransmitStart {
        /// Transmission that was in flight, if any.
        prior: Option<TransmitState>,
        /// When the transmission started by this event stops growing.
        stop_time: SimTime,
    },
    /// Transmit state before a transmit end.
    TransmitEnd {
        /// Transmission that was cleared, if any.
        prior: Option<TransmitState>,
    },
}

/// Undo record for a [`NodeEvent`].
#[derive(Clone, Debug, PartialEq)]
pub struct NodeUndo {
    /// The forward event that produced this record.
    pub event: NodeEvent,
    /// State the event overwrote.
    pub prior: NodePrior,
}

// ── Decoration events ──────────────────────────────────────────

/// A timed state change targeting a decoration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecorationEvent {
    /// When the event takes effect.
    pub time: SimTime,
    /// Target decoration.
    pub decoration: DecorationId,
    /// What changes.
    pub kind: DecorationEventKind,
}

/// Payload of a [`DecorationEvent`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DecorationEventKind {
    /// Move to `position`, given in simulator coordinates.
    Move {
        /// Destination, simulator frame.
        position: Vec3,
    },
    /// Replace the orientation.
    Orientation {
        /// New per-axis angles.
        orientation: Orientation,
    },
}

/// Decoration state overwritten by a forward event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DecorationPrior {
    /// Render-frame position before a move.
    Move {
        /// Prior position.
        position: Vec3,
    },
    /// Orientation before an orientation change.
    Orientation {
        /// Prior angles.
        orientation: Orientation,
    },
}

/// Undo record for a [`DecorationEvent`].
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationUndo {
    /// The forward event that produced this record.
    pub event: DecorationEvent,
    /// State the event overwrote.
    pub prior: DecorationPrior,
}

// ── Scene-level unions ─────────────────────────────────────────

/// Any forward event on the pending queue.
///
/// # Examples
///
/// ```
/// use netviz_core::{NodeEvent, NodeEventKind, NodeId, SceneEvent, SimTime, Vec3};
///
/// let ev = SceneEvent::Node(NodeEvent {
///     time: SimTime::from_millis(10),
///     node: NodeId(1),
///     kind: NodeEventKind::Move { position: Vec3::new(1.0, 2.0, 0.0) },
/// });
///
/// assert_eq!(ev.time(), SimTime::from_millis(10));
/// assert_eq!(ev.target().to_string(), "node 1");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum SceneEvent {
    /// Targets a node.
    Node(NodeEvent),
    /// Targets a decoration.
    Decoration(DecorationEvent),
}

impl SceneEvent {
    /// When the event takes effect.
    pub fn time(&self) -> SimTime {
        match self {
            Self::Node(e) => e.time,
            Self::Decoration(e) => e.time,
        }
    }

    /// The entity the event targets.
    pub fn target(&self) -> EntityRef {
        match self {
            Self::Node(e) => EntityRef::Node(e.node),
            Self::Decoration(e) => EntityRef::Decoration(e.decoration),
        }
    }
}

impl From<NodeEvent> for SceneEvent {
    fn from(e: NodeEvent) -> Self {
        Self::Node(e)
    }
}

impl From<DecorationEvent> for SceneEvent {
    fn from(e: DecorationEvent) -> Self {
        Self::Decoration(e)
    }
}

/// Any undo record on the history stack.
#[derive(Clone, Debug, PartialEq)]
pub enum UndoEvent {
    /// Undoes a node event.
    Node(NodeUndo),
    /// Undoes a decoration event.
    Decoration(DecorationUndo),
}

impl UndoEvent {
    /// Time of the forward event this record undoes.
    pub fn time(&self) -> SimTime {
        match self {
            Self::Node(u) => u.event.time,
            Self::Decoration(u) => u.event.time,
        }
    }

    /// The entity the record restores.
    pub fn target(&self) -> EntityRef {
        match self {
            Self::Node(u) => EntityRef::Node(u.event.node),
            Self::Decoration(u) => EntityRef::Decoration(u.event.decoration),
        }
    }

    /// Consume the record, returning the forward event it was built from.
    pub fn into_event(self) -> SceneEvent {
        match self {
            Self::Node(u) => SceneEvent::Node(u.event),
            Self::Decoration(u) => SceneEvent::Decoration(u.event),
        }
    }
}
