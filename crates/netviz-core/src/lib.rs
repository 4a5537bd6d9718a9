//! Core types for netviz scenario playback.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the entity-state and playback crates: entity IDs,
//! signed simulation time, geometry and color types, the forward event sum
//! types, their undo counterparts, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod geometry;
pub mod id;
pub mod time;

pub use error::SceneError;
pub use event::{
    ColorSlot, DecorationEvent, DecorationEventKind, DecorationPrior, DecorationUndo, NodeEvent,
    NodeEventKind, NodePrior, NodeUndo, SceneEvent, TrailDelta, TransmitState, UndoEvent,
};
pub use geometry::{sim_to_render, Bounds, Orientation, Rgb, Vec3};
pub use id::{DecorationId, EntityRef, NodeId};
pub use time::{SimTime, TimeDelta};
