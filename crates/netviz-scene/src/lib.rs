//! Per-entity state for netviz scenes.
//!
//! Nodes and decorations implement [`EntityState`]: applying a forward
//! event mutates the entity and returns an undo record holding exactly the
//! state it overwrote, and restoring that record reverses the change bit
//! for bit. The renderer reads entity state through plain getters.
//!
//! Node trails are kept in a [`TrailBuffer`], a fixed-capacity ring whose
//! pushes are individually reversible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod decoration;
pub mod entity;
pub mod hash;
pub mod node;
pub mod spec;
pub mod trail;

pub use decoration::Decoration;
pub use entity::EntityState;
pub use hash::StateHasher;
pub use node::Node;
pub use spec::{DecorationSpec, NodeSpec};
pub use trail::TrailBuffer;
