//! The [`EntityState`] trait: the apply/restore contract every scene entity
//! implements.

use std::fmt;
use std::hash::Hash;

use netviz_core::Vec3;

use crate::hash::StateHasher;

/// Mutable per-entity state driven by timed events.
///
/// # Contract
///
/// - [`apply`](Self::apply) always succeeds for an event addressed to this
///   entity. Checking that the target exists is the caller's job.
/// - The returned undo record holds exactly the state the event
///   overwrote. Passing its prior half to [`restore`](Self::restore)
///   returns the entity to its pre-apply state bit for bit, provided no
///   later event is still applied.
/// - Undo records are consumed by value, so each is restored at most once.
pub trait EntityState {
    /// Identifier type keyed in the scene's entity table.
    type Id: Copy + Eq + Hash + fmt::Display + fmt::Debug;
    /// Forward event addressed to this entity kind.
    type Event;
    /// Prior-state record captured by [`apply`](Self::apply).
    type Prior;
    /// Undo record pairing the forward event with its prior state.
    type Undo;

    /// This entity's ID.
    fn id(&self) -> Self::Id;

    /// Current render-frame position.
    fn position(&self) -> Vec3;

    /// Apply a forward event, returning the record that reverses it.
    fn apply(&mut self, event: Self::Event) -> Self::Undo;

    /// Restore the state captured by a previous [`apply`](Self::apply).
    fn restore(&mut self, prior: Self::Prior);

    /// Fold every observable field into `hasher`.
    fn hash_into(&self, hasher: &mut StateHasher);
}
