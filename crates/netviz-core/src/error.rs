//! Error types shared across the netviz crates.

use std::error::Error;
use std::fmt;

use crate::id::{DecorationId, NodeId};

/// Errors from building or addressing the entity tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// No node with this ID exists in the scene.
    UnknownNode(NodeId),
    /// No decoration with this ID exists in the scene.
    UnknownDecoration(DecorationId),
    /// A node with this ID was already added.
    DuplicateNode(NodeId),
    /// A decoration with this ID was already added.
    DuplicateDecoration(DecorationId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownNode(id) => write!(f, "unknown node {id}"),
            Self::UnknownDecoration(id) => write!(f, "unknown decoration {id}"),
            Self::DuplicateNode(id) => write!(f, "node {id} already exists"),
            Self::DuplicateDecoration(id) => write!(f, "decoration {id} already exists"),
        }
    }
}

impl Error for SceneError {}
