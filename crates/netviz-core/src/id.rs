//! Strongly-typed entity identifiers.
//!
//! IDs are assigned by the scenario source file and are stable for the
//! lifetime of a loaded scene. Nodes and decorations live in separate ID
//! spaces: `NodeId(3)` and `DecorationId(3)` are unrelated entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a node (a simulated network device).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a decoration (a static or scripted scene prop).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DecorationId(pub u32);

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for DecorationId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A reference to any scene entity, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    /// A node.
    Node(NodeId),
    /// A decoration.
    Decoration(DecorationId),
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "node {id}"),
            Self::Decoration(id) => write!(f, "decoration {id}"),
        }
    }
}

impl From<NodeId> for EntityRef {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<DecorationId> for EntityRef {
    fn from(id: DecorationId) -> Self {
        Self::Decoration(id)
    }
}
