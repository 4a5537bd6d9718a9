//! Entity tables keyed by ID, in insertion order.

use indexmap::map::Entry;
use indexmap::IndexMap;

use netviz_core::{
    DecorationId, EntityRef, NodeId, SceneError, SceneEvent, UndoEvent, Vec3,
};
use netviz_scene::{Decoration, DecorationSpec, EntityState, Node, NodeSpec, StateHasher};

/// Nodes and decorations currently in the scene.
#[derive(Clone, Debug, Default)]
pub struct EntityTables {
    nodes: IndexMap<NodeId, Node>,
    decorations: IndexMap<DecorationId, Decoration>,
}

impl EntityTables {
    /// Empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a batch of nodes. Either all are inserted or, on the first
    /// duplicate ID (against the table or within the batch), none are.
    pub fn insert_nodes(
        &mut self,
        specs: &[NodeSpec],
        trail_capacity: usize,
    ) -> Result<(), SceneError> {
        let mut staged: IndexMap<NodeId, Node> = IndexMap::with_capacity(specs.len());
        for spec in specs {
            if self.nodes.contains_key(&spec.id) {
                return Err(SceneError::DuplicateNode(spec.id));
            }
            match staged.entry(spec.id) {
                Entry::Occupied(_) => return Err(SceneError::DuplicateNode(spec.id)),
                Entry::Vacant(slot) => {
                    slot.insert(Node::from_spec(spec, trail_capacity));
                }
            }
        }
        self.nodes.extend(staged);
        Ok(())
    }

    /// Insert a batch of decorations, all or nothing.
    pub fn insert_decorations(&mut self, specs: &[DecorationSpec]) -> Result<(), SceneError> {
        let mut staged: IndexMap<DecorationId, Decoration> =
            IndexMap::with_capacity(specs.len());
        for spec in specs {
            if self.decorations.contains_key(&spec.id) {
                return Err(SceneError::DuplicateDecoration(spec.id));
            }
            match staged.entry(spec.id) {
                Entry::Occupied(_) => return Err(SceneError::DuplicateDecoration(spec.id)),
                Entry::Vacant(slot) => {
                    slot.insert(Decoration::from_spec(spec));
                }
            }
        }
        self.decorations.extend(staged);
        Ok(())
    }

    /// Whether `target` is in the scene.
    pub fn contains(&self, target: EntityRef) -> bool {
        match target {
            EntityRef::Node(id) => self.nodes.contains_key(&id),
            EntityRef::Decoration(id) => self.decorations.contains_key(&id),
        }
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Look up a decoration.
    pub fn decoration(&self, id: DecorationId) -> Option<&Decoration> {
        self.decorations.get(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.values()
    }

    /// Decorations in insertion order.
    pub fn decorations(&self) -> impl ExactSizeIterator<Item = &Decoration> {
        self.decorations.values()
    }

    /// Node count.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Decoration count.
    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    /// Render-frame position of `target`, if present.
    pub fn position_of(&self, target: EntityRef) -> Option<Vec3> {
        match target {
            EntityRef::Node(id) => self.nodes.get(&id).map(EntityState::position),
            EntityRef::Decoration(id) => self.decorations.get(&id).map(EntityState::position),
        }
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.decorations.clear();
    }

    /// Route a forward event to its target and apply it.
    pub(crate) fn apply(&mut self, event: SceneEvent) -> Result<UndoEvent, SceneError> {
        match event {
            SceneEvent::Node(e) => {
                let node = self
                    .nodes
                    .get_mut(&e.node)
                    .ok_or(SceneError::UnknownNode(e.node))?;
                Ok(UndoEvent::Node(node.apply(e)))
            }
            SceneEvent::Decoration(e) => {
                let decoration = self
                    .decorations
                    .get_mut(&e.decoration)
                    .ok_or(SceneError::UnknownDecoration(e.decoration))?;
                Ok(UndoEvent::Decoration(decoration.apply(e)))
            }
        }
    }

    /// Route an undo record to its target, restore the prior state, and
    /// hand back the forward event for requeueing.
    pub(crate) fn restore(&mut self, undo: UndoEvent) -> Result<SceneEvent, SceneError> {
        match undo {
            UndoEvent::Node(u) => {
                let node = self
                    .nodes
                    .get_mut(&u.event.node)
                    .ok_or(SceneError::UnknownNode(u.event.node))?;
                node.restore(u.prior);
                Ok(SceneEvent::Node(u.event))
            }
            UndoEvent::Decoration(u) => {
                let decoration = self
                    .decorations
                    .get_mut(&u.event.decoration)
                    .ok_or(SceneError::UnknownDecoration(u.event.decoration))?;
                decoration.restore(u.prior);
                Ok(SceneEvent::Decoration(u.event))
            }
        }
    }

    /// Fold every entity into `hasher`, nodes first, in insertion order.
    pub fn hash_into(&self, hasher: &mut StateHasher) {
        hasher.write_u64(self.nodes.len() as u64);
        for node in self.nodes.values() {
            node.hash_into(hasher);
        }
        hasher.write_u64(self.decorations.len() as u64);
        for decoration in self.decorations.values() {
            decoration.hash_into(hasher);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netviz_test_utils::{move_event, node_spec};

    #[test]
    fn duplicate_within_batch_inserts_nothing() {
        let mut t = EntityTables::new();
        let err = t
            .insert_nodes(&[node_spec(1, Vec3::ZERO), node_spec(1, Vec3::ONE)], 4)
            .unwrap_err();
        assert_eq!(err, SceneError::DuplicateNode(NodeId(1)));
        assert_eq!(t.node_count(), 0);
    }

    #[test]
    fn duplicate_against_table_rejected() {
        let mut t = EntityTables::new();
        t.insert_nodes(&[node_spec(1, Vec3::ZERO)], 4).unwrap();
        assert!(t.insert_nodes(&[node_spec(2, Vec3::ZERO), node_spec(1, Vec3::ZERO)], 4).is_err());
        assert_eq!(t.node_count(), 1);
        assert!(!t.contains(EntityRef::Node(NodeId(2))));
    }

    #[test]
    fn duplicate_decoration_rejected() {
        let mut t = EntityTables::new();
        let spec = DecorationSpec::new(DecorationId(3));
        t.insert_decorations(std::slice::from_ref(&spec)).unwrap();
        assert_eq!(
            t.insert_decorations(&[spec]),
            Err(SceneError::DuplicateDecoration(DecorationId(3)))
        );
    }

    #[test]
    fn apply_to_unknown_node_errors() {
        let mut t = EntityTables::new();
        let err = t.apply(move_event(9, 10, Vec3::ONE)).unwrap_err();
        assert_eq!(err, SceneError::UnknownNode(NodeId(9)));
    }

    #[test]
    fn apply_then_restore_returns_event() {
        let mut t = EntityTables::new();
        t.insert_nodes(&[node_spec(1, Vec3::ZERO)], 4).unwrap();
        let event = move_event(1, 10, Vec3::new(1.0, 2.0, 3.0));
        let undo = t.apply(event.clone()).unwrap();
        assert_eq!(
            t.position_of(EntityRef::Node(NodeId(1))),
            Some(Vec3::new(1.0, 3.0, -2.0))
        );
        let back = t.restore(undo).unwrap();
        assert_eq!(back, event);
        assert_eq!(t.position_of(EntityRef::Node(NodeId(1))), Some(Vec3::ZERO));
    }
}
