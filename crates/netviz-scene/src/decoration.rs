//! Decoration state: a transform-only scene prop.

use netviz_core::{
    sim_to_render, DecorationEvent, DecorationEventKind, DecorationId, DecorationPrior,
    DecorationUndo, Orientation, Vec3,
};

use crate::entity::EntityState;
use crate::hash::StateHasher;
use crate::spec::DecorationSpec;

/// Live state of one decoration.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    id: DecorationId,
    model: Option<String>,
    visible: bool,
    position: Vec3,
    orientation: Orientation,
    scale: f32,
}

impl Decoration {
    /// Build live state from a parser spec.
    pub fn from_spec(spec: &DecorationSpec) -> Self {
        Self {
            id: spec.id,
            model: spec.model.clone(),
            visible: spec.visible,
            position: sim_to_render(spec.position),
            orientation: spec.orientation,
            scale: spec.scale,
        }
    }

    /// Model reference for the renderer.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Whether the renderer should draw this decoration.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current orientation angles.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Uniform model scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl EntityState for Decoration {
    type Id = DecorationId;
    type Event = DecorationEvent;
    type Prior = DecorationPrior;
    type Undo = DecorationUndo;

    fn id(&self) -> DecorationId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn apply(&mut self, event: DecorationEvent) -> DecorationUndo {
        debug_assert_eq!(event.decoration, self.id, "event routed to wrong decoration");
        let prior = match &event.kind {
            DecorationEventKind::Move { position } => DecorationPrior::Move {
                position: std::mem::replace(&mut self.position, sim_to_render(*position)),
            },
            DecorationEventKind::Orientation { orientation } => DecorationPrior::Orientation {
                orientation: std::mem::replace(&mut self.orientation, *orientation),
            },
        };
        DecorationUndo { event, prior }
    }

    fn restore(&mut self, prior: DecorationPrior) {
        match prior {
            DecorationPrior::Move { position } => self.position = position,
            DecorationPrior::Orientation { orientation } => self.orientation = orientation,
        }
    }

    fn hash_into(&self, h: &mut StateHasher) {
        h.write_u32(self.id.0);
        h.write_bool(self.visible);
        h.write_vec3(self.position);
        h.write_orientation(self.orientation);
        h.write_f32(self.scale);
    }
}
