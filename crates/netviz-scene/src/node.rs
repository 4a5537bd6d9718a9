//! Node state: transform, color overrides, motion trail, transmit effect.

use netviz_core::{
    sim_to_render, ColorSlot, NodeEvent, NodeEventKind, NodeId, NodePrior, NodeUndo, Orientation,
    Rgb, SimTime, TrailDelta, TransmitState, Vec3,
};

use crate::entity::EntityState;
use crate::hash::StateHasher;
use crate::spec::NodeSpec;
use crate::trail::TrailBuffer;

/// Live state of one node.
///
/// Positions are stored in the render frame. The renderer reads this
/// between ticks through the getters; only the playback engine mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    model: Option<String>,
    label: Option<String>,
    visible: bool,
    position: Vec3,
    orientation: Orientation,
    scale: f32,
    base_color: Option<Rgb>,
    highlight_color: Option<Rgb>,
    trail: TrailBuffer,
    transmit: Option<TransmitState>,
}

impl Node {
    /// Build live state from a parser spec, with a trail of
    /// `trail_capacity` positions.
    ///
    /// # Panics
    ///
    /// Panics if `trail_capacity` is zero.
    pub fn from_spec(spec: &NodeSpec, trail_capacity: usize) -> Self {
        Self {
            id: spec.id,
            model: spec.model.clone(),
            label: spec.label.clone(),
            visible: spec.visible,
            position: sim_to_render(spec.position),
            orientation: spec.orientation,
            scale: spec.scale,
            base_color: spec.base_color,
            highlight_color: spec.highlight_color,
            trail: TrailBuffer::new(trail_capacity),
            transmit: None,
        }
    }

    /// Model reference for the renderer.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    /// Display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the renderer should draw this node.
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

    /// Base color override, if set.
    pub fn base_color(&self) -> Option<Rgb> {
        self.base_color
    }

    /// Highlight color override, if set.
    pub fn highlight_color(&self) -> Option<Rgb> {
        self.highlight_color
    }

    /// The override in `slot`, if set.
    pub fn color(&self, slot: ColorSlot) -> Option<Rgb> {
        match slot {
            ColorSlot::Base => self.base_color,
            ColorSlot::Highlight => self.highlight_color,
        }
    }

    /// Whether the override in `slot` is set.
    pub fn is_color_set(&self, slot: ColorSlot) -> bool {
        self.color(slot).is_some()
    }

    /// Recent positions, oldest first.
    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Whether a transmission effect is active.
    pub fn is_transmitting(&self) -> bool {
        self.transmit.is_some()
    }

    /// The active transmission, if any.
    pub fn transmit(&self) -> Option<&TransmitState> {
        self.transmit.as_ref()
    }

    /// Growth fraction of the transmit bubble at `now`, in `[0, 1]`.
    ///
    /// Returns `None` when no transmission is active. A zero-length
    /// transmission is reported as fully grown.
    pub fn transmit_progress(&self, now: SimTime) -> Option<f32> {
        let t = self.transmit.as_ref()?;
        let span = t.duration.as_nanos();
        if span <= 0 {
            return Some(1.0);
        }
        let elapsed = now.since(t.start).as_nanos();
        Some((elapsed as f64 / span as f64).clamp(0.0, 1.0) as f32)
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<Rgb> {
        match slot {
            ColorSlot::Base => &mut self.base_color,
            ColorSlot::Highlight => &mut self.highlight_color,
        }
    }

    fn move_to(&mut self, target: Vec3) -> NodePrior {
        let prior = self.position;
        let mut trail = TrailDelta::new();
        if self.trail.is_empty() {
            trail.push(self.trail.push(prior));
        }
        self.position = sim_to_render(target);
        trail.push(self.trail.push(self.position));
        NodePrior::Move {
            position: prior,
            trail,
        }
    }
}

impl EntityState for Node {
    type Id = NodeId;
    type Event = NodeEvent;
    type Prior = NodePrior;
    type Undo = NodeUndo;

    fn id(&self) -> NodeId {
        self.id
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn apply(&mut self, event: NodeEvent) -> NodeUndo {
        debug_assert_eq!(event.node, self.id, "event routed to wrong node");
        let prior = match &event.kind {
            NodeEventKind::Move { position } => self.move_to(*position),
            NodeEventKind::Orientation { orientation } => {
                let prior = self.orientation;
                self.orientation = *orientation;
                NodePrior::Orientation { orientation: prior }
            }
            NodeEventKind::Color { slot, color } => {
                let prior = std::mem::replace(self.slot_mut(*slot), *color);
                NodePrior::Color {
                    slot: *slot,
                    color: prior,
                }
            }
            NodeEventKind::TransmitStart {
                duration,
                target_size,
                color,
            } => {
                let state = TransmitState {
                    start: event.time,
                    duration: *duration,
                    target_size: *target_size,
                    color: *color,
                };
                let stop_time = state.stop_time();
                NodePrior::TransmitStart {
                    prior: self.transmit.replace(state),
                    stop_time,
                }
            }
            NodeEventKind::TransmitEnd => NodePrior::TransmitEnd {
                prior: self.transmit.take(),
            },
        };
        NodeUndo { event, prior }
    }

    fn restore(&mut self, prior: NodePrior) {
        match prior {
            NodePrior::Move { position, trail } => {
                for evicted in trail.into_iter().rev() {
                    self.trail.unpush(evicted);
                }
                self.position = position;
            }
            NodePrior::Orientation { orientation } => self.orientation = orientation,
            NodePrior::Color { slot, color } => *self.slot_mut(slot) = color,
            NodePrior::TransmitStart { prior, .. } | NodePrior::TransmitEnd { prior } => {
                self.transmit = prior;
            }
        }
    }

    fn hash_into(&self, h: &mut StateHasher) {
        h.write_u32(self.id.0);
        h.write_bool(self.visible);
        h.write_vec3(self.position);
        h.write_orientation(self.orientation);
        h.write_f32(self.scale);
        h.write_color(self.base_color);
        h.write_color(self.highlight_color);
        h.write_u64(self.trail.len() as u64);
        for p in self.trail.iter() {
            h.write_vec3(p);
        }
        h.write_transmit(self.transmit.as_ref());
    }
}
