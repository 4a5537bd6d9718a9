//! Terse constructors for scene events and entity specs.
//!
//! All times are whole milliseconds; positions are simulator-frame.

use netviz_core::{
    ColorSlot, DecorationEvent, DecorationEventKind, DecorationId, NodeEvent, NodeEventKind,
    NodeId, Orientation, Rgb, SceneEvent, SimTime, TimeDelta, Vec3,
};
use netviz_scene::NodeSpec;

/// A default node spec at `position`.
pub fn node_spec(id: u32, position: Vec3) -> NodeSpec {
    NodeSpec::new(NodeId(id)).with_position(position)
}

fn node_event(node: u32, ms: i64, kind: NodeEventKind) -> SceneEvent {
    SceneEvent::Node(NodeEvent {
        time: SimTime::from_millis(ms),
        node: NodeId(node),
        kind,
    })
}

/// Move node `node` to `position` at `ms`.
pub fn move_event(node: u32, ms: i64, position: Vec3) -> SceneEvent {
    node_event(node, ms, NodeEventKind::Move { position })
}

/// Set node `node`'s orientation at `ms`.
pub fn orientation_event(node: u32, ms: i64, orientation: Orientation) -> SceneEvent {
    node_event(node, ms, NodeEventKind::Orientation { orientation })
}

/// Set or clear a color override on node `node` at `ms`.
pub fn color_event(node: u32, ms: i64, slot: ColorSlot, color: Option<Rgb>) -> SceneEvent {
    node_event(node, ms, NodeEventKind::Color { slot, color })
}

/// Start a transmission on node `node` at `ms` lasting `duration_ms`.
pub fn transmit_start(node: u32, ms: i64, duration_ms: i64) -> SceneEvent {
    node_event(
        node,
        ms,
        NodeEventKind::TransmitStart {
            duration: TimeDelta::from_millis(duration_ms),
            target_size: 2.0,
            color: Rgb::new(0, 160, 255),
        },
    )
}

/// End the transmission on node `node` at `ms`.
pub fn transmit_end(node: u32, ms: i64) -> SceneEvent {
    node_event(node, ms, NodeEventKind::TransmitEnd)
}

/// Move decoration `id` to `position` at `ms`.
pub fn decoration_move(id: u32, ms: i64, position: Vec3) -> SceneEvent {
    SceneEvent::Decoration(DecorationEvent {
        time: SimTime::from_millis(ms),
        decoration: DecorationId(id),
        kind: DecorationEventKind::Move { position },
    })
}

/// Set decoration `id`'s orientation at `ms`.
pub fn decoration_orientation(id: u32, ms: i64, orientation: Orientation) -> SceneEvent {
    SceneEvent::Decoration(DecorationEvent {
        time: SimTime::from_millis(ms),
        decoration: DecorationId(id),
        kind: DecorationEventKind::Orientation { orientation },
    })
}
