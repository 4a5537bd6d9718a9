//! Seeded random-walk scenario generator.
//!
//! Produces node and decoration specs plus a time-sorted event list that
//! mixes every event kind. Identical seeds yield identical scenarios.

use netviz_core::{
    ColorSlot, DecorationEvent, DecorationEventKind, DecorationId, NodeEvent, NodeEventKind,
    NodeId, Orientation, Rgb, SceneEvent, SimTime, TimeDelta, Vec3,
};
use netviz_scene::{DecorationSpec, NodeSpec};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a generated scenario.
#[derive(Clone, Debug)]
pub struct WalkParams {
    pub nodes: u32,
    pub decorations: u32,
    pub events: usize,
    /// Upper bound on the gap between consecutive events, in ms.
    pub max_gap_ms: i64,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            nodes: 8,
            decorations: 2,
            events: 200,
            max_gap_ms: 20,
        }
    }
}

/// A generated scenario.
#[derive(Clone, Debug)]
pub struct RandomWalk {
    pub nodes: Vec<NodeSpec>,
    pub decorations: Vec<DecorationSpec>,
    /// Nondecreasing by time.
    pub events: Vec<SceneEvent>,
}

impl RandomWalk {
    /// Time of the last event, or zero for an empty walk.
    pub fn end_time(&self) -> SimTime {
        self.events.last().map_or(SimTime::ZERO, SceneEvent::time)
    }
}

fn random_color(rng: &mut ChaCha8Rng) -> Rgb {
    Rgb::new(rng.random(), rng.random(), rng.random())
}

fn random_position(rng: &mut ChaCha8Rng, around: Vec3) -> Vec3 {
    around
        + Vec3::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0),
            rng.random_range(0.0..1.0),
        )
}

fn random_orientation(rng: &mut ChaCha8Rng) -> Orientation {
    Orientation::new(
        rng.random_range(-180.0..180.0),
        rng.random_range(-180.0..180.0),
        rng.random_range(-180.0..180.0),
    )
}

/// Generate a scenario from `seed`.
pub fn random_walk(seed: u64, params: &WalkParams) -> RandomWalk {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let nodes: Vec<NodeSpec> = (0..params.nodes)
        .map(|i| {
            NodeSpec::new(NodeId(i)).with_position(Vec3::new(i as f32 * 10.0, 0.0, 0.0))
        })
        .collect();
    let decorations: Vec<DecorationSpec> = (0..params.decorations)
        .map(|i| DecorationSpec::new(DecorationId(i)).with_position(Vec3::new(0.0, i as f32, 0.0)))
        .collect();

    let mut positions: Vec<Vec3> = nodes.iter().map(|n| n.position).collect();
    let mut transmitting = vec![false; nodes.len()];
    let mut events = Vec::with_capacity(params.events);
    let mut now = 0i64;

    for _ in 0..params.events {
        now += rng.random_range(0..=params.max_gap_ms.max(0));
        let time = SimTime::from_millis(now);

        if params.decorations > 0 && (params.nodes == 0 || rng.random_bool(0.1)) {
            let decoration = DecorationId(rng.random_range(0..params.decorations));
            let kind = if rng.random_bool(0.5) {
                DecorationEventKind::Move {
                    position: random_position(&mut rng, Vec3::ZERO),
                }
            } else {
                DecorationEventKind::Orientation {
                    orientation: random_orientation(&mut rng),
                }
            };
            events.push(SceneEvent::Decoration(DecorationEvent {
                time,
                decoration,
                kind,
            }));
            continue;
        }
        if params.nodes == 0 {
            break;
        }

        let idx = rng.random_range(0..params.nodes) as usize;
        let kind = match rng.random_range(0..6u8) {
            0 | 1 => {
                let p = random_position(&mut rng, positions[idx]);
                positions[idx] = p;
                NodeEventKind::Move { position: p }
            }
            2 => NodeEventKind::Orientation {
                orientation: random_orientation(&mut rng),
            },
            3 => NodeEventKind::Color {
                slot: if rng.random_bool(0.5) {
                    ColorSlot::Base
                } else {
                    ColorSlot::Highlight
                },
                color: rng.random_bool(0.7).then(|| random_color(&mut rng)),
            },
            _ => {
                if transmitting[idx] {
                    transmitting[idx] = false;
                    NodeEventKind::TransmitEnd
                } else {
                    transmitting[idx] = true;
                    NodeEventKind::TransmitStart {
                        duration: TimeDelta::from_millis(rng.random_range(1..50)),
                        target_size: rng.random_range(0.5..4.0),
                        color: random_color(&mut rng),
                    }
                }
            }
        };
        events.push(SceneEvent::Node(NodeEvent {
            time,
            node: NodeId(idx as u32),
            kind,
        }));
    }

    RandomWalk {
        nodes,
        decorations,
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_walk() {
        let p = WalkParams::default();
        let a = random_walk(7, &p);
        let b = random_walk(7, &p);
        assert_eq!(a.events, b.events);
    }

    #[test]
    fn events_are_sorted() {
        let walk = random_walk(11, &WalkParams::default());
        assert!(walk.events.windows(2).all(|w| w[0].time() <= w[1].time()));
        assert_eq!(walk.events.len(), 200);
    }

    #[test]
    fn decorations_only_walk() {
        let p = WalkParams {
            nodes: 0,
            decorations: 3,
            events: 20,
            max_gap_ms: 5,
        };
        let walk = random_walk(1, &p);
        assert_eq!(walk.events.len(), 20);
        assert!(walk
            .events
            .iter()
            .all(|e| matches!(e, SceneEvent::Decoration(_))));
    }
}
