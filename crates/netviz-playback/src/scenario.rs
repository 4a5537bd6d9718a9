//! A complete scenario: configuration, entities, and events.

use netviz_core::SceneEvent;
use netviz_scene::{DecorationSpec, NodeSpec};
use serde::{Deserialize, Serialize};

use crate::config::ScenarioConfig;

/// Everything a parser hands to [`Scene::load`](crate::Scene::load).
///
/// Deserializes from JSON shaped like:
///
/// ```
/// # use netviz_playback::Scenario;
/// let s: Scenario = serde_json::from_str(r#"{
///     "config": { "milliseconds_per_frame": 5.0, "end_time": 100000000 },
///     "nodes": [ { "id": 0, "position": [0.0, 0.0, 0.0] } ],
///     "events": [
///         { "target": "node", "time": 10000000, "node": 0,
///           "kind": { "type": "move", "position": [1.0, 2.0, 0.0] } }
///     ]
/// }"#).unwrap();
/// assert_eq!(s.nodes.len(), 1);
/// assert_eq!(s.events.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Playback configuration.
    #[serde(default)]
    pub config: ScenarioConfig,
    /// Nodes, in display order.
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    /// Static decorations.
    #[serde(default)]
    pub decorations: Vec<DecorationSpec>,
    /// Timed events, expected in nondecreasing time order.
    #[serde(default)]
    pub events: Vec<SceneEvent>,
}
