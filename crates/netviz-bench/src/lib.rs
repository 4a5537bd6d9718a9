//! Benchmark profiles for the netviz playback engine.
//!
//! Provides pre-built [`Scenario`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100 nodes, 10K events
//! - [`stress_profile`]: 1K nodes, 100K events
//! - [`scenario_from_walk`]: wrap any generated walk as a scenario

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use netviz_core::SimTime;
use netviz_playback::{Scenario, ScenarioConfig, Scene};
use netviz_test_utils::{random_walk, RandomWalk, WalkParams};

/// Wrap a generated walk as a scenario ending at its last event.
pub fn scenario_from_walk(walk: RandomWalk, milliseconds_per_frame: f64) -> Scenario {
    let end = walk.end_time().max(SimTime::from_millis(1));
    Scenario {
        config: ScenarioConfig {
            milliseconds_per_frame,
            end_time: Some(end),
            ..ScenarioConfig::default()
        },
        nodes: walk.nodes,
        decorations: walk.decorations,
        events: walk.events,
    }
}

/// Reference profile: 100 nodes, 10 decorations, 10K events, 10 ms frames.
pub fn reference_profile(seed: u64) -> Scenario {
    let params = WalkParams {
        nodes: 100,
        decorations: 10,
        events: 10_000,
        max_gap_ms: 5,
    };
    scenario_from_walk(random_walk(seed, &params), 10.0)
}

/// Stress profile: 1K nodes, 50 decorations, 100K events, 10 ms frames.
///
/// Same shape as [`reference_profile`] at 10x the event count.
pub fn stress_profile(seed: u64) -> Scenario {
    let params = WalkParams {
        nodes: 1_000,
        decorations: 50,
        events: 100_000,
        max_gap_ms: 2,
    };
    scenario_from_walk(random_walk(seed, &params), 10.0)
}

/// Build a paused scene at time zero from `scenario`.
///
/// # Panics
///
/// Panics if the scenario is invalid; profiles are always valid.
pub fn build_scene(scenario: Scenario) -> Scene {
    match Scene::from_scenario(scenario) {
        Ok((scene, _)) => scene,
        Err(e) => panic!("benchmark scenario failed to load: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let scenario = reference_profile(42);
        assert_eq!(scenario.config.validate(), Ok(()));
        assert_eq!(scenario.events.len(), 10_000);
    }

    #[test]
    fn stress_profile_validates() {
        let scenario = stress_profile(42);
        assert_eq!(scenario.config.validate(), Ok(()));
        assert_eq!(scenario.nodes.len(), 1_000);
    }

    #[test]
    fn build_scene_accepts_every_event() {
        let scene = build_scene(reference_profile(7));
        assert_eq!(scene.store().pending_len(), 10_000);
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_profile(3), reference_profile(3));
    }
}
