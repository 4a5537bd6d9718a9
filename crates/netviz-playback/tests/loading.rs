//! Background scenario loading through the `Scene` API.

use netviz_core::{NodeId, SimTime};
use netviz_playback::{LoadError, PlaybackNotice, Scenario, Scene};
use netviz_test_utils::{random_walk, WalkParams};

const SCENARIO_JSON: &str = r#"{
    "config": { "milliseconds_per_frame": 10.0, "end_time": 50000000, "trail_capacity": 8 },
    "nodes": [
        { "id": 0, "label": "gateway", "position": [0.0, 0.0, 0.0] },
        { "id": 1, "position": [10.0, 0.0, 0.0], "highlight_color": { "r": 255, "g": 0, "b": 0 } }
    ],
    "decorations": [ { "id": 0, "model": "building" } ],
    "events": [
        { "target": "node", "time": 10000000, "node": 0,
          "kind": { "type": "move", "position": [1.0, 1.0, 0.0] } },
        { "target": "node", "time": 20000000, "node": 1,
          "kind": { "type": "color", "slot": "highlight", "color": null } },
        { "target": "node", "time": 30000000, "node": 1,
          "kind": { "type": "transmit_start", "duration": 5000000, "target_size": 3.0,
                    "color": { "r": 0, "g": 0, "b": 255 } } },
        { "target": "decoration", "time": 40000000, "decoration": 0,
          "kind": { "type": "orientation", "orientation": { "x": 0.0, "y": 0.0, "z": 90.0 } } }
    ]
}"#;

fn parse_fixture() -> Result<Scenario, netviz_playback::ParseError> {
    Ok(serde_json::from_str(SCENARIO_JSON)?)
}

#[test]
fn background_load_installs_between_ticks() {
    let mut scene = Scene::default();
    scene.begin_load("fixture", parse_fixture).unwrap();
    assert!(scene.is_loading());

    let report = scene.wait_load().unwrap().unwrap();
    assert_eq!(report.accepted, 4);
    assert!(!scene.is_loading());
    assert_eq!(scene.nodes().len(), 2);
    assert_eq!(scene.node(NodeId(0)).unwrap().label(), Some("gateway"));
    assert_eq!(scene.config().trail_capacity, 8);
    assert!(scene.take_notices().contains(&PlaybackNotice::SceneReset));

    scene.set_time(SimTime::from_millis(50));
    assert_eq!(scene.store().history_len(), 4);
    let node = scene.node(NodeId(1)).unwrap();
    assert!(node.highlight_color().is_none());
    assert!(node.is_transmitting());
    assert_eq!(node.transmit_progress(scene.now()), Some(1.0));
}

#[test]
fn poll_eventually_returns_result() {
    let mut scene = Scene::default();
    scene.begin_load("fixture", parse_fixture).unwrap();
    let result = loop {
        if let Some(result) = scene.poll_load() {
            break result;
        }
        std::thread::yield_now();
    };
    assert!(result.is_ok());
    assert_eq!(scene.decorations().len(), 1);
}

#[test]
fn second_load_while_in_flight_is_rejected() {
    let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(0);
    let mut scene = Scene::default();
    scene
        .begin_load("slow", move || {
            let _ = release_rx.recv();
            parse_fixture()
        })
        .unwrap();

    assert_eq!(
        scene.begin_load("second", parse_fixture),
        Err(LoadError::LoadInProgress)
    );

    release_tx.send(()).unwrap();
    assert!(scene.wait_load().unwrap().is_ok());
    assert!(scene.begin_load("third", parse_fixture).is_ok());
    assert!(scene.wait_load().unwrap().is_ok());
}

#[test]
fn failed_parse_keeps_previous_scene() {
    let walk = random_walk(3, &WalkParams::default());
    let mut scene = Scene::default();
    scene.add_nodes(&walk.nodes).unwrap();
    scene.add_decorations(&walk.decorations).unwrap();
    scene.enqueue_events(walk.events);
    scene.set_time(SimTime::from_millis(200));
    let hash = scene.state_hash();

    scene
        .begin_load("broken", || Ok(serde_json::from_str::<Scenario>("{ not json")?))
        .unwrap();
    let result = scene.wait_load().unwrap();
    assert!(matches!(result, Err(LoadError::Parse { .. })));
    assert_eq!(scene.state_hash(), hash);
    assert_eq!(scene.now(), SimTime::from_millis(200));
}

#[test]
fn invalid_config_keeps_previous_scene() {
    let mut scene = Scene::default();
    scene.begin_load("fixture", parse_fixture).unwrap();
    scene.wait_load().unwrap().unwrap();
    let hash = scene.state_hash();

    scene
        .begin_load("zero step", || {
            let mut s: Scenario = serde_json::from_str(SCENARIO_JSON)?;
            s.config.milliseconds_per_frame = 0.0;
            Ok(s)
        })
        .unwrap();
    assert!(matches!(
        scene.wait_load().unwrap(),
        Err(LoadError::Config(_))
    ));
    assert_eq!(scene.state_hash(), hash);
    assert_eq!(scene.nodes().len(), 2);
}
