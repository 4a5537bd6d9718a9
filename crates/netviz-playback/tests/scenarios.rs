//! End-to-end playback scenarios through the `Scene` API.

use netviz_core::{sim_to_render, ColorSlot, DecorationId, NodeId, Rgb, SimTime, TimeDelta, Vec3};
use netviz_playback::{PlayMode, PlaybackNotice, Scenario, ScenarioConfig, Scene};
use netviz_scene::DecorationSpec;
use netviz_test_utils::{
    color_event, decoration_move, move_event, node_spec, transmit_end, transmit_start,
};

// ── Helpers ─────────────────────────────────────────────────────

fn ms(v: i64) -> SimTime {
    SimTime::from_millis(v)
}

const ORIGIN: Vec3 = Vec3::new(5.0, 5.0, 0.0);
const P1: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const P2: Vec3 = Vec3::new(2.0, 4.0, 0.0);
const P3: Vec3 = Vec3::new(3.0, 9.0, 1.0);

fn three_moves() -> Scene {
    let mut scene = Scene::default();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    scene.enqueue_events(vec![
        move_event(1, 10, P1),
        move_event(1, 20, P2),
        move_event(1, 30, P3),
    ]);
    scene
}

fn bounded(end_ms: i64, step_ms: f64) -> Scene {
    Scene::new(ScenarioConfig {
        milliseconds_per_frame: step_ms,
        end_time: Some(ms(end_ms)),
        ..ScenarioConfig::default()
    })
    .unwrap()
}

// ── Seeking ─────────────────────────────────────────────────────

#[test]
fn seek_into_middle_then_back_before_first_event() {
    let mut scene = three_moves();

    let stats = scene.set_time(ms(25));
    assert_eq!(stats.applied, 2);
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(P2)));
    assert_eq!(scene.store().history_len(), 2);
    assert_eq!(scene.store().peek_pending().map(|e| e.time()), Some(ms(30)));

    let stats = scene.set_time(ms(5));
    assert_eq!(stats.undone, 2);
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(ORIGIN)));
    assert_eq!(scene.store().history_len(), 0);
    let pending: Vec<_> = scene.store().pending().cloned().collect();
    assert_eq!(
        pending,
        vec![
            move_event(1, 10, P1),
            move_event(1, 20, P2),
            move_event(1, 30, P3),
        ]
    );
}

#[test]
fn seek_far_forward_drains_every_event() {
    let mut scene = three_moves();
    let stats = scene.set_time(ms(10_000));
    assert_eq!(stats.applied, 3);
    assert_eq!(scene.store().history_len(), 3);
    assert_eq!(scene.store().pending_len(), 0);
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(P3)));
}

#[test]
fn rewind_restores_trail_contents() {
    let mut scene = three_moves();
    let before: Vec<Vec3> = scene.node(NodeId(1)).unwrap().trail().iter().collect();
    scene.set_time(ms(30));
    assert_eq!(scene.node(NodeId(1)).unwrap().trail().len(), 4);
    scene.set_time(SimTime::ZERO);
    let after: Vec<Vec3> = scene.node(NodeId(1)).unwrap().trail().iter().collect();
    assert_eq!(before, after);
}

#[test]
fn trail_overflow_rewinds_to_evicted_points() {
    let config = ScenarioConfig {
        trail_capacity: 2,
        ..ScenarioConfig::default()
    };
    let mut scene = Scene::new(config).unwrap();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    scene.enqueue_events(vec![
        move_event(1, 10, P1),
        move_event(1, 20, P2),
        move_event(1, 30, P3),
    ]);

    scene.set_time(ms(10));
    let at_ten: Vec<Vec3> = scene.node(NodeId(1)).unwrap().trail().iter().collect();
    assert_eq!(at_ten, vec![sim_to_render(ORIGIN), sim_to_render(P1)]);

    scene.set_time(ms(30));
    let at_thirty: Vec<Vec3> = scene.node(NodeId(1)).unwrap().trail().iter().collect();
    assert_eq!(at_thirty, vec![sim_to_render(P2), sim_to_render(P3)]);

    scene.set_time(ms(10));
    let back: Vec<Vec3> = scene.node(NodeId(1)).unwrap().trail().iter().collect();
    assert_eq!(back, at_ten);
}

// ── Colors and transmissions ───────────────────────────────────

#[test]
fn highlight_undo_restores_unset() {
    let mut scene = Scene::default();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    let color = Rgb::new(10, 200, 30);
    scene.enqueue_events(vec![color_event(1, 10, ColorSlot::Highlight, Some(color))]);

    let node = scene.node(NodeId(1)).unwrap();
    assert!(!node.is_color_set(ColorSlot::Highlight));

    scene.set_time(ms(10));
    let node = scene.node(NodeId(1)).unwrap();
    assert_eq!(node.highlight_color(), Some(color));

    scene.set_time(SimTime::ZERO);
    let node = scene.node(NodeId(1)).unwrap();
    assert!(!node.is_color_set(ColorSlot::Highlight));
    assert_eq!(node.highlight_color(), None);
}

#[test]
fn black_override_is_distinct_from_unset() {
    let mut scene = Scene::default();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    scene.enqueue_events(vec![
        color_event(1, 10, ColorSlot::Base, Some(Rgb::new(0, 0, 0))),
        color_event(1, 20, ColorSlot::Base, None),
    ]);
    scene.set_time(ms(10));
    assert!(scene.node(NodeId(1)).unwrap().is_color_set(ColorSlot::Base));
    scene.set_time(ms(20));
    assert!(!scene.node(NodeId(1)).unwrap().is_color_set(ColorSlot::Base));
    scene.set_time(ms(15));
    assert_eq!(
        scene.node(NodeId(1)).unwrap().base_color(),
        Some(Rgb::new(0, 0, 0))
    );
}

#[test]
fn transmit_start_and_end_rewind() {
    let mut scene = Scene::default();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    scene.enqueue_events(vec![transmit_start(1, 10, 20), transmit_end(1, 30)]);

    scene.set_time(ms(20));
    let node = scene.node(NodeId(1)).unwrap();
    assert!(node.is_transmitting());
    assert_eq!(node.transmit_progress(ms(20)), Some(0.5));

    scene.set_time(ms(40));
    assert!(!scene.node(NodeId(1)).unwrap().is_transmitting());

    scene.set_time(ms(25));
    assert!(scene.node(NodeId(1)).unwrap().is_transmitting());

    scene.set_time(ms(5));
    assert!(scene.node(NodeId(1)).unwrap().transmit().is_none());
}

#[test]
fn decorations_replay_like_nodes() {
    let mut scene = Scene::default();
    scene
        .add_decorations(&[DecorationSpec::new(DecorationId(4))])
        .unwrap();
    scene.enqueue_events(vec![decoration_move(4, 10, P2)]);
    scene.set_time(ms(10));
    assert_eq!(scene.focus_entity(DecorationId(4)), Some(sim_to_render(P2)));
    scene.set_time(SimTime::ZERO);
    assert_eq!(scene.focus_entity(DecorationId(4)), Some(Vec3::ZERO));
}

// ── Playing ─────────────────────────────────────────────────────

#[test]
fn forward_play_pauses_exactly_at_end() {
    let mut scene = bounded(100, 10.0);
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    scene.enqueue_events(vec![
        move_event(1, 55, P1),
        move_event(1, 100, P2),
        move_event(1, 101, P3),
    ]);

    scene.play();
    let mut ticks = 0;
    while scene.mode() == PlayMode::Playing {
        scene.tick();
        assert!(scene.now() <= ms(100));
        ticks += 1;
        assert!(ticks <= 20, "playback never paused");
    }

    assert_eq!(ticks, 10);
    assert_eq!(scene.now(), ms(100));
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(P2)));
    assert_eq!(scene.store().pending_len(), 1);

    // A further tick while paused is a no-op.
    assert!(scene.tick().is_empty());
    assert_eq!(scene.now(), ms(100));
}

#[test]
fn uneven_step_clamps_to_end() {
    let mut scene = bounded(100, 30.0);
    scene.play();
    for _ in 0..10 {
        scene.tick();
    }
    assert_eq!(scene.now(), ms(100));
    assert_eq!(scene.mode(), PlayMode::Paused);
}

#[test]
fn playing_to_end_emits_notices_in_order() {
    let mut scene = bounded(20, 10.0);
    scene.play();
    scene.tick();
    scene.tick();
    assert_eq!(
        scene.take_notices(),
        vec![
            PlaybackNotice::ModeChanged(PlayMode::Playing),
            PlaybackNotice::TimeChanged {
                time: ms(10),
                delta: TimeDelta::from_millis(10),
            },
            PlaybackNotice::TimeChanged {
                time: ms(20),
                delta: TimeDelta::from_millis(10),
            },
            PlaybackNotice::ModeChanged(PlayMode::Paused),
        ]
    );
}

#[test]
fn reverse_play_rewinds_to_zero() {
    let mut scene = three_moves();
    scene.set_time(ms(40));
    scene.reverse();
    scene.play();
    while scene.mode() == PlayMode::Playing {
        scene.tick();
    }
    assert_eq!(scene.now(), SimTime::ZERO);
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(ORIGIN)));
    assert_eq!(scene.store().pending_len(), 3);
}

#[test]
fn fractional_step_accumulates_without_drift() {
    let mut scene = bounded(1, 0.25);
    scene.play();
    for _ in 0..4 {
        scene.tick();
    }
    assert_eq!(scene.now(), ms(1));
    assert_eq!(scene.mode(), PlayMode::Paused);
}

// ── Ingestion ───────────────────────────────────────────────────

#[test]
fn unsorted_batch_applies_in_time_order() {
    let mut scene = Scene::default();
    scene.add_nodes(&[node_spec(1, ORIGIN)]).unwrap();
    let report = scene.enqueue_events(vec![
        move_event(1, 30, P3),
        move_event(1, 10, P1),
        move_event(1, 20, P2),
    ]);
    assert!(report.resorted);

    scene.set_time(ms(25));
    assert_eq!(scene.focus_entity(NodeId(1)), Some(sim_to_render(P2)));
}

#[test]
fn load_replaces_scene_and_config() {
    let mut scene = three_moves();
    scene.set_time(ms(30));
    let report = scene
        .load(Scenario {
            config: ScenarioConfig {
                milliseconds_per_frame: 2.0,
                ..ScenarioConfig::default()
            },
            nodes: vec![node_spec(9, Vec3::ZERO)],
            decorations: Vec::new(),
            events: vec![move_event(9, 4, P1), move_event(1, 4, P1)],
        })
        .unwrap();
    assert_eq!(report.accepted, 1);
    assert_eq!(report.dropped_unknown, 1);
    assert_eq!(scene.now(), SimTime::ZERO);
    assert_eq!(scene.time_step(), TimeDelta::from_millis(2));
    assert!(scene.node(NodeId(1)).is_none());

    scene.play();
    scene.tick();
    scene.tick();
    assert_eq!(scene.focus_entity(NodeId(9)), Some(sim_to_render(P1)));
}
