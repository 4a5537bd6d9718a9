//! netviz: time-scrubbable playback of recorded network-simulation
//! scenarios.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all netviz sub-crates. For most users, adding `netviz` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use netviz::prelude::*;
//!
//! let scenario = Scenario {
//!     config: ScenarioConfig {
//!         end_time: Some(SimTime::from_millis(40)),
//!         ..ScenarioConfig::default()
//!     },
//!     nodes: vec![NodeSpec::new(NodeId(0)), NodeSpec::new(NodeId(1))],
//!     decorations: vec![],
//!     events: vec![
//!         SceneEvent::Node(NodeEvent {
//!             time: SimTime::from_millis(10),
//!             node: NodeId(1),
//!             kind: NodeEventKind::Move { position: Vec3::new(4.0, 0.0, 0.0) },
//!         }),
//!         SceneEvent::Node(NodeEvent {
//!             time: SimTime::from_millis(20),
//!             node: NodeId(1),
//!             kind: NodeEventKind::Color {
//!                 slot: ColorSlot::Highlight,
//!                 color: Some(Rgb::new(255, 0, 0)),
//!             },
//!         }),
//!     ],
//! };
//! let (mut scene, _report) = Scene::from_scenario(scenario).unwrap();
//!
//! scene.play();
//! while scene.mode() == PlayMode::Playing {
//!     scene.tick();
//! }
//! assert_eq!(scene.now(), SimTime::from_millis(40));
//! assert!(scene.node(NodeId(1)).unwrap().is_color_set(ColorSlot::Highlight));
//!
//! // Scrub back past both events.
//! scene.set_time(SimTime::from_millis(5));
//! assert!(!scene.node(NodeId(1)).unwrap().is_color_set(ColorSlot::Highlight));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `netviz-core` | IDs, time, geometry, events and undo records, errors |
//! | [`scene`] | `netviz-scene` | Node and decoration state, trails, entity specs, hashing |
//! | [`playback`] | `netviz-playback` | Event store, clock, dispatcher, scene coordinator, loader |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, events, and IDs (`netviz-core`).
///
/// Contains the time types ([`types::SimTime`], [`types::TimeDelta`]), the
/// event sum types ([`types::SceneEvent`], [`types::UndoEvent`]) and
/// [`types::sim_to_render`].
pub use netviz_core as types;

/// Per-entity state (`netviz-scene`).
///
/// Provides the [`scene::EntityState`] trait and its implementations
/// [`scene::Node`] and [`scene::Decoration`], plus [`scene::TrailBuffer`].
pub use netviz_scene as scene;

/// Playback engine and scene coordinator (`netviz-playback`).
///
/// [`playback::Scene`] is the main entry point; [`playback::ScenarioLoader`]
/// parses scenarios off the main thread.
pub use netviz_playback as playback;

/// Common imports for typical netviz usage.
///
/// ```rust
/// use netviz::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use netviz_core::{
        ColorSlot, DecorationEvent, DecorationEventKind, DecorationId, EntityRef, NodeEvent,
        NodeEventKind, NodeId, Orientation, Rgb, SceneEvent, SimTime, TimeDelta, Vec3,
    };

    // Errors
    pub use netviz_core::SceneError;
    pub use netviz_playback::{ConfigError, LoadError};

    // Entities
    pub use netviz_scene::{Decoration, DecorationSpec, EntityState, Node, NodeSpec};

    // Playback
    pub use netviz_playback::{
        DispatchStats, IngestReport, PlayMode, PlaybackNotice, Scenario, ScenarioConfig, Scene,
        StepDirection,
    };
}
