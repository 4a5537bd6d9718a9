//! Bidirectional event playback for netviz scenes.
//!
//! A [`Scene`] owns the entity tables, an [`EventStore`] of pending events
//! and applied-event history, and a [`PlaybackClock`]. Moving the clock
//! forward applies every event that has come due; moving it back undoes
//! every event that is now in the future. State at any time is therefore
//! independent of how playback got there.
//!
//! # Example
//!
//! ```
//! use netviz_core::{NodeEvent, NodeEventKind, NodeId, SceneEvent, SimTime, Vec3};
//! use netviz_playback::Scene;
//! use netviz_scene::NodeSpec;
//!
//! let mut scene = Scene::default();
//! scene.add_nodes(&[NodeSpec::new(NodeId(0))]).unwrap();
//! scene.enqueue_events([SceneEvent::Node(NodeEvent {
//!     time: SimTime::from_millis(10),
//!     node: NodeId(0),
//!     kind: NodeEventKind::Move { position: Vec3::new(1.0, 2.0, 0.0) },
//! })]);
//!
//! scene.set_time(SimTime::from_millis(15));
//! assert_eq!(scene.focus_entity(NodeId(0)), Some(Vec3::new(1.0, 0.0, -2.0)));
//!
//! scene.set_time(SimTime::ZERO);
//! assert_eq!(scene.store().pending_len(), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod dispatch;
pub mod loader;
pub mod metrics;
pub mod notice;
pub mod scenario;
pub mod scene;
pub mod store;
pub mod tables;

pub use clock::{PlayMode, PlaybackClock, StepDirection, TickTarget};
pub use config::{ConfigError, ScenarioConfig};
pub use dispatch::{dispatch_forward, dispatch_undo};
pub use loader::{LoadError, ParseError, ScenarioLoader};
pub use metrics::{DispatchStats, PlaybackMetrics};
pub use notice::PlaybackNotice;
pub use scenario::Scenario;
pub use scene::{IngestReport, Scene};
pub use store::{EnqueueOutcome, EventStore};
pub use tables::EntityTables;
