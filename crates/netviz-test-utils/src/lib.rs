//! Test utilities for netviz development.
//!
//! Provides terse event constructors for hand-written scenarios and a
//! seeded random-walk generator for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod generate;

pub use fixtures::{
    color_event, decoration_move, decoration_orientation, move_event, node_spec,
    orientation_event, transmit_end, transmit_start,
};
pub use generate::{random_walk, RandomWalk, WalkParams};
