// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - `status`: the two-facet status of a single node
//! - `tracker`: one status per node, with the operations the engine needs
//! - `statistics`: counters accumulated over a run

pub mod statistics;
pub mod status;
pub mod tracker;

pub use statistics::{Counters, Statistics};
pub use status::{Forbidden, NodeStatus, Visit};
pub use tracker::NodeTracker;
