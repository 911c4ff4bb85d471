// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for full-period rotate-right sequences.
//!
//! A register of `BITS` bits that is rotated right through a 2^BITS-bit
//! sequence visits every one of its 2^BITS states exactly once when the
//! sequence is a Hamiltonian cycle of the shift graph: node `n` leads to
//! `n >> 1` (shift in a 0) and `(n >> 1) | 1 << (BITS - 1)` (shift in a 1).
//! This crate finds such cycles by depth-first search from node 0.
//!
//! # Architecture
//!
//! ## Immutable data
//!
//! - [`graph::Graph`]: the successor graph, built once per run
//!
//! ## Mutable data
//!
//! Search state owned by a [`SearchContext`] and changed in place:
//! - [`state::NodeTracker`]: per-node visitation and forbidden branches
//! - [`state::Statistics`]: run counters
//!
//! # Search Algorithm
//!
//! 1. **SearchEngine**: one depth-first attempt, zero branch before one branch,
//!    forbidding the failed branch on the parent at every backtrack
//! 2. **SolutionRegistry**: rejects repeated paths and restricts one node of
//!    the last path before the next attempt
//! 3. **Enumerator**: repeats attempts until capacity, exhaustion or a repeat
//!
//! Sequences are rendered and checked for full period by [`sequence`].

pub mod config;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod registry;
pub mod sequence;
pub mod state;

// Re-export commonly used types
pub use config::SearchConfig;
pub use context::SearchContext;
pub use engine::{Path, SearchEngine, SearchOutcome};
pub use enumerate::{EnumerationReport, Enumerator, SolutionSink, StopReason};
pub use error::{Error, Result};
pub use registry::SolutionRegistry;
