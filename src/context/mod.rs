// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining the read-only graph and the mutable search state.
//!
//! The SearchContext is the single session object handed to the engine:
//! - the [`Graph`], built once and never mutated
//! - the [`NodeTracker`], mutated destructively during an attempt
//! - the [`Statistics`], accumulated across attempts
//!
//! Each context is independent, so several widths can be searched side by
//! side in one process (the tests do this).

use crate::graph::Graph;
use crate::state::{NodeTracker, Statistics};

#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Immutable successor graph
    pub graph: Graph,
    /// Per-node visitation and forbidden-branch state
    pub tracker: NodeTracker,
    /// Counters for the whole run
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for the compile-time width.
    pub fn new() -> Self {
        Self::with_graph(Graph::default())
    }

    /// Create a context for an explicit register width.
    pub fn with_bits(bits: u32) -> Self {
        Self::with_graph(Graph::new(bits))
    }

    /// Create a context around an existing graph.
    pub fn with_graph(graph: Graph) -> Self {
        let tracker = NodeTracker::new(graph.len());
        Self {
            graph,
            tracker,
            statistics: Statistics::new(),
        }
    }

    pub fn bits(&self) -> u32 {
        self.graph.bits()
    }

    /// Put the tracker back in the initial search state. Statistics are kept.
    pub fn reset(&mut self) {
        self.tracker.reset();
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
