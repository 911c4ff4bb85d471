// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Depth-first backtracking search for one Hamiltonian cycle.
//!
//! The engine walks the rotation graph from the root, always trying the zero
//! branch before the one branch, and records every node it enters in the
//! [`NodeTracker`]. Nothing is kept on a separate trail: the tracker itself
//! holds everything needed to undo a step.
//!
//! # Algorithm
//!
//! The engine keeps a path cursor `p` (next slot to fill, starting at 1) and
//! the current node `g` (starting at the root). At each step:
//!
//! 1. If `g` may take its zero branch and the zero successor is free, enter it.
//! 2. Else if `g` may take its one branch and the one successor is free, enter it.
//! 3. Else backtrack: release `g`, remembering the branch it was entered by,
//!    step `p` back, and forbid that branch on the new current node
//!    `path[p - 1]` so the next try through it goes elsewhere.
//!
//! The attempt succeeds when all slots are filled and is exhausted when
//! backtracking empties the path.
//!
//! # Example
//!
//! ```
//! use ror_search::context::SearchContext;
//! use ror_search::engine::{SearchEngine, SearchOutcome};
//!
//! let mut ctx = SearchContext::with_bits(3);
//! let mut engine = SearchEngine::new();
//!
//! match engine.search(&mut ctx) {
//!     SearchOutcome::Found(path) => assert_eq!(path.to_string(), "0 4 2 5 6 7 3 1"),
//!     SearchOutcome::Exhausted => unreachable!(),
//! }
//! ```

pub mod path;

pub use path::Path;

use crate::context::SearchContext;
use crate::graph::{Branch, NodeId};
use crate::state::Counters;
use strum::IntoEnumIterator;
use tracing::{debug, trace};

/// Result of one search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete Hamiltonian path from the root.
    Found(Path),

    /// Backtracking emptied the path: no cycle exists under the current
    /// forbidden-branch configuration.
    Exhausted,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    /// The path, if one was found.
    pub fn path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Exhausted => None,
        }
    }
}

/// The backtracking search engine.
///
/// An engine is reusable: each call to [`SearchEngine::search`] is one
/// attempt against whatever tracker state the context holds.
#[derive(Debug, Default)]
pub struct SearchEngine {
    /// Statistics: nodes appended to the path in the last attempt.
    forward_steps: u64,

    /// Statistics: nodes removed from the path in the last attempt.
    backtracks: u64,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one attempt.
    ///
    /// The tracker in `ctx` must already be initialized (see
    /// [`NodeTracker::reset`](crate::state::NodeTracker::reset)); it is
    /// mutated in place. On success the tracker is left describing the found
    /// path, which the registry reads when choosing the next restriction.
    pub fn search(&mut self, ctx: &mut SearchContext) -> SearchOutcome {
        self.forward_steps = 0;
        self.backtracks = 0;

        let outcome = self.walk(ctx);

        ctx.statistics.add(Counters::ForwardSteps, self.forward_steps);
        ctx.statistics.add(Counters::Backtracks, self.backtracks);
        debug!(
            bits = ctx.graph.bits(),
            found = outcome.is_found(),
            forward_steps = self.forward_steps,
            backtracks = self.backtracks,
            "search attempt finished"
        );
        outcome
    }

    fn walk(&mut self, ctx: &mut SearchContext) -> SearchOutcome {
        let graph = &ctx.graph;
        let tracker = &mut ctx.tracker;
        let len = graph.len();

        let mut path = Path::with_len(len);
        let mut p = 1;
        let mut g = NodeId::ROOT;

        while p < len {
            let next = Branch::iter().find(|&branch| {
                tracker.is_allowed(g, branch) && tracker.is_free(graph.child(g, branch))
            });

            if let Some(branch) = next {
                let child = graph.child(g, branch);
                path.set(p, child);
                tracker.mark_took(child, branch);
                g = child;
                p += 1;
                self.forward_steps += 1;
                continue;
            }

            // Dead end: both branches forbidden or occupied.
            let took = tracker.release(g);
            p -= 1;
            self.backtracks += 1;
            if p == 0 {
                return SearchOutcome::Exhausted;
            }
            trace!(node = %g, slot = p, "backtrack");
            path.set(p, NodeId::ROOT);
            g = path[p - 1];
            if let Some(branch) = took {
                tracker.forbid(g, branch);
            }
        }

        SearchOutcome::Found(path)
    }

    /// Get statistics about the last attempt.
    ///
    /// Returns (forward_steps, backtracks).
    pub fn statistics(&self) -> (u64, u64) {
        (self.forward_steps, self.backtracks)
    }
}
