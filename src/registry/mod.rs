// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solution registry.
//!
//! Keeps every accepted path, rejects exact repeats, and between attempts
//! perturbs the tracker so the next attempt is steered away from the path it
//! just found.
//!
//! # Perturbation
//!
//! After the k-th path is accepted (so the registry holds k paths), the node
//! in slot k of that path is restricted: it stays free for selection but may
//! not leave over the branch it was entered by, nor any branch tried before
//! that one. Every other node starts the next attempt clean.
//!
//! This is a heuristic. It does not enumerate all cycles; in particular slot 1
//! always holds `2^(bits-1)` entered over the root's one branch, so the first
//! restriction closes both of its branches and the second attempt exhausts
//! for every width of 2 or more.

use crate::engine::Path;
use crate::graph::{Branch, NodeId, FOUND_MAX};
use crate::state::NodeTracker;
use tracing::debug;

/// Outcome of offering a completed path to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// New path, now stored.
    Accepted,
    /// Equal in every slot to a stored path.
    Duplicate,
    /// New path, but the registry is at capacity.
    Full,
}

/// Outcome of preparing the tracker for the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reseed {
    /// Tracker reset with `node` restricted through `branch`.
    Ready { node: NodeId, branch: Branch },
    /// The restriction slot would fall outside the path.
    PerturbationExhausted,
}

#[derive(Debug, Clone)]
pub struct SolutionRegistry {
    paths: Vec<Path>,
    capacity: usize,
}

impl SolutionRegistry {
    /// Registry holding up to [`FOUND_MAX`] paths.
    pub fn new() -> Self {
        Self::with_capacity(FOUND_MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            paths: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// True if an identical path has already been accepted.
    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|found| found == path)
    }

    /// Store `path` unless it repeats an earlier one or there is no room.
    pub fn accept(&mut self, path: &Path) -> Acceptance {
        if self.contains(path) {
            debug!(found = self.len(), "duplicate path");
            return Acceptance::Duplicate;
        }
        if self.paths.len() >= self.capacity {
            return Acceptance::Full;
        }
        self.paths.push(path.clone());
        debug!(found = self.len(), "path accepted");
        Acceptance::Accepted
    }

    /// Reset `tracker` for the next attempt and restrict one node of `path`.
    ///
    /// `path` is the path just accepted and `tracker` must still describe it,
    /// since the restricted branch is read from the node's visitation state.
    /// The slot used is the current registry size.
    pub fn prepare_next(&self, path: &Path, tracker: &mut NodeTracker) -> Reseed {
        let slot = self.len();
        let Some(node) = path.get(slot).filter(|_| slot < tracker.len()) else {
            debug!(slot, "no slot left to perturb");
            return Reseed::PerturbationExhausted;
        };

        // Every node of a completed path is on it, so this is always Some.
        let branch = tracker.visit(node).branch().unwrap_or(Branch::Zero);

        tracker.reset();
        tracker.restrict(node, branch);
        debug!(slot, node = %node, branch = %branch, "tracker reseeded");
        Reseed::Ready { node, branch }
    }
}

impl Default for SolutionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
