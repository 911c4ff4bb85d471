// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node state tracker: one [`NodeStatus`] per node.
//!
//! The tracker is the mutable heart of the search. The engine marks nodes as
//! taken when it extends the path, releases them when it backtracks, and
//! forbids the branch a parent just failed with so the same dead end is not
//! walked twice.
//!
//! # Lifetime of a forbidden flag
//!
//! A flag set on a node stays set while that node holds its path slot.
//! Releasing the node returns it to a clean free state, and [`NodeTracker::reset`]
//! clears every flag. Entering a node with [`NodeTracker::mark_took`] keeps
//! whatever flags it already carries, which is how a restriction placed
//! between attempts takes effect.

use super::status::{NodeStatus, Visit};
use crate::graph::{Branch, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTracker {
    statuses: Vec<NodeStatus>,
}

impl NodeTracker {
    /// Create a tracker for `len` nodes in the initial search state.
    pub fn new(len: usize) -> Self {
        let mut tracker = Self {
            statuses: vec![NodeStatus::FREE; len],
        };
        tracker.reset();
        tracker
    }

    /// Return to the state every search attempt starts from: all nodes free,
    /// no forbidden flags, and the root taken over its one branch.
    pub fn reset(&mut self) {
        self.statuses.fill(NodeStatus::FREE);
        self.statuses[NodeId::ROOT.as_usize()].visit = Visit::TookOne;
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn status(&self, node: NodeId) -> NodeStatus {
        self.statuses[node.as_usize()]
    }

    pub fn visit(&self, node: NodeId) -> Visit {
        self.statuses[node.as_usize()].visit
    }

    /// True unless `branch` has been forbidden on `node`.
    pub fn is_allowed(&self, node: NodeId, branch: Branch) -> bool {
        !self.statuses[node.as_usize()].forbidden.contains(branch)
    }

    pub fn is_zero_allowed(&self, node: NodeId) -> bool {
        self.is_allowed(node, Branch::Zero)
    }

    pub fn is_one_allowed(&self, node: NodeId) -> bool {
        self.is_allowed(node, Branch::One)
    }

    /// True if `node` does not currently occupy a path slot.
    pub fn is_free(&self, node: NodeId) -> bool {
        self.statuses[node.as_usize()].visit.is_free()
    }

    /// Record that `node` was entered over `branch`. Forbidden flags are kept.
    pub fn mark_took(&mut self, node: NodeId, branch: Branch) {
        self.statuses[node.as_usize()].visit = Visit::took(branch);
    }

    /// Take `node` off the path, returning the branch it had been entered by.
    ///
    /// The node comes back free with no forbidden flags.
    pub fn release(&mut self, node: NodeId) -> Option<Branch> {
        let status = &mut self.statuses[node.as_usize()];
        let took = status.visit.branch();
        *status = NodeStatus::FREE;
        took
    }

    /// Forbid `branch` on `node`. The visitation facet is untouched.
    pub fn forbid(&mut self, node: NodeId, branch: Branch) {
        self.statuses[node.as_usize()].forbidden.insert(branch);
    }

    /// Make `node` free for selection but unable to leave over `branch` or
    /// any branch tried before it.
    pub fn restrict(&mut self, node: NodeId, branch: Branch) {
        self.statuses[node.as_usize()].visit = Visit::Free;
        for b in branch.through() {
            self.forbid(node, b);
        }
    }

    /// Nodes currently marked free but carrying forbidden flags.
    pub fn restricted(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_restricted())
            .map(|(i, _)| NodeId::new(i as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::status::Forbidden;

    fn n(i: u32) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn test_initial_state() {
        let tracker = NodeTracker::new(8);
        assert_eq!(tracker.len(), 8);
        assert_eq!(tracker.visit(NodeId::ROOT), Visit::TookOne);
        assert!(!tracker.is_free(NodeId::ROOT));
        for i in 1..8 {
            assert!(tracker.is_free(n(i)));
            assert!(tracker.is_zero_allowed(n(i)));
            assert!(tracker.is_one_allowed(n(i)));
        }
        assert_eq!(tracker.restricted().count(), 0);
    }

    #[test]
    fn test_mark_and_release() {
        let mut tracker = NodeTracker::new(8);
        tracker.mark_took(n(4), Branch::One);
        assert!(!tracker.is_free(n(4)));
        assert_eq!(tracker.release(n(4)), Some(Branch::One));
        assert!(tracker.is_free(n(4)));
        assert_eq!(tracker.release(n(4)), None);
    }

    #[test]
    fn test_forbid_keeps_visit() {
        let mut tracker = NodeTracker::new(8);
        tracker.mark_took(n(2), Branch::Zero);
        tracker.forbid(n(2), Branch::Zero);
        assert_eq!(tracker.visit(n(2)), Visit::TookZero);
        assert!(!tracker.is_zero_allowed(n(2)));
        assert!(tracker.is_one_allowed(n(2)));
    }

    #[test]
    fn test_release_clears_forbidden() {
        let mut tracker = NodeTracker::new(8);
        tracker.mark_took(n(6), Branch::One);
        tracker.forbid(n(6), Branch::Zero);
        tracker.forbid(n(6), Branch::One);
        tracker.release(n(6));
        assert_eq!(tracker.status(n(6)), NodeStatus::FREE);
    }

    #[test]
    fn test_mark_took_keeps_restriction() {
        let mut tracker = NodeTracker::new(8);
        tracker.restrict(n(5), Branch::Zero);
        assert!(tracker.is_free(n(5)));
        tracker.mark_took(n(5), Branch::One);
        assert!(!tracker.is_zero_allowed(n(5)));
        assert!(tracker.is_one_allowed(n(5)));
    }

    #[test]
    fn test_restrict_one_closes_both() {
        let mut tracker = NodeTracker::new(8);
        tracker.restrict(n(4), Branch::One);
        assert_eq!(
            tracker.status(n(4)).forbidden,
            Forbidden {
                zero: true,
                one: true
            }
        );
        assert_eq!(tracker.restricted().collect::<Vec<_>>(), vec![n(4)]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = NodeTracker::new(8);
        tracker.mark_took(n(3), Branch::Zero);
        tracker.restrict(n(7), Branch::One);
        tracker.reset();
        assert_eq!(tracker, NodeTracker::new(8));
    }
}
