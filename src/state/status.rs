// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-node search status.
//!
//! A status has two independent facets:
//! - [`Visit`]: whether the node currently holds a path slot, and over which
//!   branch it was entered.
//! - [`Forbidden`]: which of the node's own branches the search may no longer take.
//!
//! The facets are orthogonal. A restricted node is `Free` (it may be
//! selected) yet has forbidden branches (it may not leave over them).

use crate::graph::Branch;

/// Visitation facet of a node status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visit {
    /// Not on the current path.
    #[default]
    Free,
    /// On the path, entered over its predecessor's zero branch.
    TookZero,
    /// On the path, entered over its predecessor's one branch.
    TookOne,
}

impl Visit {
    /// The visited state for a node entered over `branch`.
    pub fn took(branch: Branch) -> Self {
        match branch {
            Branch::Zero => Visit::TookZero,
            Branch::One => Visit::TookOne,
        }
    }

    /// The branch that entered the node, or `None` if it is free.
    pub fn branch(self) -> Option<Branch> {
        match self {
            Visit::Free => None,
            Visit::TookZero => Some(Branch::Zero),
            Visit::TookOne => Some(Branch::One),
        }
    }

    pub fn is_free(self) -> bool {
        matches!(self, Visit::Free)
    }
}

/// Forbidden-branch facet of a node status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Forbidden {
    pub zero: bool,
    pub one: bool,
}

impl Forbidden {
    /// No branch forbidden.
    pub const NONE: Forbidden = Forbidden {
        zero: false,
        one: false,
    };

    pub fn contains(self, branch: Branch) -> bool {
        match branch {
            Branch::Zero => self.zero,
            Branch::One => self.one,
        }
    }

    pub fn insert(&mut self, branch: Branch) {
        match branch {
            Branch::Zero => self.zero = true,
            Branch::One => self.one = true,
        }
    }

    /// True if neither branch can be taken.
    pub fn is_closed(self) -> bool {
        self.zero && self.one
    }
}

/// Full status of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeStatus {
    pub visit: Visit,
    pub forbidden: Forbidden,
}

impl NodeStatus {
    /// Free with no forbidden branches.
    pub const FREE: NodeStatus = NodeStatus {
        visit: Visit::Free,
        forbidden: Forbidden::NONE,
    };

    /// Free for selection but unable to leave over any branch in `forbidden`.
    pub fn is_restricted(&self) -> bool {
        self.visit.is_free() && self.forbidden != Forbidden::NONE
    }
}
