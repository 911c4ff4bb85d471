// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Node identifiers and the fixed successor rule.
//!
//! Each node is one state of the rotation register. Its two successors
//! shift the state right by one and insert a 0 or a 1 at the top bit.

use super::branch::Branch;
use std::fmt;

/// A node (register state) in the range 0..2^bits.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// node identities with path positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeId(u32);

impl NodeId {
    /// The start and end of every cycle.
    pub const ROOT: NodeId = NodeId(0);

    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Get the node as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// The most significant of `bits` bits, i.e. the bit shifted in by the
    /// branch that entered this node.
    pub fn top_bit(self, bits: u32) -> u8 {
        ((self.0 >> (bits - 1)) & 1) as u8
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// One node of the graph with its two precomputed successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    zero: NodeId,
    one: NodeId,
}

impl Node {
    /// Derive the successors of `id` for a register of `bits` bits.
    pub fn new(id: NodeId, bits: u32) -> Self {
        let zero = id.value() >> 1;
        let one = zero | (1 << (bits - 1));
        Self {
            id,
            zero: NodeId(zero),
            one: NodeId(one),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn zero_child(&self) -> NodeId {
        self.zero
    }

    pub fn one_child(&self) -> NodeId {
        self.one
    }

    /// Successor over the given branch.
    pub fn child(&self, branch: Branch) -> NodeId {
        match branch {
            Branch::Zero => self.zero,
            Branch::One => self.one,
        }
    }
}
