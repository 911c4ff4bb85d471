// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rotation graph.
//!
//! Every state of a `bits`-wide register is a node, and every node has exactly
//! two successors: the state shifted right with a 0 or a 1 inserted at the top.
//! A Hamiltonian cycle through this graph starting at node 0 spells out a bit
//! sequence of length 2^bits whose rotations visit every register state once.
//!
//! The graph is built once and is read-only for the rest of the run.
//!
//! # Structure
//!
//! - `Graph[i].id() == i` for every node.
//! - The only predecessors of node 0 are node 0 and node 1, both over the
//!   zero branch. Node 1 is therefore the last node of every cycle.

pub mod branch;
pub mod constants;
pub mod node;

pub use branch::Branch;
pub use constants::*;
pub use node::{Node, NodeId};

use std::ops::Index;

/// The full successor graph for one register width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    bits: u32,
    nodes: Vec<Node>,
}

impl Graph {
    /// Build the graph for a register of `bits` bits.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is not in `1..=MAX_BITS`.
    pub fn new(bits: u32) -> Self {
        assert!(
            (1..=MAX_BITS).contains(&bits),
            "Bit width out of range: {}",
            bits
        );
        let nodes = (0..node_count(bits) as u32)
            .map(|i| Node::new(NodeId::new(i), bits))
            .collect();
        Self { bits, nodes }
    }

    /// Register width in bits.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of nodes (2^bits).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Successor of `node` over `branch`.
    pub fn child(&self, node: NodeId, branch: Branch) -> NodeId {
        self[node].child(branch)
    }
}

impl Default for Graph {
    /// The graph for the compile-time width [`BITS`].
    fn default() -> Self {
        Self::new(BITS)
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.as_usize()]
    }
}
