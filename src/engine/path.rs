// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Paths through the rotation graph.

use crate::graph::{Branch, Graph, NodeId};
use std::fmt;
use std::ops::Index;

/// An ordered sequence of node identities starting at the root.
///
/// A path handed out by the engine is always complete: it has one entry per
/// node of the graph, `path[0]` is the root, and every node appears once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    /// A path of `len` slots, every slot holding the root.
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            nodes: vec![NodeId::ROOT; len],
        }
    }

    pub(crate) fn set(&mut self, slot: usize, node: NodeId) {
        self.nodes[slot] = node;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<NodeId> {
        self.nodes.get(slot).copied()
    }

    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    /// True if the path covers every node of `graph` exactly once, starts at
    /// the root, and each step follows an edge.
    pub fn is_hamiltonian(&self, graph: &Graph) -> bool {
        if self.len() != graph.len() || self.get(0) != Some(NodeId::ROOT) {
            return false;
        }
        let mut seen = vec![false; graph.len()];
        for node in self.iter() {
            match seen.get_mut(node.as_usize()) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        self.nodes.windows(2).all(|pair| {
            let from = &graph[pair[0]];
            pair[1] == from.zero_child() || pair[1] == from.one_child()
        })
    }

    /// True if the last node leads back to the root, closing the cycle.
    pub fn closes(&self, graph: &Graph) -> bool {
        self.last()
            .is_some_and(|last| graph.child(last, Branch::Zero) == NodeId::ROOT)
    }
}

impl Index<usize> for Path {
    type Output = NodeId;

    fn index(&self, slot: usize) -> &NodeId {
        &self.nodes[slot]
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }
}

impl fmt::Display for Path {
    /// Node ids in lowercase hex, separated by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:x}", node)?;
        }
        Ok(())
    }
}
