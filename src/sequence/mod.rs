// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit sequences spelled out by Hamiltonian cycles.
//!
//! Every node of a cycle was entered over one branch, and that branch is the
//! bit the register shifted in. Reading those bits in path order gives a
//! sequence of 2^bits bits whose rotations, viewed through a `bits`-wide
//! window, produce every register state exactly once.
//!
//! # Layout
//!
//! Bit `k` of the sequence comes from `path[k]`. As an integer, bit `k` has
//! weight 2^k, so `path[0]` is the least-significant bit and the last node of
//! the path is the most-significant bit of the first byte of
//! [`BitSequence::to_bytes`].

pub mod period;
pub mod render;

pub use period::PeriodError;
pub use render::{render, Format};

use crate::engine::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    /// Register width the sequence was built for.
    bits: u32,
    /// One entry (0 or 1) per position.
    values: Vec<u8>,
}

impl BitSequence {
    /// Read the entry bit of every node along `path`.
    pub fn from_path(path: &Path, bits: u32) -> Self {
        let values = path.iter().map(|node| node.top_bit(bits)).collect();
        Self { bits, values }
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn bit(&self, k: usize) -> u8 {
        self.values[k]
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().copied()
    }

    /// The sequence as big-endian bytes, zero-extended to a whole byte.
    pub fn to_bytes(&self) -> Vec<u8> {
        let nbytes = self.values.len().div_ceil(8);
        (0..nbytes)
            .rev()
            .map(|chunk| {
                self.values
                    .iter()
                    .skip(chunk * 8)
                    .take(8)
                    .enumerate()
                    .fold(0u8, |byte, (j, &bit)| byte | (bit << j))
            })
            .collect()
    }

    /// The register state after rotating the sequence right by `rotation`:
    /// the `bits` bits starting at position `rotation`, least-significant first,
    /// wrapping around the end.
    pub fn window(&self, rotation: usize) -> u32 {
        let len = self.values.len();
        (0..self.bits as usize).fold(0u32, |acc, j| {
            acc | (u32::from(self.values[(rotation + j) % len]) << j)
        })
    }

    /// Windows for every rotation `0..len`.
    pub fn windows(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.values.len()).map(|r| self.window(r))
    }
}
