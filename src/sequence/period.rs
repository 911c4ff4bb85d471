// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full-period check.
//!
//! A sequence has full period when rotating it through all of its positions
//! yields every register state once.

use super::BitSequence;
use crate::graph::node_count;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// The sequence is not 2^bits long.
    #[error("Sequence has {actual} bits, a {bits}-bit register needs {expected}")]
    LengthMismatch {
        bits: u32,
        expected: usize,
        actual: usize,
    },

    /// Two rotations produce the same register state.
    #[error("Window {window:#x} appears at rotations {first} and {second}")]
    RepeatedWindow {
        window: u32,
        first: usize,
        second: usize,
    },
}

impl BitSequence {
    /// Check that every rotation yields a distinct window.
    pub fn verify_full_period(&self) -> Result<(), PeriodError> {
        let expected = node_count(self.bits());
        if self.len() != expected {
            return Err(PeriodError::LengthMismatch {
                bits: self.bits(),
                expected,
                actual: self.len(),
            });
        }

        let mut seen: Vec<Option<usize>> = vec![None; expected];
        for (rotation, window) in self.windows().enumerate() {
            let slot = &mut seen[window as usize];
            if let Some(first) = *slot {
                return Err(PeriodError::RepeatedWindow {
                    window,
                    first,
                    second: rotation,
                });
            }
            *slot = Some(rotation);
        }
        Ok(())
    }
}
