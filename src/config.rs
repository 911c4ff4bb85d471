// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! The register width is fixed at compile time (see
//! [`graph::constants`](crate::graph::constants)); everything that may vary
//! between runs of the same build lives here.

use crate::error::{Error, Result};
use crate::graph::FOUND_MAX;
use crate::sequence::Format;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many distinct sequences.
    pub capacity: usize,
    /// How sequences are printed.
    pub format: Format,
    /// Check every sequence for full period before printing it.
    pub verify: bool,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Reject values the registry cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.capacity > FOUND_MAX {
            return Err(Error::InvalidConfig(format!(
                "capacity {} exceeds the registry size {}",
                self.capacity, FOUND_MAX
            )));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            capacity: FOUND_MAX,
            format: Format::Hex,
            verify: false,
        }
    }
}
