// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crate-level errors.
//!
//! The search itself never fails: exhaustion, duplicates and full registries
//! are ordinary stop reasons (see [`StopReason`](crate::enumerate::StopReason)).
//! Errors only arise at the edges, when configuring a run or handing its
//! sequences to a consumer.

use crate::sequence::PeriodError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A produced sequence failed the full-period check.
    #[error("Sequence {ordinal} does not have full period: {source}")]
    Period {
        ordinal: usize,
        #[source]
        source: PeriodError,
    },

    /// Writing a sequence out failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
