// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sequence enumerator: the driver loop.
//!
//! The enumerator owns the search context, the engine and the registry, and
//! repeats search attempts until one of the stop conditions in [`StopReason`]
//! holds. Each accepted path is handed to a [`SolutionSink`] before the
//! tracker is reseeded for the next attempt.
//!
//! # Example
//!
//! ```
//! use ror_search::context::SearchContext;
//! use ror_search::engine::Path;
//! use ror_search::enumerate::{Enumerator, StopReason};
//!
//! let mut found: Vec<Path> = Vec::new();
//! let report = Enumerator::new(SearchContext::with_bits(3), 256)
//!     .run(&mut found)
//!     .unwrap();
//!
//! assert_eq!(report.found, 1);
//! assert_eq!(report.stop, StopReason::SearchExhausted);
//! assert_eq!(found[0].to_string(), "0 4 2 5 6 7 3 1");
//! ```

pub mod printer;

pub use printer::Printer;

use crate::context::SearchContext;
use crate::engine::{Path, SearchEngine, SearchOutcome};
use crate::error::Result;
use crate::registry::{Acceptance, Reseed, SolutionRegistry};
use crate::state::{Counters, Statistics};
use std::fmt;
use tracing::{debug, info};

/// Why an enumeration ended. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested number of sequences was found.
    CapacityReached,
    /// An attempt backtracked to the root without completing a path.
    SearchExhausted,
    /// An attempt re-derived a path that was already accepted.
    DuplicateFound,
    /// The registry had no room for a new path.
    RegistryFull,
    /// The path was too short to pick another restriction slot.
    PerturbationExhausted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            StopReason::CapacityReached => "capacity reached",
            StopReason::SearchExhausted => "search exhausted",
            StopReason::DuplicateFound => "duplicate found",
            StopReason::RegistryFull => "registry full",
            StopReason::PerturbationExhausted => "perturbation exhausted",
        };
        f.write_str(text)
    }
}

/// Summary of a finished enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationReport {
    /// Number of distinct sequences handed to the sink.
    pub found: usize,
    pub stop: StopReason,
    pub statistics: Statistics,
}

/// Consumer of accepted paths.
pub trait SolutionSink {
    /// Receive the `ordinal`-th accepted path (counting from 0).
    fn emit(&mut self, ordinal: usize, path: &Path) -> Result<()>;
}

impl SolutionSink for Vec<Path> {
    fn emit(&mut self, _ordinal: usize, path: &Path) -> Result<()> {
        self.push(path.clone());
        Ok(())
    }
}

impl<S: SolutionSink + ?Sized> SolutionSink for &mut S {
    fn emit(&mut self, ordinal: usize, path: &Path) -> Result<()> {
        (**self).emit(ordinal, path)
    }
}

#[derive(Debug)]
pub struct Enumerator {
    ctx: SearchContext,
    engine: SearchEngine,
    registry: SolutionRegistry,
    capacity: usize,
}

impl Enumerator {
    /// Enumerate up to `capacity` sequences with a default-sized registry.
    pub fn new(ctx: SearchContext, capacity: usize) -> Self {
        Self::with_registry(ctx, SolutionRegistry::new(), capacity)
    }

    pub fn with_registry(ctx: SearchContext, registry: SolutionRegistry, capacity: usize) -> Self {
        Self {
            ctx,
            engine: SearchEngine::new(),
            registry,
            capacity,
        }
    }

    /// Run the enumeration to completion.
    ///
    /// Consumes the enumerator: the registry is only meaningful for the run
    /// that filled it. Errors come only from `sink`.
    pub fn run<S: SolutionSink>(mut self, mut sink: S) -> Result<EnumerationReport> {
        self.ctx.reset();
        let mut found = 0;

        let stop = loop {
            if found >= self.capacity {
                break StopReason::CapacityReached;
            }

            self.ctx.statistics.increment(Counters::Attempts);
            let path = match self.engine.search(&mut self.ctx) {
                SearchOutcome::Found(path) => path,
                SearchOutcome::Exhausted => break StopReason::SearchExhausted,
            };

            match self.registry.accept(&path) {
                Acceptance::Accepted => {}
                Acceptance::Duplicate => {
                    self.ctx.statistics.increment(Counters::Duplicates);
                    break StopReason::DuplicateFound;
                }
                Acceptance::Full => break StopReason::RegistryFull,
            }

            sink.emit(found, &path)?;
            found += 1;
            self.ctx.statistics.increment(Counters::Solutions);

            if let Reseed::PerturbationExhausted =
                self.registry.prepare_next(&path, &mut self.ctx.tracker)
            {
                break StopReason::PerturbationExhausted;
            }
        };

        info!(
            bits = self.ctx.bits(),
            found,
            stop = %stop,
            "enumeration finished"
        );
        debug!(statistics = %self.ctx.statistics, "enumeration statistics");

        Ok(EnumerationReport {
            found,
            stop,
            statistics: self.ctx.statistics,
        })
    }
}
