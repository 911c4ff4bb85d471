// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the engine and the
//! enumeration driver.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Top-level search attempts started.
    Attempts,
    /// Nodes appended to a path.
    ForwardSteps,
    /// Nodes removed from a path.
    Backtracks,
    /// Distinct sequences accepted.
    Solutions,
    /// Completed paths rejected as already found.
    Duplicates,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(|c| (c, self.get(c)))
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (counter, value) in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
