// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two outgoing edges of every node.

use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A branch (outgoing edge) of a node.
///
/// Variants are declared in search priority order: the engine always tries
/// `Zero` before `One`, and iterating `Branch::iter()` yields them in that
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCountMacro)]
#[repr(u8)]
pub enum Branch {
    /// Shift in a 0 at the top bit.
    Zero,
    /// Shift in a 1 at the top bit.
    One,
}

impl Branch {
    /// The bit value shifted in by this branch.
    pub fn bit(self) -> u32 {
        self as u32
    }

    /// This branch and every branch tried before it, in priority order.
    ///
    /// ```
    /// use ror_search::graph::Branch;
    ///
    /// assert_eq!(Branch::Zero.through().collect::<Vec<_>>(), vec![Branch::Zero]);
    /// assert_eq!(Branch::One.through().collect::<Vec<_>>(), vec![Branch::Zero, Branch::One]);
    /// ```
    pub fn through(self) -> impl Iterator<Item = Branch> {
        Branch::iter().take_while(move |&b| b <= self)
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn test_priority_order() {
        let order: Vec<Branch> = Branch::iter().collect();
        assert_eq!(order, vec![Branch::Zero, Branch::One]);
        assert_eq!(Branch::COUNT, 2);
    }

    #[test]
    fn test_bit() {
        assert_eq!(Branch::Zero.bit(), 0);
        assert_eq!(Branch::One.bit(), 1);
        assert_eq!(Branch::One.to_string(), "1");
    }
}
