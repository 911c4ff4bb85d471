// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the rotation graph.
//!
//! This module defines BITS (the register width) and all derived constants.
//! BITS can be configured at compile time via cargo features.
//!
//! # Supported BITS values
//!
//! - 3: 8 nodes, one byte of sequence (reference configuration)
//! - 4: 16 nodes
//! - 5: 32 nodes
//! - 6: 64 nodes
//! - 7: 128 nodes
//! - 8: 256 nodes - **default**
//!
//! # Example
//!
//! ```bash
//! # Default: BITS=8
//! cargo build
//!
//! # Build the 3-bit reference configuration
//! cargo build --features bits_3
//! ```

/// Width of the rotation register, in bits.
///
/// This is configurable at compile time via cargo features:
/// - `bits_3` → BITS=3
/// - ...
/// - `bits_8` → BITS=8 (explicit)
/// - (default) → BITS=8 (when no feature specified)
#[cfg(not(any(
    feature = "bits_3",
    feature = "bits_4",
    feature = "bits_5",
    feature = "bits_6",
    feature = "bits_7",
    feature = "bits_8"
)))]
pub const BITS: u32 = 8;

#[cfg(feature = "bits_3")]
pub const BITS: u32 = 3;

#[cfg(feature = "bits_4")]
pub const BITS: u32 = 4;

#[cfg(feature = "bits_5")]
pub const BITS: u32 = 5;

#[cfg(feature = "bits_6")]
pub const BITS: u32 = 6;

#[cfg(feature = "bits_7")]
pub const BITS: u32 = 7;

#[cfg(feature = "bits_8")]
pub const BITS: u32 = 8;

/// Number of nodes in the graph (2^BITS), which is also the length of
/// every path and of every generated bit sequence.
pub const NODE_COUNT: usize = 1 << BITS;

/// Maximum number of distinct sequences kept by the solution registry.
pub const FOUND_MAX: usize = 256;

/// Widest graph the generic builder accepts.
///
/// Node identifiers are `u32`, and a 2^24 node graph is already 16M entries
/// per array.
pub const MAX_BITS: u32 = 24;

/// Number of nodes for an arbitrary width.
pub const fn node_count(bits: u32) -> usize {
    1 << bits
}

const _: () = assert!(BITS >= 1 && BITS <= MAX_BITS, "BITS out of range");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // Validates compile-time constant
    fn test_bits_in_valid_range() {
        assert!((3..=8).contains(&BITS), "BITS must be 3..=8");
    }

    #[test]
    fn test_node_count() {
        assert_eq!(NODE_COUNT, 1 << BITS);
        assert_eq!(node_count(BITS), NODE_COUNT);
        match BITS {
            3 => assert_eq!(NODE_COUNT, 8),
            4 => assert_eq!(NODE_COUNT, 16),
            5 => assert_eq!(NODE_COUNT, 32),
            6 => assert_eq!(NODE_COUNT, 64),
            7 => assert_eq!(NODE_COUNT, 128),
            8 => assert_eq!(NODE_COUNT, 256),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_node_count_small_widths() {
        assert_eq!(node_count(1), 2);
        assert_eq!(node_count(2), 4);
        assert_eq!(node_count(MAX_BITS), 1 << 24);
    }
}
