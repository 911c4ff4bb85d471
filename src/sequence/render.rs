// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text renderings of a found cycle.

use super::BitSequence;
use crate::engine::Path;
use std::fmt::Write;

/// How a found cycle is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Sequence bytes as lowercase hex, two digits per byte.
    #[default]
    Hex,
    /// Sequence bytes as binary, eight digits per byte.
    Bits,
    /// Node ids along the path, in hex.
    Path,
}

/// Render `path` (built for a `bits`-wide register) in the given format.
///
/// ```
/// use ror_search::context::SearchContext;
/// use ror_search::engine::SearchEngine;
/// use ror_search::sequence::{render, Format};
///
/// let mut ctx = SearchContext::with_bits(3);
/// let path = SearchEngine::new().search(&mut ctx).path().unwrap();
/// assert_eq!(render(&path, 3, Format::Hex), "3a");
/// assert_eq!(render(&path, 3, Format::Bits), "00111010");
/// assert_eq!(render(&path, 3, Format::Path), "0 4 2 5 6 7 3 1");
/// ```
pub fn render(path: &Path, bits: u32, format: Format) -> String {
    match format {
        Format::Hex => BitSequence::from_path(path, bits).to_hex(),
        Format::Bits => BitSequence::from_path(path, bits).to_bit_string(),
        Format::Path => path.to_string(),
    }
}

impl BitSequence {
    pub fn to_hex(&self) -> String {
        self.to_bytes()
            .iter()
            .fold(String::new(), |mut out, byte| {
                let _ = write!(out, "{:02x}", byte);
                out
            })
    }

    pub fn to_bit_string(&self) -> String {
        self.to_bytes()
            .iter()
            .fold(String::new(), |mut out, byte| {
                let _ = write!(out, "{:08b}", byte);
                out
            })
    }
}
