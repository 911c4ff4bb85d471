// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A sink that writes each sequence as text.

use super::SolutionSink;
use crate::engine::Path;
use crate::error::{Error, Result};
use crate::sequence::{render, BitSequence, Format};
use std::io::Write;

/// Writes every accepted path in a chosen [`Format`], each followed by a
/// blank line, optionally checking it for full period first.
#[derive(Debug)]
pub struct Printer<W: Write> {
    out: W,
    bits: u32,
    format: Format,
    verify: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, bits: u32, format: Format) -> Self {
        Self {
            out,
            bits,
            format,
            verify: false,
        }
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SolutionSink for Printer<W> {
    fn emit(&mut self, ordinal: usize, path: &Path) -> Result<()> {
        if self.verify {
            BitSequence::from_path(path, self.bits)
                .verify_full_period()
                .map_err(|source| Error::Period { ordinal, source })?;
        }
        writeln!(self.out, "{}\n", render(path, self.bits, self.format))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeId;

    fn path(ids: &[u32]) -> Path {
        Path::from(ids.iter().map(|&i| NodeId::new(i)).collect::<Vec<_>>())
    }

    #[test]
    fn test_prints_hex_with_blank_line() {
        let mut printer = Printer::new(Vec::new(), 3, Format::Hex).with_verify(true);
        printer.emit(0, &path(&[0, 4, 2, 5, 6, 7, 3, 1])).unwrap();
        assert_eq!(String::from_utf8(printer.into_inner()).unwrap(), "3a\n\n");
    }

    #[test]
    fn test_verify_rejects_short_period() {
        let mut printer = Printer::new(Vec::new(), 3, Format::Bits).with_verify(true);
        let err = printer
            .emit(4, &path(&[0, 4, 0, 4, 0, 4, 0, 4]))
            .unwrap_err();
        assert!(matches!(err, Error::Period { ordinal: 4, .. }));
        assert!(printer.into_inner().is_empty());
    }
}
