// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests for the enumerator and the text printer.

mod common;

use common::ids;
use ror_search::enumerate::Printer;
use ror_search::sequence::{BitSequence, Format};
use ror_search::state::Counters;
use ror_search::{Enumerator, Path, SearchContext, SolutionRegistry, StopReason};

fn enumerate(bits: u32, capacity: usize) -> (Vec<Path>, ror_search::EnumerationReport) {
    let mut found: Vec<Path> = Vec::new();
    let report = Enumerator::new(SearchContext::with_bits(bits), capacity)
        .run(&mut found)
        .unwrap();
    (found, report)
}

#[test]
fn test_wider_registers_stop_when_exhausted() {
    for bits in 2..=10 {
        let (found, report) = enumerate(bits, 256);
        assert_eq!(report.found, 1, "bits={}", bits);
        assert_eq!(found.len(), 1);
        assert_eq!(report.stop, StopReason::SearchExhausted, "bits={}", bits);
        assert_eq!(report.statistics.get(Counters::Attempts), 2);
    }
}

#[test]
fn test_single_bit_register_repeats() {
    let (found, report) = enumerate(1, 256);
    assert_eq!(ids(&found[0]), vec![0, 1]);
    assert_eq!(report.stop, StopReason::DuplicateFound);
    assert_eq!(report.statistics.get(Counters::Attempts), 2);
    assert_eq!(report.statistics.get(Counters::Duplicates), 1);
}

#[test]
fn test_capacity_one_stops_before_second_attempt() {
    for bits in 1..=6 {
        let (found, report) = enumerate(bits, 1);
        assert_eq!(found.len(), 1);
        assert_eq!(report.stop, StopReason::CapacityReached);
        assert_eq!(report.statistics.get(Counters::Attempts), 1);
    }
}

#[test]
fn test_accepted_paths_are_distinct() {
    let mut found: Vec<Path> = Vec::new();
    let registry = SolutionRegistry::with_capacity(16);
    Enumerator::with_registry(SearchContext::with_bits(4), registry, 16)
        .run(&mut found)
        .unwrap();
    for (i, a) in found.iter().enumerate() {
        for b in &found[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_first_enumerated_path_matches_single_attempt() {
    let (found, _) = enumerate(4, 256);
    assert_eq!(
        ids(&found[0]),
        vec![0, 8, 4, 2, 9, 12, 6, 11, 5, 10, 13, 14, 15, 7, 3, 1]
    );
}

#[test]
fn test_statistics_cover_both_attempts() {
    // First attempt: 10 forward steps, 3 backtracks. The second attempt
    // reaches node 4 with both branches closed and backs out twice.
    let (_, report) = enumerate(3, 256);
    assert_eq!(report.statistics.get(Counters::ForwardSteps), 11);
    assert_eq!(report.statistics.get(Counters::Backtracks), 5);
    assert_eq!(report.statistics.get(Counters::Solutions), 1);
}

#[test]
fn test_printer_output_hex() {
    let mut out = Vec::new();
    let report = Enumerator::new(SearchContext::with_bits(4), 256)
        .run(Printer::new(&mut out, 4, Format::Hex).with_verify(true))
        .unwrap();
    assert_eq!(report.found, 1);
    assert_eq!(String::from_utf8(out).unwrap(), "1eb2\n\n");
}

#[test]
fn test_printer_output_bits_and_path() {
    let mut bits = Vec::new();
    Enumerator::new(SearchContext::with_bits(4), 256)
        .run(Printer::new(&mut bits, 4, Format::Bits))
        .unwrap();
    assert_eq!(String::from_utf8(bits).unwrap(), "0001111010110010\n\n");

    let mut nodes = Vec::new();
    Enumerator::new(SearchContext::with_bits(4), 256)
        .run(Printer::new(&mut nodes, 4, Format::Path))
        .unwrap();
    assert_eq!(
        String::from_utf8(nodes).unwrap(),
        "0 8 4 2 9 c 6 b 5 a d e f 7 3 1\n\n"
    );
}

#[test]
fn test_enumerated_sequences_have_full_period() {
    for bits in 1..=8 {
        let (found, _) = enumerate(bits, 256);
        for path in &found {
            BitSequence::from_path(path, bits)
                .verify_full_period()
                .unwrap_or_else(|e| panic!("bits={}: {}", bits, e));
        }
    }
}
