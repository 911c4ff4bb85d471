// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use ror_search::graph::NodeId;
use ror_search::{Path, SearchContext, SearchEngine};

/// Node ids of a path as plain integers.
pub fn ids(path: &Path) -> Vec<u32> {
    path.iter().map(NodeId::value).collect()
}

/// Build a path from plain integers.
pub fn path(ids: &[u32]) -> Path {
    Path::from(ids.iter().map(|&i| NodeId::new(i)).collect::<Vec<_>>())
}

/// Run one attempt from a fresh context and return the context, the path and
/// the engine's (forward_steps, backtracks).
pub fn first_solution(bits: u32) -> (SearchContext, Path, (u64, u64)) {
    let mut ctx = SearchContext::with_bits(bits);
    let mut engine = SearchEngine::new();
    let path = engine
        .search(&mut ctx)
        .path()
        .unwrap_or_else(|| panic!("no cycle found for {} bits", bits));
    let stats = engine.statistics();
    (ctx, path, stats)
}
