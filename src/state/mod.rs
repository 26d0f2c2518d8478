// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Derived and caller-owned state layered over the lattice.
//!
//! - AdjacencyMap: disposable vertex-to-partner view of a matching
//! - HighlightSet: edges flagged for emphasis in one pane
//! - Statistics: counters kept by the sampler

pub mod adjacency;
pub mod highlight;
pub mod statistics;

pub use adjacency::AdjacencyMap;
pub use highlight::HighlightSet;
pub use statistics::{Counters, Statistics};
