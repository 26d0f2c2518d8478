// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Operations on matchings.
//!
//! - `flip`: hexagon activity test and flip
//! - `path`: alternating path tracing and double-dimer decomposition
//! - `glauber`: Markov chain randomization by hexagon flips
//! - `highlight`: whole-strand highlight toggling
//!
//! Everything here is synchronous and single-threaded. Independent matchings
//! can be randomized in parallel since they share only the immutable lattice.

pub mod errors;
pub mod flip;
pub mod glauber;
pub mod highlight;
pub mod path;

pub use errors::DimerError;
pub use flip::{flip_hex, flip_with_adjacency, is_active};
pub use glauber::{
    randomize, randomize_with, ActiveTracking, GlauberSampler, Proposal, SampleReport,
    SamplerOptions,
};
pub use highlight::{highlight_path, HighlightOutcome, Toggle};
pub use path::{decompose, trace_path, DoubleDimerSummary, Path};
