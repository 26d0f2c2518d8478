// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dimer configurations on hexagonal lattices.
//!
//! A dimer configuration (perfect matching) of a honeycomb region is the
//! dual picture of a lozenge tiling. Two matchings of the same region
//! overlaid form a double-dimer configuration: a union of doubled edges,
//! loops and, when the matchings cover different vertices, open paths.
//!
//! # Architecture
//!
//! The data splits into two tiers.
//!
//! ## Fixed
//!
//! Loaded once and never changed:
//! - [`lattice::Lattice`]: hexagons, background edges and the precomputed
//!   vertex-to-hexagon incidence
//! - Screen coordinates and rhombi, carried for drawing only
//!
//! ## Editable
//!
//! Changed by every operation:
//! - [`geometry::Matching`]: one per pane, an unordered set of edges
//! - [`state::AdjacencyMap`]: the partner lookup derived from a matching
//! - [`state::HighlightSet`]: highlighted edges, one per pane
//!
//! # Operations
//!
//! 1. **Trace**: follow the alternating path or loop through a vertex
//!    ([`dynamics::trace_path`], [`dynamics::decompose`])
//! 2. **Flip**: rotate the three dimers of an active hexagon
//!    ([`dynamics::is_active`], [`dynamics::flip_hex`])
//! 3. **Randomize**: Glauber dynamics by repeated flips
//!    ([`dynamics::GlauberSampler`], [`dynamics::randomize`])
//! 4. **Highlight**: toggle a whole strand at once
//!    ([`dynamics::highlight_path`])
//!
//! [`context::Session`] ties these together over a configuration directory
//! read and written by [`io`].
//!
//! Randomness is always passed in by the caller, so a seeded generator
//! reproduces a run exactly.

pub mod context;
pub mod dynamics;
pub mod geometry;
pub mod io;
pub mod lattice;
pub mod state;

// Re-export commonly used types
pub use context::{Pane, PaneId, Session};
pub use dynamics::{DimerError, DoubleDimerSummary, Path, SampleReport, SamplerOptions};
pub use geometry::{Edge, Hexagon, Matching, Vertex};
pub use io::ConfigError;
pub use lattice::Lattice;
