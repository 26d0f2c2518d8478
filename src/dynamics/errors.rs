// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the dimer dynamics.
//!
//! Reaching the end of an open alternating path is not an error: path
//! tracing sees it as a `None` partner and stops.

use crate::geometry::{Edge, Vertex};
use thiserror::Error;

/// Failures reported by the combinatorial core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimerError {
    /// A vertex appears in two edges of a matching.
    #[error("Vertex {vertex} is matched to both {first} and {second}")]
    InvalidMatching {
        vertex: Vertex,
        first: Vertex,
        second: Vertex,
    },

    /// A lattice vertex is not covered by the matching.
    #[error("Vertex {vertex} is not covered by the matching")]
    Uncovered { vertex: Vertex },

    /// The matching uses an edge that is not part of the lattice.
    #[error("Edge {edge} is not an edge of the lattice")]
    ForeignEdge { edge: Edge },

    /// Randomization reached a configuration with nothing to flip.
    #[error("No active hexagon at step {step}")]
    NoActiveHexagon { step: usize },

    /// A hexagon index past the end of the hexagon list.
    #[error("Hexagon index {index} out of range ({count} hexagons)")]
    HexagonOutOfRange { index: usize, count: usize },

    /// A checked flip was requested on a hexagon that cannot flip.
    #[error("Hexagon {index} is not active")]
    InactiveHexagon { index: usize },
}
