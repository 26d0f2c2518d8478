// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph primitives for honeycomb dimer configurations.
//!
//! This module contains type-safe representations of the lattice pieces:
//! - Vertex: a lattice site keyed by (row, column)
//! - Edge: an unordered pair of distinct vertices in canonical order
//! - Hexagon: six vertices in cyclic order around one face
//! - Matching: a set of edges, meant to be a perfect matching

pub mod edge;
pub mod hexagon;
pub mod matching;
pub mod vertex;

pub use edge::Edge;
pub use hexagon::Hexagon;
pub use matching::Matching;
pub use vertex::Vertex;
