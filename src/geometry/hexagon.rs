// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hexagonal faces of the lattice.
//!
//! A hexagon lists its six boundary vertices in cyclic order. The boundary
//! edges are the consecutive pairs, including the wraparound from the last
//! vertex back to the first.

use crate::geometry::{Edge, Vertex};
use std::fmt;

/// Number of boundary vertices (and boundary edges) of a face.
pub const HEX_SIDES: usize = 6;

/// One face of the honeycomb, as six distinct vertices in cyclic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hexagon {
    vertices: [Vertex; HEX_SIDES],
}

impl Hexagon {
    /// Create a hexagon from its boundary in cyclic order.
    ///
    /// # Panics
    ///
    /// Panics if a vertex appears twice.
    pub fn new(vertices: [Vertex; HEX_SIDES]) -> Self {
        match Self::try_new(vertices) {
            Some(hexagon) => hexagon,
            None => panic!("Hexagon vertices must be distinct: {:?}", vertices),
        }
    }

    /// Try to create a hexagon, returning None if a vertex repeats.
    pub fn try_new(vertices: [Vertex; HEX_SIDES]) -> Option<Self> {
        for i in 0..HEX_SIDES {
            if vertices[i + 1..].contains(&vertices[i]) {
                return None;
            }
        }
        Some(Self { vertices })
    }

    /// The boundary vertices in cyclic order.
    pub fn vertices(&self) -> &[Vertex; HEX_SIDES] {
        &self.vertices
    }

    /// The six boundary edges; edge `i` joins vertex `i` to vertex `i + 1 (mod 6)`.
    pub fn edges(&self) -> [Edge; HEX_SIDES] {
        std::array::from_fn(|i| Edge::new(self.vertices[i], self.vertices[(i + 1) % HEX_SIDES]))
    }

    /// Check if `v` lies on the boundary.
    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }
}

impl fmt::Display for Hexagon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}
