// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex type for lattice sites.
//!
//! A vertex is identified purely by its (row, column) key. Screen coordinates
//! live with the loader and never reach the combinatorial code.

use std::fmt;

/// A lattice site.
///
/// Ordering is lexicographic on (row, column); [`Edge`](crate::geometry::Edge)
/// relies on it for its canonical endpoint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    /// Row index of the site.
    pub row: i32,
    /// Column index of the site.
    pub col: i32,
}

impl Vertex {
    /// Create a vertex from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Vertex {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
