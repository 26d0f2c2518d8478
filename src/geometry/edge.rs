// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unordered edges between two lattice sites.
//!
//! An edge is stored in canonical form: the smaller endpoint (in the
//! row-major [`Vertex`] order) always comes first. Two edges built from the
//! same endpoints in either order are therefore equal, hash identically and
//! sort together, which lets matchings and highlight sets key on them
//! directly.
//!
//! # Examples
//!
//! ```
//! use dimer_paint::geometry::{Edge, Vertex};
//!
//! let a = Vertex::new(0, 1);
//! let b = Vertex::new(0, 0);
//!
//! assert_eq!(Edge::new(a, b), Edge::new(b, a));
//! assert_eq!(Edge::new(a, b).first(), b);
//! assert_eq!(format!("{}", Edge::new(a, b)), "(0,0)-(0,1)");
//! ```

use crate::geometry::Vertex;
use std::fmt;

/// An unordered pair of distinct vertices, stored smallest endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    first: Vertex,
    second: Vertex,
}

impl Edge {
    /// Create an edge, putting the endpoints in canonical order.
    ///
    /// # Panics
    ///
    /// Panics if both endpoints are the same vertex.
    pub fn new(a: Vertex, b: Vertex) -> Self {
        match Self::try_new(a, b) {
            Some(edge) => edge,
            None => panic!("Edge endpoints must differ, got {} twice", a),
        }
    }

    /// Try to create an edge, returning None if the endpoints coincide.
    pub fn try_new(a: Vertex, b: Vertex) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self {
                first: a,
                second: b,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: b,
                second: a,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller endpoint.
    pub fn first(&self) -> Vertex {
        self.first
    }

    /// The larger endpoint.
    pub fn second(&self) -> Vertex {
        self.second
    }

    /// Both endpoints, smallest first.
    pub fn endpoints(&self) -> [Vertex; 2] {
        [self.first, self.second]
    }

    /// Check if `v` is one of the endpoints.
    pub fn contains(&self, v: Vertex) -> bool {
        self.first == v || self.second == v
    }

    /// The endpoint opposite `v`, or None if `v` is not on this edge.
    pub fn other(&self, v: Vertex) -> Option<Vertex> {
        if v == self.first {
            Some(self.second)
        } else if v == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
