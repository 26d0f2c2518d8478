// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Matchings: sets of edges that should cover each of their vertices once.
//!
//! The perfect-matching invariant is not enforced on every mutation, since a
//! hexagon flip passes through invalid intermediate states while it toggles
//! its six edges. It is checked where it matters: building an
//! [`AdjacencyMap`](crate::state::AdjacencyMap) fails on a vertex that
//! appears in two edges, and [`Lattice::validate`](crate::lattice::Lattice::validate)
//! checks coverage of the whole lattice.

use crate::geometry::{Edge, Vertex};
use std::collections::btree_set;
use std::collections::BTreeSet;

/// A set of edges, iterated in canonical edge order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matching {
    edges: BTreeSet<Edge>,
}

impl Matching {
    /// Create an empty matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the matching has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check if `edge` is in the matching.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Add an edge. Returns false if it was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Remove an edge. Returns false if it was absent.
    pub fn remove(&mut self, edge: &Edge) -> bool {
        self.edges.remove(edge)
    }

    /// Add `edge` if absent, remove it if present.
    ///
    /// Returns true if the edge is in the matching afterwards.
    pub fn toggle(&mut self, edge: Edge) -> bool {
        if self.edges.remove(&edge) {
            false
        } else {
            self.edges.insert(edge);
            true
        }
    }

    /// Iterate over the edges in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// Every vertex touched by some edge.
    pub fn vertices(&self) -> BTreeSet<Vertex> {
        self.edges.iter().flat_map(|e| e.endpoints()).collect()
    }
}

impl FromIterator<Edge> for Matching {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

impl Extend<Edge> for Matching {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        self.edges.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Matching {
    type Item = &'a Edge;
    type IntoIter = btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
