// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edges flagged for emphasis in one pane.

use crate::geometry::Edge;
use std::collections::btree_set;
use std::collections::BTreeSet;

/// A set of highlighted edges.
///
/// An edge is highlighted exactly when it is in the set; absence means "not
/// highlighted".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    edges: BTreeSet<Edge>,
}

impl HighlightSet {
    /// Create an empty highlight set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `edge` is highlighted.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Highlight `edge`. Returns false if it already was.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Clear the highlight on `edge`. Returns false if it was not set.
    pub fn remove(&mut self, edge: &Edge) -> bool {
        self.edges.remove(edge)
    }

    /// Number of highlighted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Clear every highlight.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// Iterate over highlighted edges in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Edge> {
        self.edges.iter()
    }
}

impl FromIterator<Edge> for HighlightSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
