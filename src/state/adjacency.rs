// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex-to-partner lookup built from a matching.
//!
//! The map is symmetric: whenever `v` maps to `w`, `w` maps to `v`. It is a
//! throwaway view, rebuilt whenever the matching it came from changes. The
//! sampler is the one exception; it patches the map in place after each flip
//! (see [`flip_with_adjacency`](crate::dynamics::flip_with_adjacency)).
//!
//! # Examples
//!
//! ```
//! use dimer_paint::geometry::{Edge, Matching, Vertex};
//! use dimer_paint::state::AdjacencyMap;
//!
//! let a = Vertex::new(0, 0);
//! let b = Vertex::new(0, 1);
//! let m: Matching = [Edge::new(a, b)].into_iter().collect();
//!
//! let adj = AdjacencyMap::from_matching(&m).unwrap();
//! assert_eq!(adj.partner(a), Some(b));
//! assert_eq!(adj.partner(b), Some(a));
//! assert_eq!(adj.partner(Vertex::new(9, 9)), None);
//! ```

use crate::dynamics::DimerError;
use crate::geometry::{Edge, Matching, Vertex};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Symmetric partner lookup for the vertices of a matching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    partners: HashMap<Vertex, Vertex>,
}

impl AdjacencyMap {
    /// Build the partner map of `matching`.
    ///
    /// Covers exactly the vertices that appear in some edge. Fails with
    /// [`DimerError::InvalidMatching`] if a vertex appears in two edges.
    pub fn from_matching(matching: &Matching) -> Result<Self, DimerError> {
        let mut adjacency = Self {
            partners: HashMap::with_capacity(2 * matching.len()),
        };
        for edge in matching {
            adjacency.link(*edge)?;
        }
        Ok(adjacency)
    }

    /// The vertex matched to `v`, or None if `v` is unmatched.
    pub fn partner(&self, v: Vertex) -> Option<Vertex> {
        self.partners.get(&v).copied()
    }

    /// Check if `v` is matched.
    pub fn contains(&self, v: Vertex) -> bool {
        self.partners.contains_key(&v)
    }

    /// Number of matched vertices (twice the number of edges).
    pub fn len(&self) -> usize {
        self.partners.len()
    }

    /// Check if no vertex is matched.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    /// Iterate over (vertex, partner) pairs; each edge shows up twice.
    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.partners.iter().map(|(&v, &w)| (v, w))
    }

    /// Record both directions of `edge`.
    ///
    /// Leaves the map unchanged and fails if either endpoint already has a
    /// partner.
    pub(crate) fn link(&mut self, edge: Edge) -> Result<(), DimerError> {
        let [a, b] = edge.endpoints();
        for (v, w) in [(a, b), (b, a)] {
            if let Some(&existing) = self.partners.get(&v) {
                return Err(DimerError::InvalidMatching {
                    vertex: v,
                    first: existing,
                    second: w,
                });
            }
        }
        self.partners.insert(a, b);
        self.partners.insert(b, a);
        Ok(())
    }

    /// Drop `v` and its partner from the map.
    pub(crate) fn unlink(&mut self, v: Vertex) {
        if let Entry::Occupied(entry) = self.partners.entry(v) {
            let w = entry.remove();
            self.partners.remove(&w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(r1: i32, c1: i32, r2: i32, c2: i32) -> Edge {
        Edge::new(Vertex::new(r1, c1), Vertex::new(r2, c2))
    }

    #[test]
    fn test_map_is_symmetric() {
        let m: Matching = [e(0, 0, 0, 1), e(1, 1, 1, 0), e(1, -1, 0, -1)]
            .into_iter()
            .collect();
        let adj = AdjacencyMap::from_matching(&m).unwrap();

        assert_eq!(adj.len(), 6);
        for (v, w) in adj.iter() {
            assert_eq!(adj.partner(w), Some(v));
        }
    }

    #[test]
    fn test_shared_vertex_is_reported() {
        let m: Matching = [e(0, 0, 0, 1), e(0, 1, 1, 1)].into_iter().collect();
        let err = AdjacencyMap::from_matching(&m).unwrap_err();

        assert_eq!(
            err,
            DimerError::InvalidMatching {
                vertex: Vertex::new(0, 1),
                first: Vertex::new(0, 0),
                second: Vertex::new(1, 1),
            }
        );
    }

    #[test]
    fn test_empty_matching() {
        let adj = AdjacencyMap::from_matching(&Matching::new()).unwrap();
        assert!(adj.is_empty());
    }

    #[test]
    fn test_unlink_removes_both_directions() {
        let m: Matching = [e(0, 0, 0, 1), e(1, 0, 1, 1)].into_iter().collect();
        let mut adj = AdjacencyMap::from_matching(&m).unwrap();

        adj.unlink(Vertex::new(0, 1));
        assert!(!adj.contains(Vertex::new(0, 0)));
        assert!(!adj.contains(Vertex::new(0, 1)));
        assert_eq!(adj.len(), 2);

        adj.unlink(Vertex::new(0, 1));
        assert_eq!(adj.len(), 2);
    }

    #[test]
    fn test_failed_link_leaves_map_unchanged() {
        let m: Matching = [e(0, 0, 0, 1)].into_iter().collect();
        let mut adj = AdjacencyMap::from_matching(&m).unwrap();

        assert!(adj.link(e(5, 5, 0, 1)).is_err());
        assert!(!adj.contains(Vertex::new(5, 5)));
        assert_eq!(adj.partner(Vertex::new(0, 1)), Some(Vertex::new(0, 0)));
    }
}
