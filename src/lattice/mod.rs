// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable lattice geometry.
//!
//! The lattice is loaded once per session and never changes: the hexagonal
//! faces, the background edge set, and lookup tables precomputed from them.
//! Matchings are the mutable part and live elsewhere; several matchings (and
//! several samplers) can share one lattice.
//!
//! # Precomputed tables
//!
//! - `vertices`: every vertex on a background edge or a hexagon
//! - `incidence`: for each vertex, the hexagons that contain it
//! - `neighbors`: for each hexagon, every hexagon sharing a vertex with it
//!   (itself included)
//!
//! Flipping hexagon `h` only changes the partners of `h`'s six vertices, so
//! only the hexagons in `neighbors[h]` can change activity.

use crate::dynamics::{is_active, DimerError};
use crate::geometry::{Edge, Hexagon, Matching, Vertex};
use crate::state::AdjacencyMap;
use std::collections::{BTreeSet, HashMap};

/// Hexagonal faces and background edges of one lattice region.
#[derive(Debug, Clone)]
pub struct Lattice {
    hexagons: Vec<Hexagon>,
    background: BTreeSet<Edge>,
    vertices: BTreeSet<Vertex>,
    incidence: HashMap<Vertex, Vec<usize>>,
    neighbors: Vec<Vec<usize>>,
}

impl Lattice {
    /// Build a lattice from its faces and background edges.
    ///
    /// An empty background disables the edge-membership check in
    /// [`validate`](Self::validate).
    pub fn new(hexagons: Vec<Hexagon>, background: BTreeSet<Edge>) -> Self {
        let mut vertices: BTreeSet<Vertex> =
            background.iter().flat_map(|e| e.endpoints()).collect();
        let mut incidence: HashMap<Vertex, Vec<usize>> = HashMap::new();
        for (index, hexagon) in hexagons.iter().enumerate() {
            for &v in hexagon.vertices() {
                vertices.insert(v);
                incidence.entry(v).or_default().push(index);
            }
        }

        let neighbors = hexagons
            .iter()
            .map(|hexagon| {
                let mut around: Vec<usize> = hexagon
                    .vertices()
                    .iter()
                    .flat_map(|v| incidence[v].iter().copied())
                    .collect();
                around.sort_unstable();
                around.dedup();
                around
            })
            .collect();

        Self {
            hexagons,
            background,
            vertices,
            incidence,
            neighbors,
        }
    }

    /// Build a lattice whose background is the union of the hexagon boundaries.
    pub fn from_hexagons(hexagons: Vec<Hexagon>) -> Self {
        let background = hexagons.iter().flat_map(|h| h.edges()).collect();
        Self::new(hexagons, background)
    }

    /// All hexagons, in load order. Indices into this slice identify hexagons.
    pub fn hexagons(&self) -> &[Hexagon] {
        &self.hexagons
    }

    /// Number of hexagons.
    pub fn hexagon_count(&self) -> usize {
        self.hexagons.len()
    }

    /// The hexagon at `index`.
    pub fn hexagon(&self, index: usize) -> Result<&Hexagon, DimerError> {
        self.hexagons
            .get(index)
            .ok_or(DimerError::HexagonOutOfRange {
                index,
                count: self.hexagons.len(),
            })
    }

    /// The background edge set.
    pub fn background(&self) -> &BTreeSet<Edge> {
        &self.background
    }

    /// Every vertex of the lattice.
    pub fn vertices(&self) -> &BTreeSet<Vertex> {
        &self.vertices
    }

    /// Indices of the hexagons containing `v`.
    pub fn hexagons_at(&self, v: Vertex) -> &[usize] {
        self.incidence.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Indices of the hexagons sharing at least one vertex with hexagon
    /// `index`, including `index` itself, in ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        &self.neighbors[index]
    }

    /// Indices of the hexagons active under `adjacency`, ascending.
    pub fn active_hexagons(&self, adjacency: &AdjacencyMap) -> Vec<usize> {
        self.hexagons
            .iter()
            .enumerate()
            .filter(|(_, h)| is_active(h, adjacency))
            .map(|(i, _)| i)
            .collect()
    }

    /// Check that `matching` is a perfect matching of this lattice.
    ///
    /// Every edge must be a background edge (skipped when the background is
    /// empty), no vertex may appear twice, and every lattice vertex must be
    /// covered.
    pub fn validate(&self, matching: &Matching) -> Result<(), DimerError> {
        if !self.background.is_empty() {
            if let Some(edge) = matching.iter().find(|e| !self.background.contains(e)) {
                return Err(DimerError::ForeignEdge { edge: *edge });
            }
        }
        let adjacency = AdjacencyMap::from_matching(matching)?;
        match self.vertices.iter().find(|v| !adjacency.contains(**v)) {
            Some(&vertex) => Err(DimerError::Uncovered { vertex }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(r: i32, c: i32) -> Vertex {
        Vertex::new(r, c)
    }

    /// Two hexagons fused along the edge (0,2)-(1,2).
    fn fused_pair() -> Lattice {
        Lattice::from_hexagons(vec![
            Hexagon::new([v(0, 0), v(0, 1), v(0, 2), v(1, 2), v(1, 1), v(1, 0)]),
            Hexagon::new([v(0, 2), v(0, 3), v(0, 4), v(1, 4), v(1, 3), v(1, 2)]),
        ])
    }

    #[test]
    fn test_tables() {
        let lattice = fused_pair();

        assert_eq!(lattice.vertices().len(), 10);
        assert_eq!(lattice.background().len(), 11);
        assert_eq!(lattice.hexagons_at(v(0, 2)), &[0, 1]);
        assert_eq!(lattice.hexagons_at(v(0, 0)), &[0]);
        assert!(lattice.hexagons_at(v(7, 7)).is_empty());
        assert_eq!(lattice.neighbors(0), &[0, 1]);
        assert_eq!(lattice.neighbors(1), &[0, 1]);
    }

    #[test]
    fn test_hexagon_out_of_range() {
        let lattice = fused_pair();
        assert!(lattice.hexagon(1).is_ok());
        assert_eq!(
            lattice.hexagon(2).unwrap_err(),
            DimerError::HexagonOutOfRange { index: 2, count: 2 }
        );
    }

    #[test]
    fn test_validate() {
        let lattice = fused_pair();
        let good: Matching = [
            Edge::new(v(0, 2), v(1, 2)),
            Edge::new(v(0, 0), v(0, 1)),
            Edge::new(v(1, 0), v(1, 1)),
            Edge::new(v(0, 3), v(0, 4)),
            Edge::new(v(1, 3), v(1, 4)),
        ]
        .into_iter()
        .collect();
        assert_eq!(lattice.validate(&good), Ok(()));
        assert_eq!(lattice.active_hexagons(&AdjacencyMap::from_matching(&good).unwrap()), vec![0, 1]);

        let mut partial = good.clone();
        partial.remove(&Edge::new(v(1, 3), v(1, 4)));
        assert_eq!(
            lattice.validate(&partial),
            Err(DimerError::Uncovered { vertex: v(1, 3) })
        );

        let mut foreign = partial.clone();
        foreign.insert(Edge::new(v(1, 3), v(0, 4)));
        assert_eq!(
            lattice.validate(&foreign),
            Err(DimerError::ForeignEdge {
                edge: Edge::new(v(0, 4), v(1, 3))
            })
        );
    }
}
