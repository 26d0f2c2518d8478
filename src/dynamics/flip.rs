// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Hexagon activity test and the hexagon flip.
//!
//! A hexagon is active when its six vertices are matched among themselves.
//! Since the hexagon is a 6-cycle, that forces every other boundary edge to
//! be in the matching, and toggling all six boundary edges swaps to the other
//! three. Vertices off the hexagon are never touched, so flipping an active
//! hexagon keeps a perfect matching perfect, and flipping it twice restores
//! the original.

use crate::dynamics::DimerError;
use crate::geometry::{Hexagon, Matching};
use crate::state::AdjacencyMap;

/// Check if `hexagon` can flip under the matching described by `adjacency`.
///
/// True iff each of the six vertices is matched to another vertex of the
/// same hexagon.
pub fn is_active(hexagon: &Hexagon, adjacency: &AdjacencyMap) -> bool {
    hexagon
        .vertices()
        .iter()
        .filter(|&&v| {
            adjacency
                .partner(v)
                .is_some_and(|partner| hexagon.contains(partner))
        })
        .count()
        == 6
}

/// Toggle each boundary edge of `hexagon` in `matching`.
///
/// This is a plain symmetric difference: no activity check is made. On an
/// inactive hexagon the result is no longer a perfect matching, so callers
/// test [`is_active`] first.
pub fn flip_hex(matching: &mut Matching, hexagon: &Hexagon) {
    for edge in hexagon.edges() {
        matching.toggle(edge);
    }
}

/// Flip `hexagon` and patch `adjacency` to describe the flipped matching.
///
/// Requires `adjacency` to describe `matching` and `hexagon` to be active;
/// then only the six hexagon vertices change partner and the map is updated
/// without a rebuild.
pub fn flip_with_adjacency(
    matching: &mut Matching,
    adjacency: &mut AdjacencyMap,
    hexagon: &Hexagon,
) -> Result<(), DimerError> {
    for &v in hexagon.vertices() {
        adjacency.unlink(v);
    }
    flip_hex(matching, hexagon);
    for edge in hexagon.edges() {
        if matching.contains(&edge) {
            adjacency.link(edge)?;
        }
    }
    Ok(())
}
