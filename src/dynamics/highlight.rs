// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Select or deselect a whole alternating strand at once.
//!
//! Picking any edge of a double-dimer picture selects the loop (or open
//! path) through it. The strand is toggled as a unit in both panes'
//! highlight sets: if every one of its edges is already highlighted in both
//! sets, all of them are cleared from both; otherwise all of them are added
//! to both. An edge whose smaller endpoint is matched in neither matching
//! has no strand, and nothing changes.

use crate::dynamics::{trace_path, DimerError, Path};
use crate::geometry::{Edge, Matching};
use crate::state::{AdjacencyMap, HighlightSet};

/// What a highlight toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The strand's edges were added to both sets.
    Added,
    /// The strand's edges were removed from both sets.
    Removed,
    /// The strand had no edges, so neither set changed.
    Unchanged,
}

/// Result of [`highlight_path`]: the traced strand and what was done to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOutcome {
    pub toggle: Toggle,
    pub path: Path,
}

/// Toggle the strand through `start_edge` in both highlight sets.
///
/// The strand is traced from the smaller endpoint of `start_edge` over
/// (`matching_a`, `matching_b`). Fails only if a matching has a vertex in
/// two edges. If that endpoint is unmatched in both matchings the strand is
/// empty and the outcome is [`Toggle::Unchanged`].
///
/// Calling this twice with the same edge and unchanged matchings restores
/// both sets, provided the strand started out either fully highlighted in
/// both sets or not highlighted in either.
pub fn highlight_path(
    highlight_a: &mut HighlightSet,
    highlight_b: &mut HighlightSet,
    matching_a: &Matching,
    matching_b: &Matching,
    start_edge: Edge,
) -> Result<HighlightOutcome, DimerError> {
    let adjacency_a = AdjacencyMap::from_matching(matching_a)?;
    let adjacency_b = AdjacencyMap::from_matching(matching_b)?;
    let path = trace_path(&adjacency_a, &adjacency_b, start_edge.first());
    let strand = path.edges();
    if strand.is_empty() {
        return Ok(HighlightOutcome {
            toggle: Toggle::Unchanged,
            path,
        });
    }

    let all_highlighted = strand
        .iter()
        .all(|e| highlight_a.contains(e) && highlight_b.contains(e));

    let toggle = if all_highlighted {
        for e in &strand {
            highlight_a.remove(e);
            highlight_b.remove(e);
        }
        Toggle::Removed
    } else {
        for &e in &strand {
            highlight_a.insert(e);
            highlight_b.insert(e);
        }
        Toggle::Added
    };
    Ok(HighlightOutcome { toggle, path })
}
