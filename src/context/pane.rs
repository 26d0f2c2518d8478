// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One side of a double-dimer picture.

use crate::geometry::Matching;
use crate::state::HighlightSet;
use std::fmt;

/// Which of the two matchings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaneId {
    A,
    B,
}

impl PaneId {
    pub const BOTH: [PaneId; 2] = [PaneId::A, PaneId::B];

    /// Position in two-element arrays.
    pub fn index(self) -> usize {
        match self {
            PaneId::A => 0,
            PaneId::B => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            PaneId::A => PaneId::B,
            PaneId::B => PaneId::A,
        }
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaneId::A => write!(f, "A"),
            PaneId::B => write!(f, "B"),
        }
    }
}

/// A matching and the edges highlighted over it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pane {
    pub matching: Matching,
    pub highlight: HighlightSet,
}

impl Pane {
    pub fn new(matching: Matching) -> Self {
        Self {
            matching,
            highlight: HighlightSet::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pane_ids() {
        assert_eq!(PaneId::A.other(), PaneId::B);
        assert_eq!(PaneId::B.other().other(), PaneId::B);
        assert_eq!(PaneId::BOTH.map(PaneId::index), [0, 1]);
        assert_eq!(PaneId::B.to_string(), "B");
    }
}
