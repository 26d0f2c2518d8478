// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Alternating paths and loops in the superposition of two matchings.
//!
//! Overlaying matchings A and B gives a graph in which every vertex has at
//! most one A-partner and at most one B-partner, so each connected piece is
//! a simple path or a simple cycle. Tracing one is a walk with no choices:
//! hop along B, then along A, and repeat.
//!
//! # Algorithm
//!
//! From `start`, walk forward (B-partner, then A-partner, ...) until the walk
//! comes back to `start`, which closes a loop, or a partner is missing, which
//! ends an open path. In the open case the walk resumes at `start` in the
//! opposite order (A-partner, then B-partner, ...) and the vertices found are
//! prepended, so `start` sits wherever it falls along the path.
//!
//! A missing partner is the normal end of an open path; lookups return
//! `Option` and the walk simply stops on `None`.
//!
//! # Examples
//!
//! ```
//! use dimer_paint::dynamics::trace_path;
//! use dimer_paint::geometry::{Edge, Matching, Vertex};
//! use dimer_paint::state::AdjacencyMap;
//!
//! let [a, b, c, d] = [(0, 0), (0, 1), (1, 1), (1, 0)].map(|(r, c)| Vertex::new(r, c));
//! let ma: Matching = [Edge::new(a, b), Edge::new(c, d)].into_iter().collect();
//! let mb: Matching = [Edge::new(b, c), Edge::new(d, a)].into_iter().collect();
//!
//! let path = trace_path(
//!     &AdjacencyMap::from_matching(&ma).unwrap(),
//!     &AdjacencyMap::from_matching(&mb).unwrap(),
//!     a,
//! );
//! assert!(path.is_closed());
//! assert_eq!(path.vertices(), &[a, d, c, b, a]);
//! ```

use crate::geometry::{Edge, Vertex};
use crate::state::AdjacencyMap;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A vertex sequence alternating between two matchings.
///
/// A closed path repeats its first vertex as its last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<Vertex>,
    closed: bool,
}

impl Path {
    /// The vertices in walk order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertex entries (a closed path counts its start twice).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false: a path holds at least its starting vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if the walk returned to its start.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Check if this is a single vertex with no partner in either matching.
    pub fn is_trivial(&self) -> bool {
        self.vertices.len() == 1
    }

    /// Check if this is a loop of length two: an edge present in both matchings.
    pub fn is_doubled_edge(&self) -> bool {
        self.closed && self.vertices.len() == 3
    }

    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// The walked edges, in order. A doubled edge appears twice.
    pub fn edges(&self) -> Vec<Edge> {
        self.vertices
            .windows(2)
            .map(|pair| Edge::new(pair[0], pair[1]))
            .collect()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Trace the alternating path or loop through `start`.
///
/// `a` and `b` are the adjacency maps of the two matchings. The forward walk
/// leaves `start` along `b`; see the module docs for the full rule. A
/// vertex matched in neither map gives a one-vertex path.
pub fn trace_path(a: &AdjacencyMap, b: &AdjacencyMap, start: Vertex) -> Path {
    let mut forward = vec![start];
    let mut current = start;
    loop {
        let Some(across) = b.partner(current) else {
            break;
        };
        forward.push(across);
        let Some(back) = a.partner(across) else {
            break;
        };
        if back == start {
            forward.push(start);
            return Path {
                vertices: forward,
                closed: true,
            };
        }
        forward.push(back);
        current = back;
    }

    let mut backward = Vec::new();
    let mut current = start;
    loop {
        let Some(across) = a.partner(current) else {
            break;
        };
        backward.push(across);
        let Some(back) = b.partner(across) else {
            break;
        };
        if back == start {
            break;
        }
        backward.push(back);
        current = back;
    }

    backward.reverse();
    backward.extend(forward);
    Path {
        vertices: backward,
        closed: false,
    }
}

/// Split the superposition of two matchings into its paths and loops.
///
/// Every vertex matched in `a` or `b` lies on exactly one returned path.
/// Tracing starts from the smallest unvisited vertex, so the output order is
/// deterministic.
pub fn decompose(a: &AdjacencyMap, b: &AdjacencyMap) -> Vec<Path> {
    let vertices: BTreeSet<Vertex> = a.iter().chain(b.iter()).map(|(v, _)| v).collect();
    let mut visited: HashSet<Vertex> = HashSet::with_capacity(vertices.len());
    let mut components = Vec::new();
    for v in vertices {
        if visited.contains(&v) {
            continue;
        }
        let path = trace_path(a, b, v);
        visited.extend(path.vertices().iter().copied());
        components.push(path);
    }
    components
}

/// Counts describing a double-dimer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoubleDimerSummary {
    /// Edges present in both matchings.
    pub doubled_edges: usize,
    /// Closed loops of length four or more.
    pub loops: usize,
    /// Open paths (only when the matchings cover different vertex sets).
    pub open_paths: usize,
    /// Edge count of the longest loop, or 0 without loops.
    pub longest_loop: usize,
}

impl DoubleDimerSummary {
    /// Summarize the components returned by [`decompose`].
    pub fn from_components(components: &[Path]) -> Self {
        let mut summary = Self::default();
        for path in components {
            if path.is_doubled_edge() {
                summary.doubled_edges += 1;
            } else if path.is_closed() {
                summary.loops += 1;
                summary.longest_loop = summary.longest_loop.max(path.edge_count());
            } else if !path.is_trivial() {
                summary.open_paths += 1;
            }
        }
        summary
    }
}

impl fmt::Display for DoubleDimerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loops (longest {}), {} doubled edges, {} open paths",
            self.loops, self.longest_loop, self.doubled_edges, self.open_paths
        )
    }
}
