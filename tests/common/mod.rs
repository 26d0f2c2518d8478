// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common lattice fixtures shared across integration tests.

#![allow(dead_code)]

use dimer_paint::{Edge, Hexagon, Lattice, Matching, Vertex};
use std::collections::BTreeSet;

pub fn v(row: i32, col: i32) -> Vertex {
    Vertex::new(row, col)
}

pub fn e(a: (i32, i32), b: (i32, i32)) -> Edge {
    Edge::new(v(a.0, a.1), v(b.0, b.1))
}

/// The hexagon ring used by the single-hexagon fixtures.
pub const RING: [(i32, i32); 6] = [(0, 0), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)];

/// A lone hexagon and its two perfect matchings.
///
/// The first matching takes ring edges 0, 2, 4; the second takes 1, 3, 5.
pub fn single_hexagon() -> (Lattice, Matching, Matching) {
    let ring = RING.map(|(r, c)| v(r, c));
    let lattice = Lattice::from_hexagons(vec![Hexagon::new(ring)]);
    let even = (0..3)
        .map(|i| Edge::new(ring[2 * i], ring[2 * i + 1]))
        .collect();
    let odd = (0..3)
        .map(|i| Edge::new(ring[2 * i + 1], ring[(2 * i + 2) % 6]))
        .collect();
    (lattice, even, odd)
}

/// Vertices `a, b, c, d` of a four-cycle and the matchings
/// `{a-b, c-d}` and `{b-c, d-a}`.
pub fn square() -> ([Vertex; 4], Matching, Matching) {
    let [a, b, c, d] = [(0, 0), (0, 1), (1, 1), (1, 0)].map(|(r, c)| v(r, c));
    let ma = [Edge::new(a, b), Edge::new(c, d)].into_iter().collect();
    let mb = [Edge::new(b, c), Edge::new(d, a)].into_iter().collect();
    ([a, b, c, d], ma, mb)
}

/// A honeycomb region drawn as a brick wall.
///
/// Vertices are `(r, c)` for `r < rows`, `c < cols`. Every row is a chain of
/// horizontal edges; `(r, c)-(r + 1, c)` is an edge when `r + c` is even. The
/// hexagons are the bricks `(r, c)..(r + 1, c + 2)` with `r + c` even.
///
/// `rows` must be even and `cols` odd, so that [`brick_wall_matching`]
/// covers every vertex.
pub fn brick_wall(rows: i32, cols: i32) -> Lattice {
    assert!(rows % 2 == 0 && cols % 2 == 1 && cols >= 3);
    let mut background = BTreeSet::new();
    for r in 0..rows {
        for c in 0..cols {
            if c + 1 < cols {
                background.insert(e((r, c), (r, c + 1)));
            }
            if r + 1 < rows && (r + c) % 2 == 0 {
                background.insert(e((r, c), (r + 1, c)));
            }
        }
    }
    let mut hexagons = Vec::new();
    for r in 0..rows - 1 {
        for c in 0..cols - 2 {
            if (r + c) % 2 == 0 {
                hexagons.push(Hexagon::new([
                    v(r, c),
                    v(r, c + 1),
                    v(r, c + 2),
                    v(r + 1, c + 2),
                    v(r + 1, c + 1),
                    v(r + 1, c),
                ]));
            }
        }
    }
    Lattice::new(hexagons, background)
}

/// A perfect matching of [`brick_wall`]: each pair of rows takes the
/// vertical edge in column 0 and horizontal edges starting at odd columns.
pub fn brick_wall_matching(rows: i32, cols: i32) -> Matching {
    let mut matching = Matching::new();
    for pair in 0..rows / 2 {
        let top = 2 * pair;
        matching.insert(e((top, 0), (top + 1, 0)));
        for r in [top, top + 1] {
            for c in (1..cols).step_by(2) {
                matching.insert(e((r, c), (r, c + 1)));
            }
        }
    }
    matching
}

/// A single row of `n` fused hexagons.
pub fn strip(n: i32) -> (Lattice, Matching) {
    (brick_wall(2, 2 * n + 1), brick_wall_matching(2, 2 * n + 1))
}

/// Two fused hexagons and their three perfect matchings.
///
/// The middle matching, which uses the shared edge, has both hexagons
/// active; the outer two have one each.
pub fn naphthalene() -> (Lattice, [Matching; 3]) {
    let (lattice, left) = strip(2);
    let middle: Matching = [
        e((0, 0), (0, 1)),
        e((1, 0), (1, 1)),
        e((0, 2), (1, 2)),
        e((0, 3), (0, 4)),
        e((1, 3), (1, 4)),
    ]
    .into_iter()
    .collect();
    let right: Matching = [
        e((0, 0), (0, 1)),
        e((1, 0), (1, 1)),
        e((0, 2), (0, 3)),
        e((1, 2), (1, 3)),
        e((0, 4), (1, 4)),
    ]
    .into_iter()
    .collect();
    (lattice, [left, middle, right])
}

/// `start` after `steps` flips driven by a generator seeded with `seed`.
pub fn randomized(lattice: &Lattice, start: &Matching, steps: usize, seed: u64) -> Matching {
    use rand::SeedableRng;
    let mut matching = start.clone();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    dimer_paint::dynamics::randomize(&mut matching, lattice, steps, &mut rng)
        .expect("brick wall regions always have an active hexagon");
    matching
}
