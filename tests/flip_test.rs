// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{brick_wall, brick_wall_matching, e, single_hexagon};
use dimer_paint::dynamics::{flip_hex, is_active};
use dimer_paint::state::AdjacencyMap;
use dimer_paint::Matching;
use proptest::prelude::*;

#[test]
fn test_alternating_hexagon_flips_to_complement() {
    let (lattice, even, _) = single_hexagon();
    let hexagon = &lattice.hexagons()[0];
    let mut matching = even;

    assert!(is_active(hexagon, &AdjacencyMap::from_matching(&matching).unwrap()));
    flip_hex(&mut matching, hexagon);

    let complement: Matching = [
        e((0, 1), (1, 1)),
        e((1, 0), (1, -1)),
        e((0, -1), (0, 0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(matching, complement);
}

#[test]
fn test_every_active_flip_keeps_a_perfect_matching() {
    let lattice = brick_wall(4, 7);
    let start = brick_wall_matching(4, 7);
    assert_eq!(lattice.validate(&start), Ok(()));

    let adjacency = AdjacencyMap::from_matching(&start).unwrap();
    let active = lattice.active_hexagons(&adjacency);
    assert!(!active.is_empty());

    for index in active {
        let mut matching = start.clone();
        flip_hex(&mut matching, &lattice.hexagons()[index]);
        assert_eq!(lattice.validate(&matching), Ok(()), "hexagon {}", index);
        flip_hex(&mut matching, &lattice.hexagons()[index]);
        assert_eq!(matching, start);
    }
}

#[test]
fn test_brick_wall_shape() {
    let lattice = brick_wall(4, 7);
    assert_eq!(lattice.vertices().len(), 28);
    assert_eq!(lattice.hexagon_count(), 8);
    // Interior hexagon (1,1) touches both rows of bricks around it.
    let interior = lattice
        .hexagons()
        .iter()
        .position(|h| h.vertices()[0] == common::v(1, 1))
        .unwrap();
    assert_eq!(lattice.neighbors(interior).len(), 6);
}

proptest! {
    #[test]
    fn test_flip_sequence_undoes_in_reverse(picks in prop::collection::vec(0usize..8, 0..40)) {
        let lattice = brick_wall(4, 7);
        let start = brick_wall_matching(4, 7);
        let mut matching = start.clone();
        let mut flipped = Vec::new();

        for pick in picks {
            let hexagon = &lattice.hexagons()[pick];
            let adjacency = AdjacencyMap::from_matching(&matching).unwrap();
            if is_active(hexagon, &adjacency) {
                flip_hex(&mut matching, hexagon);
                flipped.push(pick);
                prop_assert_eq!(lattice.validate(&matching), Ok(()));
            }
        }
        for &pick in flipped.iter().rev() {
            flip_hex(&mut matching, &lattice.hexagons()[pick]);
        }
        prop_assert_eq!(matching, start);
    }
}
