// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

mod common;

use common::{brick_wall, brick_wall_matching, naphthalene, single_hexagon};
use dimer_paint::dynamics::{
    randomize, randomize_with, ActiveTracking, GlauberSampler, Proposal, SamplerOptions,
};
use dimer_paint::state::{AdjacencyMap, Counters};
use dimer_paint::{DimerError, Matching};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn options(proposal: Proposal, tracking: ActiveTracking) -> SamplerOptions {
    SamplerOptions { proposal, tracking }
}

#[test]
fn test_zero_steps() {
    let lattice = brick_wall(4, 7);
    let mut matching = brick_wall_matching(4, 7);
    let before = matching.clone();
    let mut rng = StdRng::seed_from_u64(11);

    let report = randomize(&mut matching, &lattice, 0, &mut rng).unwrap();
    assert_eq!(matching, before);
    assert_eq!(report.statistics.get(Counters::Steps), 0);
    assert_eq!(
        report.active_hexagons,
        lattice
            .active_hexagons(&AdjacencyMap::from_matching(&matching).unwrap())
            .len()
    );
}

#[test]
fn test_same_seed_same_result() {
    let lattice = brick_wall(6, 9);
    let start = brick_wall_matching(6, 9);
    let run = |seed| {
        let mut matching = start.clone();
        randomize(&mut matching, &lattice, 400, &mut StdRng::seed_from_u64(seed)).unwrap();
        matching
    };
    assert_eq!(run(3), run(3));
    assert_ne!(run(3), run(4));
}

#[test]
fn test_tracking_modes_agree_step_by_step() {
    let lattice = brick_wall(6, 9);
    for proposal in [Proposal::ActiveHexagon, Proposal::AnyHexagon] {
        let mut incremental = brick_wall_matching(6, 9);
        let mut rescan = incremental.clone();
        let mut rng_i = StdRng::seed_from_u64(99);
        let mut rng_r = StdRng::seed_from_u64(99);
        let mut fast = GlauberSampler::new(
            &lattice,
            &mut incremental,
            options(proposal, ActiveTracking::Incremental),
        )
        .unwrap();
        let mut slow = GlauberSampler::new(
            &lattice,
            &mut rescan,
            options(proposal, ActiveTracking::Rescan),
        )
        .unwrap();

        for _ in 0..300 {
            assert_eq!(fast.step(&mut rng_i), slow.step(&mut rng_r));
            assert_eq!(fast.active_hexagons(), slow.active_hexagons());
        }
        assert_eq!(fast.matching(), slow.matching());
        assert!(
            fast.statistics().get(Counters::ActivityChecks)
                < slow.statistics().get(Counters::ActivityChecks)
        );
    }
}

#[test]
fn test_counters_add_up() {
    let lattice = brick_wall(4, 9);
    let mut matching = brick_wall_matching(4, 9);
    let mut rng = StdRng::seed_from_u64(5);

    let report = randomize_with(
        &mut matching,
        &lattice,
        500,
        options(Proposal::AnyHexagon, ActiveTracking::Incremental),
        &mut rng,
    )
    .unwrap();
    let stats = &report.statistics;
    assert_eq!(stats.get(Counters::Steps), 500);
    assert_eq!(
        stats.get(Counters::Flips) + stats.get(Counters::Rejections),
        500
    );
    assert!(stats.get(Counters::Rejections) > 0);
}

#[test]
fn test_stuck_matching() {
    let (lattice, _, _) = single_hexagon();
    let ring = *lattice.hexagons()[0].vertices();
    // Match every ring vertex to a partner outside the hexagon.
    let mut matching: Matching = ring
        .iter()
        .map(|&x| dimer_paint::Edge::new(x, common::v(x.row + 5, x.col)))
        .collect();
    let mut rng = StdRng::seed_from_u64(0);

    let err = randomize(&mut matching, &lattice, 10, &mut rng).unwrap_err();
    assert_eq!(err, DimerError::NoActiveHexagon { step: 0 });
}

/// Position of `matching` among the three naphthalene matchings.
fn which(states: &[Matching; 3], matching: &Matching) -> usize {
    states
        .iter()
        .position(|m| m == matching)
        .expect("sampler left the naphthalene state space")
}

#[test]
fn test_any_hexagon_chain_is_uniform() {
    let (lattice, states) = naphthalene();
    let runs = 3000;
    let mut counts = [0usize; 3];
    let mut master = StdRng::seed_from_u64(2024);

    for _ in 0..runs {
        let mut matching = states[0].clone();
        let mut rng = StdRng::seed_from_u64(master.gen());
        randomize_with(
            &mut matching,
            &lattice,
            51,
            options(Proposal::AnyHexagon, ActiveTracking::Incremental),
            &mut rng,
        )
        .unwrap();
        counts[which(&states, &matching)] += 1;
    }

    for count in counts {
        let frequency = count as f64 / runs as f64;
        assert!((frequency - 1.0 / 3.0).abs() < 0.05, "counts {:?}", counts);
    }
}

#[test]
fn test_active_hexagon_chain_weights_by_activity() {
    // The middle matching has two active hexagons, the outer ones one each,
    // so the chain spends half its time in the middle.
    let (lattice, states) = naphthalene();
    let mut matching = states[0].clone();
    let mut rng = StdRng::seed_from_u64(17);
    let mut sampler = GlauberSampler::new(&lattice, &mut matching, SamplerOptions::default())
        .unwrap();

    let steps = 20000;
    let mut counts = [0usize; 3];
    for step in 0..steps {
        sampler.step(&mut rng).unwrap();
        let state = which(&states, sampler.matching());
        // Outer matchings can only move to the middle one.
        assert_eq!(state == 1, step % 2 == 0);
        counts[state] += 1;
    }

    let frequency = |i: usize| counts[i] as f64 / steps as f64;
    assert!((frequency(1) - 0.5).abs() < 1e-9);
    assert!((frequency(0) - 0.25).abs() < 0.03, "counts {:?}", counts);
    assert!((frequency(2) - 0.25).abs() < 0.03, "counts {:?}", counts);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_runs_keep_perfect_matchings(
        seed in any::<u64>(),
        steps in 0usize..300,
        any_hexagon in any::<bool>(),
    ) {
        let lattice = brick_wall(6, 9);
        let mut matching = brick_wall_matching(6, 9);
        let proposal = if any_hexagon { Proposal::AnyHexagon } else { Proposal::ActiveHexagon };
        let mut rng = StdRng::seed_from_u64(seed);

        let report = randomize_with(
            &mut matching,
            &lattice,
            steps,
            options(proposal, ActiveTracking::Incremental),
            &mut rng,
        )
        .unwrap();

        prop_assert_eq!(lattice.validate(&matching), Ok(()));
        let adjacency = AdjacencyMap::from_matching(&matching).unwrap();
        prop_assert_eq!(report.active_hexagons, lattice.active_hexagons(&adjacency).len());
        prop_assert_eq!(report.statistics.get(Counters::Steps), steps as u64);
    }
}
