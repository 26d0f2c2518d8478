// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Glauber dynamics: randomize a matching by repeated hexagon flips.
//!
//! Each step draws a hexagon with the caller's generator and flips it. Two
//! proposal rules are available:
//!
//! - [`Proposal::ActiveHexagon`]: draw uniformly among the currently active
//!   hexagons and always flip. A matching is then visited in proportion to
//!   its number of active hexagons.
//! - [`Proposal::AnyHexagon`]: draw uniformly among all hexagons and flip
//!   only if the draw is active; otherwise the step leaves the matching
//!   alone. The moves are symmetric, so the chain is uniform over the
//!   matchings reachable by flips.
//!
//! Either way, a configuration with no active hexagon cannot move and the
//! step fails with [`DimerError::NoActiveHexagon`].
//!
//! # Active-set tracking
//!
//! [`ActiveTracking::Rescan`] rebuilds the adjacency map and retests every
//! hexagon after each flip. [`ActiveTracking::Incremental`] patches the
//! adjacency map and retests only the flipped hexagon's neighbors, which are
//! the only hexagons whose activity can change. Both keep the active indices
//! in ascending order, so a given seed drives both to the same trajectory.
//!
//! # Example
//!
//! ```
//! use dimer_paint::dynamics::randomize;
//! use dimer_paint::geometry::{Edge, Hexagon, Matching, Vertex};
//! use dimer_paint::lattice::Lattice;
//! use rand::SeedableRng;
//!
//! let ring = [(0, 0), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)].map(|(r, c)| Vertex::new(r, c));
//! let lattice = Lattice::from_hexagons(vec![Hexagon::new(ring)]);
//! let mut matching: Matching = (0..3).map(|i| Edge::new(ring[2 * i], ring[2 * i + 1])).collect();
//! let original = matching.clone();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let report = randomize(&mut matching, &lattice, 2, &mut rng).unwrap();
//!
//! // A lone hexagon can only flip back and forth.
//! assert_eq!(matching, original);
//! assert_eq!(report.flips(), 2);
//! ```

use crate::dynamics::{flip_hex, flip_with_adjacency, is_active, DimerError};
use crate::geometry::Matching;
use crate::lattice::Lattice;
use crate::state::{AdjacencyMap, Counters, Statistics};
use rand::Rng;
use tracing::{debug, trace};

/// How a step chooses the hexagon to flip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Proposal {
    /// Uniform over the active hexagons; every step flips.
    #[default]
    ActiveHexagon,
    /// Uniform over all hexagons; inactive draws are rejected.
    AnyHexagon,
}

/// How the sampler keeps its active set current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveTracking {
    /// Retest only the flipped hexagon's neighbors.
    #[default]
    Incremental,
    /// Rebuild adjacency and retest every hexagon after each flip.
    Rescan,
}

/// Sampler configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerOptions {
    pub proposal: Proposal,
    pub tracking: ActiveTracking,
}

/// Outcome of a sampler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleReport {
    /// Counters accumulated over the run.
    pub statistics: Statistics,
    /// Number of active hexagons in the final matching.
    pub active_hexagons: usize,
}

impl SampleReport {
    /// Number of hexagons flipped.
    pub fn flips(&self) -> u64 {
        self.statistics.get(Counters::Flips)
    }
}

/// Indices of active hexagons, kept sorted, with an O(1) membership table.
#[derive(Debug, Clone)]
struct ActiveSet {
    members: Vec<usize>,
    flags: Vec<bool>,
}

impl ActiveSet {
    fn scan(lattice: &Lattice, adjacency: &AdjacencyMap, statistics: &mut Statistics) -> Self {
        let members = lattice.active_hexagons(adjacency);
        let mut flags = vec![false; lattice.hexagon_count()];
        for &index in &members {
            flags[index] = true;
        }
        statistics.add(Counters::ActivityChecks, lattice.hexagon_count() as u64);
        Self { members, flags }
    }

    fn set(&mut self, index: usize, active: bool) {
        if self.flags[index] == active {
            return;
        }
        self.flags[index] = active;
        match self.members.binary_search(&index) {
            Ok(pos) if !active => {
                self.members.remove(pos);
            }
            Err(pos) if active => self.members.insert(pos, index),
            _ => {}
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.flags[index]
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A Markov chain over the matchings of one lattice.
///
/// The sampler borrows the matching for its lifetime and owns the derived
/// adjacency map and active set, which always describe the matching as it
/// stands between steps.
#[derive(Debug)]
pub struct GlauberSampler<'a> {
    lattice: &'a Lattice,
    matching: &'a mut Matching,
    adjacency: AdjacencyMap,
    active: ActiveSet,
    options: SamplerOptions,
    statistics: Statistics,
    steps_taken: usize,
}

impl<'a> GlauberSampler<'a> {
    /// Prepare to sample starting from `matching`.
    ///
    /// Fails if `matching` has a vertex in two edges.
    pub fn new(
        lattice: &'a Lattice,
        matching: &'a mut Matching,
        options: SamplerOptions,
    ) -> Result<Self, DimerError> {
        let adjacency = AdjacencyMap::from_matching(matching)?;
        let mut statistics = Statistics::new();
        let active = ActiveSet::scan(lattice, &adjacency, &mut statistics);
        Ok(Self {
            lattice,
            matching,
            adjacency,
            active,
            options,
            statistics,
            steps_taken: 0,
        })
    }

    /// Number of hexagons that can flip right now.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Indices of the hexagons that can flip right now, ascending.
    pub fn active_hexagons(&self) -> &[usize] {
        &self.active.members
    }

    /// The matching in its current state.
    pub fn matching(&self) -> &Matching {
        &*self.matching
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Make one update attempt.
    ///
    /// Returns the index of the flipped hexagon, or None if the proposal was
    /// rejected.
    pub fn step(&mut self, rng: &mut impl Rng) -> Result<Option<usize>, DimerError> {
        let step = self.steps_taken;
        if self.active.is_empty() {
            return Err(DimerError::NoActiveHexagon { step });
        }
        self.steps_taken += 1;
        self.statistics.increment_counter(Counters::Steps);

        let index = match self.options.proposal {
            Proposal::ActiveHexagon => self.active.members[rng.gen_range(0..self.active.len())],
            Proposal::AnyHexagon => {
                let drawn = rng.gen_range(0..self.lattice.hexagon_count());
                if !self.active.contains(drawn) {
                    trace!(step, hexagon = drawn, "rejected inactive hexagon");
                    self.statistics.increment_counter(Counters::Rejections);
                    return Ok(None);
                }
                drawn
            }
        };

        self.flip(index)?;
        trace!(step, hexagon = index, active = self.active.len(), "flipped");
        Ok(Some(index))
    }

    /// Make `steps` update attempts.
    pub fn run(&mut self, steps: usize, rng: &mut impl Rng) -> Result<(), DimerError> {
        for _ in 0..steps {
            self.step(rng)?;
        }
        debug!(
            steps,
            active = self.active.len(),
            statistics = %self.statistics,
            "sampler run finished"
        );
        Ok(())
    }

    /// Finish sampling and summarize.
    pub fn into_report(self) -> SampleReport {
        SampleReport {
            active_hexagons: self.active.len(),
            statistics: self.statistics,
        }
    }

    fn flip(&mut self, index: usize) -> Result<(), DimerError> {
        let hexagon = self.lattice.hexagon(index)?;
        match self.options.tracking {
            ActiveTracking::Incremental => {
                flip_with_adjacency(self.matching, &mut self.adjacency, hexagon)?;
                for &neighbor in self.lattice.neighbors(index) {
                    let active = is_active(&self.lattice.hexagons()[neighbor], &self.adjacency);
                    self.active.set(neighbor, active);
                }
                self.statistics.add(
                    Counters::ActivityChecks,
                    self.lattice.neighbors(index).len() as u64,
                );
            }
            ActiveTracking::Rescan => {
                flip_hex(self.matching, hexagon);
                self.adjacency = AdjacencyMap::from_matching(self.matching)?;
                self.active = ActiveSet::scan(self.lattice, &self.adjacency, &mut self.statistics);
            }
        }
        self.statistics.increment_counter(Counters::Flips);
        Ok(())
    }
}

/// Run `steps` flips of active hexagons on `matching`.
///
/// Uses [`Proposal::ActiveHexagon`] with incremental tracking. With
/// `steps == 0` the matching is left unchanged.
pub fn randomize(
    matching: &mut Matching,
    lattice: &Lattice,
    steps: usize,
    rng: &mut impl Rng,
) -> Result<SampleReport, DimerError> {
    randomize_with(matching, lattice, steps, SamplerOptions::default(), rng)
}

/// Run `steps` update attempts on `matching` with the given options.
pub fn randomize_with(
    matching: &mut Matching,
    lattice: &Lattice,
    steps: usize,
    options: SamplerOptions,
    rng: &mut impl Rng,
) -> Result<SampleReport, DimerError> {
    let mut sampler = GlauberSampler::new(lattice, matching, options)?;
    sampler.run(steps, rng)?;
    Ok(sampler.into_report())
}
