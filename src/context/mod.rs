// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Session state combining the fixed lattice and the two editable panes.
//!
//! A [`Session`] splits its data the same way throughout:
//! - Fixed: the [`Lattice`], screen coordinates and rhombi, loaded once and
//!   never changed by any operation.
//! - Editable: two [`Pane`]s, each a matching plus a highlight set, together
//!   with the display settings.
//!
//! Every operation that changes a matching goes through the session, so the
//! lattice is shared by both panes and the counters cover the whole session.

mod pane;

pub use pane::{Pane, PaneId};

use crate::dynamics::{
    decompose, flip_hex, highlight_path, is_active, randomize_with, DimerError,
    DoubleDimerSummary, HighlightOutcome, SampleReport, SamplerOptions,
};
use crate::geometry::{Edge, Matching, Vertex};
use crate::io::{self, ConfigError, Configuration, Coordinates, Lengths, ShowFlags};
use crate::lattice::Lattice;
use crate::state::{AdjacencyMap, Counters, HighlightSet, Statistics};
use rand::Rng;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// A loaded double-dimer picture.
#[derive(Debug, Clone)]
pub struct Session {
    lattice: Lattice,
    panes: [Pane; 2],
    pub coords: BTreeMap<Vertex, Coordinates>,
    pub dual_coords: BTreeMap<Vertex, Coordinates>,
    pub rhombi: BTreeMap<Edge, [Vertex; 4]>,
    pub show: ShowFlags,
    pub lengths: Lengths,
    statistics: Statistics,
}

impl Session {
    /// Build a session from a freshly read configuration.
    pub fn from_configuration(config: Configuration) -> Self {
        let [a, b] = config.matchings;
        Self {
            lattice: Lattice::new(config.hexagons, config.background),
            panes: [Pane::new(a), Pane::new(b)],
            coords: config.coords,
            dual_coords: config.dual_coords,
            rhombi: config.rhombi,
            show: config.show,
            lengths: config.lengths,
            statistics: Statistics::new(),
        }
    }

    /// Build a session with no drawing data and default settings.
    pub fn new(lattice: Lattice, a: Matching, b: Matching) -> Self {
        Self {
            lattice,
            panes: [Pane::new(a), Pane::new(b)],
            coords: BTreeMap::new(),
            dual_coords: BTreeMap::new(),
            rhombi: BTreeMap::new(),
            show: ShowFlags::default(),
            lengths: Lengths::default(),
            statistics: Statistics::new(),
        }
    }

    /// Read a configuration directory.
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        io::load(dir).map(Self::from_configuration)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn pane(&self, id: PaneId) -> &Pane {
        &self.panes[id.index()]
    }

    pub fn matching(&self, id: PaneId) -> &Matching {
        &self.pane(id).matching
    }

    pub fn highlight(&self, id: PaneId) -> &HighlightSet {
        &self.pane(id).highlight
    }

    /// Counters accumulated by every randomization and flip so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Check that a pane holds a perfect matching of the lattice.
    pub fn validate(&self, id: PaneId) -> Result<(), DimerError> {
        self.lattice.validate(self.matching(id))
    }

    /// Indices of the hexagons that can flip in a pane, ascending.
    pub fn active_hexagons(&self, id: PaneId) -> Result<Vec<usize>, DimerError> {
        let adjacency = AdjacencyMap::from_matching(self.matching(id))?;
        Ok(self.lattice.active_hexagons(&adjacency))
    }

    /// Randomize a pane for the configured number of steps.
    pub fn randomize(
        &mut self,
        id: PaneId,
        rng: &mut impl Rng,
    ) -> Result<SampleReport, DimerError> {
        let steps = self.lengths.randomize_steps();
        self.randomize_with(id, steps, SamplerOptions::default(), rng)
    }

    /// Randomize a pane with an explicit step budget and sampler options.
    ///
    /// Highlights refer to strands of the old picture and are cleared from
    /// both panes.
    pub fn randomize_with(
        &mut self,
        id: PaneId,
        steps: usize,
        options: SamplerOptions,
        rng: &mut impl Rng,
    ) -> Result<SampleReport, DimerError> {
        let pane = &mut self.panes[id.index()];
        let report = randomize_with(&mut pane.matching, &self.lattice, steps, options, rng)?;
        self.statistics.merge(&report.statistics);
        self.clear_highlights();
        debug!(pane = %id, flips = report.flips(), "randomized pane");
        Ok(report)
    }

    /// Flip one hexagon of a pane, which must be active.
    ///
    /// Like a randomization, a flip reroutes the strands through the
    /// hexagon, so both highlight sets are cleared. A refused flip leaves
    /// them alone.
    pub fn flip(&mut self, id: PaneId, index: usize) -> Result<(), DimerError> {
        let hexagon = self.lattice.hexagon(index)?;
        let matching = &mut self.panes[id.index()].matching;
        let adjacency = AdjacencyMap::from_matching(matching)?;
        if !is_active(hexagon, &adjacency) {
            return Err(DimerError::InactiveHexagon { index });
        }
        flip_hex(matching, hexagon);
        self.statistics.increment_counter(Counters::Flips);
        self.clear_highlights();
        Ok(())
    }

    /// Toggle the highlight of the strand through `edge`.
    ///
    /// `first` takes the role of matching A in [`crate::dynamics::trace_path`],
    /// so the walk leaves the edge's smaller endpoint along the other pane.
    pub fn highlight_path(
        &mut self,
        first: PaneId,
        edge: Edge,
    ) -> Result<HighlightOutcome, DimerError> {
        let [a, b] = &mut self.panes;
        let (first, second) = match first {
            PaneId::A => (a, b),
            PaneId::B => (b, a),
        };
        highlight_path(
            &mut first.highlight,
            &mut second.highlight,
            &first.matching,
            &second.matching,
            edge,
        )
    }

    /// Drop every highlight from both panes.
    pub fn clear_highlights(&mut self) {
        for pane in &mut self.panes {
            pane.highlight.clear();
        }
    }

    /// Count the loops, doubled edges and open paths of the superposition.
    pub fn summary(&self) -> Result<DoubleDimerSummary, DimerError> {
        let a = AdjacencyMap::from_matching(self.matching(PaneId::A))?;
        let b = AdjacencyMap::from_matching(self.matching(PaneId::B))?;
        Ok(DoubleDimerSummary::from_components(&decompose(&a, &b)))
    }

    /// Write both matchings and the settings into `dir`.
    ///
    /// The lattice and drawing files are left as they are.
    pub fn save(&self, dir: &Path) -> Result<(), ConfigError> {
        fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        for id in PaneId::BOTH {
            io::save_matching(&dir.join(io::MATCHING_FILES[id.index()]), self.matching(id))?;
        }
        io::save_json(&dir.join(io::SHOW_FILE), &self.show)?;
        io::save_json(&dir.join(io::LENGTHS_FILE), &self.lengths)?;
        info!(dir = %dir.display(), "saved configuration");
        Ok(())
    }
}
