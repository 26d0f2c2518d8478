// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Display toggles and layout parameters.
//!
//! Neither is read by the combinatorial core except the randomization step
//! budget. Both are persisted as flat JSON objects next to the record files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Named boolean display toggles.
///
/// Lookup policy: a flag that is absent is off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowFlags {
    flags: BTreeMap<String, bool>,
}

const DEFAULT_FLAGS: [(&str, bool); 22] = [
    ("A", true),
    ("B", true),
    ("Center", true),
    ("Highlight", true),
    ("A_background", true),
    ("A_matching", true),
    ("A_tiling", false),
    ("A_boundary", false),
    ("A_centers", true),
    ("A_boxes", false),
    ("B_background", true),
    ("B_matching", true),
    ("B_tiling", false),
    ("B_boundary", false),
    ("B_centers", true),
    ("B_boxes", false),
    ("center_background", false),
    ("center_A_matching", true),
    ("center_B_matching", true),
    ("center_A_boundary", true),
    ("center_B_boundary", true),
    ("center_doubled_edges", true),
];

impl ShowFlags {
    /// No flags set; every lookup answers false.
    pub fn empty() -> Self {
        Self {
            flags: BTreeMap::new(),
        }
    }

    /// Value of `name`, false when absent.
    pub fn get(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Set `name` to `value`.
    pub fn set(&mut self, name: &str, value: bool) {
        self.flags.insert(name.to_string(), value);
    }

    /// Flip `name` and return its new value.
    pub fn toggle(&mut self, name: &str) -> bool {
        let value = !self.get(name);
        self.set(name, value);
        value
    }

    /// Iterate over the explicitly stored flags.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl Default for ShowFlags {
    fn default() -> Self {
        Self {
            flags: DEFAULT_FLAGS
                .iter()
                .map(|&(name, value)| (name.to_string(), value))
                .collect(),
        }
    }
}

/// Named integer layout parameters.
///
/// Missing parameters are filled from the defaults; parameters this crate
/// does not know are kept so other tools can store their own. Deserializing
/// goes through [`Lengths::with_defaults`], so a stored object is completed
/// the same way wherever it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, i64>", into = "BTreeMap<String, i64>")]
pub struct Lengths {
    values: BTreeMap<String, i64>,
}

/// Step budget for one randomization.
pub const RANDOMIZE_STEPS: &str = "randomize_steps";

const DEFAULT_RANDOMIZE_STEPS: i64 = 500;

/// Parameter written by older layouts and recomputed on every start.
const STALE_SCREEN_SIZE: &str = "old_screen_size";

const DEFAULT_LENGTHS: [(&str, i64); 8] = [
    ("button_height", 20),
    ("dimer_width", 3),
    ("hex_flipper_radius", 4),
    ("overlay_offset", 0),
    ("tile_edge_width", 2),
    ("shading_intensity", 1),
    (RANDOMIZE_STEPS, DEFAULT_RANDOMIZE_STEPS),
    ("y", 45),
];

impl Lengths {
    /// Complete `values` with the defaults and drop stale parameters.
    pub fn with_defaults(mut values: BTreeMap<String, i64>) -> Self {
        if values.remove(STALE_SCREEN_SIZE).is_some() {
            warn!("discarding stale layout parameter {}", STALE_SCREEN_SIZE);
        }
        for (name, value) in DEFAULT_LENGTHS {
            values.entry(name.to_string()).or_insert(value);
        }
        Self { values }
    }

    /// Value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Set `name` to `value`.
    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    /// The step budget for randomization.
    ///
    /// An absent parameter gives the default budget; a negative one counts
    /// as zero.
    pub fn randomize_steps(&self) -> usize {
        let steps = self.get(RANDOMIZE_STEPS).unwrap_or(DEFAULT_RANDOMIZE_STEPS);
        usize::try_from(steps).unwrap_or(0)
    }

    /// Iterate over all parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl Default for Lengths {
    fn default() -> Self {
        Self::with_defaults(BTreeMap::new())
    }
}

impl From<BTreeMap<String, i64>> for Lengths {
    fn from(values: BTreeMap<String, i64>) -> Self {
        Self::with_defaults(values)
    }
}

impl From<Lengths> for BTreeMap<String, i64> {
    fn from(lengths: Lengths) -> Self {
        lengths.values
    }
}
