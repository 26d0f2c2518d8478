// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading and writing configuration directories.
//!
//! A configuration directory holds one picture: the lattice, two matchings
//! and the display settings.
//!
//! | File | Contents | Required |
//! |------|----------|----------|
//! | `full.edge` | background edges | yes |
//! | `full.hexagon` | hexagonal faces | yes |
//! | `A.edge`, `B.edge` | the two matchings | yes |
//! | `full.vertex` | vertex screen coordinates | no |
//! | `full.dualvertex` | dual-vertex screen coordinates | no |
//! | `full.rhombus` | rhombus corners per edge | no |
//! | `show.json` | display toggles | no (defaults) |
//! | `lengths.json` | layout parameters | no (defaults) |

pub mod errors;
pub mod records;
pub mod settings;

pub use errors::ConfigError;
pub use records::{
    parse_edges, parse_hexagons, parse_rhombi, parse_vertices, write_edges, Coordinates,
};
pub use settings::{Lengths, ShowFlags, RANDOMIZE_STEPS};

use crate::geometry::{Edge, Hexagon, Matching, Vertex};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::info;

pub const VERTEX_FILE: &str = "full.vertex";
pub const DUAL_VERTEX_FILE: &str = "full.dualvertex";
pub const EDGE_FILE: &str = "full.edge";
pub const HEXAGON_FILE: &str = "full.hexagon";
pub const RHOMBUS_FILE: &str = "full.rhombus";
pub const MATCHING_FILES: [&str; 2] = ["A.edge", "B.edge"];
pub const SHOW_FILE: &str = "show.json";
pub const LENGTHS_FILE: &str = "lengths.json";

/// Everything read from one configuration directory.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub coords: BTreeMap<Vertex, Coordinates>,
    pub dual_coords: BTreeMap<Vertex, Coordinates>,
    pub background: BTreeSet<Edge>,
    pub hexagons: Vec<Hexagon>,
    pub rhombi: BTreeMap<Edge, [Vertex; 4]>,
    pub matchings: [Matching; 2],
    pub show: ShowFlags,
    pub lengths: Lengths,
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_required(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|e| io_error(path, e))
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_error(path, e)),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, ConfigError> {
    match read_optional(path)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ConfigError::Settings {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(None),
    }
}

/// Read a configuration directory.
pub fn load(dir: &Path) -> Result<Configuration, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::MissingDirectory(dir.to_path_buf()));
    }

    let path = dir.join(EDGE_FILE);
    let background = parse_edges(&read_required(&path)?, &path)?;
    let path = dir.join(HEXAGON_FILE);
    let hexagons = parse_hexagons(&read_required(&path)?, &path)?;

    let read_matching = |name: &str| -> Result<Matching, ConfigError> {
        let path = dir.join(name);
        Ok(parse_edges(&read_required(&path)?, &path)?.into_iter().collect())
    };
    let matchings = [read_matching(MATCHING_FILES[0])?, read_matching(MATCHING_FILES[1])?];

    let read_coords = |name: &str| -> Result<BTreeMap<Vertex, Coordinates>, ConfigError> {
        let path = dir.join(name);
        match read_optional(&path)? {
            Some(text) => parse_vertices(&text, &path),
            None => Ok(BTreeMap::new()),
        }
    };
    let coords = read_coords(VERTEX_FILE)?;
    let dual_coords = read_coords(DUAL_VERTEX_FILE)?;

    let path = dir.join(RHOMBUS_FILE);
    let rhombi = match read_optional(&path)? {
        Some(text) => parse_rhombi(&text, &path)?,
        None => BTreeMap::new(),
    };

    let show: ShowFlags = read_json(&dir.join(SHOW_FILE))?.unwrap_or_default();
    let lengths: Lengths = read_json(&dir.join(LENGTHS_FILE))?.unwrap_or_default();

    info!(
        dir = %dir.display(),
        hexagons = hexagons.len(),
        edges = background.len(),
        "loaded configuration"
    );
    Ok(Configuration {
        coords,
        dual_coords,
        background,
        hexagons,
        rhombi,
        matchings,
        show,
        lengths,
    })
}

fn create(path: &Path) -> Result<BufWriter<File>, ConfigError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| io_error(path, e))
}

/// Write `matching` as an edge record file.
pub fn save_matching(path: &Path, matching: &Matching) -> Result<(), ConfigError> {
    write_edges(create(path)?, matching).map_err(|e| io_error(path, e))
}

/// Write a settings value as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let mut writer = create(path)?;
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| ConfigError::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(|e| io_error(path, e))
}
