// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Comma-separated record files.
//!
//! One record per line, fields separated by commas, surrounding whitespace
//! ignored, blank lines skipped. Record shapes:
//!
//! | Kind | Fields |
//! |------|--------|
//! | vertex | `row,col,x,y` |
//! | edge | `row1,col1,row2,col2` |
//! | hexagon | six `row,col` pairs in cyclic order |
//! | rhombus | an edge (two pairs) followed by four `row,col` pairs |
//!
//! Any other line is a [`ConfigError::MalformedRecord`] naming the file and
//! the 1-based line number.

use crate::geometry::{Edge, Hexagon, Vertex};
use crate::io::ConfigError;
use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

/// Screen position attached to a vertex, used only for drawing.
pub type Coordinates = (f64, f64);

const VERTEX_FIELDS: usize = 4;
const EDGE_FIELDS: usize = 4;
const HEXAGON_FIELDS: usize = 12;
const RHOMBUS_FIELDS: usize = 12;

/// Split `text` into records of exactly `width` fields and convert each one.
fn parse_records<T>(
    text: &str,
    origin: &Path,
    width: usize,
    mut build: impl FnMut(&[&str]) -> Result<T, String>,
) -> Result<Vec<T>, ConfigError> {
    let mut records = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let malformed = |reason: String| ConfigError::MalformedRecord {
            path: origin.to_path_buf(),
            line: i + 1,
            reason,
        };
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != width {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                width,
                fields.len()
            )));
        }
        records.push(build(&fields).map_err(malformed)?);
    }
    Ok(records)
}

fn number<T: FromStr>(field: &str) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    field
        .parse()
        .map_err(|e| format!("cannot parse {:?}: {}", field, e))
}

/// Read consecutive `row,col` pairs as vertices.
fn vertices(fields: &[&str]) -> Result<Vec<Vertex>, String> {
    fields
        .chunks(2)
        .map(|pair| Ok(Vertex::new(number(pair[0])?, number(pair[1])?)))
        .collect()
}

fn edge(a: Vertex, b: Vertex) -> Result<Edge, String> {
    Edge::try_new(a, b).ok_or_else(|| format!("edge endpoints coincide at {}", a))
}

/// Parse `row,col,x,y` records.
pub fn parse_vertices(
    text: &str,
    origin: &Path,
) -> Result<BTreeMap<Vertex, Coordinates>, ConfigError> {
    let records = parse_records(text, origin, VERTEX_FIELDS, |fields| {
        let v = Vertex::new(number(fields[0])?, number(fields[1])?);
        let at: Coordinates = (number(fields[2])?, number(fields[3])?);
        Ok((v, at))
    })?;
    Ok(records.into_iter().collect())
}

/// Parse `row1,col1,row2,col2` records.
///
/// Duplicate lines collapse; an edge from a vertex to itself is malformed.
pub fn parse_edges(text: &str, origin: &Path) -> Result<BTreeSet<Edge>, ConfigError> {
    let records = parse_records(text, origin, EDGE_FIELDS, |fields| {
        let ends = vertices(fields)?;
        edge(ends[0], ends[1])
    })?;
    Ok(records.into_iter().collect())
}

/// Parse hexagon records of six vertex pairs, keeping file order.
pub fn parse_hexagons(text: &str, origin: &Path) -> Result<Vec<Hexagon>, ConfigError> {
    parse_records(text, origin, HEXAGON_FIELDS, |fields| {
        let ring = vertices(fields)?;
        let ring: [Vertex; 6] = std::array::from_fn(|i| ring[i]);
        Hexagon::try_new(ring).ok_or_else(|| "hexagon repeats a vertex".to_string())
    })
}

/// Parse rhombus records: the edge a rhombus is drawn around, then its
/// four corners.
pub fn parse_rhombi(
    text: &str,
    origin: &Path,
) -> Result<BTreeMap<Edge, [Vertex; 4]>, ConfigError> {
    let records = parse_records(text, origin, RHOMBUS_FIELDS, |fields| {
        let points = vertices(fields)?;
        let key = edge(points[0], points[1])?;
        Ok((key, [points[2], points[3], points[4], points[5]]))
    })?;
    Ok(records.into_iter().collect())
}

/// Write one `row1,col1,row2,col2` line per edge.
pub fn write_edges<'e>(
    mut writer: impl Write,
    edges: impl IntoIterator<Item = &'e Edge>,
) -> io::Result<()> {
    for e in edges {
        let (a, b) = (e.first(), e.second());
        writeln!(writer, "{},{},{},{}", a.row, a.col, b.row, b.col)?;
    }
    writer.flush()
}
