// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors from reading or writing a configuration directory.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the text and settings files around the core.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A record line with the wrong number of fields or an unparsable field.
    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The file could not be read or written.
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A JSON settings file that does not parse.
    #[error("Cannot parse settings {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration directory itself is missing.
    #[error("Configuration directory {} not found", .0.display())]
    MissingDirectory(PathBuf),
}
