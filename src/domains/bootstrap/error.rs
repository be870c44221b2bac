//! Error types for the bootstrap domain.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the Claude Desktop config.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// The per-user configuration directory could not be resolved.
    #[error("Could not determine the host configuration directory")]
    ConfigDirUnavailable,

    /// The existing config file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing config file is not valid JSON.
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The updated config file could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The updated config could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
