//! Error types for the m3helper library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by scanning, resolving, copying and configuration.
///
/// "Not found" and "already exists" are regular outcomes and never show up
/// here.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading, creating or copying a file failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying a texture into the target tree failed.
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory traversal failed (permission denied, symlink loop, ...).
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// The configuration file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::AppConfig`].
    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A TOML configuration from an earlier release could not be parsed.
    #[error("failed to parse legacy config {}: {source}", .path.display())]
    LegacyConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[source] serde_yaml::Error),

    /// The configuration file could not be written.
    #[error("failed to write config {}: {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
