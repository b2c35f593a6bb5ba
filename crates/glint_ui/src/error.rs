//! # GLINT Error Types
//!
//! Errors surface only while loading configuration. Runtime marquee
//! failures (missing layout, a stalled sibling) are soft and logged.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring GLINT widgets.
#[derive(Error, Debug)]
pub enum GlintError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written back out as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for GLINT configuration operations.
pub type GlintResult<T> = Result<T, GlintError>;
