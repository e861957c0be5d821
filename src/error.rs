//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icons
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration file: {0}")]
    ConfigFile(#[from] serde_json::Error),

    /// Every font candidate failed to load
    #[error("No usable font found (tried: {})", .tried.join(", "))]
    FontUnavailable { tried: Vec<String> },

    /// A font candidate is not installed on this system
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// Font data could not be parsed
    #[error("Invalid font data: {0}")]
    InvalidFont(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Status lines could not be written
    #[error("Failed to write status output: {0}")]
    Status(#[source] std::io::Error),

    /// PNG encoding failed
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
