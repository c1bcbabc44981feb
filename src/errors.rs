// src/errors.rs

//! Crate-wide error types.
//!
//! Transient monitoring failures travel as `anyhow::Error` and are absorbed
//! inside the watch loop; [`ConfigError`] is the only error that should ever
//! reach the user, surfaced as usage text and exit code 1.

pub use anyhow::{Error, Result};

/// Fatal configuration problems.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("need at least one directory to watch")]
    NoDirectories,

    #[error("invalid glob pattern `{pattern}`")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}
