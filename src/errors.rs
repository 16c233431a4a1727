// src/errors.rs

//! Crate-wide error types.
//!
//! Errors local to one config line, one glob pattern or one command are
//! collected and logged rather than propagated; only an unreadable config
//! on the initial load is allowed to take the process down.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FschangeError {
    #[error("reading config file at {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config line {line_no}: {line:?}")]
    ConfigParse { line_no: usize, line: String },

    #[error("expanding glob pattern {pattern:?}: {source}")]
    GlobExpansion {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("watching {path:?}: {source}")]
    WatchSubscription {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("spawning command {command:?}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, FschangeError>;
