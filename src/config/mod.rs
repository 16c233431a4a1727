// src/config/mod.rs

//! Config parsing and compilation.
//!
//! Responsibilities:
//! - Define the config data model (`model.rs`).
//! - Classify config lines into macros, comments and watch rules
//!   (`parse.rs`).
//! - Expand rule globs against the filesystem (`expand.rs`).
//!
//! Reading the file itself is left to the watch set manager, so that a
//! reload whose read fails can keep the previous watch set.

pub mod expand;
pub mod model;
pub mod parse;

use std::path::PathBuf;

pub use expand::expand_rules;
pub use model::{FilepathTemplate, GlobTemplate, Macro, ParseOutcome};
pub use parse::parse_config;

/// Default config location: `.fs-change` in the home directory, falling
/// back to the current directory when no home is known.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".fs-change"),
        None => PathBuf::from(".fs-change"),
    }
}
