// src/config/model.rs

use std::path::PathBuf;

use regex::Regex;

use crate::errors::FschangeError;

/// A textual substitution rule from a `& /regex/flags => replacement` line.
///
/// Macros apply, in declaration order, to every later non-macro line before
/// that line is classified. They live for one compile pass only.
#[derive(Debug, Clone)]
pub struct Macro {
    pub pattern: Regex,
    pub replacement: String,
}

impl Macro {
    /// Rewrite a line, replacing every match of the pattern.
    pub fn apply(&self, line: &str) -> String {
        self.pattern
            .replace_all(line, self.replacement.as_str())
            .into_owned()
    }
}

/// One watch rule as written in the config: a glob and a command template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobTemplate {
    pub glob: String,
    pub template: String,
}

/// A watch rule with the glob resolved to one concrete file.
///
/// A file matched by several rules yields several entries; duplicate
/// watches are permitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilepathTemplate {
    pub filepath: PathBuf,
    pub template: String,
}

/// Result of one parse pass: rules in file order, plus the lines that
/// failed to classify. Parse errors never abort the pass.
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub rules: Vec<GlobTemplate>,
    pub errors: Vec<FschangeError>,
}
