// src/template.rs

//! Command template expansion.
//!
//! A template contains zero or more `{name}` placeholders resolved against
//! one file's path-derived fields:
//!
//! - `{file}`     the path as given
//! - `{extname}`  extension including the leading `.` (empty if none)
//! - `{basename}` file name without directory or extension
//! - `{dirname}`  directory component
//!
//! Unrecognised names are reproduced verbatim, so literal `{...}` text can
//! appear in commands (awk scripts, shell brace expansion and the like).

use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(.+?)\}").expect("placeholder regex"))
}

/// Expand a command template for one concrete file path.
///
/// Pure: the same template and path always produce the same command, and
/// each placeholder resolves independently against the same context.
pub fn expand_command(template: &str, filepath: &Path) -> String {
    let file = filepath.to_string_lossy().into_owned();
    let extname = filepath
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    let basename = filepath
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dirname = dirname(filepath);

    placeholder_re()
        .replace_all(template, |caps: &Captures<'_>| match &caps[1] {
            "file" => file.clone(),
            "extname" => extname.clone(),
            "basename" => basename.clone(),
            "dirname" => dirname.clone(),
            _ => caps[0].to_string(),
        })
        .into_owned()
}

/// Directory component of a path; `.` when there is none.
fn dirname(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
        _ => ".".to_string(),
    }
}
