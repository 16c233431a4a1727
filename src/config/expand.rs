// src/config/expand.rs

use tracing::{debug, warn};

use crate::config::model::{FilepathTemplate, GlobTemplate};
use crate::errors::FschangeError;

/// Expand every rule's glob against the filesystem.
///
/// Runs on the blocking pool since expansion walks directories. A pattern
/// with zero matches legitimately yields zero entries; an invalid pattern
/// is reported while the remaining rules still expand. Order across rules
/// is preserved, order within one glob's matches is filesystem-dependent.
pub async fn expand_rules(
    rules: Vec<GlobTemplate>,
) -> (Vec<FilepathTemplate>, Vec<FschangeError>) {
    match tokio::task::spawn_blocking(move || expand_rules_blocking(rules)).await {
        Ok(result) => result,
        Err(err) => {
            warn!(error = %err, "glob expansion task failed");
            (Vec::new(), Vec::new())
        }
    }
}

fn expand_rules_blocking(
    rules: Vec<GlobTemplate>,
) -> (Vec<FilepathTemplate>, Vec<FschangeError>) {
    let mut pairs = Vec::new();
    let mut errors = Vec::new();

    for rule in rules {
        let paths = match glob::glob(&rule.glob) {
            Ok(paths) => paths,
            Err(source) => {
                errors.push(FschangeError::GlobExpansion {
                    pattern: rule.glob,
                    source,
                });
                continue;
            }
        };

        let mut matched = 0usize;
        for entry in paths {
            match entry {
                Ok(filepath) => {
                    matched += 1;
                    pairs.push(FilepathTemplate {
                        filepath,
                        template: rule.template.clone(),
                    });
                }
                // a directory became unreadable mid-walk; skip that entry
                Err(err) => {
                    warn!(glob = %rule.glob, error = %err, "skipping unreadable glob match");
                }
            }
        }
        debug!(glob = %rule.glob, matched, "expanded glob");
    }

    (pairs, errors)
}
