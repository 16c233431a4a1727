// src/config/parse.rs

use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::config::model::{GlobTemplate, Macro, ParseOutcome};
use crate::errors::FschangeError;

fn macro_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^& /([^/]+)/(\w*) => (.+)$").expect("macro line regex"))
}

/// Classify the lines of a config file.
///
/// An explicit fold over the lines: macros defined on earlier lines rewrite
/// later lines before those are classified, rules and unparseable lines
/// accumulate, and nothing aborts the pass.
pub fn parse_config(text: &str) -> ParseOutcome {
    let mut macros: Vec<Macro> = Vec::new();
    let mut outcome = ParseOutcome::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;

        // Macro definitions match on the raw line; earlier macros never
        // rewrite them.
        if let Some(caps) = macro_line_re().captures(raw) {
            match compile_macro(&caps[1], &caps[2], &caps[3]) {
                Ok(m) => {
                    debug!(line = line_no, pattern = %m.pattern, "adding macro");
                    macros.push(m);
                }
                Err(err) => {
                    debug!(line = line_no, error = %err, "macro did not compile");
                    outcome.errors.push(FschangeError::ConfigParse {
                        line_no,
                        line: raw.to_string(),
                    });
                }
            }
            continue;
        }

        let line = macros.iter().fold(raw.to_string(), |acc, m| m.apply(&acc));

        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with('#') {
            debug!(line = line_no, "ignoring comment: {line:?}");
            continue;
        }

        if let Some((glob, template)) = split_rule(&line) {
            debug!(line = line_no, glob = %glob, template = %template, "adding glob-template");
            outcome.rules.push(GlobTemplate { glob, template });
            continue;
        }

        outcome.errors.push(FschangeError::ConfigParse { line_no, line });
    }

    outcome
}

/// Split `<glob> -> <template>` at the first `->`, trimming both sides.
fn split_rule(line: &str) -> Option<(String, String)> {
    let (glob, template) = line.split_once("->")?;
    let glob = glob.trim();
    let template = template.trim();
    if glob.is_empty() || template.is_empty() {
        return None;
    }
    Some((glob.to_string(), template.to_string()))
}

/// Compile one macro definition.
///
/// Flags map onto regex builder options. `g` and `u` are accepted no-ops:
/// replacement is always global and patterns are always Unicode.
fn compile_macro(pattern: &str, flags: &str, replacement: &str) -> Result<Macro> {
    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'g' | 'u' => {}
            other => bail!("unsupported macro flag {other:?}"),
        }
    }

    Ok(Macro {
        pattern: builder.build()?,
        replacement: replacement.to_string(),
    })
}
