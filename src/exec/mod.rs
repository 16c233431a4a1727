// src/exec/mod.rs

//! Command execution.
//!
//! Dispatch is fire-and-forget: each command runs as a detached task,
//! observed only through log output. There is no retry, no timeout and no
//! cancellation; a hung child process is left alone. Commands from
//! different watch units (or repeat triggers on one unit) run concurrently
//! with no ordering between them.

use std::process::Stdio;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::errors::{FschangeError, Result};

/// Seam between watch units and process execution, so tests can count
/// dispatches without spawning processes.
pub trait CommandRunner: Send + Sync + 'static {
    fn dispatch(&self, command: &str);
}

/// Production runner: executes the command through the platform shell.
#[derive(Debug, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn dispatch(&self, command: &str) {
        let command = command.to_string();
        tokio::spawn(async move {
            if let Err(err) = run_shell(&command).await {
                error!(cmd = %command, error = %err, "command failed");
            }
        });
    }
}

/// Run one shell command to completion, logging captured output.
///
/// A non-zero exit status is logged, not returned: it must not affect the
/// owning watch unit's future triggers.
async fn run_shell(command: &str) -> Result<()> {
    info!("$ {command}");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(command);
        c
    };

    cmd.stdout(Stdio::piped()).stderr(Stdio::piped());

    let mut child = cmd.spawn().map_err(|source| FschangeError::CommandSpawn {
        command: command.to_string(),
        source,
    })?;

    if let Some(stdout) = child.stdout.take() {
        let cmd = command.to_string();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stdout).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                info!(cmd = %cmd, "stdout: {line}");
            }
        });
    }

    if let Some(stderr) = child.stderr.take() {
        let cmd = command.to_string();
        tokio::spawn(async move {
            let mut lines = BufReader::new(stderr).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                debug!(cmd = %cmd, "stderr: {line}");
            }
        });
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("waiting for command {command:?}"))?;

    if !status.success() {
        error!(
            cmd = %command,
            exit_code = status.code().unwrap_or(-1),
            "command exited with non-zero status"
        );
    }

    Ok(())
}
