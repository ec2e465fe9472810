// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//!        run()
//!          |
//!          v
//!   build_command()
//!   args, cwd, env, stdio
//!          |
//!          v
//!   spawn + wait_with_output
//!          |
//!          v
//!   validate exit code
//!   (skip if ALLOW_FAILURE)
//!          |
//!          v
//!    ProcessOutput
//! ```

use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

use super::builder::{NON_INTERACTIVE_ENV, ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::error::{ProcessError, TurboResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the command line as a string (for logging and errors).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.display_name();
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag is not set).
    /// - The process is killed by a signal.
    pub async fn run(self) -> TurboResult<ProcessOutput> {
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(cmd = %cmd_line, pid = ?child.id(), "spawned");

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        let Some(exit_code) = output.status.code() else {
            return Err(ProcessError::Terminated { command: cmd_line }.into());
        };

        if exit_code != 0 && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            debug!(cmd = %cmd_line, exit_code, stderr = %stderr.trim(), "process failed");
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
                stderr,
            }
            .into());
        }

        trace!(cmd = %cmd_line, exit_code, "completed");
        Ok(ProcessOutput::new(exit_code, stdout, stderr))
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        if self.process_flags().contains(ProcessFlags::NON_INTERACTIVE) {
            for (key, value) in NON_INTERACTIVE_ENV {
                command.env(key, value);
            }
        }
        for (key, value) in self.environment() {
            command.env(key, value);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        // Kill on drop for safety
        command.kill_on_drop(true);

        command
    }
}
