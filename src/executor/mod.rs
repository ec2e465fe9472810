// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External command execution.
//!
//! ```text
//!           Executor (trait)
//!          /               \
//!         v                 v
//!   RealExecutor        FakeExecutor
//!   which + tokio       records calls
//!   ProcessBuilder      canned replies
//! ```
//!
//! Dry-run is not an executor concern: [`crate::tools::Tools`] decides whether
//! a mutating command reaches the executor at all.

pub mod fake;

use std::io::Write;
use std::path::Path;

use crate::core::process::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, TurboResult};

pub use fake::FakeExecutor;

/// Runs external commands in a working directory.
#[allow(async_fn_in_trait)]
pub trait Executor {
    /// Run `program args...` in `working_dir`, writing its stdout and stderr to `out`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be spawned or exits
    /// with a non-zero status. The output is written to `out` either way.
    async fn execute(
        &self,
        out: &mut dyn Write,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<()>;

    /// Run `program args...` in `working_dir` and return its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if the program cannot be spawned or exits
    /// with a non-zero status.
    async fn execute_and_capture(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<String>;
}

/// Executor that spawns real processes.
///
/// Bare program names are resolved through PATH once and cached. Prompts
/// from git and gh are disabled so a campaign never blocks on stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealExecutor;

impl RealExecutor {
    fn command(working_dir: &Path, program: &str, args: &[&str]) -> TurboResult<ProcessBuilder> {
        Ok(Self::resolve(working_dir, program)?
            .args(args)
            .cwd(working_dir)
            .flags(ProcessFlags::NON_INTERACTIVE | ProcessFlags::ALLOW_FAILURE))
    }

    /// Bare names go through the cached PATH lookup. Anything with a path
    /// separator is taken relative to `working_dir`.
    fn resolve(working_dir: &Path, program: &str) -> TurboResult<ProcessBuilder> {
        let path = Path::new(program);
        if path.components().count() == 1 && !path.is_absolute() {
            return Ok(ProcessBuilder::which(program)?);
        }
        let path = working_dir.join(path);
        if !path.is_file() {
            return Err(ProcessError::ExecutableNotFound {
                name: path.display().to_string(),
            }
            .into());
        }
        Ok(ProcessBuilder::new(path))
    }
}

impl Executor for RealExecutor {
    async fn execute(
        &self,
        out: &mut dyn Write,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<()> {
        let output = Self::command(working_dir, program, args)?.run().await?;

        out.write_all(output.stdout().as_bytes())?;
        out.write_all(output.stderr().as_bytes())?;

        if !output.success() {
            return Err(ProcessError::NonZeroExit {
                command: command_string(program, args),
                code: output.exit_code(),
                stderr: output.stderr().to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn execute_and_capture(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<String> {
        let output = Self::command(working_dir, program, args)?.run().await?;

        if !output.success() {
            return Err(ProcessError::NonZeroExit {
                command: command_string(program, args),
                code: output.exit_code(),
                stderr: output.stderr().to_string(),
            }
            .into());
        }
        Ok(output.stdout().trim().to_string())
    }
}

/// `program arg1 arg2` for messages.
#[must_use]
pub fn command_string(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
