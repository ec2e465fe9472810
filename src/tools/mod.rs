// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executor plus the settings every command needs to reach `git` and `gh`.
//!
//! ```text
//! Tools<E: Executor>
//!   .git()      --> Git wrappers
//!   .gh()       --> GitHub wrappers
//!   .run()      mutating: dry-run prints, otherwise executes
//!   .capture()  read-only: always executes
//! ```

use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::error::TurboResult;
use crate::executor::Executor;
use crate::git::Git;
use crate::github::GitHub;

/// Injected command capability.
#[derive(Debug)]
pub struct Tools<E> {
    executor: E,
    dry_run: bool,
    git_program: String,
    gh_program: String,
}

impl<E: Executor> Tools<E> {
    /// Tools using `git` and `gh` from PATH, not in dry-run mode.
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            dry_run: false,
            git_program: "git".to_string(),
            gh_program: "gh".to_string(),
        }
    }

    /// Tools configured from `[tools]` and `global.dry`.
    pub fn from_config(executor: E, config: &Config) -> Self {
        Self::new(executor)
            .with_dry_run(config.global.dry)
            .with_programs(&config.tools.git, &config.tools.gh)
    }

    /// Enables or disables dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Overrides the `git` and `gh` program names.
    #[must_use]
    pub fn with_programs(mut self, git: &str, gh: &str) -> Self {
        git.clone_into(&mut self.git_program);
        gh.clone_into(&mut self.gh_program);
        self
    }

    /// Git command wrappers.
    pub const fn git(&self) -> Git<'_, E> {
        Git::new(self)
    }

    /// GitHub CLI command wrappers.
    pub const fn gh(&self) -> GitHub<'_, E> {
        GitHub::new(self)
    }

    pub const fn executor(&self) -> &E {
        &self.executor
    }

    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn git_program(&self) -> &str {
        &self.git_program
    }

    pub fn gh_program(&self) -> &str {
        &self.gh_program
    }

    /// Runs a command that changes something.
    ///
    /// In dry-run mode nothing is executed; the command is written to `out` as
    /// `Dry-run mode: <program> [<args>]. Working dir: <dir>`.
    ///
    /// # Errors
    ///
    /// Returns the executor's error, or an I/O error if `out` cannot be written.
    pub async fn run(
        &self,
        out: &mut dyn Write,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<()> {
        if self.dry_run {
            let line = format!(
                "Dry-run mode: {program} [{}]. Working dir: {}",
                args.join(" "),
                working_dir.display()
            );
            out.write_all(line.as_bytes())?;
            return Ok(());
        }
        self.executor.execute(out, working_dir, program, args).await
    }

    /// Runs a read-only query and returns its trimmed stdout.
    ///
    /// # Errors
    ///
    /// Returns the executor's error.
    pub async fn capture(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<String> {
        self.executor
            .execute_and_capture(working_dir, program, args)
            .await
    }
}
