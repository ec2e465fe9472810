// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command wrappers.
//!
//! ```text
//! mutations (dry-run aware)      queries (always run)
//!   checkout  -b <branch>          status --porcelain
//!   add --all                      log --oneline origin/HEAD..HEAD
//!   commit --message <msg>         rev-parse --abbrev-ref HEAD
//!   push --set-upstream <r> <b>
//! ```
//!
//! Each wrapper is exactly one `git` invocation in the given working copy.

use std::io::Write;
use std::path::Path;

use crate::error::TurboResult;
use crate::executor::Executor;
use crate::tools::Tools;

/// Ref the campaign branch is compared against to find unpushed commits.
pub const UPSTREAM_REF_RANGE: &str = "origin/HEAD..HEAD";

/// Git wrappers bound to a [`Tools`] instance.
pub struct Git<'a, E> {
    tools: &'a Tools<E>,
}

impl<'a, E: Executor> Git<'a, E> {
    pub(crate) const fn new(tools: &'a Tools<E>) -> Self {
        Self { tools }
    }

    /// Create and switch to `branch`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails (e.g. the branch already exists).
    pub async fn checkout(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        branch: &str,
    ) -> TurboResult<()> {
        self.run(out, working_dir.as_ref(), &["checkout", "-b", branch])
            .await
    }

    /// Stage every change, including untracked files.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails.
    pub async fn add_all(&self, out: &mut dyn Write, working_dir: impl AsRef<Path>) -> TurboResult<()> {
        self.run(out, working_dir.as_ref(), &["add", "--all"]).await
    }

    /// Commit staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails (e.g. nothing staged).
    pub async fn commit(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        message: &str,
    ) -> TurboResult<()> {
        self.run(out, working_dir.as_ref(), &["commit", "--message", message])
            .await
    }

    /// Push `branch` to `remote` and track it.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails.
    pub async fn push(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        remote: &str,
        branch: &str,
    ) -> TurboResult<()> {
        self.run(
            out,
            working_dir.as_ref(),
            &["push", "--set-upstream", remote, branch],
        )
        .await
    }

    /// Whether the working copy has staged, unstaged or untracked changes.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails.
    pub async fn is_repo_changed(&self, working_dir: impl AsRef<Path>) -> TurboResult<bool> {
        let status = self
            .capture(working_dir.as_ref(), &["status", "--porcelain"])
            .await?;
        Ok(!status.trim().is_empty())
    }

    /// Number of commits on `HEAD` that the remote default branch lacks.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails (e.g. `origin/HEAD` is not set).
    pub async fn unpushed_commits(&self, working_dir: impl AsRef<Path>) -> TurboResult<usize> {
        let log = self
            .capture(working_dir.as_ref(), &["log", "--oneline", UPSTREAM_REF_RANGE])
            .await?;
        Ok(log.lines().filter(|line| !line.trim().is_empty()).count())
    }

    /// Name of the checked-out branch (`HEAD` when detached).
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git fails.
    pub async fn current_branch(&self, working_dir: impl AsRef<Path>) -> TurboResult<String> {
        let branch = self
            .capture(working_dir.as_ref(), &["rev-parse", "--abbrev-ref", "HEAD"])
            .await?;
        Ok(branch.trim().to_string())
    }

    async fn run(&self, out: &mut dyn Write, working_dir: &Path, args: &[&str]) -> TurboResult<()> {
        self.tools
            .run(out, working_dir, self.tools.git_program(), args)
            .await
    }

    async fn capture(&self, working_dir: &Path, args: &[&str]) -> TurboResult<String> {
        self.tools
            .capture(working_dir, self.tools.git_program(), args)
            .await
    }
}

#[cfg(test)]
mod tests;
