// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-repository outcomes of one bulk command.
//!
//! ```text
//! CampaignResults ("clone")
//!   RepoResult org/a  Succeeded           log
//!   RepoResult org/b  Skipped(reason)     log
//!   RepoResult org/c  Failed(message)     log
//!        |
//!        +--> summary()        turbolift clone completed (1 repos cloned, ...)
//!        +--> write_run_log()  .turbolift-runs/clone-<secs>/
//!                                successful-repos.txt
//!                                skipped-repos.txt
//!                                failed-repos.txt
//!                                logs/<org>/<repo>.log
//! ```


use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::campaign::Repo;
use crate::campaign::repo::format_repos;
use crate::error::TurboResult;

/// What happened to one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Skipped(String),
    Failed(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome plus the output captured while processing the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoResult {
    pub repo: Repo,
    pub outcome: Outcome,
    pub log: String,
}

/// Words used in the summary line, e.g. `cloned` / `skipped` / `errored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryLabels {
    pub succeeded: &'static str,
    pub skipped: &'static str,
    pub failed: &'static str,
}

impl SummaryLabels {
    #[must_use]
    pub const fn new(succeeded: &'static str) -> Self {
        Self {
            succeeded,
            skipped: "skipped",
            failed: "errored",
        }
    }

    #[must_use]
    pub const fn with_skipped(mut self, skipped: &'static str) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Results of one command over the whole campaign, in repos file order.
#[derive(Debug, Clone)]
pub struct CampaignResults {
    command: String,
    results: Vec<RepoResult>,
}

impl CampaignResults {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, repo: Repo, outcome: Outcome, log: impl Into<String>) {
        self.results.push(RepoResult {
            repo,
            outcome,
            log: log.into(),
        });
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn results(&self) -> &[RepoResult] {
        &self.results
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Succeeded))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failure)
    }

    /// No repository failed. Skipped repositories count as success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &RepoResult> {
        self.results.iter().filter(|r| r.outcome.is_failure())
    }

    /// `turbolift <command> completed (<n> repos <label>, ...)`.
    ///
    /// Skipped and failed counts only appear when non-zero.
    #[must_use]
    pub fn summary(&self, labels: &SummaryLabels) -> String {
        let mut parts = vec![format!("{} repos {}", self.succeeded(), labels.succeeded)];
        if self.skipped() > 0 {
            parts.push(format!("{} repos {}", self.skipped(), labels.skipped));
        }
        if self.failed() > 0 {
            parts.push(format!("{} repos {}", self.failed(), labels.failed));
        }
        format!(
            "turbolift {} completed ({})",
            self.command,
            parts.join(", ")
        )
    }

    /// Write the lists and per-repo logs to `<run_log_root>/<command>-<timestamp>/`.
    ///
    /// A run that lands on an existing directory gets `-1`, `-2`, ... appended
    /// instead of overwriting it. Returns the directory written.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file cannot be written.
    pub fn write_run_log(&self, run_log_root: &Path, timestamp: u64) -> TurboResult<PathBuf> {
        let dir = fresh_run_dir(run_log_root, &format!("{}-{timestamp}", self.command))?;

        let select = |pred: fn(&Outcome) -> bool| {
            format_repos(
                self.results
                    .iter()
                    .filter(|r| pred(&r.outcome))
                    .map(|r| &r.repo),
            )
        };
        std::fs::write(
            dir.join("successful-repos.txt"),
            select(|o| matches!(o, Outcome::Succeeded)),
        )?;
        std::fs::write(
            dir.join("skipped-repos.txt"),
            select(|o| matches!(o, Outcome::Skipped(_))),
        )?;
        std::fs::write(dir.join("failed-repos.txt"), select(Outcome::is_failure))?;

        for result in &self.results {
            let log_file = log_path(&dir, &result.repo);
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(log_file, render_log(result))?;
        }

        Ok(dir)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

fn fresh_run_dir(run_log_root: &Path, stem: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(run_log_root)?;
    let mut suffix = 0_u32;
    loop {
        let name = if suffix == 0 {
            stem.to_string()
        } else {
            format!("{stem}-{suffix}")
        };
        let dir = run_log_root.join(name);
        match std::fs::create_dir(&dir) {
            Ok(()) => return Ok(dir),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => suffix += 1,
            Err(e) => return Err(e),
        }
    }
}

fn log_path(dir: &Path, repo: &Repo) -> PathBuf {
    let mut path = dir.join("logs");
    if let Some(host) = &repo.host {
        path.push(host);
    }
    path.push(&repo.org);
    path.push(format!("{}.log", repo.name));
    path
}

fn render_log(result: &RepoResult) -> String {
    let status = match &result.outcome {
        Outcome::Succeeded => "succeeded".to_string(),
        Outcome::Skipped(reason) => format!("skipped: {reason}"),
        Outcome::Failed(message) => format!("failed: {message}"),
    };
    let mut text = result.log.clone();
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    let _ = writeln!(text, "--- {}: {status}", result.repo);
    text
}
