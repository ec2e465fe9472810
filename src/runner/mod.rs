// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-repository command runner.
//!
//! ```text
//! Runner::new("clone")
//!   for repo in campaign.repos()
//!      start(repo)  --> Activity (log buffer + progress line)
//!      step(..)     --> Result<Step>   Done | Skipped(reason) | Err
//!      record(..)   --> Outcome        Succeeded | Skipped | Failed
//!   finish()        --> CampaignResults
//!
//! Progress display
//!   Spinner  ⠋ org/repo   then ✓ / - / ✗ org/repo
//!   Plain    org/repo: ok
//!   Silent   (none)
//! ```
//!
//! A failing repository never stops the loop; its error is kept in the result.


use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{info, warn};

use crate::campaign::Repo;
use crate::error::Result;
use crate::results::{CampaignResults, Outcome};

/// Successful end of a per-repository step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Done,
    Skipped(String),
}

impl Step {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }
}

/// Progress display style for per-repo activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressDisplay {
    /// Animated spinner on stderr, for terminals
    #[default]
    Spinner,
    /// One line per finished repository on stderr
    Plain,
    /// No visual progress
    Silent,
}

impl ProgressDisplay {
    /// Spinner on a terminal, plain lines otherwise.
    #[must_use]
    pub fn detect() -> Self {
        use std::io::IsTerminal;
        if std::io::stderr().is_terminal() {
            Self::Spinner
        } else {
            Self::Plain
        }
    }
}

fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
        })
        .clone()
}

/// Output sink and progress line for one repository.
///
/// Everything the step writes (command output, dry-run lines) lands in the
/// log, which is shown for failed repos and saved in the run log.
pub struct Activity {
    name: String,
    log: Vec<u8>,
    spinner: Option<ProgressBar>,
}

impl Activity {
    fn new(repo: &Repo, display: ProgressDisplay) -> Self {
        let name = repo.full_name();
        let spinner = (display == ProgressDisplay::Spinner).then(|| {
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(spinner_style());
            spinner.set_message(name.clone());
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });
        Self {
            name,
            log: Vec::new(),
            spinner,
        }
    }

    /// Captured output so far.
    #[must_use]
    pub fn log(&self) -> String {
        String::from_utf8_lossy(&self.log).into_owned()
    }

    /// Record a line in the log without running anything.
    pub fn note(&mut self, line: &str) {
        if self.log.last().is_some_and(|&b| b != b'\n') {
            self.log.push(b'\n');
        }
        self.log.extend_from_slice(line.as_bytes());
        if !line.ends_with('\n') {
            self.log.push(b'\n');
        }
    }

    fn finish(self, outcome: &Outcome, display: ProgressDisplay) -> String {
        let (symbol, word) = match outcome {
            Outcome::Succeeded => ("✓", "ok".to_string()),
            Outcome::Skipped(reason) => ("-", format!("skipped ({reason})")),
            Outcome::Failed(_) => ("✗", "failed".to_string()),
        };
        match (&self.spinner, display) {
            (Some(spinner), _) => spinner.finish_with_message(format!("{symbol} {}", self.name)),
            (None, ProgressDisplay::Plain) => eprintln!("{}: {word}", self.name),
            (None, _) => {}
        }
        self.log()
    }
}

/// Every `write` call starts on a new line of the log, so single-line
/// messages without a trailing newline (dry-run output) stay separate.
impl Write for Activity {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.log.last().is_some_and(|&b| b != b'\n') {
            self.log.push(b'\n');
        }
        self.log.extend_from_slice(buf);
        if let Some(spinner) = &self.spinner {
            spinner.tick();
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Collects per-repository outcomes for one command.
pub struct Runner {
    results: CampaignResults,
    display: ProgressDisplay,
}

impl Runner {
    pub fn new(command: &str, display: ProgressDisplay) -> Self {
        Self {
            results: CampaignResults::new(command),
            display,
        }
    }

    /// Fresh activity for `repo`.
    #[must_use]
    pub fn start(&self, repo: &Repo) -> Activity {
        Activity::new(repo, self.display)
    }

    /// Turn the step result into an outcome and keep it.
    pub fn record(&mut self, repo: &Repo, mut activity: Activity, result: Result<Step>) {
        let outcome = match result {
            Ok(Step::Done) => {
                info!(repo = %repo, command = self.results.command(), "done");
                Outcome::Succeeded
            }
            Ok(Step::Skipped(reason)) => {
                info!(repo = %repo, command = self.results.command(), %reason, "skipped");
                Outcome::Skipped(reason)
            }
            Err(e) => {
                let message = format!("{e:#}");
                warn!(repo = %repo, command = self.results.command(), error = %message, "failed");
                activity.note(&format!("Error: {message}"));
                Outcome::Failed(message)
            }
        };
        let log = activity.finish(&outcome, self.display);
        self.results.push(repo.clone(), outcome, log);
    }

    #[must_use]
    pub fn finish(self) -> CampaignResults {
        self.results
    }
}
