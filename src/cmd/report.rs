// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-of-command reporting shared by every bulk command.

use anyhow::Context as _;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

use crate::campaign::Campaign;
use crate::error::Result;
use crate::results::{CampaignResults, Outcome, SummaryLabels};

/// Print the summary and failed logs, then write the run log.
///
/// The run log is not written in dry-run mode, since nothing was changed.
///
/// # Errors
///
/// Returns an error if `out` or the run log cannot be written.
pub fn finish(
    out: &mut dyn Write,
    campaign: &Campaign,
    results: &CampaignResults,
    labels: &SummaryLabels,
    dry_run: bool,
) -> Result<()> {
    write_failures(out, results)?;
    writeln!(out, "{}", results.summary(labels))?;

    if dry_run {
        debug!(command = results.command(), "dry-run, run log not written");
        return Ok(());
    }

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let dir = results
        .write_run_log(&campaign.run_log_root(), timestamp)
        .context("failed to write run log")?;
    info!(path = %dir.display(), "run log written");
    if results.failed() > 0 {
        writeln!(
            out,
            "Retry the failures with: turbolift {} --repos {}",
            results.command(),
            dir.join("failed-repos.txt").display()
        )?;
    }
    Ok(())
}

/// Log of every failed repository, indented under its name.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written.
pub fn write_failures(out: &mut dyn Write, results: &CampaignResults) -> Result<()> {
    for result in results.failures() {
        let Outcome::Failed(message) = &result.outcome else {
            continue;
        };
        writeln!(out, "{} failed: {message}", result.repo)?;
        for line in result.log.lines().filter(|l| !l.trim().is_empty()) {
            writeln!(out, "    {line}")?;
        }
    }
    Ok(())
}
