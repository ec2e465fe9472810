// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `status` command.

use std::io::Write;
use tracing::debug;

use super::Context;
use crate::campaign::Repo;
use crate::cli::status::StatusArgs;
use crate::error::Result;
use crate::executor::Executor;
use crate::status::{self, RepoStatus, StatusCounts};

/// Derive and print the status of every repository.
///
/// With `--filter` only the names of matching repositories are printed, one
/// per line, so the output is a valid repos file.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or output cannot be
/// written.
pub async fn run_status_command<E: Executor>(
    ctx: &Context<E>,
    args: &StatusArgs,
    out: &mut dyn Write,
) -> Result<StatusCounts> {
    let campaign = ctx.load_campaign()?;

    let mut statuses: Vec<(&Repo, RepoStatus)> = Vec::with_capacity(campaign.repos().len());
    let mut counts = StatusCounts::default();
    for repo in campaign.repos() {
        let status = status::inspect(&ctx.tools, &campaign, repo, args.prs).await;
        debug!(repo = %repo, status = %status, "inspected");
        counts.add(&status);
        statuses.push((repo, status));
    }

    if let Some(filter) = args.filter {
        for (repo, status) in &statuses {
            if filter.matches(status) {
                writeln!(out, "{repo}")?;
            }
        }
        return Ok(counts);
    }

    for line in table(&statuses) {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    let width = counts.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, count) in counts.iter() {
        writeln!(out, "{label:<width$}  {count}")?;
    }
    Ok(counts)
}

/// `repo  status  next-step` rows with a header, columns aligned.
#[must_use]
pub fn table(statuses: &[(&Repo, RepoStatus)]) -> Vec<String> {
    let rows: Vec<(String, String, &str)> = statuses
        .iter()
        .map(|(repo, status)| {
            (
                repo.to_string(),
                status.to_string(),
                status.next_step().unwrap_or("-"),
            )
        })
        .collect();

    let repo_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max(4);
    let status_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max(6);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!("{:<repo_width$}  {:<status_width$}  NEXT", "REPO", "STATUS"));
    for (repo, status, next) in rows {
        lines.push(format!("{repo:<repo_width$}  {status:<status_width$}  {next}"));
    }
    lines
}
