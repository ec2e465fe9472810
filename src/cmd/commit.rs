// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `commit` and `push` commands.

use std::io::Write;

use super::{Context, report, skip_if_not_cloned};
use crate::campaign::{Campaign, Repo};
use crate::cli::campaign::CommitArgs;
use crate::error::Result;
use crate::executor::Executor;
use crate::results::{CampaignResults, SummaryLabels};
use crate::runner::{Activity, Runner, Step};
use crate::tools::Tools;

pub const COMMIT_LABELS: SummaryLabels = SummaryLabels::new("committed").with_skipped("unchanged");
pub const PUSH_LABELS: SummaryLabels = SummaryLabels::new("pushed");

/// Remote the campaign branch is pushed to (the fork after `clone`).
pub const PUSH_REMOTE: &str = "origin";

/// Stage and commit every change in repositories that have some.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or the report cannot be
/// written.
pub async fn run_commit_command<E: Executor>(
    ctx: &Context<E>,
    args: &CommitArgs,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;

    let mut runner = Runner::new("commit", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = commit_repo(&ctx.tools, &campaign, repo, &args.message, &mut activity).await;
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &COMMIT_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

async fn commit_repo<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    message: &str,
    activity: &mut Activity,
) -> Result<Step> {
    if let Some(skip) = skip_if_not_cloned(campaign, repo) {
        return Ok(skip);
    }

    let dir = campaign.repo_dir(repo);
    let git = tools.git();
    if !git.is_repo_changed(&dir).await? {
        return Ok(Step::skipped("no changes"));
    }
    git.add_all(activity, &dir).await?;
    git.commit(activity, &dir, message).await?;
    Ok(Step::Done)
}

/// Push the campaign branch of every repository with unpushed commits.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or the report cannot be
/// written.
pub async fn run_push_command<E: Executor>(
    ctx: &Context<E>,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;

    let mut runner = Runner::new("push", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = push_repo(&ctx.tools, &campaign, repo, &mut activity).await;
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &PUSH_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

/// Push when there is something to push. Shared with `create-prs`.
pub(crate) async fn push_repo<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    activity: &mut Activity,
) -> Result<Step> {
    if let Some(skip) = skip_if_not_cloned(campaign, repo) {
        return Ok(skip);
    }

    let dir = campaign.repo_dir(repo);
    let git = tools.git();
    if git.unpushed_commits(&dir).await? == 0 {
        return Ok(Step::skipped("no commits to push"));
    }
    git.push(activity, &dir, PUSH_REMOTE, campaign.branch()).await?;
    Ok(Step::Done)
}
