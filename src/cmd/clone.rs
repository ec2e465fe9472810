// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `clone` and `checkout` commands.

use std::io::Write;
use tracing::debug;

use super::{Context, report, skip_if_not_cloned};
use crate::campaign::{Campaign, Repo};
use crate::cli::campaign::CloneArgs;
use crate::error::Result;
use crate::executor::Executor;
use crate::results::{CampaignResults, SummaryLabels};
use crate::runner::{Activity, Runner, Step};
use crate::tools::Tools;

pub const CLONE_LABELS: SummaryLabels = SummaryLabels::new("cloned");
pub const CHECKOUT_LABELS: SummaryLabels = SummaryLabels::new("checked out");

/// Fork (or clone) every repository and create the campaign branch.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or the report cannot be
/// written. Per-repository failures end up in the results.
pub async fn run_clone_command<E: Executor>(
    ctx: &Context<E>,
    args: &CloneArgs,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;
    let fork = ctx.config.clone.fork && !args.no_fork;
    debug!(campaign = campaign.name(), fork, "cloning");

    let mut runner = Runner::new("clone", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = clone_repo(&ctx.tools, &campaign, repo, fork, &mut activity).await;
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &CLONE_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

async fn clone_repo<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    fork: bool,
    activity: &mut Activity,
) -> Result<Step> {
    let dir = campaign.repo_dir(repo);
    if dir.exists() {
        return Ok(Step::skipped("directory already exists"));
    }

    let org_dir = campaign.org_dir(repo);
    if !tools.is_dry_run() {
        std::fs::create_dir_all(&org_dir)?;
    }

    let gh = tools.gh();
    if fork {
        gh.fork_and_clone(activity, &org_dir, &repo.full_name()).await?;
    } else {
        gh.clone(activity, &org_dir, &repo.full_name()).await?;
    }
    tools.git().checkout(activity, &dir, campaign.branch()).await?;
    Ok(Step::Done)
}

/// Create the campaign branch in repositories cloned without it.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or the report cannot be
/// written.
pub async fn run_checkout_command<E: Executor>(
    ctx: &Context<E>,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;

    let mut runner = Runner::new("checkout", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = checkout_repo(&ctx.tools, &campaign, repo, &mut activity).await;
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &CHECKOUT_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

async fn checkout_repo<E: Executor>(
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
    if git.current_branch(&dir).await? == campaign.branch() {
        return Ok(Step::skipped("already on the campaign branch"));
    }
    git.checkout(activity, &dir, campaign.branch()).await?;
    Ok(Step::Done)
}
