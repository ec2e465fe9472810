// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull request commands.
//!
//! ```text
//! create-prs   description check --> per repo: push --> (pause) --> gh pr create
//! update-prs   confirm           --> per repo: gh pr close | gh pr edit
//! pr-status                          per repo: gh pr view --> PrSummary
//! ```


use anyhow::Context as _;
use std::io::Write;
use std::time::Duration;
use tracing::{debug, info};

use super::commit::push_repo;
use super::{Context, report, skip_if_not_cloned};
use crate::campaign::{Campaign, Description, Repo};
use crate::cli::pr::{CreatePrsArgs, PrStatusArgs, UpdateAction, UpdatePrsArgs};
use crate::error::Result;
use crate::executor::Executor;
use crate::github::{PullRequest, PullRequestStatus};
use crate::results::{CampaignResults, SummaryLabels};
use crate::runner::{Activity, Runner, Step};
use crate::status::PrSummary;
use crate::tools::Tools;
use crate::utility::prompt::Prompt;

pub const CREATE_LABELS: SummaryLabels = SummaryLabels::new("created");
pub const CLOSE_LABELS: SummaryLabels = SummaryLabels::new("closed");
pub const AMEND_LABELS: SummaryLabels = SummaryLabels::new("updated");
pub const STATUS_LABELS: SummaryLabels = SummaryLabels::new("queried");

fn pull_request(description: &Description, repo: &Repo, draft: bool) -> PullRequest {
    PullRequest {
        title: description.title.clone(),
        body: description.body.clone(),
        upstream_repo: repo.full_name(),
        draft,
    }
}

/// Push and open a pull request in every repository with new commits.
///
/// The description is validated before any repository is touched.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded, the description is
/// missing or unusable, or the report cannot be written.
pub async fn run_create_prs_command<E: Executor>(
    ctx: &Context<E>,
    args: &CreatePrsArgs,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;
    let description = campaign
        .pull_request_description()
        .context("refusing to create pull requests")?;
    let draft = args.draft || ctx.config.pr.draft;
    let pause = args
        .sleep
        .unwrap_or_else(|| Duration::from_millis(ctx.config.pr.sleep_ms));
    debug!(title = %description.title, draft, pause = ?pause, "creating pull requests");

    let mut runner = Runner::new("create-prs", ctx.display());
    let mut created = 0_usize;
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let pr = pull_request(&description, repo, draft);
        let pause_first = if created > 0 { pause } else { Duration::ZERO };
        let result = create_pr(&ctx.tools, &campaign, repo, &pr, pause_first, &mut activity).await;
        if matches!(result, Ok(Step::Done)) {
            created += 1;
        }
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &CREATE_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

async fn create_pr<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    pr: &PullRequest,
    pause: Duration,
    activity: &mut Activity,
) -> Result<Step> {
    if let skip @ Step::Skipped(_) = push_repo(tools, campaign, repo, activity).await? {
        return Ok(skip);
    }

    if !pause.is_zero() && !tools.is_dry_run() {
        debug!(pause = ?pause, "pausing before the next pull request");
        tokio::time::sleep(pause).await;
    }
    tools
        .gh()
        .create_pull_request(activity, campaign.repo_dir(repo), pr)
        .await?;
    Ok(Step::Done)
}

/// Close the campaign's pull requests or replace their title and body.
///
/// Asks for confirmation unless `--yes` or dry-run; `None` when declined.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded, the description is
/// unusable (for `--amend-description`), or the report cannot be written.
pub async fn run_update_prs_command<E: Executor>(
    ctx: &Context<E>,
    args: &UpdatePrsArgs,
    prompt: &dyn Prompt,
    out: &mut dyn Write,
) -> Result<Option<CampaignResults>> {
    let campaign = ctx.load_campaign()?;
    let action = args.action();
    let description = match action {
        UpdateAction::Close => None,
        UpdateAction::AmendDescription => Some(
            campaign
                .pull_request_description()
                .context("refusing to amend pull requests")?,
        ),
    };

    let count = campaign.repos().len();
    let question = match action {
        UpdateAction::Close => format!(
            "Close the pull requests of {count} repositories in campaign {}?",
            campaign.name()
        ),
        UpdateAction::AmendDescription => format!(
            "Replace title and body of the pull requests of {count} repositories in campaign {}?",
            campaign.name()
        ),
    };
    if !args.yes && !ctx.tools.is_dry_run() && !prompt.ask_yes_no(&question) {
        info!(campaign = campaign.name(), "update-prs declined");
        writeln!(out, "Aborted, no pull request was changed.")?;
        return Ok(None);
    }

    let mut runner = Runner::new("update-prs", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = update_pr(
            &ctx.tools,
            &campaign,
            repo,
            description.as_ref(),
            &mut activity,
        )
        .await;
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    let labels = match action {
        UpdateAction::Close => CLOSE_LABELS,
        UpdateAction::AmendDescription => AMEND_LABELS,
    };
    report::finish(out, &campaign, &results, &labels, ctx.tools.is_dry_run())?;
    Ok(Some(results))
}

/// `description` is `None` for `--close`.
async fn update_pr<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    description: Option<&Description>,
    activity: &mut Activity,
) -> Result<Step> {
    if let Some(skip) = skip_if_not_cloned(campaign, repo) {
        return Ok(skip);
    }

    let dir = campaign.repo_dir(repo);
    let gh = tools.gh();
    match description {
        None => gh.close_pull_request(activity, &dir, campaign.branch()).await?,
        Some(description) => {
            let pr = pull_request(description, repo, false);
            gh.edit_pull_request(activity, &dir, campaign.branch(), &pr)
                .await?;
        }
    }
    Ok(Step::Done)
}

/// Query the campaign's pull requests and print aggregate counts.
///
/// # Errors
///
/// Returns an error if the campaign cannot be loaded or output cannot be
/// written.
pub async fn run_pr_status_command<E: Executor>(
    ctx: &Context<E>,
    args: &PrStatusArgs,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let campaign = ctx.load_campaign()?;

    let mut runner = Runner::new("pr-status", ctx.display());
    let mut queried: Vec<(Repo, Option<PullRequestStatus>)> = Vec::new();
    for repo in campaign.repos() {
        let activity = runner.start(repo);
        let result = match skip_if_not_cloned(&campaign, repo) {
            Some(skip) => Ok(skip),
            None => ctx
                .tools
                .gh()
                .pull_request_status(campaign.repo_dir(repo), campaign.branch())
                .await
                .map(|status| {
                    queried.push((repo.clone(), status));
                    Step::Done
                })
                .map_err(Into::into),
        };
        runner.record(repo, activity, result);
    }
    let results = runner.finish();

    if args.list {
        let width = queried
            .iter()
            .map(|(repo, _)| repo.full_name().len())
            .max()
            .unwrap_or(0);
        for (repo, status) in &queried {
            writeln!(out, "{}", list_line(repo, status.as_ref(), width))?;
        }
        writeln!(out)?;
    }

    let mut summary = PrSummary::default();
    for (_, status) in &queried {
        summary.add(status.as_ref());
    }
    for line in summary.lines() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;

    report::finish(out, &campaign, &results, &STATUS_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}

/// `org/repo  STATE  REVIEW  url`, or `org/repo  NO PR`.
#[must_use]
pub fn list_line(repo: &Repo, status: Option<&PullRequestStatus>, width: usize) -> String {
    let name = repo.full_name();
    match status {
        None => format!("{name:<width$}  NO PR"),
        Some(pr) => format!(
            "{name:<width$}  {:<6}  {:<17}  {}",
            pr.state.as_str(),
            pr.review_decision().as_str(),
            pr.url
        ),
    }
}
