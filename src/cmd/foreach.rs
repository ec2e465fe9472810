// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `foreach` command.

use anyhow::bail;
use std::io::Write;
use tracing::debug;

use super::{Context, report, skip_if_not_cloned};
use crate::cli::campaign::ForeachArgs;
use crate::error::Result;
use crate::executor::Executor;
use crate::results::{CampaignResults, SummaryLabels};
use crate::runner::{Runner, Step};

pub const FOREACH_LABELS: SummaryLabels = SummaryLabels::new("succeeded");

/// Run `args.command` in every cloned working copy.
///
/// The command's output is captured in the repository log.
///
/// # Errors
///
/// Returns an error if no program is given, the campaign cannot be loaded or
/// the report cannot be written.
pub async fn run_foreach_command<E: Executor>(
    ctx: &Context<E>,
    args: &ForeachArgs,
    out: &mut dyn Write,
) -> Result<CampaignResults> {
    let Some((program, rest)) = args.command.split_first() else {
        bail!("foreach needs a command to run, e.g. turbolift foreach -- sed -i ...");
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();
    let campaign = ctx.load_campaign()?;
    debug!(program = %program, args = ?rest, "running in every repository");

    let mut runner = Runner::new("foreach", ctx.display());
    for repo in campaign.repos() {
        let mut activity = runner.start(repo);
        let result = match skip_if_not_cloned(&campaign, repo) {
            Some(skip) => Ok(skip),
            None => ctx
                .tools
                .run(&mut activity, &campaign.repo_dir(repo), program, &rest)
                .await
                .map(|()| Step::Done)
                .map_err(Into::into),
        };
        runner.record(repo, activity, result);
    }

    let results = runner.finish();
    report::finish(out, &campaign, &results, &FOREACH_LABELS, ctx.tools.is_dry_run())?;
    Ok(results)
}
