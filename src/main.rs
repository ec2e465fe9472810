// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> chdir -C --> Config --> Logging --> Command Dispatch
//!   Init | Clone | Checkout | Foreach | Commit | Push
//!   CreatePrs | UpdatePrs | PrStatus | Status | Options
//! ```

use anyhow::Context as _;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use turbolift_rs::campaign::CONFIG_FILE;
use turbolift_rs::cli::global::GlobalOptions;
use turbolift_rs::cli::{self, Command};
use turbolift_rs::cmd::Context;
use turbolift_rs::cmd::clone::{run_checkout_command, run_clone_command};
use turbolift_rs::cmd::commit::{run_commit_command, run_push_command};
use turbolift_rs::cmd::config::run_options_command;
use turbolift_rs::cmd::foreach::run_foreach_command;
use turbolift_rs::cmd::init::run_init_command;
use turbolift_rs::cmd::pr::{run_create_prs_command, run_pr_status_command, run_update_prs_command};
use turbolift_rs::cmd::status::run_status_command;
use turbolift_rs::config::loader::ConfigLoader;
use turbolift_rs::config::{Config, ENV_PREFIX};
use turbolift_rs::error::Result;
use turbolift_rs::executor::RealExecutor;
use turbolift_rs::logging::{LogConfig, LogGuard, init_logging};
use turbolift_rs::runner::ProgressDisplay;
use turbolift_rs::tools::Tools;
use turbolift_rs::utility::prompt::StdinPrompt;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` when at least one repository failed.
async fn run(cli: &cli::Cli) -> Result<bool> {
    if let Some(dir) = &cli.global.campaign_dir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot change to campaign directory {}", dir.display()))?;
    }

    let loader = build_config_loader(&cli.global)?;
    let config_files = loader.format_loaded_files();
    let config = loader.build().context("failed to load configuration")?;

    let _log_guard: LogGuard = init_logging(&build_log_config(&config))?;
    debug!(files = ?config_files, command = cli.command.name(), "configuration loaded");

    dispatch_command(cli, config, &config_files).await
}

fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for spec in global.to_config_overrides() {
        loader = loader.set_override(&spec)?;
    }
    Ok(loader)
}

fn build_log_config(config: &Config) -> LogConfig {
    let log_file = &config.global.log_file;
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            (!log_file.as_os_str().is_empty()).then(|| log_file.display().to_string()),
        )
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: Config, config_files: &[String]) -> Result<bool> {
    let mut stdout = std::io::stdout().lock();
    let out: &mut dyn Write = &mut stdout;
    let dry_run = config.global.dry;

    let ctx = Context::new(Tools::from_config(RealExecutor, &config), config)
        .with_repos_override(cli.global.repos.clone())
        .with_display(ProgressDisplay::detect());

    let success = match &cli.command {
        Command::Init(args) => {
            run_init_command(out, Path::new(""), args, dry_run)?;
            true
        }
        Command::Options => {
            run_options_command(out, &ctx.config, config_files)?;
            true
        }
        Command::Clone(args) => run_clone_command(&ctx, args, out).await?.is_success(),
        Command::Checkout => run_checkout_command(&ctx, out).await?.is_success(),
        Command::Foreach(args) => run_foreach_command(&ctx, args, out).await?.is_success(),
        Command::Commit(args) => run_commit_command(&ctx, args, out).await?.is_success(),
        Command::Push => run_push_command(&ctx, out).await?.is_success(),
        Command::CreatePrs(args) => run_create_prs_command(&ctx, args, out).await?.is_success(),
        Command::UpdatePrs(args) => run_update_prs_command(&ctx, args, &StdinPrompt, out)
            .await?
            .is_none_or(|results| results.is_success()),
        Command::PrStatus(args) => run_pr_status_command(&ctx, args, out).await?.is_success(),
        Command::Status(args) => run_status_command(&ctx, args, out).await?.is_success(),
    };
    out.flush()?;
    Ok(success)
}
