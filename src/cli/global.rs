// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! -C DIR            ← campaign directory (chdir before anything else)
//! -r FILE           ← alternative repos file
//! -c FILE           ← additional config files (can repeat)
//! --dry-run         ← print mutating commands only
//! --log-level N     ← console verbosity (0-6)
//! --file-log-level  ← file verbosity (overrides --log-level)
//! --set S/K=VAL     ← direct config override
//!
//! Precedence: CLI flags > --set > env > --config > .turbolift > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Run as if turbolift was started in DIR.
    #[arg(short = 'C', long = "campaign-dir", value_name = "DIR", global = true)]
    pub campaign_dir: Option<PathBuf>,

    /// Use FILE instead of the campaign's repos file, e.g. a failed-repos.txt
    /// from .turbolift-runs to retry only the failures.
    #[arg(short = 'r', long = "repos", value_name = "FILE", global = true)]
    pub repos: Option<PathBuf>,

    /// Additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Print the git and gh commands that would change something instead of
    /// running them. Read-only queries still run.
    #[arg(long = "dry-run", visible_alias = "dry", global = true)]
    pub dry_run: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6), global = true)]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'pr/draft=true' or 'tools/gh=/opt/gh/bin/gh'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append, global = true)]
    pub options: Vec<String>,
}

impl GlobalOptions {
    /// Converts command-line options to `SECTION/KEY=VALUE` overrides.
    ///
    /// Flag-derived overrides come last so they beat `--set`.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global/output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global/file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global/log_file={}", path.display()));
        }

        if self.dry_run {
            overrides.push("global/dry=true".to_string());
        }

        overrides
    }
}
