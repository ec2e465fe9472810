// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the working-copy commands.
//!
//! ```text
//! turbolift init --name NAME
//! turbolift clone [--no-fork]
//! turbolift checkout
//! turbolift foreach -- PROGRAM [ARGS...]
//! turbolift commit --message MSG
//! turbolift push
//! ```

use clap::Args;

/// Arguments for the `init` command.
#[derive(Debug, Clone, Args)]
pub struct InitArgs {
    /// Campaign name; also the directory and branch name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,
}

/// Arguments for the `clone` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CloneArgs {
    /// Clone the upstream repositories directly instead of forking them.
    #[arg(long = "no-fork")]
    pub no_fork: bool,
}

/// Arguments for the `foreach` command.
#[derive(Debug, Clone, Args)]
pub struct ForeachArgs {
    /// Program and arguments to run in every working copy, after `--`.
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Arguments for the `commit` command.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short = 'm', long = "message", value_name = "MESSAGE")]
    pub message: String,
}
