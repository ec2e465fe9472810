// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for turbolift-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! turbolift [global options] <command>
//! init --name NAME
//! clone [--no-fork]
//! checkout
//! foreach -- PROGRAM ARGS...
//! commit --message MSG
//! push
//! create-prs [--draft] [--sleep D]
//! update-prs --close | --amend-description [--yes]
//! pr-status [--list]
//! status [--prs] [--filter STATUS]
//! options
//! ```

pub mod campaign;
pub mod global;
pub mod pr;
pub mod status;


use crate::cli::campaign::{CloneArgs, CommitArgs, ForeachArgs, InitArgs};
use crate::cli::global::GlobalOptions;
use crate::cli::pr::{CreatePrsArgs, PrStatusArgs, UpdatePrsArgs};
use crate::cli::status::StatusArgs;
use clap::{Parser, Subcommand};

/// Large-scale changes across many repositories.
#[derive(Debug, Parser)]
#[command(
    name = "turbolift",
    author,
    version,
    about = "Large-scale changes across many repositories",
    long_about = "turbolift-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Applies the same change to many repositories: clone them,\n\
                  run a command in each, then commit, push and open pull\n\
                  requests in bulk. See `turbolift <command> --help` for more\n\
                  information about a command.",
    after_help = "CAMPAIGN FILES:\n\n\
                  A campaign is a directory created by `turbolift init`. It holds\n\
                  repos.txt (one org/repo per line), README.md (the pull request\n\
                  title on the first line and the body below it) and .turbolift\n\
                  (configuration). Working copies live in work/<org>/<repo> on a\n\
                  branch named after the campaign. Every bulk command records its\n\
                  results in .turbolift-runs/; pass a failed-repos.txt from there\n\
                  to --repos to retry only the failures."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Creates a new campaign directory.
    Init(InitArgs),

    /// Forks and clones every repository and creates the campaign branch.
    Clone(CloneArgs),

    /// Creates the campaign branch in already cloned repositories.
    Checkout,

    /// Runs a command in every working copy.
    Foreach(ForeachArgs),

    /// Commits changes in every repository that has some.
    Commit(CommitArgs),

    /// Pushes the campaign branch of repositories with new commits.
    Push,

    /// Pushes and opens a pull request per repository.
    CreatePrs(CreatePrsArgs),

    /// Closes the campaign's pull requests or amends their description.
    UpdatePrs(UpdatePrsArgs),

    /// Summarizes the state of the campaign's pull requests.
    PrStatus(PrStatusArgs),

    /// Shows where every repository stands and what to run next.
    Status(StatusArgs),

    /// Lists all options and their values.
    Options,
}

impl Command {
    /// Name used in summaries and run log directories.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init(_) => "init",
            Self::Clone(_) => "clone",
            Self::Checkout => "checkout",
            Self::Foreach(_) => "foreach",
            Self::Commit(_) => "commit",
            Self::Push => "push",
            Self::CreatePrs(_) => "create-prs",
            Self::UpdatePrs(_) => "update-prs",
            Self::PrStatus(_) => "pr-status",
            Self::Status(_) => "status",
            Self::Options => "options",
        }
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
