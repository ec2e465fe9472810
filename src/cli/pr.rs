// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the pull request commands.
//!
//! ```text
//! turbolift create-prs [--draft] [--sleep 5s]
//! turbolift update-prs --close | --amend-description [--yes]
//! turbolift pr-status [--list]
//! ```

use clap::{ArgGroup, Args};
use std::time::Duration;

use crate::utility::parse_duration;

/// Arguments for the `create-prs` command.
#[derive(Debug, Clone, Default, Args)]
pub struct CreatePrsArgs {
    /// Open the pull requests as drafts.
    #[arg(long)]
    pub draft: bool,

    /// Pause between pull requests, e.g. 500ms, 5s or 2m.
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    pub sleep: Option<Duration>,
}

/// Arguments for the `update-prs` command.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("action").required(true).args(["close", "amend_description"])))]
pub struct UpdatePrsArgs {
    /// Close the campaign's pull requests.
    #[arg(long)]
    pub close: bool,

    /// Replace title and body with the current description file.
    #[arg(long = "amend-description")]
    pub amend_description: bool,

    /// Do not ask for confirmation.
    #[arg(short = 'y', long)]
    pub yes: bool,
}

/// Action selected for `update-prs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    Close,
    AmendDescription,
}

impl UpdatePrsArgs {
    #[must_use]
    pub const fn action(&self) -> UpdateAction {
        if self.close {
            UpdateAction::Close
        } else {
            UpdateAction::AmendDescription
        }
    }
}

/// Arguments for the `pr-status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct PrStatusArgs {
    /// Print one line per repository.
    #[arg(long)]
    pub list: bool,
}
