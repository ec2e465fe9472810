// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers (Context: tools + config + campaign root)
//!   init
//!   clone, checkout          working copies
//!   foreach                  arbitrary command per repo
//!   commit, push             local changes
//!   pr                       create-prs, update-prs, pr-status
//!   status                   derived RepoStatus per repo
//!   config                   options
//!
//! bulk command:  Runner --> CampaignResults --> report::finish
//!                                               summary, failed logs, run log
//! ```

pub mod clone;
pub mod commit;
pub mod config;
pub mod foreach;
pub mod init;
pub mod pr;
pub mod report;
pub mod status;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use crate::campaign::{Campaign, Repo};
use crate::config::Config;
use crate::error::TurboResult;
use crate::executor::Executor;
use crate::runner::{ProgressDisplay, Step};
use crate::tools::Tools;

/// Everything a command needs besides its own arguments.
pub struct Context<E> {
    pub tools: Tools<E>,
    pub config: Config,
    root: PathBuf,
    repos_override: Option<PathBuf>,
    display: ProgressDisplay,
}

impl<E: Executor> Context<E> {
    /// Context for the campaign in the current directory.
    pub fn new(tools: Tools<E>, config: Config) -> Self {
        Self {
            tools,
            config,
            root: PathBuf::new(),
            repos_override: None,
            display: ProgressDisplay::Silent,
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    #[must_use]
    pub fn with_repos_override(mut self, repos: Option<PathBuf>) -> Self {
        self.repos_override = repos;
        self
    }

    #[must_use]
    pub const fn with_display(mut self, display: ProgressDisplay) -> Self {
        self.display = display;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn display(&self) -> ProgressDisplay {
        self.display
    }

    /// Load the campaign from the root, honouring `--repos`.
    ///
    /// # Errors
    ///
    /// Returns a `CampaignError` if the directory is not a usable campaign.
    pub fn load_campaign(&self) -> TurboResult<Campaign> {
        Campaign::load(
            &self.root,
            &self.config.campaign,
            self.repos_override.as_deref(),
        )
    }
}

/// `Some(skip)` when the working copy of `repo` has not been cloned yet.
pub(crate) fn skip_if_not_cloned(campaign: &Campaign, repo: &Repo) -> Option<Step> {
    (!campaign.repo_dir(repo).is_dir()).then(|| Step::skipped("not cloned"))
}
