// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Campaign progress of each repository.
//!
//! ```text
//!                 working copy?
//!                no |      | yes
//!         NotCloned        on campaign branch?
//!                         no |      | yes
//!          Cloned { branch }        PR known (--prs)?
//!                                   OPEN   -> PrOpen
//!                                   MERGED -> PrMerged
//!                                   CLOSED -> PrClosed
//!                                   none   -> uncommitted changes?  -> Changed
//!                                             commits ahead?        -> Committed { n }
//!                                             otherwise             -> Branched
//! any git failure -> Failed(message)
//! ```
//!
//! | status      | next step     |
//! |-------------|---------------|
//! | not-cloned  | `clone`       |
//! | cloned      | `checkout`    |
//! | branched    | `foreach`     |
//! | changed     | `commit`      |
//! | committed   | `create-prs`  |
//! | pr-open     | (wait)        |
//! | pr-merged   | (done)        |
//! | pr-closed   | (done)        |
//! | failed      | investigate   |

pub mod pr_summary;


use std::fmt;
use std::str::FromStr;

use crate::campaign::{Campaign, Repo};
use crate::error::{ConfigError, TurboResult};
use crate::executor::Executor;
use crate::github::PrState;
use crate::tools::Tools;

pub use pr_summary::PrSummary;

/// Where a repository stands in the campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoStatus {
    NotCloned,
    /// Working copy exists but is on another branch.
    Cloned { branch: String },
    Branched,
    Changed,
    Committed { commits: usize },
    PrOpen,
    PrMerged,
    PrClosed,
    Failed(String),
}

/// Every status label, in campaign order.
pub const STATUS_LABELS: [&str; 9] = [
    "not-cloned",
    "cloned",
    "branched",
    "changed",
    "committed",
    "pr-open",
    "pr-merged",
    "pr-closed",
    "failed",
];

const FAILED_INDEX: usize = 8;

impl RepoStatus {
    const fn index(&self) -> usize {
        match self {
            Self::NotCloned => 0,
            Self::Cloned { .. } => 1,
            Self::Branched => 2,
            Self::Changed => 3,
            Self::Committed { .. } => 4,
            Self::PrOpen => 5,
            Self::PrMerged => 6,
            Self::PrClosed => 7,
            Self::Failed(_) => FAILED_INDEX,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        STATUS_LABELS[self.index()]
    }

    /// Command that moves the repository forward, if any.
    #[must_use]
    pub const fn next_step(&self) -> Option<&'static str> {
        match self {
            Self::NotCloned => Some("clone"),
            Self::Cloned { .. } => Some("checkout"),
            Self::Branched => Some("foreach"),
            Self::Changed => Some("commit"),
            Self::Committed { .. } => Some("create-prs"),
            Self::PrOpen | Self::PrMerged | Self::PrClosed => None,
            Self::Failed(_) => Some("investigate"),
        }
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cloned { branch } => write!(f, "cloned (on {branch})"),
            Self::Committed { commits } => write!(f, "committed ({commits} commits)"),
            Self::Failed(message) => write!(f, "failed ({message})"),
            other => f.write_str(other.label()),
        }
    }
}

/// Status label accepted by `status --filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFilter(usize);

impl StatusFilter {
    #[must_use]
    pub const fn matches(self, status: &RepoStatus) -> bool {
        status.index() == self.0
    }
}

impl FromStr for StatusFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        STATUS_LABELS
            .iter()
            .position(|label| *label == wanted)
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidValue {
                section: "status".to_string(),
                key: "filter".to_string(),
                message: format!("expected one of {}, got '{s}'", STATUS_LABELS.join(", ")),
            })
    }
}

/// What git (and optionally gh) reported about a working copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFacts {
    pub exists: bool,
    pub current_branch: String,
    pub changed: bool,
    pub commits_ahead: usize,
    pub pr_state: Option<PrState>,
}

/// Derive the status from observed facts.
#[must_use]
pub fn derive(facts: &RepoFacts, campaign_branch: &str) -> RepoStatus {
    if !facts.exists {
        return RepoStatus::NotCloned;
    }
    if facts.current_branch != campaign_branch {
        return RepoStatus::Cloned {
            branch: facts.current_branch.clone(),
        };
    }
    match facts.pr_state {
        Some(PrState::Open) => return RepoStatus::PrOpen,
        Some(PrState::Merged) => return RepoStatus::PrMerged,
        Some(PrState::Closed) => return RepoStatus::PrClosed,
        None => {}
    }
    if facts.changed {
        RepoStatus::Changed
    } else if facts.commits_ahead > 0 {
        RepoStatus::Committed {
            commits: facts.commits_ahead,
        }
    } else {
        RepoStatus::Branched
    }
}

/// Inspect one repository.
///
/// `query_prs` also asks gh for the PR of repos on the campaign branch.
/// Git or gh failures become [`RepoStatus::Failed`].
pub async fn inspect<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    query_prs: bool,
) -> RepoStatus {
    match gather(tools, campaign, repo, query_prs).await {
        Ok(facts) => derive(&facts, campaign.branch()),
        Err(e) => RepoStatus::Failed(format!("{e:#}")),
    }
}

async fn gather<E: Executor>(
    tools: &Tools<E>,
    campaign: &Campaign,
    repo: &Repo,
    query_prs: bool,
) -> TurboResult<RepoFacts> {
    let dir = campaign.repo_dir(repo);
    if !dir.is_dir() {
        return Ok(RepoFacts::default());
    }

    let git = tools.git();
    let current_branch = git.current_branch(&dir).await?;
    if current_branch != campaign.branch() {
        return Ok(RepoFacts {
            exists: true,
            current_branch,
            ..RepoFacts::default()
        });
    }

    let changed = git.is_repo_changed(&dir).await?;
    let commits_ahead = git.unpushed_commits(&dir).await?;
    let pr_state = if query_prs && !changed {
        tools
            .gh()
            .pull_request_status(&dir, campaign.branch())
            .await?
            .map(|pr| pr.state)
    } else {
        None
    };

    Ok(RepoFacts {
        exists: true,
        current_branch,
        changed,
        commits_ahead,
        pr_state,
    })
}

/// Number of repositories per status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts([usize; 9]);

impl StatusCounts {
    pub const fn add(&mut self, status: &RepoStatus) {
        self.0[status.index()] += 1;
    }

    /// Repositories with the same status as `status`.
    #[must_use]
    pub const fn count(&self, status: &RepoStatus) -> usize {
        self.0[status.index()]
    }

    /// Repositories whose inspection failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.0[FAILED_INDEX]
    }

    /// True when every repository could be inspected.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// `(label, count)` for every status present, in campaign order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        STATUS_LABELS
            .iter()
            .zip(self.0.iter())
            .filter(|(_, count)| **count > 0)
            .map(|(label, count)| (*label, *count))
    }
}
