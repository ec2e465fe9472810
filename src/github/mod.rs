// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub CLI (`gh`) command wrappers.
//!
//! ```text
//! gh repo fork --clone=true <repo>        fork_and_clone
//! gh repo clone <repo>                     clone
//! gh pr create --title --body --repo       create_pull_request
//! gh pr close <branch>                     close_pull_request
//! gh pr edit <branch> --title --body       edit_pull_request
//! gh pr view <branch> --json ...           pull_request_status (query)
//! ```
//!
//! # Key Types
//!
//! | Type                | Purpose                          |
//! |---------------------|----------------------------------|
//! | `PullRequest`       | what to submit                   |
//! | `PullRequestStatus` | `gh pr view --json` response     |
//! | `PrState`           | OPEN / CLOSED / MERGED           |
//! | `ReviewDecision`    | review outcome, `None` if unset  |

use serde::Deserialize;
use std::io::Write;
use std::path::Path;

use crate::error::{GitHubError, ProcessError, TurboResult, TurboliftError};
use crate::executor::Executor;
use crate::tools::Tools;

/// Fields requested from `gh pr view --json`.
pub const PR_VIEW_FIELDS: &str = "state,reviewDecision,title,url,reactionGroups";

/// Marker in `gh pr view` stderr when the branch has no PR.
const NO_PULL_REQUEST_MARKER: &str = "no pull requests found";

/// Pull request to create or amend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub title: String,
    pub body: String,
    /// Repository the PR targets, e.g. `org/repo`.
    pub upstream_repo: String,
    pub draft: bool,
}

/// PR state as reported by GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrState {
    Open,
    Closed,
    Merged,
}

impl PrState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Merged => "MERGED",
        }
    }
}

/// Review decision of a PR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewDecision {
    Approved,
    ChangesRequested,
    ReviewRequired,
    #[default]
    #[serde(other)]
    None,
}

impl ReviewDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::ChangesRequested => "CHANGES_REQUESTED",
            Self::ReviewRequired => "REVIEW_REQUIRED",
            Self::None => "NONE",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionGroup {
    pub content: String,
    pub users: ReactionUsers,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionUsers {
    pub total_count: u64,
}

/// Response of `gh pr view --json state,reviewDecision,title,url,reactionGroups`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestStatus {
    pub state: PrState,
    #[serde(default)]
    review_decision: Option<ReviewDecision>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub reaction_groups: Vec<ReactionGroup>,
}

impl PullRequestStatus {
    /// Parse `gh pr view --json` output.
    ///
    /// # Errors
    ///
    /// Returns `GitHubError::InvalidResponse` if the JSON does not match.
    pub fn parse(json: &str) -> TurboResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            GitHubError::InvalidResponse {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Review decision, `None` when GitHub reports null or an empty string.
    #[must_use]
    pub fn review_decision(&self) -> ReviewDecision {
        self.review_decision.unwrap_or_default()
    }
}

/// `gh` wrappers bound to a [`Tools`] instance.
pub struct GitHub<'a, E> {
    tools: &'a Tools<E>,
}

impl<'a, E: Executor> GitHub<'a, E> {
    pub(crate) const fn new(tools: &'a Tools<E>) -> Self {
        Self { tools }
    }

    /// Fork `repo` under the authenticated user and clone the fork into `org_dir`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails.
    pub async fn fork_and_clone(
        &self,
        out: &mut dyn Write,
        org_dir: impl AsRef<Path>,
        repo: &str,
    ) -> TurboResult<()> {
        self.run(out, org_dir.as_ref(), &["repo", "fork", "--clone=true", repo])
            .await
    }

    /// Clone `repo` into `org_dir` without forking.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails.
    pub async fn clone(
        &self,
        out: &mut dyn Write,
        org_dir: impl AsRef<Path>,
        repo: &str,
    ) -> TurboResult<()> {
        self.run(out, org_dir.as_ref(), &["repo", "clone", repo]).await
    }

    /// Open a PR from the checked-out branch.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails.
    pub async fn create_pull_request(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        pr: &PullRequest,
    ) -> TurboResult<()> {
        let mut args = vec![
            "pr",
            "create",
            "--title",
            pr.title.as_str(),
            "--body",
            pr.body.as_str(),
            "--repo",
            pr.upstream_repo.as_str(),
        ];
        if pr.draft {
            args.push("--draft");
        }
        self.run(out, working_dir.as_ref(), &args).await
    }

    /// Close the PR whose head is `branch`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails.
    pub async fn close_pull_request(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        branch: &str,
    ) -> TurboResult<()> {
        self.run(out, working_dir.as_ref(), &["pr", "close", branch])
            .await
    }

    /// Replace title and body of the PR whose head is `branch`.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails.
    pub async fn edit_pull_request(
        &self,
        out: &mut dyn Write,
        working_dir: impl AsRef<Path>,
        branch: &str,
        pr: &PullRequest,
    ) -> TurboResult<()> {
        self.run(
            out,
            working_dir.as_ref(),
            &["pr", "edit", branch, "--title", pr.title.as_str(), "--body", pr.body.as_str()],
        )
        .await
    }

    /// Status of the PR whose head is `branch`, `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if gh fails for another reason, or
    /// `GitHubError::InvalidResponse` if its JSON cannot be decoded.
    pub async fn pull_request_status(
        &self,
        working_dir: impl AsRef<Path>,
        branch: &str,
    ) -> TurboResult<Option<PullRequestStatus>> {
        let result = self
            .tools
            .capture(
                working_dir.as_ref(),
                self.tools.gh_program(),
                &["pr", "view", branch, "--json", PR_VIEW_FIELDS],
            )
            .await;

        match result {
            Ok(json) => PullRequestStatus::parse(&json).map(Some),
            Err(err) if is_no_pull_request(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn run(&self, out: &mut dyn Write, working_dir: &Path, args: &[&str]) -> TurboResult<()> {
        self.tools
            .run(out, working_dir, self.tools.gh_program(), args)
            .await
    }
}

fn is_no_pull_request(err: &TurboliftError) -> bool {
    let TurboliftError::Process(inner) = err else {
        return false;
    };
    match inner.as_ref() {
        ProcessError::NonZeroExit { stderr, .. } => stderr.contains(NO_PULL_REQUEST_MARKER),
        ProcessError::Simulated { message, .. } => message.contains(NO_PULL_REQUEST_MARKER),
        _ => false,
    }
}
