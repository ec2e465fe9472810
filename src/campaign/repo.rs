// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository identifiers and repos file parsing.
//!
//! ```text
//! # comment line              ignored
//! org/repo                    Repo { host: None, org, name }
//! github.example.com/org/repo Repo { host: Some(..), org, name }
//! org/other  # trailing       comment dropped
//! org/repo                    duplicate, dropped with a warning
//! ```

use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::warn;

use crate::error::{CampaignError, TurboResult, TurboliftError};

/// One repository of a campaign.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Repo {
    pub host: Option<String>,
    pub org: String,
    pub name: String,
}

impl Repo {
    /// Parse `org/name` or `host/org/name`.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::InvalidRepo` (with line `0`) when `entry` is malformed.
    pub fn parse(entry: &str) -> TurboResult<Self> {
        parse_entry(entry, 0)
    }

    /// Identifier as written in the repos file; passed to `gh`.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// `work/<org>/<name>` relative to `work_dir`.
    #[must_use]
    pub fn working_copy(&self, work_dir: &Path) -> PathBuf {
        self.org_dir(work_dir).join(&self.name)
    }

    /// `work/<org>` relative to `work_dir`; `gh repo clone` runs here.
    #[must_use]
    pub fn org_dir(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(&self.org)
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.host {
            Some(host) => write!(f, "{host}/{}/{}", self.org, self.name),
            None => write!(f, "{}/{}", self.org, self.name),
        }
    }
}

/// Repos parsed from a repos file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoList {
    pub repos: Vec<Repo>,
    /// Entries seen more than once, in order of their second occurrence.
    pub duplicates: Vec<Repo>,
}

/// Parse repos file content.
///
/// Blank lines and `#` comments are ignored. Duplicates keep their first
/// position and are logged.
///
/// # Errors
///
/// Returns `CampaignError::InvalidRepo` naming the first malformed line.
pub fn parse_repos(content: &str) -> TurboResult<RepoList> {
    let mut seen = BTreeSet::new();
    let mut list = RepoList::default();

    for (index, raw) in content.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }

        let repo = parse_entry(line, index + 1)?;
        if seen.insert(repo.clone()) {
            list.repos.push(repo);
        } else {
            warn!(repo = %repo, line = index + 1, "duplicate repository ignored");
            list.duplicates.push(repo);
        }
    }

    Ok(list)
}

/// Render repos as a repos file, one per line.
#[must_use]
pub fn format_repos<'a>(repos: impl IntoIterator<Item = &'a Repo>) -> String {
    repos
        .into_iter()
        .map(|repo| format!("{repo}\n"))
        .collect()
}

fn strip_comment(line: &str) -> &str {
    let line = line.trim();
    if line.starts_with('#') {
        return "";
    }
    match line.find(" #") {
        Some(pos) => line[..pos].trim_end(),
        None => line,
    }
}

fn entry_regex() -> TurboResult<&'static Regex> {
    static REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    REGEX
        .get_or_init(|| {
            Regex::new(
                r"^(?:(?P<host>[A-Za-z0-9._-]+)/)?(?P<org>[A-Za-z0-9._-]+)/(?P<name>[A-Za-z0-9._-]+)$",
            )
        })
        .as_ref()
        .map_err(|e| TurboliftError::other(format!("failed to compile repo pattern: {e}")))
}

fn parse_entry(entry: &str, line: usize) -> TurboResult<Repo> {
    let invalid = || CampaignError::InvalidRepo {
        line,
        entry: entry.to_string(),
    };

    let captures = entry_regex()?.captures(entry).ok_or_else(invalid)?;
    let segment = |name: &str| captures.name(name).map(|m| m.as_str().to_string());

    // `.` and `..` match the pattern but would escape the work directory.
    let is_dot = |s: &str| s == "." || s == "..";
    let org = segment("org").ok_or_else(invalid)?;
    let name = segment("name").ok_or_else(invalid)?;
    if is_dot(&org) || is_dot(&name) {
        return Err(invalid().into());
    }

    Ok(Repo {
        host: segment("host"),
        org,
        name,
    })
}
