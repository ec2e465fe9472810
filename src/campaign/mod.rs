// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Campaign directory layout.
//!
//! ```text
//! <campaign>/
//!   .turbolift          campaign config ([campaign] name, files)
//!   repos.txt           org/repo per line
//!   README.md           PR title (first line) + body
//!   work/<org>/<repo>   working copies, branch = campaign name
//!   .turbolift-runs/    run logs, one directory per bulk command
//! ```
//!
//! A campaign is read once per invocation; nothing here talks to git.

pub mod description;
pub mod repo;
pub mod templates;


use std::path::{Path, PathBuf};

use crate::config::types::CampaignConfig;
use crate::error::{CampaignError, TurboResult};

pub use description::Description;
pub use repo::{Repo, RepoList};

/// Campaign configuration file, loaded automatically from the campaign root.
pub const CONFIG_FILE: &str = ".turbolift";

/// Directory under the campaign root that holds run logs.
pub const RUN_LOG_DIR: &str = ".turbolift-runs";

/// A loaded campaign.
#[derive(Debug, Clone)]
pub struct Campaign {
    name: String,
    root: PathBuf,
    repos_file: PathBuf,
    repos: Vec<Repo>,
    description_file: PathBuf,
    work_dir: PathBuf,
}

impl Campaign {
    /// Load the campaign rooted at `root`.
    ///
    /// `repos_override` replaces the configured repos file, e.g. with a
    /// `failed-repos.txt` from a previous run.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::NotACampaign` if the configured repos file is
    /// missing, `InvalidRepo` for a malformed entry and `NoRepositories` if
    /// it lists nothing.
    pub fn load(
        root: &Path,
        settings: &CampaignConfig,
        repos_override: Option<&Path>,
    ) -> TurboResult<Self> {
        let repos_file = match repos_override {
            Some(path) => path.to_path_buf(),
            None => {
                let path = root.join(&settings.repos_file);
                if !path.is_file() {
                    return Err(CampaignError::NotACampaign {
                        path: display_root(root),
                        repos_file: settings.repos_file.display().to_string(),
                    }
                    .into());
                }
                path
            }
        };

        let content =
            std::fs::read_to_string(&repos_file).map_err(|source| CampaignError::ReadError {
                path: repos_file.display().to_string(),
                source,
            })?;
        let list = repo::parse_repos(&content)?;
        if list.repos.is_empty() {
            return Err(CampaignError::NoRepositories {
                path: repos_file.display().to_string(),
            }
            .into());
        }

        let name = if settings.name.is_empty() {
            directory_name(root)?
        } else {
            settings.name.clone()
        };

        Ok(Self {
            name,
            root: root.to_path_buf(),
            repos_file,
            repos: list.repos,
            description_file: root.join(&settings.description_file),
            work_dir: root.join(&settings.work_dir),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Branch created in every working copy.
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn repos(&self) -> &[Repo] {
        &self.repos
    }

    #[must_use]
    pub fn repos_file(&self) -> &Path {
        &self.repos_file
    }

    /// Working copy of `repo`.
    #[must_use]
    pub fn repo_dir(&self, repo: &Repo) -> PathBuf {
        repo.working_copy(&self.work_dir)
    }

    /// Parent of the working copy, where `gh repo clone` runs.
    #[must_use]
    pub fn org_dir(&self, repo: &Repo) -> PathBuf {
        repo.org_dir(&self.work_dir)
    }

    #[must_use]
    pub fn description_file(&self) -> &Path {
        &self.description_file
    }

    /// Validated PR title and body.
    ///
    /// # Errors
    ///
    /// Returns a `CampaignError` if the file is missing or its title is empty
    /// or still the template placeholder.
    pub fn pull_request_description(&self) -> TurboResult<Description> {
        let description = Description::load(&self.description_file)?;
        description.validate(&self.description_file)?;
        Ok(description)
    }

    #[must_use]
    pub fn run_log_root(&self) -> PathBuf {
        self.root.join(RUN_LOG_DIR)
    }
}

/// Check that `name` can serve as a directory and branch name.
///
/// # Errors
///
/// Returns `CampaignError::InvalidName` describing the problem.
pub fn validate_name(name: &str) -> TurboResult<()> {
    let message = if name.is_empty() {
        "name is empty"
    } else if name.starts_with('.') || name.starts_with('-') {
        "name must not start with '.' or '-'"
    } else if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        "only ASCII letters, digits, '.', '_' and '-' are allowed"
    } else {
        return Ok(());
    };

    Err(CampaignError::InvalidName {
        name: name.to_string(),
        message: message.to_string(),
    }
    .into())
}

/// Create `<parent>/<name>` with the template files.
///
/// # Errors
///
/// Returns `CampaignError::InvalidName`, `CampaignError::AlreadyExists` or an
/// I/O error.
pub fn create(parent: &Path, name: &str) -> TurboResult<PathBuf> {
    validate_name(name)?;

    let dir = parent.join(name);
    if dir.exists() {
        return Err(CampaignError::AlreadyExists {
            path: dir.display().to_string(),
        }
        .into());
    }

    std::fs::create_dir_all(&dir)?;
    for (file, content) in templates::files(name) {
        std::fs::write(dir.join(file), content)?;
    }
    Ok(dir)
}

fn display_root(root: &Path) -> String {
    if root.as_os_str().is_empty() {
        ".".to_string()
    } else {
        root.display().to_string()
    }
}

fn directory_name(root: &Path) -> TurboResult<String> {
    let absolute = if root.as_os_str().is_empty() {
        std::env::current_dir()?
    } else {
        std::path::absolute(root)?
    };

    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            CampaignError::InvalidName {
                name: absolute.display().to_string(),
                message: "campaign directory has no name".to_string(),
            }
            .into()
        })
}
