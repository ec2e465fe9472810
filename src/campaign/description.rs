// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pull request description file.
//!
//! The first line is the title (leading `#` stripped), the rest is the body.

use std::path::Path;

use crate::error::{CampaignError, TurboResult};

/// Title left in the description by `init`.
pub const TEMPLATE_TITLE: &str = "TODO: Title of Pull Request";

/// Title and body of the pull requests a campaign opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub title: String,
    pub body: String,
}

impl Description {
    /// Split description text into title and body.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
        Self {
            title: first.trim_start_matches('#').trim().to_string(),
            body: rest.trim().to_string(),
        }
    }

    /// Read and parse the description file.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::ReadError` if the file cannot be read.
    pub fn load(path: &Path) -> TurboResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CampaignError::ReadError {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Refuse titles that would open useless pull requests.
    ///
    /// # Errors
    ///
    /// Returns `CampaignError::Description` for an empty or template title.
    pub fn validate(&self, path: &Path) -> TurboResult<()> {
        let message = if self.title.is_empty() {
            "title is empty"
        } else if self.title == TEMPLATE_TITLE {
            "title is still the template placeholder"
        } else {
            return Ok(());
        };

        Err(CampaignError::Description {
            path: path.display().to_string(),
            message: message.to_string(),
        }
        .into())
    }
}
