// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! Config: GlobalConfig, CampaignConfig, CloneConfig, PrConfig, ToolsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Print mutating commands instead of running them.
    pub dry: bool,
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; empty disables file logging.
    pub log_file: PathBuf,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dry: false,
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: PathBuf::new(),
        }
    }
}

/// Campaign layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CampaignConfig {
    /// Campaign and branch name; the directory name if empty.
    pub name: String,
    pub repos_file: PathBuf,
    pub description_file: PathBuf,
    /// Parent of the `<org>/<repo>` working copies.
    pub work_dir: PathBuf,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            repos_file: PathBuf::from("repos.txt"),
            description_file: PathBuf::from("README.md"),
            work_dir: PathBuf::from("work"),
        }
    }
}

/// `clone` command defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloneConfig {
    /// Fork each repository before cloning it.
    pub fork: bool,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self { fork: true }
    }
}

/// Pull request defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrConfig {
    /// Open pull requests as drafts.
    pub draft: bool,
    /// Pause between created pull requests, in milliseconds.
    pub sleep_ms: u64,
}

/// External programs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolsConfig {
    pub git: String,
    pub gh: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            gh: "gh".to_string(),
        }
    }
}
