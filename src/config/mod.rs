// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for turbolift-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. .turbolift (campaign dir)
//! 3. --config (repeatable)
//! 4. TURBOLIFT_* env vars
//! 5. --set SECTION/KEY=VALUE
//! 6. CLI flags (--dry-run, log options)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! TURBOLIFT_GLOBAL__DRY=true          → global.dry = true
//! TURBOLIFT_CAMPAIGN__WORK_DIR=src    → campaign.work_dir = "src"
//! TURBOLIFT_TOOLS__GH=/opt/gh/bin/gh  → tools.gh = "/opt/gh/bin/gh"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{CampaignConfig, CloneConfig, GlobalConfig, PrConfig, ToolsConfig};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "TURBOLIFT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub global: GlobalConfig,
    pub campaign: CampaignConfig,
    pub clone: CloneConfig,
    pub pr: PrConfig,
    pub tools: ToolsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use turbolift_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional(".turbolift")
    ///     .with_env_prefix("TURBOLIFT")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_campaign_options(&mut options);
        self.format_command_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("global.dry".into(), self.global.dry.to_string());
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global.log_file.display().to_string(),
        );
    }

    fn format_campaign_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("campaign.name".into(), self.campaign.name.clone());
        options.insert(
            "campaign.repos_file".into(),
            self.campaign.repos_file.display().to_string(),
        );
        options.insert(
            "campaign.description_file".into(),
            self.campaign.description_file.display().to_string(),
        );
        options.insert(
            "campaign.work_dir".into(),
            self.campaign.work_dir.display().to_string(),
        );
    }

    fn format_command_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("clone.fork".into(), self.clone.fork.to_string());
        options.insert("pr.draft".into(), self.pr.draft.to_string());
        options.insert("pr.sleep_ms".into(), self.pr.sleep_ms.to_string());
        options.insert("tools.git".into(), self.tools.git.clone());
        options.insert("tools.gh".into(), self.tools.gh.clone());
    }
}
