// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional(.turbolift)
//!   .add_toml_file(--config)
//!   .with_env_prefix(TURBOLIFT)
//!   .set_override(--set)
//!   .set(CLI flags)
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Sources are applied in the order they are added; env vars always apply
//! after the files and before the overrides.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result, TurboResult};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    overrides: Vec<(String, config::Value)>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            overrides: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override (`section.key`).
    #[must_use]
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Self {
        self.overrides.push((key.to_string(), value.into()));
        self
    }

    /// Applies a `SECTION/KEY=VALUE` override from the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if `spec` is malformed.
    pub fn set_override(self, spec: &str) -> TurboResult<Self> {
        let (key, value) = parse_override(spec)?;
        Ok(self.set(&key, value))
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let mut builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        for (key, value) in self.overrides {
            builder = builder.set_override(key.as_str(), value).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        }

        let cfg = builder.build().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        let config: Config = cfg.try_deserialize().map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `SECTION/KEY=VALUE` into (`section.key`, `value`).
///
/// # Errors
///
/// Returns `ConfigError::InvalidOverride` unless both section and key are
/// present and non-empty. The value may be empty.
pub fn parse_override(spec: &str) -> TurboResult<(String, String)> {
    let invalid = || ConfigError::InvalidOverride(spec.to_string());

    let (path, value) = spec.split_once('=').ok_or_else(invalid)?;
    let (section, key) = path.trim().split_once('/').ok_or_else(invalid)?;
    if section.is_empty() || key.is_empty() || key.contains('/') {
        return Err(invalid().into());
    }

    Ok((format!("{section}.{key}"), value.to_string()))
}
