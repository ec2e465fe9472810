// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            TurboliftError (~24 bytes)
//!                     |
//!   +--------+--------+--------+--------+--------+
//!   |        |        |        |        |        |
//!   v        v        v        v        v        v
//! Process Campaign  Config  GitHub     Io     Other
//!   Box      Box      Box     Box      Box   Box<str>
//!
//! Sub-errors:
//!   Process   ExecutableNotFound, SpawnFailed, NonZeroExit
//!   Campaign  NotACampaign, InvalidRepo, NoRepositories, Description
//!   Config    ParseError, InvalidValue, InvalidOverride
//!   GitHub    InvalidResponse
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`TurboliftError`].
pub type TurboResult<T> = std::result::Result<T, TurboliftError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum TurboliftError {
    /// External process failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Campaign layout or content is invalid.
    #[error("campaign error: {0}")]
    Campaign(#[from] Box<CampaignError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// GitHub CLI returned something unusable.
    #[error("github error: {0}")]
    GitHub(#[from] Box<GitHubError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl TurboliftError {
    /// Create a [`TurboliftError::Other`] from a message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into().into_boxed_str())
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for TurboliftError {
                fn from(err: $error) -> Self {
                    TurboliftError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    CampaignError => Campaign,
    ConfigError => Config,
    GitHubError => GitHub,
    std::io::Error => Io,
}

// --- Process Errors ---

/// External command errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH or at the given path.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("'{command}' exited with code {code}{}", format_stderr(.stderr))]
    NonZeroExit {
        command: String,
        code: i32,
        stderr: String,
    },

    /// Process was terminated by a signal.
    #[error("'{command}' was terminated by a signal")]
    Terminated { command: String },

    /// Simulated failure from a fake executor.
    #[error("'{command}' failed: {message}")]
    Simulated { command: String, message: String },
}

fn format_stderr(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

// --- Campaign Errors ---

/// Campaign layout and content errors.
#[derive(Debug, Error)]
pub enum CampaignError {
    /// Directory does not contain a repos file.
    #[error("'{path}' is not a campaign directory (missing {repos_file})")]
    NotACampaign { path: String, repos_file: String },

    /// Campaign directory already exists.
    #[error("campaign directory already exists: {path}")]
    AlreadyExists { path: String },

    /// Invalid campaign name.
    #[error("invalid campaign name '{name}': {message}")]
    InvalidName { name: String, message: String },

    /// Malformed repository entry in the repos file.
    #[error("invalid repository '{entry}' on line {line}: expected org/repo or host/org/repo")]
    InvalidRepo { line: usize, entry: String },

    /// Repos file lists no repositories.
    #[error("no repositories listed in {path}")]
    NoRepositories { path: String },

    /// Failed to read a campaign file.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// PR description is unusable.
    #[error("invalid pull request description in {path}: {message}")]
    Description { path: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Malformed `--set` override.
    #[error("invalid override '{0}': expected SECTION/KEY=VALUE")]
    InvalidOverride(String),
}

// --- GitHub Errors ---

/// Errors interpreting `gh` output.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// `gh` printed JSON we could not decode.
    #[error("unexpected response from gh: {message}")]
    InvalidResponse { message: String },
}
