// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Small helpers shared by the commands.
//!
//! ```text
//! parse_duration()   "500ms" | "5s" | "2m" | "0"  --> Duration
//! prompt             Prompt trait, StdinPrompt, FixedPrompt
//! ```

pub mod prompt;


use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

use crate::error::{ConfigError, TurboResult, TurboliftError};

fn duration_regex() -> TurboResult<&'static Regex> {
    static REGEX: OnceLock<Result<Regex, regex::Error>> = OnceLock::new();
    REGEX
        .get_or_init(|| Regex::new(r"^(?P<value>\d+)\s*(?P<unit>ms|s|m)?$"))
        .as_ref()
        .map_err(|e| TurboliftError::other(format!("failed to compile duration pattern: {e}")))
}

/// Parse a pause such as `500ms`, `5s` or `2m`. A bare number is milliseconds.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for anything else.
pub fn parse_duration(text: &str) -> TurboResult<Duration> {
    let invalid = || ConfigError::InvalidValue {
        section: "pr".to_string(),
        key: "sleep".to_string(),
        message: format!("expected a duration like 500ms, 5s or 2m, got '{text}'"),
    };

    let captures = duration_regex()?.captures(text.trim()).ok_or_else(invalid)?;
    let value: u64 = captures
        .name("value")
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(invalid)?;

    let duration = match captures.name("unit").map(|m| m.as_str()) {
        Some("s") => Duration::from_secs(value),
        Some("m") => Duration::from_secs(value.saturating_mul(60)),
        _ => Duration::from_millis(value),
    };
    Ok(duration)
}
