// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for turbolift-rs.

use std::io::Write;

use crate::config::Config;
use crate::error::Result;

/// Display every option and its effective value, then the files they came from.
///
/// # Errors
///
/// Returns an I/O error if `out` cannot be written.
pub fn run_options_command(
    out: &mut dyn Write,
    config: &Config,
    config_files: &[String],
) -> Result<()> {
    for line in config.format_options() {
        writeln!(out, "{line}")?;
    }

    writeln!(out)?;
    if config_files.is_empty() {
        writeln!(out, "No configuration files loaded")?;
    } else {
        writeln!(out, "Configuration files:")?;
        for file in config_files {
            writeln!(out, "  {file}")?;
        }
    }
    Ok(())
}
