// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `init` command.

use anyhow::Context as _;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::campaign::{self, templates};
use crate::cli::campaign::InitArgs;
use crate::error::Result;

/// Create the campaign directory `<parent>/<name>`.
///
/// # Errors
///
/// Returns an error if the name is invalid, the directory already exists or
/// a file cannot be written.
pub fn run_init_command(
    out: &mut dyn Write,
    parent: &Path,
    args: &InitArgs,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        campaign::validate_name(&args.name)?;
        let dir = parent.join(&args.name);
        for (file, _) in templates::files(&args.name) {
            writeln!(out, "Dry-run mode: would create {}", dir.join(file).display())?;
        }
        return Ok(());
    }

    let dir = campaign::create(parent, &args.name)
        .with_context(|| format!("failed to create campaign '{}'", args.name))?;
    info!(name = %args.name, path = %dir.display(), "campaign created");

    writeln!(out, "Created campaign {} in {}", args.name, dir.display())?;
    writeln!(out, "Next steps:")?;
    writeln!(out, "  cd {}", dir.display())?;
    writeln!(out, "  edit repos.txt to list the repositories")?;
    writeln!(out, "  edit README.md to describe the pull requests")?;
    writeln!(out, "  turbolift clone")?;
    Ok(())
}
