// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `status` command.
//!
//! ```text
//! turbolift status                      table + counts
//! turbolift status --prs                also ask gh for PR state
//! turbolift status --filter changed     repo names only, a valid repos file
//! ```

use clap::Args;

use crate::status::StatusFilter;

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, Args)]
pub struct StatusArgs {
    /// Query PR state for repositories on the campaign branch.
    #[arg(long)]
    pub prs: bool,

    /// Print only repositories in this status (not-cloned, cloned, branched,
    /// changed, committed, pr-open, pr-merged, pr-closed, failed).
    #[arg(long, value_name = "STATUS")]
    pub filter: Option<StatusFilter>,
}
