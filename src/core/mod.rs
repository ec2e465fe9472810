// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   Builder Output
//!   which cache
//! ```

pub mod process;
