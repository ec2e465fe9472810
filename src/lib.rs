// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |       clone / commit / pr / status
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |   config     campaign     |
//!              |  layered    repos, README |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              runner       status   results
//!           per-repo loop  RepoStatus run log
//!                 |
//!                 v
//!        tools --> git / github (dry-run aware wrappers)
//!                 |
//!                 v
//!        executor  Real (tokio process) | Fake (recording)
//!
//!   +-----------------------------------------+
//!   |  core   process builder and runner      |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod campaign;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod executor;
pub mod git;
pub mod github;
pub mod logging;
pub mod results;
pub mod runner;
pub mod status;
pub mod tools;
pub mod utility;
