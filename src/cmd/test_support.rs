// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scratch campaigns and canned git replies for command tests.

use std::path::Path;
use tempfile::TempDir;

use super::Context;
use crate::config::Config;
use crate::error::TurboResult;
use crate::executor::FakeExecutor;
use crate::tools::Tools;

pub(crate) const DESCRIPTION: &str = "# Bump dependencies\n\nUpdates every dependency.\n";

/// Campaign named `bump` listing `repos`, with working copies for `cloned`.
pub(crate) fn campaign(repos: &[&str], cloned: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    let listing: String = repos.iter().map(|r| format!("{r}\n")).collect();
    std::fs::write(dir.path().join("repos.txt"), listing).expect("write repos.txt");
    std::fs::write(dir.path().join("README.md"), DESCRIPTION).expect("write README.md");
    for repo in cloned {
        std::fs::create_dir_all(dir.path().join("work").join(repo)).expect("create working copy");
    }
    dir
}

pub(crate) fn config() -> Config {
    let mut config = Config::default();
    config.campaign.name = "bump".to_string();
    config
}

pub(crate) fn context(dir: &TempDir, executor: FakeExecutor, dry_run: bool) -> Context<FakeExecutor> {
    Context::new(Tools::new(executor).with_dry_run(dry_run), config()).with_root(dir.path())
}

pub(crate) fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("utf-8 output")
}

/// Every run of whitespace in a line squeezed to one space.
pub(crate) fn collapse(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Recorded calls with the working directory relative to the campaign root.
pub(crate) fn calls(ctx: &Context<FakeExecutor>) -> Vec<Vec<String>> {
    let root = ctx.root().display().to_string();
    ctx.tools
        .executor()
        .calls()
        .into_iter()
        .map(|mut call| {
            if let Some(rest) = call[0].strip_prefix(&root) {
                call[0] = rest.trim_start_matches('/').to_string();
            }
            call
        })
        .collect()
}

/// Per-repository state answered to git queries.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GitState {
    pub branch: &'static str,
    pub changed: bool,
    pub ahead: usize,
}

impl GitState {
    pub(crate) const fn on(branch: &'static str) -> Self {
        Self {
            branch,
            changed: false,
            ahead: 0,
        }
    }

    pub(crate) const fn changed(mut self) -> Self {
        self.changed = true;
        self
    }

    pub(crate) const fn ahead(mut self, commits: usize) -> Self {
        self.ahead = commits;
        self
    }
}

/// Fake that answers git queries from `states`, keyed by `org/name` suffix of
/// the working directory. Every other command succeeds with empty output.
pub(crate) fn git_fake(states: Vec<(&'static str, GitState)>) -> FakeExecutor {
    FakeExecutor::new(move |dir: &Path, program: &str, args: &[&str]| -> TurboResult<String> {
        if program != "git" {
            return Ok(String::new());
        }
        let state = states
            .iter()
            .find(|(repo, _)| dir.ends_with(repo))
            .map_or(GitState::on("main"), |(_, state)| *state);
        Ok(match args.first().copied() {
            Some("rev-parse") => state.branch.to_string(),
            Some("status") if state.changed => " M go.mod".to_string(),
            Some("log") => (0..state.ahead).map(|i| format!("abc{i} Bump\n")).collect(),
            _ => String::new(),
        })
    })
}
