// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for a campaign's lifecycle.
//!
//! Drives the command handlers through the public API with a recording
//! executor, from `init` to `create-prs`.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use turbolift_rs::campaign::{self, CONFIG_FILE};
use turbolift_rs::cli::campaign::{CloneArgs, CommitArgs};
use turbolift_rs::cli::pr::CreatePrsArgs;
use turbolift_rs::cli::status::StatusArgs;
use turbolift_rs::cmd::Context;
use turbolift_rs::cmd::clone::run_clone_command;
use turbolift_rs::cmd::commit::run_commit_command;
use turbolift_rs::cmd::pr::run_create_prs_command;
use turbolift_rs::cmd::status::run_status_command;
use turbolift_rs::config::Config;
use turbolift_rs::executor::FakeExecutor;
use turbolift_rs::results::Outcome;
use turbolift_rs::status::RepoStatus;
use turbolift_rs::tools::Tools;

fn new_campaign(repos: &str, description: &str) -> (TempDir, PathBuf) {
    let parent = tempfile::tempdir().unwrap();
    let root = campaign::create(parent.path(), "bump-go").unwrap();
    std::fs::write(root.join("repos.txt"), repos).unwrap();
    std::fs::write(root.join("README.md"), description).unwrap();
    (parent, root)
}

fn context(root: &Path, executor: FakeExecutor) -> Context<FakeExecutor> {
    let config = Config::from_file(root.join(CONFIG_FILE)).unwrap();
    Context::new(Tools::from_config(executor, &config), config).with_root(root)
}

fn relative_calls(ctx: &Context<FakeExecutor>) -> Vec<String> {
    let root = ctx.root().display().to_string();
    ctx.tools
        .executor()
        .calls()
        .iter()
        .map(|call| call.join(" ").replace(&root, "<root>"))
        .collect()
}

// =============================================================================
// init + clone
// =============================================================================

#[tokio::test]
async fn campaign_clone_uses_template_config() {
    let (_parent, root) = new_campaign("org/api\norg/web # frontend\n", "# Bump Go\n");
    let ctx = context(&root, FakeExecutor::always_succeeds());

    let results = run_clone_command(&ctx, &CloneArgs::default(), &mut Vec::new())
        .await
        .unwrap();

    assert!(results.is_success());
    insta::assert_debug_snapshot!(relative_calls(&ctx), @r#"
    [
        "<root>/work/org gh repo fork --clone=true org/api",
        "<root>/work/org/api git checkout -b bump-go",
        "<root>/work/org gh repo fork --clone=true org/web",
        "<root>/work/org/web git checkout -b bump-go",
    ]
    "#);
}

#[tokio::test]
async fn campaign_run_log_is_a_retry_list() {
    let (_parent, root) = new_campaign("org/api\norg/web\n", "# Bump Go\n");
    let fake = FakeExecutor::new(|dir, _, _| {
        if dir.ends_with("org") {
            Ok(String::new())
        } else {
            Err(turbolift_rs::error::ProcessError::Simulated {
                command: "git checkout".to_string(),
                message: "branch exists".to_string(),
            }
            .into())
        }
    });
    let ctx = context(&root, fake);

    let results = run_clone_command(&ctx, &CloneArgs::default(), &mut Vec::new())
        .await
        .unwrap();
    assert_eq!(results.failed(), 2);

    let runs: Vec<PathBuf> = std::fs::read_dir(root.join(".turbolift-runs"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(runs.len(), 1);
    let failed = runs[0].join("failed-repos.txt");
    assert_eq!(std::fs::read_to_string(&failed).unwrap(), "org/api\norg/web\n");
    let log = std::fs::read_to_string(runs[0].join("logs/org/api.log")).unwrap();
    assert!(log.contains("branch exists"), "{log}");

    // The failed list loads as the campaign's repos.
    let retry = Context::new(Tools::new(FakeExecutor::always_succeeds()), Config::default())
        .with_root(&root)
        .with_repos_override(Some(failed));
    let campaign = retry.load_campaign().unwrap();
    assert_eq!(campaign.repos().len(), 2);
}

// =============================================================================
// commit + status + create-prs
// =============================================================================

fn working_copies(root: &Path, repos: &[&str]) {
    for repo in repos {
        std::fs::create_dir_all(root.join("work").join(repo)).unwrap();
    }
}

/// `org/api` has local edits, `org/web` one commit; both on the campaign branch.
fn edited_fake() -> FakeExecutor {
    FakeExecutor::new(|dir, program, args| {
        let api = dir.ends_with("org/api");
        Ok(match (program, args.first().copied()) {
            ("git", Some("rev-parse")) => "bump-go".to_string(),
            ("git", Some("status")) if api => "?? NOTES.md".to_string(),
            ("git", Some("log")) if !api => "f00d Bump Go\n".to_string(),
            _ => String::new(),
        })
    })
}

#[tokio::test]
async fn campaign_status_suggests_next_steps() {
    let (_parent, root) = new_campaign("org/api\norg/web\norg/cli\n", "# Bump Go\n");
    working_copies(&root, &["org/api", "org/web"]);
    let ctx = context(&root, edited_fake());
    let mut out = Vec::new();

    let counts = run_status_command(&ctx, &StatusArgs::default(), &mut out)
        .await
        .unwrap();

    assert_eq!(counts.count(&RepoStatus::Changed), 1);
    assert_eq!(counts.count(&RepoStatus::Committed { commits: 1 }), 1);
    assert_eq!(counts.count(&RepoStatus::NotCloned), 1);
    let out = String::from_utf8(out).unwrap();
    assert!(out.lines().any(|l| l.starts_with("org/api") && l.ends_with("commit")));
    assert!(out.lines().any(|l| l.starts_with("org/web") && l.ends_with("create-prs")));
    assert!(out.lines().any(|l| l.starts_with("org/cli") && l.ends_with("clone")));
}

#[tokio::test]
async fn campaign_commit_then_create_prs() {
    let (_parent, root) = new_campaign(
        "org/api\norg/web\n",
        "# Bump Go to 1.23\n\nGenerated by turbolift.\n",
    );
    working_copies(&root, &["org/api", "org/web"]);
    let ctx = context(&root, edited_fake());

    let commit = CommitArgs {
        message: "Bump Go".to_string(),
    };
    let committed = run_commit_command(&ctx, &commit, &mut Vec::new())
        .await
        .unwrap();
    assert_eq!(committed.succeeded(), 1);
    assert_eq!(
        committed.results()[1].outcome,
        Outcome::Skipped("no changes".to_string())
    );

    let created = run_create_prs_command(&ctx, &CreatePrsArgs::default(), &mut Vec::new())
        .await
        .unwrap();
    // api: the fake still reports no commits ahead.
    assert_eq!(created.succeeded(), 1);
    let calls = relative_calls(&ctx);
    assert!(calls.contains(
        &"<root>/work/org/web gh pr create --title Bump Go to 1.23 --body Generated by turbolift. --repo org/web"
            .to_string()
    ));
}

#[tokio::test]
async fn campaign_create_prs_refuses_untouched_template() {
    let parent = tempfile::tempdir().unwrap();
    let root = campaign::create(parent.path(), "bump-go").unwrap();
    std::fs::write(root.join("repos.txt"), "org/api\n").unwrap();
    let ctx = context(&root, FakeExecutor::always_succeeds());

    let err = run_create_prs_command(&ctx, &CreatePrsArgs::default(), &mut Vec::new())
        .await
        .unwrap_err();

    assert!(format!("{err:#}").contains("template placeholder"), "{err:#}");
    assert!(ctx.tools.executor().calls().is_empty());
}

#[test]
fn campaign_without_repos_is_rejected() {
    let parent = tempfile::tempdir().unwrap();
    let root = campaign::create(parent.path(), "empty").unwrap();
    let ctx = context(&root, FakeExecutor::always_succeeds());

    let err = ctx.load_campaign().unwrap_err();
    assert!(err.to_string().contains("no repositories"), "{err}");
}
