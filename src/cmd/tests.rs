// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::clone::{run_checkout_command, run_clone_command};
use super::commit::{run_commit_command, run_push_command};
use super::config::run_options_command;
use super::foreach::run_foreach_command;
use super::init::run_init_command;
use super::status::run_status_command;
use super::test_support::{GitState, calls, campaign, collapse, config, context, git_fake, text};
use crate::cli::campaign::{CloneArgs, CommitArgs, ForeachArgs, InitArgs};
use crate::cli::status::StatusArgs;
use crate::executor::FakeExecutor;
use crate::results::Outcome;

#[tokio::test]
async fn test_clone_forks_missing_repos_and_skips_existing() {
    let dir = campaign(&["org/a", "org/b"], &["org/a"]);
    let ctx = context(&dir, FakeExecutor::always_succeeds(), false);
    let mut out = Vec::new();

    let results = run_clone_command(&ctx, &CloneArgs::default(), &mut out)
        .await
        .expect("clone runs");

    assert_eq!(
        calls(&ctx),
        [
            vec!["work/org", "gh", "repo", "fork", "--clone=true", "org/b"],
            vec!["work/org/b", "git", "checkout", "-b", "bump"],
        ]
    );
    assert_eq!(
        results.results()[0].outcome,
        Outcome::Skipped("directory already exists".to_string())
    );
    assert_eq!(results.results()[1].outcome, Outcome::Succeeded);
    assert!(dir.path().join("work/org").is_dir());
    insta::assert_snapshot!(text(out), @"turbolift clone completed (1 repos cloned, 1 repos skipped)");

    let runs: Vec<String> = std::fs::read_dir(dir.path().join(".turbolift-runs"))
        .expect("run log root")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(runs.len(), 1);
    assert!(runs[0].starts_with("clone-"));
}

#[tokio::test]
async fn test_clone_without_fork() {
    let dir = campaign(&["org/a"], &[]);
    let mut ctx = context(&dir, FakeExecutor::always_succeeds(), false);
    ctx.config.clone.fork = false;

    run_clone_command(&ctx, &CloneArgs::default(), &mut Vec::new())
        .await
        .expect("clone runs");

    assert_eq!(calls(&ctx)[0], ["work/org", "gh", "repo", "clone", "org/a"]);
}

#[tokio::test]
async fn test_clone_no_fork_flag_overrides_config() {
    let dir = campaign(&["org/a"], &[]);
    let ctx = context(&dir, FakeExecutor::always_succeeds(), false);

    run_clone_command(&ctx, &CloneArgs { no_fork: true }, &mut Vec::new())
        .await
        .expect("clone runs");

    assert_eq!(calls(&ctx)[0], ["work/org", "gh", "repo", "clone", "org/a"]);
}

#[tokio::test]
async fn test_clone_dry_run_changes_nothing() {
    let dir = campaign(&["org/a"], &[]);
    let ctx = context(&dir, FakeExecutor::always_succeeds(), true);
    let mut out = Vec::new();

    let results = run_clone_command(&ctx, &CloneArgs::default(), &mut out)
        .await
        .expect("clone runs");

    assert!(calls(&ctx).is_empty());
    assert!(!dir.path().join("work").exists());
    assert!(!dir.path().join(".turbolift-runs").exists());

    let root = dir.path().display().to_string();
    let log = results.results()[0].log.replace(&root, "<root>");
    assert_eq!(
        log,
        "Dry-run mode: gh [repo fork --clone=true org/a]. Working dir: <root>/work/org\n\
         Dry-run mode: git [checkout -b bump]. Working dir: <root>/work/org/a"
    );
}

#[tokio::test]
async fn test_clone_failures_are_reported_with_retry_hint() {
    let dir = campaign(&["org/a", "org/b"], &[]);
    let ctx = context(&dir, FakeExecutor::always_fails(), false);
    let mut out = Vec::new();

    let results = run_clone_command(&ctx, &CloneArgs::default(), &mut out)
        .await
        .expect("clone runs");

    assert_eq!(results.failed(), 2);
    assert!(!results.is_success());
    // Both repos were attempted, nothing after the failing fork.
    assert_eq!(calls(&ctx).len(), 2);

    let out = text(out);
    assert!(out.contains("org/a failed: "), "{out}");
    assert!(out.contains("org/b failed: "), "{out}");
    assert!(out.contains("turbolift clone completed (0 repos cloned, 2 repos errored)"));
    assert!(out.contains("Retry the failures with: turbolift clone --repos "));
    assert!(out.trim_end().ends_with("failed-repos.txt"));
}

#[tokio::test]
async fn test_checkout_only_repos_off_the_campaign_branch() {
    let dir = campaign(&["org/a", "org/b", "org/c"], &["org/a", "org/b"]);
    let fake = git_fake(vec![
        ("org/a", GitState::on("main")),
        ("org/b", GitState::on("bump")),
    ]);
    let ctx = context(&dir, fake, false);

    let results = run_checkout_command(&ctx, &mut Vec::new())
        .await
        .expect("checkout runs");

    assert_eq!(
        calls(&ctx),
        [
            vec!["work/org/a", "git", "rev-parse", "--abbrev-ref", "HEAD"],
            vec!["work/org/a", "git", "checkout", "-b", "bump"],
            vec!["work/org/b", "git", "rev-parse", "--abbrev-ref", "HEAD"],
        ]
    );
    let outcomes: Vec<&Outcome> = results.results().iter().map(|r| &r.outcome).collect();
    insta::assert_debug_snapshot!(outcomes, @r#"
    [
        Succeeded,
        Skipped(
            "already on the campaign branch",
        ),
        Skipped(
            "not cloned",
        ),
    ]
    "#);
}

#[tokio::test]
async fn test_foreach_runs_in_cloned_repos_and_keeps_output() {
    let dir = campaign(&["org/a", "org/b"], &["org/a"]);
    let fake = FakeExecutor::new(|_, _, _| Ok("patched go.mod\n".to_string()));
    let ctx = context(&dir, fake, false);
    let args = ForeachArgs {
        command: vec!["sed".into(), "-i".into(), "s/1.0/1.1/".into(), "go.mod".into()],
    };

    let results = run_foreach_command(&ctx, &args, &mut Vec::new())
        .await
        .expect("foreach runs");

    assert_eq!(
        calls(&ctx),
        [vec!["work/org/a", "sed", "-i", "s/1.0/1.1/", "go.mod"]]
    );
    assert_eq!(results.results()[0].log, "patched go.mod\n");
    assert_eq!(
        results.results()[1].outcome,
        Outcome::Skipped("not cloned".to_string())
    );
}

#[tokio::test]
async fn test_foreach_needs_a_program() {
    let dir = campaign(&["org/a"], &["org/a"]);
    let ctx = context(&dir, FakeExecutor::always_succeeds(), false);

    let result = run_foreach_command(&ctx, &ForeachArgs { command: vec![] }, &mut Vec::new()).await;

    assert!(result.is_err());
    assert!(calls(&ctx).is_empty());
}

#[tokio::test]
async fn test_commit_skips_unchanged_repos() {
    let dir = campaign(&["org/a", "org/b"], &["org/a", "org/b"]);
    let fake = git_fake(vec![("org/a", GitState::on("bump").changed())]);
    let ctx = context(&dir, fake, false);
    let mut out = Vec::new();
    let args = CommitArgs {
        message: "Bump deps".to_string(),
    };

    run_commit_command(&ctx, &args, &mut out)
        .await
        .expect("commit runs");

    assert_eq!(
        calls(&ctx),
        [
            vec!["work/org/a", "git", "status", "--porcelain"],
            vec!["work/org/a", "git", "add", "--all"],
            vec!["work/org/a", "git", "commit", "--message", "Bump deps"],
            vec!["work/org/b", "git", "status", "--porcelain"],
        ]
    );
    insta::assert_snapshot!(text(out), @"turbolift commit completed (1 repos committed, 1 repos unchanged)");
}

#[tokio::test]
async fn test_push_only_repos_with_unpushed_commits() {
    let dir = campaign(&["org/a", "org/b"], &["org/a", "org/b"]);
    let fake = git_fake(vec![("org/a", GitState::on("bump").ahead(2))]);
    let ctx = context(&dir, fake, false);

    let results = run_push_command(&ctx, &mut Vec::new())
        .await
        .expect("push runs");

    assert_eq!(
        calls(&ctx),
        [
            vec!["work/org/a", "git", "log", "--oneline", "origin/HEAD..HEAD"],
            vec!["work/org/a", "git", "push", "--set-upstream", "origin", "bump"],
            vec!["work/org/b", "git", "log", "--oneline", "origin/HEAD..HEAD"],
        ]
    );
    assert_eq!(results.succeeded(), 1);
    assert_eq!(
        results.results()[1].outcome,
        Outcome::Skipped("no commits to push".to_string())
    );
}

#[test]
fn test_init_creates_campaign() {
    let parent = tempfile::tempdir().expect("tempdir");
    let mut out = Vec::new();
    let args = InitArgs {
        name: "bump".to_string(),
    };

    run_init_command(&mut out, parent.path(), &args, false).expect("init succeeds");

    let dir = parent.path().join("bump");
    for file in [".turbolift", "repos.txt", "README.md", ".gitignore"] {
        assert!(dir.join(file).is_file(), "{file} missing");
    }
    let out = text(out);
    assert!(out.starts_with(&format!("Created campaign bump in {}", dir.display())));
    assert!(out.contains("turbolift clone"));

    let err = run_init_command(&mut Vec::new(), parent.path(), &args, false)
        .expect_err("second init fails");
    assert_eq!(err.to_string(), "failed to create campaign 'bump'");
}

#[test]
fn test_init_dry_run_lists_files() {
    let parent = tempfile::tempdir().expect("tempdir");
    let mut out = Vec::new();
    let args = InitArgs {
        name: "bump".to_string(),
    };

    run_init_command(&mut out, parent.path(), &args, true).expect("dry-run init succeeds");

    assert!(!parent.path().join("bump").exists());
    let root = parent.path().display().to_string();
    insta::assert_snapshot!(text(out).replace(&root, "<parent>"), @r"
    Dry-run mode: would create <parent>/bump/.turbolift
    Dry-run mode: would create <parent>/bump/repos.txt
    Dry-run mode: would create <parent>/bump/README.md
    Dry-run mode: would create <parent>/bump/.gitignore
    ");
}

#[test]
fn test_init_rejects_bad_name() {
    let parent = tempfile::tempdir().expect("tempdir");
    let args = InitArgs {
        name: "../escape".to_string(),
    };

    assert!(run_init_command(&mut Vec::new(), parent.path(), &args, true).is_err());
    assert!(run_init_command(&mut Vec::new(), parent.path(), &args, false).is_err());
}

#[tokio::test]
async fn test_status_table_and_counts() {
    let dir = campaign(
        &["org/a", "org/b", "org/c", "org/d"],
        &["org/b", "org/c", "org/d"],
    );
    let fake = git_fake(vec![
        ("org/b", GitState::on("main")),
        ("org/c", GitState::on("bump").changed()),
        ("org/d", GitState::on("bump").ahead(2)),
    ]);
    let ctx = context(&dir, fake, false);
    let mut out = Vec::new();

    let counts = run_status_command(&ctx, &StatusArgs::default(), &mut out)
        .await
        .expect("status runs");

    assert_eq!(counts.iter().count(), 4);
    let out = text(out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0].find("NEXT"), lines[4].find("create-prs"));
    insta::assert_snapshot!(collapse(&out), @r"
    REPO STATUS NEXT
    org/a not-cloned clone
    org/b cloned (on main) checkout
    org/c changed commit
    org/d committed (2 commits) create-prs

    not-cloned 1
    cloned 1
    changed 1
    committed 1
    ");
}

#[tokio::test]
async fn test_status_filter_prints_repos_file() {
    let dir = campaign(&["org/a", "org/b", "org/c"], &["org/b", "org/c"]);
    let fake = git_fake(vec![
        ("org/b", GitState::on("bump").ahead(1)),
        ("org/c", GitState::on("bump").ahead(3)),
    ]);
    let ctx = context(&dir, fake, false);
    let mut out = Vec::new();
    let args = StatusArgs {
        prs: false,
        filter: Some("committed".parse().expect("known status")),
    };

    run_status_command(&ctx, &args, &mut out)
        .await
        .expect("status runs");

    assert_eq!(text(out), "org/b\norg/c\n");
}

#[tokio::test]
async fn test_status_git_failure_is_not_a_success() {
    let dir = campaign(&["org/a", "org/b"], &["org/b"]);
    let ctx = context(&dir, FakeExecutor::always_fails(), false);
    let mut out = Vec::new();

    let counts = run_status_command(&ctx, &StatusArgs::default(), &mut out)
        .await
        .expect("status runs");

    assert_eq!(counts.failed(), 1);
    assert!(!counts.is_success());
    let out = text(out);
    let failed = out
        .lines()
        .find(|l| l.starts_with("org/b"))
        .expect("org/b row");
    assert!(failed.contains("synthetic error"), "{failed}");
    assert!(failed.ends_with("investigate"), "{failed}");
}

#[test]
fn test_options_lists_values_and_files() {
    let mut out = Vec::new();
    run_options_command(&mut out, &config(), &[]).expect("options printed");
    let out = text(out);

    assert!(out.lines().any(|l| collapse(l) == "campaign.name = bump"), "{out}");
    assert!(out.lines().any(|l| collapse(l) == "tools.gh = gh"), "{out}");
    assert!(out.ends_with("No configuration files loaded\n"));

    let mut out = Vec::new();
    run_options_command(&mut out, &config(), &["/tmp/bump/.turbolift".to_string()])
        .expect("options printed");
    assert!(text(out).ends_with("Configuration files:\n  /tmp/bump/.turbolift\n"));
}
