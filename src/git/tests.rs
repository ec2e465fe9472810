// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::TurboResult;
use crate::executor::FakeExecutor;
use crate::tools::Tools;

async fn checkout_and_capture_output(tools: &Tools<FakeExecutor>) -> (String, TurboResult<()>) {
    let mut out = Vec::new();
    let result = tools
        .git()
        .checkout(&mut out, "work/org/repo1", "some_branch")
        .await;
    (String::from_utf8_lossy(&out).into_owned(), result)
}

#[tokio::test]
async fn test_checkout_returns_error_on_failure() {
    let tools = Tools::new(FakeExecutor::always_fails());

    let (_, result) = checkout_and_capture_output(&tools).await;
    assert!(result.is_err());

    tools.executor().assert_called_with(vec![vec![
        "work/org/repo1",
        "git",
        "checkout",
        "-b",
        "some_branch",
    ]]);
}

#[tokio::test]
async fn test_checkout_returns_ok_on_success() {
    let tools = Tools::new(FakeExecutor::always_succeeds());

    let (_, result) = checkout_and_capture_output(&tools).await;
    assert!(result.is_ok());

    tools.executor().assert_called_with(vec![vec![
        "work/org/repo1",
        "git",
        "checkout",
        "-b",
        "some_branch",
    ]]);
}

#[tokio::test]
async fn test_checkout_returns_ok_on_success_with_dry_run() {
    let tools = Tools::new(FakeExecutor::always_succeeds()).with_dry_run(true);

    let (output, result) = checkout_and_capture_output(&tools).await;
    assert!(result.is_ok());
    assert_eq!(
        output,
        "Dry-run mode: git [checkout -b some_branch]. Working dir: work/org/repo1"
    );
    assert!(tools.executor().calls().is_empty());
}

#[tokio::test]
async fn test_commit_and_push_invocations() {
    let tools = Tools::new(FakeExecutor::always_succeeds());
    let git = tools.git();
    let mut out = Vec::new();

    git.add_all(&mut out, "work/org/repo1").await.expect("add");
    git.commit(&mut out, "work/org/repo1", "Bump dependency")
        .await
        .expect("commit");
    git.push(&mut out, "work/org/repo1", "origin", "some_branch")
        .await
        .expect("push");

    tools.executor().assert_called_with(vec![
        vec!["work/org/repo1", "git", "add", "--all"],
        vec!["work/org/repo1", "git", "commit", "--message", "Bump dependency"],
        vec![
            "work/org/repo1",
            "git",
            "push",
            "--set-upstream",
            "origin",
            "some_branch",
        ],
    ]);
}

#[tokio::test]
async fn test_is_repo_changed() {
    let dirty = Tools::new(FakeExecutor::new(|_, _, _| Ok(" M src/lib.rs\n?? new.txt".to_string())));
    let clean = Tools::new(FakeExecutor::always_succeeds());

    assert!(dirty.git().is_repo_changed("work/org/repo1").await.expect("status"));
    assert!(!clean.git().is_repo_changed("work/org/repo1").await.expect("status"));

    dirty
        .executor()
        .assert_called_with(vec![vec!["work/org/repo1", "git", "status", "--porcelain"]]);
}

#[tokio::test]
async fn test_unpushed_commits_counts_lines() {
    let tools = Tools::new(FakeExecutor::new(|_, _, _| {
        Ok("abc1234 First\ndef5678 Second\n".to_string())
    }));

    let count = tools
        .git()
        .unpushed_commits("work/org/repo1")
        .await
        .expect("log");

    assert_eq!(count, 2);
    tools.executor().assert_called_with(vec![vec![
        "work/org/repo1",
        "git",
        "log",
        "--oneline",
        "origin/HEAD..HEAD",
    ]]);
}

#[tokio::test]
async fn test_queries_run_in_dry_run() {
    let tools = Tools::new(FakeExecutor::new(|_, _, _| Ok("feature\n".to_string()))).with_dry_run(true);

    let branch = tools
        .git()
        .current_branch("work/org/repo1")
        .await
        .expect("rev-parse");

    assert_eq!(branch, "feature");
    assert_eq!(tools.executor().calls().len(), 1);
}

#[tokio::test]
async fn test_custom_git_program() {
    let tools = Tools::new(FakeExecutor::always_succeeds()).with_programs("/usr/local/bin/git", "gh");
    let mut out = Vec::new();

    tools
        .git()
        .checkout(&mut out, "work/org/repo1", "b")
        .await
        .expect("checkout");

    tools.executor().assert_called_with(vec![vec![
        "work/org/repo1",
        "/usr/local/bin/git",
        "checkout",
        "-b",
        "b",
    ]]);
}
