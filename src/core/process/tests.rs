// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, TurboliftError};

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo oops >&2; exit 42"])
        .run()
        .await
        .expect_err("exit 42 should fail");

    match err {
        TurboliftError::Process(inner) => match *inner {
            ProcessError::NonZeroExit { code, stderr, .. } => {
                assert_eq!(code, 42);
                assert_eq!(stderr.trim(), "oops");
            }
            other => panic!("unexpected process error: {other:?}"),
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_allow_failure() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 3);
    assert!(!output.success());
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_non_interactive_env() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo $GIT_TERMINAL_PROMPT-$GH_PROMPT_DISABLED-$EXTRA"])
        .flag(ProcessFlags::NON_INTERACTIVE)
        .env("EXTRA", "x")
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"0-1-x");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_cwd() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("marker.txt"), "").expect("failed to write marker");

    let output = ProcessBuilder::new("ls")
        .cwd(temp.path())
        .run()
        .await
        .expect("ls should succeed");

    assert_eq!(output.stdout().trim(), "marker.txt");
}

#[tokio::test]
async fn test_spawn_failure() {
    let err = ProcessBuilder::new("nonexistent_program_12345")
        .run()
        .await
        .expect_err("spawn should fail");
    assert!(err.to_string().contains("failed to spawn"), "{err}");
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("/usr/bin/git").args(["commit", "-m", "two words"]);
    insta::assert_snapshot!(builder.command_line(), @r#"git commit -m "two words""#);
}

#[test]
fn test_executable_lookup_not_found() {
    let program = "nonexistent_program_12345";

    let which_result = ProcessBuilder::which(program);
    assert!(which_result.is_err());
    let err_msg = which_result.unwrap_err().to_string();
    assert!(err_msg.contains(program), "{err_msg}");

    assert!(ProcessBuilder::find(program).is_none());
}

#[test]
fn test_executable_lookup_found() {
    // cargo is always available when running the test suite
    let builder = ProcessBuilder::which("cargo").expect("cargo should be found in PATH");
    assert!(builder.program().exists());
    assert_eq!(ProcessBuilder::find("cargo").as_ref(), Some(builder.program()));
}
