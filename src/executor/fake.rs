// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Recording executor for tests.
//!
//! Every invocation is recorded as `[working_dir, program, args...]`.

use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use super::{Executor, command_string};
use crate::error::{ProcessError, TurboResult};

type Handler = Box<dyn Fn(&Path, &str, &[&str]) -> TurboResult<String> + Send + Sync>;

/// Executor that never spawns anything.
///
/// The handler decides the reply of each call: `Ok(output)` is written to
/// the output (or returned by `execute_and_capture`), `Err` is returned as-is.
pub struct FakeExecutor {
    handler: Handler,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeExecutor {
    /// Fake with a custom reply for every call.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Path, &str, &[&str]) -> TurboResult<String> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fake where every command succeeds with empty output.
    #[must_use]
    pub fn always_succeeds() -> Self {
        Self::new(|_, _, _| Ok(String::new()))
    }

    /// Fake where every command fails.
    #[must_use]
    pub fn always_fails() -> Self {
        Self::new(|_, program, args| {
            Err(ProcessError::Simulated {
                command: command_string(program, args),
                message: "synthetic error".to_string(),
            }
            .into())
        })
    }

    /// Recorded invocations, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Panics unless the recorded invocations equal `expected` exactly.
    ///
    /// # Panics
    ///
    /// When the recorded calls differ from `expected`.
    pub fn assert_called_with<I, C, S>(&self, expected: I)
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let expected: Vec<Vec<String>> = expected
            .into_iter()
            .map(|call| call.into_iter().map(|s| s.as_ref().to_string()).collect())
            .collect();
        let actual = self.calls();
        assert_eq!(
            actual, expected,
            "unexpected executor calls\n  actual:   {actual:?}\n  expected: {expected:?}"
        );
    }

    fn record(&self, working_dir: &Path, program: &str, args: &[&str]) {
        let mut call = Vec::with_capacity(args.len() + 2);
        call.push(working_dir.display().to_string());
        call.push(program.to_string());
        call.extend(args.iter().map(|a| (*a).to_string()));
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(call);
    }
}

impl std::fmt::Debug for FakeExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeExecutor")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

impl Executor for FakeExecutor {
    async fn execute(
        &self,
        out: &mut dyn Write,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<()> {
        self.record(working_dir, program, args);
        let output = (self.handler)(working_dir, program, args)?;
        out.write_all(output.as_bytes())?;
        Ok(())
    }

    async fn execute_and_capture(
        &self,
        working_dir: &Path,
        program: &str,
        args: &[&str],
    ) -> TurboResult<String> {
        self.record(working_dir, program, args);
        (self.handler)(working_dir, program, args)
    }
}
