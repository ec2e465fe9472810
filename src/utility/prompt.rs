// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Yes/no confirmation before destructive bulk operations.

use std::io::{BufRead, Write};

/// Asks the user a yes/no question.
pub trait Prompt {
    /// `true` only for an explicit yes.
    fn ask_yes_no(&self, question: &str) -> bool;
}

/// Prompt on stderr, answer read from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask_yes_no(&self, question: &str) -> bool {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "{question} [y/N] ");
        let _ = stderr.flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_yes(&answer)
    }
}

/// Prompt with a fixed answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub bool);

impl Prompt for FixedPrompt {
    fn ask_yes_no(&self, _question: &str) -> bool {
        self.0
    }
}

/// `y` or `yes`, case-insensitive.
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
