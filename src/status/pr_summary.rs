// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aggregated pull request state for `pr-status`.

use std::collections::BTreeMap;

use crate::github::{PrState, PullRequestStatus, ReviewDecision};

/// Counts by PR state, review decision and reaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrSummary {
    pub by_state: BTreeMap<PrState, usize>,
    pub by_review: BTreeMap<ReviewDecision, usize>,
    pub reactions: BTreeMap<String, u64>,
    pub no_pr: usize,
}

impl PrSummary {
    pub fn add(&mut self, status: Option<&PullRequestStatus>) {
        let Some(status) = status else {
            self.no_pr += 1;
            return;
        };

        *self.by_state.entry(status.state).or_default() += 1;
        *self.by_review.entry(status.review_decision()).or_default() += 1;
        for group in &status.reaction_groups {
            if group.users.total_count > 0 {
                *self.reactions.entry(group.content.clone()).or_default() += group.users.total_count;
            }
        }
    }

    /// Report lines, states first.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for state in [PrState::Open, PrState::Merged, PrState::Closed] {
            let count = self.by_state.get(&state).copied().unwrap_or(0);
            lines.push(format!("{:<18} {count}", state.as_str()));
        }
        lines.push(format!("{:<18} {}", "NO PR", self.no_pr));

        if !self.by_review.is_empty() {
            lines.push(String::new());
            lines.push("Reviews".to_string());
            for (decision, count) in &self.by_review {
                lines.push(format!("{:<18} {count}", decision.as_str()));
            }
        }

        if !self.reactions.is_empty() {
            lines.push(String::new());
            lines.push("Reactions".to_string());
            for (content, count) in &self.reactions {
                lines.push(format!("{content:<18} {count}"));
            }
        }
        lines
    }
}
