// turbolift-rs: Multi-Repository Campaign Tool - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Files written by `turbolift init`.

use super::description::TEMPLATE_TITLE;

pub const REPOS_TEMPLATE: &str = "\
# Add repositories for this campaign, one per line: org/repo or host/org/repo
# Lines starting with '#' and blank lines are ignored.
";

pub const GITIGNORE_TEMPLATE: &str = "/work/\n/.turbolift-runs/\n";

/// `README.md`: the PR description.
#[must_use]
pub fn readme(name: &str) -> String {
    format!(
        "# {TEMPLATE_TITLE}\n\
         \n\
         Campaign `{name}`.\n\
         \n\
         Describe the change here. The first line is the pull request title,\n\
         everything below it is the pull request body.\n"
    )
}

/// `.turbolift`: campaign configuration.
#[must_use]
pub fn config(name: &str) -> String {
    format!(
        "# turbolift campaign configuration\n\
         \n\
         [campaign]\n\
         name = \"{name}\"\n\
         repos_file = \"repos.txt\"\n\
         description_file = \"README.md\"\n\
         \n\
         [clone]\n\
         fork = true\n\
         \n\
         [pr]\n\
         draft = false\n"
    )
}

/// `(file name, content)` for every file of a new campaign.
#[must_use]
pub fn files(name: &str) -> Vec<(&'static str, String)> {
    vec![
        (super::CONFIG_FILE, config(name)),
        ("repos.txt", REPOS_TEMPLATE.to_string()),
        ("README.md", readme(name)),
        (".gitignore", GITIGNORE_TEMPLATE.to_string()),
    ]
}
