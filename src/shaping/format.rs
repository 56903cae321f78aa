// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! One-line display labels.

use std::fmt::Display;

use crate::speckle::{Base, Branch, Commit};

const COMMIT_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

const NO_MESSAGE: &str = "no message";
const NO_DESCRIPTION: &str = "no description";
const NO_TAG: &str = "no tag";

/// Formats a commit as `message | dd/mm/YYYY, HH:MM:SS (id)`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_commit(None), None);
/// ```
pub fn format_commit(commit: Option<&Commit>) -> Option<String> {
    let commit = commit?;
    Some(format!(
        "{} | {} ({})",
        commit.message.as_deref().unwrap_or(NO_MESSAGE),
        commit.created_at.format(COMMIT_TIME_FORMAT),
        commit.id
    ))
}

/// Formats a branch as `name | description (id)`.
///
/// An empty description counts as missing.
pub fn format_branch(branch: Option<&Branch>) -> Option<String> {
    let branch = branch?;
    let description = branch
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);

    Some(format!("{} | {} ({})", branch.name, description, branch.id))
}

/// Formats a glulam as `id | tag`.
pub fn format_glulam(glulam: Option<&Base>) -> Option<String> {
    let glulam = glulam?;
    Some(format!(
        "{} | {}",
        glulam.id().unwrap_or_default(),
        glulam.text("tag").unwrap_or(NO_TAG)
    ))
}

/// Renders items as a markdown bullet list, one `- item` line each.
pub fn list_to_md<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| format!("- {}\n", item))
        .collect()
}
