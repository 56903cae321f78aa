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

//! Stream browser state management.
//!
//! This module provides state for the branch and commit pickers, managing the
//! selected branch and commit, and navigating between the two panes in the
//! UI. The commit pane always lists the commits of the selected branch.

use ratatui::widgets::ListState;

use speckledash::speckle::{Branch, Commit};

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum StreamBrowserPane {
    #[default]
    Branch,
    Commit,
}

#[derive(Default)]
pub(crate) struct StreamBrowser {
    pub(crate) active_pane: StreamBrowserPane,

    pub(crate) branches: Vec<Branch>,

    pub(crate) branches_state: ListState,
    pub(crate) commits_state: ListState,
}

impl StreamBrowser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn toggle_pane(&mut self) {
        self.active_pane = match self.active_pane {
            StreamBrowserPane::Branch => StreamBrowserPane::Commit,
            StreamBrowserPane::Commit => StreamBrowserPane::Branch,
        };
    }

    pub(crate) fn selected_branch(&self) -> Option<&Branch> {
        let index = self.branches_state.selected()?;
        self.branches.get(index)
    }

    /// Commits of the selected branch, newest first as fetched.
    pub(crate) fn commits(&self) -> &[Commit] {
        self.selected_branch()
            .map(|branch| branch.commits.items.as_slice())
            .unwrap_or_default()
    }

    pub(crate) fn selected_commit(&self) -> Option<&Commit> {
        let index = self.commits_state.selected()?;
        self.commits().get(index)
    }

    /// Replaces the branches, selecting the first branch and its first commit.
    pub(crate) fn set_branches(&mut self, branches: Vec<Branch>) {
        self.branches = branches;
        self.branches_state
            .select((!self.branches.is_empty()).then_some(0));
        self.reset_commit_selection();
    }

    /// Moves the selection in the active pane. Returns the pane whose
    /// selection changed, if any.
    pub(crate) fn next(&mut self) -> Option<StreamBrowserPane> {
        self.step(Self::next_index)
    }

    pub(crate) fn previous(&mut self) -> Option<StreamBrowserPane> {
        self.step(Self::previous_index)
    }

    fn step(&mut self, advance: fn(Option<usize>, usize) -> Option<usize>) -> Option<StreamBrowserPane> {
        match self.active_pane {
            StreamBrowserPane::Branch => {
                let before = self.branches_state.selected();
                let after = advance(before, self.branches.len());
                if before == after {
                    return None;
                }
                self.branches_state.select(after);
                self.reset_commit_selection();
            }
            StreamBrowserPane::Commit => {
                let before = self.commits_state.selected();
                let after = advance(before, self.commits().len());
                if before == after {
                    return None;
                }
                self.commits_state.select(after);
            }
        }
        Some(self.active_pane)
    }

    fn reset_commit_selection(&mut self) {
        let has_commits = !self.commits().is_empty();
        self.commits_state.select(has_commits.then_some(0));
    }

    fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match current {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        })
    }

    fn previous_index(current: Option<usize>, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(match current {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_around() {
        assert_eq!(StreamBrowser::next_index(Some(2), 3), Some(0));
        assert_eq!(StreamBrowser::previous_index(Some(0), 3), Some(2));
        assert_eq!(StreamBrowser::next_index(None, 0), None);
    }
}
