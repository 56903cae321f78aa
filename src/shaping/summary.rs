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

//! Stream statistics.
//!
//! Summary cards and graph tables derived from a fetched stream. Distinct
//! lists keep first-seen order; counts are plain tallies.

use indexmap::{IndexMap, IndexSet};

use crate::{
    shaping::activity::{DailyCount, commit_activity},
    speckle::{Commit, Stream},
};

/// How often a value occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchCommitCount {
    pub branch_name: String,
    pub total_commits: u64,
}

/// Figures for the stream statistics cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub branch_count: u64,
    pub branch_names: Vec<String>,
    pub commit_count: usize,
    pub connector_count: usize,
    pub connectors: Vec<String>,
    pub contributor_count: usize,
    pub contributors: Vec<String>,
}

/// Tables behind the stream graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamGraphs {
    pub by_application: Vec<ValueCount>,
    pub by_author: Vec<ValueCount>,
    pub branch_commits: Vec<BranchCommitCount>,
    pub activity: Vec<DailyCount>,
}

impl StreamSummary {
    /// Builds the cards for `stream`, with commit and connector figures taken
    /// from the commits of the selected branch.
    pub fn new(stream: &Stream, selected_commits: &[Commit]) -> Self {
        let branch_names: Vec<String> = stream
            .branches
            .items
            .iter()
            .map(|b| b.name.clone())
            .collect();

        let connectors = distinct(
            selected_commits
                .iter()
                .filter_map(|c| c.source_application.as_deref()),
        );

        let contributors = distinct(stream.collaborators.iter().map(|c| c.name.as_str()));

        Self {
            branch_count: stream.branches.total_count,
            branch_names,
            commit_count: selected_commits.len(),
            connector_count: connectors.len(),
            connectors,
            contributor_count: stream.collaborators.len(),
            contributors,
        }
    }
}

impl StreamGraphs {
    /// Builds the graph tables over every fetched commit of every branch.
    pub fn new(stream: &Stream) -> Self {
        let commits: Vec<&Commit> = stream
            .branches
            .items
            .iter()
            .flat_map(|b| b.commits.items.iter())
            .collect();

        let by_application = value_counts(
            commits
                .iter()
                .filter_map(|c| c.source_application.as_deref()),
        );
        let by_author = value_counts(commits.iter().filter_map(|c| c.author_name.as_deref()));

        let branch_commits = stream
            .branches
            .items
            .iter()
            .map(|b| BranchCommitCount {
                branch_name: b.name.clone(),
                total_commits: b.commits.total_count,
            })
            .collect();

        Self {
            by_application,
            by_author,
            branch_commits,
            activity: commit_activity(commits),
        }
    }
}

/// Distinct values in first-seen order.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let seen: IndexSet<&str> = values.into_iter().collect();
    seen.into_iter().map(str::to_string).collect()
}

/// Tallies values, most frequent first.
///
/// The sort is stable, so equal counts keep first-seen order.
pub fn value_counts<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<ValueCount> {
    let mut tally: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *tally.entry(value).or_default() += 1;
    }

    let mut counts: Vec<ValueCount> = tally
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
