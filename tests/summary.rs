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

mod common;

use pretty_assertions::assert_eq;
use speckledash::shaping::{
    BranchCommitCount, StreamGraphs, StreamSummary, ValueCount,
    summary::{distinct, value_counts},
};

#[test]
fn distinct_keeps_first_seen_order() {
    assert_eq!(distinct(["Rhino", "Revit", "Rhino"]), vec!["Rhino", "Revit"]);
    assert_eq!(
        distinct(["Revit", "Rhino", "Revit", "Grasshopper", "Rhino"]),
        vec!["Revit", "Rhino", "Grasshopper"]
    );
    assert!(distinct([]).is_empty());
}

#[test]
fn value_counts_are_most_frequent_first() {
    let counts = value_counts(["Revit", "Rhino", "Rhino", "Grasshopper"]);

    assert_eq!(
        counts,
        vec![
            ValueCount { value: "Rhino".to_string(), count: 2 },
            ValueCount { value: "Revit".to_string(), count: 1 },
            ValueCount { value: "Grasshopper".to_string(), count: 1 },
        ]
    );
}

#[test]
fn summary_uses_selected_branch_commits() {
    let main = common::branch(
        "main",
        12,
        vec![
            common::authored("a", "2024-01-01T10:00:00Z", "Ada", "Rhino"),
            common::authored("b", "2024-01-02T10:00:00Z", "Ada", "Revit"),
            common::authored("c", "2024-01-02T11:00:00Z", "Bo", "Rhino"),
        ],
    );
    let other = common::branch("glulam-updates", 1, vec![common::commit("d", "2024-01-04T09:00:00Z")]);
    let stream = common::stream(vec![main.clone(), other], &["Ada", "Bo", "Ada"]);

    let summary = StreamSummary::new(&stream, &main.commits.items);

    assert_eq!(summary.branch_count, 2);
    assert_eq!(summary.branch_names, vec!["main", "glulam-updates"]);
    assert_eq!(summary.commit_count, 3);
    assert_eq!(summary.connectors, vec!["Rhino", "Revit"]);
    assert_eq!(summary.connector_count, 2);
    assert_eq!(summary.contributors, vec!["Ada", "Bo"]);
    assert_eq!(summary.contributor_count, 3);
}

#[test]
fn graphs_cover_every_fetched_commit() {
    let stream = common::stream(
        vec![
            common::branch(
                "main",
                12,
                vec![
                    common::authored("a", "2024-01-01T10:00:00Z", "Ada", "Rhino"),
                    common::authored("b", "2024-01-03T10:00:00Z", "Bo", "Rhino"),
                ],
            ),
            common::branch("glulam-updates", 1, vec![common::commit("c", "2024-01-02T09:00:00Z")]),
        ],
        &[],
    );

    let graphs = StreamGraphs::new(&stream);

    assert_eq!(
        graphs.by_application,
        vec![ValueCount { value: "Rhino".to_string(), count: 2 }]
    );
    assert_eq!(graphs.by_author.len(), 2);
    assert_eq!(
        graphs.branch_commits,
        vec![
            BranchCommitCount { branch_name: "main".to_string(), total_commits: 12 },
            BranchCommitCount { branch_name: "glulam-updates".to_string(), total_commits: 1 },
        ]
    );
    let counts: Vec<usize> = graphs.activity.iter().map(|c| c.count).collect();
    assert_eq!(counts, vec![1, 1, 1]);
}

#[test]
fn empty_stream_yields_empty_figures() {
    let stream = common::stream(Vec::new(), &[]);

    assert_eq!(StreamSummary::new(&stream, &[]), StreamSummary::default());
    assert_eq!(StreamGraphs::new(&stream), StreamGraphs::default());
}
