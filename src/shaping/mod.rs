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

//! Data shaping.
//!
//! Pure transformations from fetched stream data and received object graphs
//! into what the dashboard displays: labels, table rows, tallies, daily series
//! and chart specifications. Nothing here touches the network or the terminal.

pub mod activity;
pub mod charts;
pub mod flatten;
pub mod format;
pub mod print_data;
pub mod summary;

use thiserror::Error;

pub use activity::{DailyCount, commit_activity, fill_daily_gaps};
pub use flatten::{GlulamRow, PrintDataRow, glulam_vertices, simplify_glulam, simplify_print_data_point};
pub use format::{format_branch, format_commit, format_glulam, list_to_md};
pub use print_data::{PrintDataTable, create_print_data_table};
pub use summary::{BranchCommitCount, StreamGraphs, StreamSummary, ValueCount};

/// Why an object could not be shaped into rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("missing member `{0}`")]
    MissingMember(String),

    #[error("member `{path}` is not a {expected}")]
    TypeMismatch { path: String, expected: &'static str },
}

/// A row type with a fixed column layout.
pub trait Tabular {
    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}
