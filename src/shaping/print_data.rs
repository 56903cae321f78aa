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

//! 3D-print toolpath table assembly.
//!
//! Whether a commit carries print data decides whether the print analysis
//! section is shown at all, so assembly never panics: it returns either the
//! table or the reason there is none.

use crate::{
    shaping::{
        ShapeError,
        flatten::{PrintDataRow, simplify_print_data_point},
    },
    speckle::{Base, Member},
};

const DATA: &str = "@Data";
const DEVIATION: &str = "deviation";

/// Rows of toolpath samples, in the order they were received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrintDataTable {
    pub rows: Vec<PrintDataRow>,
}

impl PrintDataTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Smallest and largest value of a column, if the table has rows.
    pub fn range(&self, column: impl Fn(&PrintDataRow) -> f64) -> Option<(f64, f64)> {
        self.rows.iter().map(column).fold(None, |range, value| match range {
            None => Some((value, value)),
            Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
        })
    }
}

/// Builds the print data table of a commit root.
///
/// The root's `@Data` member holds the sample list, either as its first element
/// or directly. Samples without a `deviation` are incomplete and skipped; any
/// other missing or mistyped member fails the whole table.
///
/// # Errors
///
/// Returns the [`ShapeError`] explaining why there is no table. The failure is
/// logged at `warn` so it can be diagnosed without surfacing in the UI.
pub fn create_print_data_table(root: &Base) -> Result<PrintDataTable, ShapeError> {
    build(root).inspect_err(|err| {
        log::warn!(
            "event=print_data_unavailable module=shaping root={} reason={}",
            root.id().unwrap_or("unknown"),
            err
        );
    })
}

fn build(root: &Base) -> Result<PrintDataTable, ShapeError> {
    let data = root
        .get(DATA)
        .filter(|m| !m.is_null())
        .ok_or_else(|| ShapeError::MissingMember(DATA.to_string()))?;

    let samples = sample_list(data)?;

    let mut rows = Vec::with_capacity(samples.len());
    for (index, sample) in samples.iter().enumerate() {
        let point = sample.as_object().ok_or_else(|| ShapeError::TypeMismatch {
            path: format!("{}[{}]", DATA, index),
            expected: "object",
        })?;

        if !point.has_member(DEVIATION) {
            continue;
        }

        rows.push(simplify_print_data_point(point)?);
    }

    Ok(PrintDataTable { rows })
}

fn sample_list(data: &Member) -> Result<&[Member], ShapeError> {
    let outer = data.as_list().ok_or_else(|| ShapeError::TypeMismatch {
        path: DATA.to_string(),
        expected: "list",
    })?;

    match outer.first() {
        Some(Member::List(inner)) => Ok(inner),
        Some(Member::Object(_)) => Ok(outer),
        Some(_) => Err(ShapeError::TypeMismatch {
            path: format!("{}[0]", DATA),
            expected: "list",
        }),
        None => Err(ShapeError::MissingMember(format!("{}[0]", DATA))),
    }
}
