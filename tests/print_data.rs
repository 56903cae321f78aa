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
use speckledash::{
    shaping::{ShapeError, create_print_data_table},
    speckle::{Base, Member},
};

#[test]
fn root_without_data_has_no_table() {
    let root = Base::default().with_id("root");

    assert_eq!(
        create_print_data_table(&root),
        Err(ShapeError::MissingMember("@Data".to_string()))
    );
}

#[test]
fn samples_without_deviation_are_skipped() {
    let samples = vec![
        common::print_point("p1", Some(0.01), 1.0),
        common::print_point("p2", None, 2.0),
    ];
    let root = Base::default().with_member("@Data", Member::List(vec![samples.into()]));

    let table = create_print_data_table(&root).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].id, "p1");
}

#[test]
fn zero_deviation_is_kept() {
    let samples = vec![common::print_point("p1", Some(0.0), 1.0)];
    let root = Base::default().with_member("@Data", Member::List(vec![samples.into()]));

    let table = create_print_data_table(&root).unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].deviation, 0.0);
}

#[test]
fn flat_sample_list_is_accepted() {
    let root = Base::default().with_member(
        "@Data",
        vec![
            common::print_point("p1", Some(0.01), 1.0),
            common::print_point("p2", Some(0.03), 2.0),
        ],
    );

    let table = create_print_data_table(&root).unwrap();

    let ids: Vec<&str> = table.rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(table.range(|r| r.deviation), Some((0.01, 0.03)));
}

#[test]
fn non_list_data_is_a_type_mismatch() {
    let root = Base::default().with_member("@Data", "not samples");

    assert_eq!(
        create_print_data_table(&root),
        Err(ShapeError::TypeMismatch {
            path: "@Data".to_string(),
            expected: "list",
        })
    );
}
