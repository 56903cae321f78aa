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
    shaping::{format_branch, format_commit, format_glulam, list_to_md},
    speckle::Base,
};

#[test]
fn missing_selection_formats_to_none() {
    assert_eq!(format_commit(None), None);
    assert_eq!(format_branch(None), None);
    assert_eq!(format_glulam(None), None);
}

#[test]
fn commit_label_carries_message_time_and_id() {
    let commit = common::commit("81c6d7fdcd", "2024-03-05T14:07:09Z");

    let label = format_commit(Some(&commit)).unwrap();

    assert_eq!(label, "commit 81c6d7fdcd | 05/03/2024, 14:07:09 (81c6d7fdcd)");
}

#[test]
fn commit_without_message_uses_placeholder() {
    let mut commit = common::commit("abc", "2024-03-05T00:00:00Z");
    commit.message = None;

    let label = format_commit(Some(&commit)).unwrap();

    assert!(label.starts_with("no message | "));
    assert!(label.ends_with("(abc)"));
}

#[test]
fn branch_description_falls_back_when_blank() {
    let mut branch = common::branch("main", 0, Vec::new());
    assert_eq!(
        format_branch(Some(&branch)).unwrap(),
        "main | no description (branch-main)"
    );

    branch.description = Some("   ".to_string());
    assert_eq!(
        format_branch(Some(&branch)).unwrap(),
        "main | no description (branch-main)"
    );

    branch.description = Some("production beams".to_string());
    assert_eq!(
        format_branch(Some(&branch)).unwrap(),
        "main | production beams (branch-main)"
    );
}

#[test]
fn glulam_label_uses_id_and_tag() {
    let glulam = common::glulam("g1", None);
    assert_eq!(format_glulam(Some(&glulam)).unwrap(), "g1 | GL-g1");

    let untagged = Base::default().with_id("g2");
    assert_eq!(format_glulam(Some(&untagged)).unwrap(), "g2 | no tag");
}

#[test]
fn list_renders_one_bullet_per_item() {
    assert_eq!(list_to_md(["Rhino", "Revit"]), "- Rhino\n- Revit\n");
    assert_eq!(list_to_md(Vec::<String>::new()), "");
}
