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

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use speckledash::speckle::{Base, Branch, Collaborator, Commit, Paginated, Stream};

pub fn at(timestamp: &str) -> DateTime<Utc> {
    timestamp.parse().unwrap()
}

pub fn commit(id: &str, created_at: &str) -> Commit {
    Commit {
        id: id.to_string(),
        message: Some(format!("commit {id}")),
        author_name: None,
        author_id: None,
        created_at: at(created_at),
        source_application: None,
        referenced_object: format!("obj-{id}"),
        total_children_count: None,
    }
}

pub fn authored(id: &str, created_at: &str, author: &str, application: &str) -> Commit {
    Commit {
        author_name: Some(author.to_string()),
        source_application: Some(application.to_string()),
        ..commit(id, created_at)
    }
}

pub fn branch(name: &str, total: u64, commits: Vec<Commit>) -> Branch {
    Branch {
        id: format!("branch-{name}"),
        name: name.to_string(),
        description: None,
        commits: Paginated {
            total_count: total,
            cursor: None,
            items: commits,
        },
    }
}

pub fn stream(branches: Vec<Branch>, collaborators: &[&str]) -> Stream {
    Stream {
        id: "2c010399e5".to_string(),
        name: "glulam factory".to_string(),
        description: None,
        branches: Paginated {
            total_count: branches.len() as u64,
            cursor: None,
            items: branches,
        },
        collaborators: collaborators
            .iter()
            .enumerate()
            .map(|(i, name)| Collaborator {
                id: format!("user-{i}"),
                name: name.to_string(),
                role: Some("stream:contributor".to_string()),
            })
            .collect(),
    }
}

pub fn glulam(id: &str, note: Option<&str>) -> Base {
    let attributes = Base::default()
        .with_member(
            "dataValue",
            Base::default().with_member("width", 0.2).with_member("height", 0.6),
        )
        .with_member(
            "@displayValue",
            vec![Base::new("Objects.Geometry.Mesh").with_member(
                "vertices",
                vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            )],
        );

    let base = Base::new("Objects.Other.Glulam")
        .with_id(id)
        .with_member("tag", format!("GL-{id}"))
        .with_member("units", "m")
        .with_member("@glulam", attributes);

    match note {
        Some(note) => base.with_member("note", note),
        None => base,
    }
}

pub fn print_point(id: &str, deviation: Option<f64>, time: f64) -> Base {
    let point = Base::new("Objects.Geometry.Point")
        .with_member("x", time * 2.0)
        .with_member("y", time * 3.0)
        .with_member("z", 0.5);

    let base = Base::new("PrintData")
        .with_id(id)
        .with_member("speed", 40.0 + time)
        .with_member("speedDelta", 0.5)
        .with_member("target", 1.0)
        .with_member("time", time)
        .with_member("point", point);

    match deviation {
        Some(deviation) => base.with_member("deviation", deviation),
        None => base,
    }
}
