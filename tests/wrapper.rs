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

use pretty_assertions::assert_eq;
use speckledash::{ClientError, StreamWrapper};

#[test]
fn stream_url_is_parsed() {
    let wrapper = StreamWrapper::parse("https://speckle.xyz/streams/2c010399e5/").unwrap();

    assert_eq!(
        wrapper,
        StreamWrapper {
            server_url: "https://speckle.xyz".to_string(),
            stream_id: "2c010399e5".to_string(),
            branch_name: None,
            commit_id: None,
            object_id: None,
        }
    );
}

#[test]
fn commit_branch_and_object_urls_are_parsed() {
    let commit: StreamWrapper = "https://speckle.xyz/streams/2c010399e5/commits/81c6d7fdcd"
        .parse()
        .unwrap();
    assert_eq!(commit.commit_id.as_deref(), Some("81c6d7fdcd"));

    let branch = StreamWrapper::parse("http://localhost:3000/streams/abc/branches/glulam/updates").unwrap();
    assert_eq!(branch.server_url, "http://localhost:3000");
    assert_eq!(branch.branch_name.as_deref(), Some("glulam/updates"));

    let object = StreamWrapper::parse("https://speckle.xyz/streams/abc/objects/f00d").unwrap();
    assert_eq!(object.object_id.as_deref(), Some("f00d"));
}

#[test]
fn project_model_urls_are_accepted() {
    let model = StreamWrapper::parse("https://app.speckle.systems/projects/abc/models/0f1e2d").unwrap();
    assert_eq!(model.stream_id, "abc");
    assert_eq!(model.branch_name, None);
    assert_eq!(model.commit_id, None);

    let version =
        StreamWrapper::parse("https://app.speckle.systems/projects/abc/models/0f1e2d@81c6d7fdcd").unwrap();
    assert_eq!(version.commit_id.as_deref(), Some("81c6d7fdcd"));
}

#[test]
fn non_stream_urls_are_rejected() {
    assert!(matches!(
        StreamWrapper::parse("https://speckle.xyz/profile"),
        Err(ClientError::InvalidStreamUrl(_))
    ));
    assert!(matches!(StreamWrapper::parse("not a url"), Err(ClientError::Url(_))));
}

#[test]
fn preview_urls_point_at_the_embed_endpoint() {
    let wrapper = StreamWrapper::parse("https://speckle.xyz/streams/2c010399e5").unwrap();

    assert_eq!(
        wrapper.commit_url("81c6d7fdcd"),
        "https://speckle.xyz/streams/2c010399e5/commits/81c6d7fdcd"
    );
    assert_eq!(
        wrapper.commit_embed_url(Some("81c6d7fdcd")),
        "https://speckle.xyz/embed?stream=2c010399e5&commit=81c6d7fdcd"
    );
    assert_eq!(
        wrapper.commit_embed_url(None),
        "https://speckle.xyz/embed?stream=2c010399e5&commit="
    );
    assert_eq!(
        wrapper.object_embed_url("f00d"),
        "https://speckle.xyz/embed?stream=2c010399e5&object=f00d"
    );
}
