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

use std::{cell::RefCell, collections::HashMap};

use pretty_assertions::assert_eq;
use speckledash::{
    ClientError, NoteSubmission, SpeckleApi, submit_notes,
    notes::{NOTES_BRANCH, NOTES_COMMIT_MESSAGE, SOURCE_APPLICATION},
    speckle::{Base, CommitCreate, Stream},
};

#[derive(Default)]
struct RecordingApi {
    calls: RefCell<Vec<String>>,
    sent: RefCell<Option<Base>>,
    commits: RefCell<Vec<CommitCreate>>,
    fail_branch: bool,
}

impl SpeckleApi for RecordingApi {
    fn get_stream(&self, stream_id: &str, _: u32, _: u32) -> Result<Stream, ClientError> {
        Err(ClientError::StreamNotFound(stream_id.to_string()))
    }

    fn receive(&self, _: &str, object_id: &str) -> Result<Base, ClientError> {
        Err(ClientError::MissingObject(object_id.to_string()))
    }

    fn send(&self, stream_id: &str, object: &Base) -> Result<String, ClientError> {
        self.calls.borrow_mut().push(format!("send {stream_id}"));
        *self.sent.borrow_mut() = Some(object.clone());
        Ok("sent-object".to_string())
    }

    fn create_branch(&self, stream_id: &str, name: &str) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(format!("branch {stream_id} {name}"));
        if self.fail_branch {
            return Err(ClientError::GraphQl("not allowed".to_string()));
        }
        Ok(())
    }

    fn create_commit(&self, commit: &CommitCreate) -> Result<String, ClientError> {
        self.calls.borrow_mut().push(format!("commit {}", commit.stream_id));
        self.commits.borrow_mut().push(commit.clone());
        Ok("new-commit".to_string())
    }
}

fn edits(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(id, note)| (id.to_string(), note.to_string()))
        .collect()
}

#[test]
fn unchanged_notes_make_no_calls() {
    let api = RecordingApi::default();
    let mut glulams = vec![common::glulam("A", Some("ok")), common::glulam("B", None)];

    let outcome = submit_notes(&api, "s1", &mut glulams, &edits(&[("A", "ok"), ("B", "")])).unwrap();

    assert_eq!(outcome, NoteSubmission::NoChanges);
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn edited_note_is_sent_and_committed_to_notes_branch() {
    let api = RecordingApi::default();
    let mut glulams = vec![common::glulam("A", None), common::glulam("B", Some("keep"))];

    let outcome = submit_notes(&api, "s1", &mut glulams, &edits(&[("A", "crack at joint")])).unwrap();

    assert_eq!(
        outcome,
        NoteSubmission::Committed {
            commit_id: "new-commit".to_string(),
            updated: vec!["A".to_string()],
        }
    );
    assert_eq!(
        *api.calls.borrow(),
        vec!["send s1", "branch s1 glulam-updates", "commit s1"]
    );

    assert_eq!(glulams[0].note(), Some("crack at joint"));

    let sent = api.sent.borrow().clone().unwrap();
    let notes: Vec<Option<&str>> = sent.objects("@glulams").map(Base::note).collect();
    assert_eq!(notes, vec![Some("crack at joint"), Some("keep")]);

    let commits = api.commits.borrow();
    assert_eq!(
        commits[0],
        CommitCreate {
            stream_id: "s1".to_string(),
            object_id: "sent-object".to_string(),
            branch_name: NOTES_BRANCH.to_string(),
            message: NOTES_COMMIT_MESSAGE.to_string(),
            source_application: SOURCE_APPLICATION.to_string(),
            total_children_count: sent.total_children_count(),
        }
    );
}

#[test]
fn service_errors_stop_the_submission() {
    let api = RecordingApi {
        fail_branch: true,
        ..RecordingApi::default()
    };
    let mut glulams = vec![common::glulam("A", Some("old"))];

    let result = submit_notes(&api, "s1", &mut glulams, &edits(&[("A", "new")]));

    assert!(matches!(result, Err(ClientError::GraphQl(_))));
    assert!(api.commits.borrow().is_empty());
    assert_eq!(glulams[0].note(), Some("new"));
}
