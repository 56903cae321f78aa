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

//! Glulam note editing.
//!
//! Edited notes are diffed against the received glulams. When anything
//! changed, the whole collection is sent back as a new object and committed to
//! a dedicated branch.

use std::collections::HashMap;

use crate::speckle::{Base, ClientError, CommitCreate, SpeckleApi};

/// Branch receiving note commits.
pub const NOTES_BRANCH: &str = "glulam-updates";

pub const NOTES_COMMIT_MESSAGE: &str = "updated notes from glulam dashboard";

pub const SOURCE_APPLICATION: &str = "speckledash";

/// Longest note the editor accepts, in characters.
pub const MAX_NOTE_LENGTH: usize = 500;

const GLULAMS: &str = "@glulams";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSubmission {
    NoChanges,
    Committed {
        commit_id: String,
        updated: Vec<String>,
    },
}

/// Ids of glulams whose edited note differs from their current one.
///
/// A glulam without a note compares as the empty string, and glulams without
/// an edit are unchanged. Ids are returned in collection order.
pub fn diff_notes(glulams: &[Base], edits: &HashMap<String, String>) -> Vec<String> {
    glulams
        .iter()
        .filter_map(|glulam| {
            let id = glulam.id()?;
            let edited = edits.get(id)?;
            (edited.as_str() != glulam.note().unwrap_or_default()).then(|| id.to_string())
        })
        .collect()
}

/// Writes the edited note of every glulam listed in `changed`.
pub fn apply_notes(glulams: &mut [Base], edits: &HashMap<String, String>, changed: &[String]) {
    for glulam in glulams.iter_mut() {
        let Some(id) = glulam.id().map(str::to_string) else {
            continue;
        };
        if !changed.contains(&id) {
            continue;
        }
        if let Some(note) = edits.get(&id) {
            glulam.set_note(note.as_str());
        }
    }
}

/// Commits edited notes back to the stream.
///
/// Nothing is sent when no note changed. Otherwise the edits are applied in
/// memory, the full collection is sent as `@glulams` of a new object, the
/// notes branch is created if needed and a commit referencing the object is
/// made on it.
///
/// # Errors
///
/// Any [`ClientError`] from the service is returned as is. Notes applied in
/// memory stay applied.
pub fn submit_notes(
    api: &impl SpeckleApi,
    stream_id: &str,
    glulams: &mut [Base],
    edits: &HashMap<String, String>,
) -> Result<NoteSubmission, ClientError> {
    let updated = diff_notes(glulams, edits);
    if updated.is_empty() {
        log::info!("event=notes_unchanged module=notes stream={}", stream_id);
        return Ok(NoteSubmission::NoChanges);
    }

    apply_notes(glulams, edits, &updated);

    let root = Base::default().with_member(GLULAMS, glulams.to_vec());
    let object_id = api.send(stream_id, &root)?;

    api.create_branch(stream_id, NOTES_BRANCH)?;

    let commit_id = api.create_commit(&CommitCreate {
        stream_id: stream_id.to_string(),
        object_id,
        branch_name: NOTES_BRANCH.to_string(),
        message: NOTES_COMMIT_MESSAGE.to_string(),
        source_application: SOURCE_APPLICATION.to_string(),
        total_children_count: root.total_children_count(),
    })?;

    log::info!(
        "event=notes_committed module=notes stream={} commit={} updated={}",
        stream_id,
        commit_id,
        updated.len()
    );

    Ok(NoteSubmission::Committed { commit_id, updated })
}

/// Truncates `note` to [`MAX_NOTE_LENGTH`] characters.
pub fn clamp_note(note: &str) -> &str {
    match note.char_indices().nth(MAX_NOTE_LENGTH) {
        Some((end, _)) => &note[..end],
        None => note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glulam(id: &str, note: Option<&str>) -> Base {
        let base = Base::new("Objects.Other.Glulam").with_id(id);
        match note {
            Some(note) => base.with_member("note", note),
            None => base,
        }
    }

    #[test]
    fn absent_note_equals_empty_edit() {
        let glulams = [glulam("a", None)];
        let edits = HashMap::from([("a".to_string(), String::new())]);
        assert!(diff_notes(&glulams, &edits).is_empty());
    }

    #[test]
    fn only_changed_notes_are_applied() {
        let mut glulams = [glulam("a", Some("old")), glulam("b", Some("keep"))];
        let edits = HashMap::from([
            ("a".to_string(), "new".to_string()),
            ("b".to_string(), "keep".to_string()),
        ]);

        let changed = diff_notes(&glulams, &edits);
        assert_eq!(changed, vec!["a".to_string()]);

        apply_notes(&mut glulams, &edits, &changed);
        assert_eq!(glulams[0].note(), Some("new"));
        assert_eq!(glulams[1].note(), Some("keep"));
    }

    #[test]
    fn clamp_counts_characters() {
        let long = "é".repeat(MAX_NOTE_LENGTH + 3);
        assert_eq!(clamp_note(&long).chars().count(), MAX_NOTE_LENGTH);
        assert_eq!(clamp_note("short"), "short");
    }
}
