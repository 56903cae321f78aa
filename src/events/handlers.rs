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

use anyhow::Result;

use speckledash::{
    notes::NoteSubmission,
    shaping::{StreamGraphs, StreamSummary, create_print_data_table},
    speckle::Base,
};

use crate::{
    App, MainView, RECEIVING_COMMIT, Session, StatusLine,
    events::{AppEvent, LoadedStream},
    tasks::{AppTask, TaskOrigin},
};

const GLULAMS: &str = "@glulams";

pub(super) fn handle_set_main_view(app: &mut App, view: MainView) {
    if app.is_available(view) {
        app.main_view = view;
    } else {
        app.status = Some(StatusLine::Info(format!(
            "Nothing to show in {} for this commit",
            view.title()
        )));
    }
}

pub(super) fn handle_step_view(app: &mut App, delta: isize) {
    let views = app.available_views();
    let Some(current) = views.iter().position(|v| *v == app.main_view) else {
        app.main_view = MainView::Inputs;
        return;
    };

    let next = (current as isize + delta).rem_euclid(views.len() as isize) as usize;
    app.main_view = views[next];
}

pub(super) fn handle_connect(app: &mut App) -> Result<()> {
    let url = app.connect_form.url().trim().to_string();
    if url.is_empty() {
        app.status = Some(StatusLine::Error("Enter a stream URL".to_string()));
        return Ok(());
    }
    let token = app.connect_form.token().trim().to_string();

    app.busy = Some("Loading stream".to_string());
    app.status = None;
    app.task_tx.send(AppTask::LoadStream { url, token })?;

    Ok(())
}

pub(super) fn handle_stream_loaded(app: &mut App, loaded: LoadedStream) -> Result<()> {
    let LoadedStream { wrapper, stream } = loaded;

    app.busy = None;
    app.stream_browser.set_branches(stream.branches.items.clone());

    let summary = StreamSummary::new(&stream, app.stream_browser.commits());
    let graphs = StreamGraphs::new(&stream);

    app.status = Some(StatusLine::Info(format!("Loaded stream {}", stream.name)));
    app.session = Some(Session {
        wrapper,
        stream,
        summary,
        graphs,
    });

    app.event_tx.send(AppEvent::CommitSelectionChanged)?;

    Ok(())
}

pub(super) fn handle_branch_selection_changed(app: &mut App) -> Result<()> {
    if let Some(session) = app.session.as_mut() {
        session.summary = StreamSummary::new(&session.stream, app.stream_browser.commits());
    }

    app.event_tx.send(AppEvent::CommitSelectionChanged)?;

    Ok(())
}

pub(super) fn handle_commit_selection_changed(app: &mut App) -> Result<()> {
    let Some(session) = app.session.as_ref() else {
        return Ok(());
    };

    let commit = app.stream_browser.selected_commit();
    app.commit_view.set_commit(&session.wrapper, commit);

    app.glulams_view.clear();
    app.print_view.clear();
    app.displayed_object = None;

    match commit {
        Some(commit) => {
            let object_id = commit.referenced_object.clone();
            app.pending_object = Some(object_id.clone());
            app.busy = Some(RECEIVING_COMMIT.to_string());
            app.task_tx.send(AppTask::ReceiveCommit { object_id })?;
        }
        None => {
            app.pending_object = None;
        }
    }

    if !app.is_available(app.main_view) {
        app.main_view = MainView::Inputs;
    }

    Ok(())
}

pub(super) fn handle_commit_received(app: &mut App, object_id: &str, root: Base) {
    if app.pending_object.as_deref() != Some(object_id) {
        log::debug!(
            "event=commit_received module=events object={} status=stale",
            object_id
        );
        return;
    }
    app.pending_object = None;
    app.settle_busy();

    let Some(session) = app.session.as_ref() else {
        return;
    };

    app.displayed_object = Some(object_id.to_string());
    let glulams: Vec<Base> = root.objects(GLULAMS).cloned().collect();
    app.glulams_view.set_glulams(glulams, &session.wrapper);

    let table = create_print_data_table(&root)
        .ok()
        .filter(|table| !table.is_empty());
    app.print_view.set_table(table);

    log::info!(
        "event=commit_received module=events object={} glulams={} print_rows={}",
        object_id,
        app.glulams_view.len(),
        app.print_view.len()
    );
}

pub(super) fn handle_submit_notes(app: &mut App) -> Result<()> {
    let Some(object_id) = app.displayed_object.clone() else {
        return Ok(());
    };
    if app.glulams_view.is_empty() {
        return Ok(());
    }

    app.busy = Some("Sending notes".to_string());
    app.task_tx.send(AppTask::SubmitNotes {
        object_id,
        glulams: app.glulams_view.glulams().to_vec(),
        edits: app.glulams_view.edits().clone(),
    })?;

    Ok(())
}

/// Applies a note submission. The committed glulams replace the ones on screen
/// only while the commit they were edited from is still displayed.
pub(super) fn handle_notes_submitted(
    app: &mut App,
    object_id: &str,
    outcome: NoteSubmission,
    glulams: Vec<Base>,
) {
    app.settle_busy();

    match outcome {
        NoteSubmission::NoChanges => {
            app.status = Some(StatusLine::Info("No notes changed".to_string()));
        }
        NoteSubmission::Committed { commit_id, updated } => {
            if app.displayed_object.as_deref() == Some(object_id) {
                app.glulams_view.replace_glulams(glulams);
            } else {
                log::debug!(
                    "event=notes_submitted module=events object={} status=stale",
                    object_id
                );
            }
            app.status = Some(StatusLine::Info(format!(
                "Commit created ({}), {} note(s) updated",
                commit_id,
                updated.len()
            )));
        }
    }
}

pub(super) fn handle_open_commit(app: &mut App, preview: bool) {
    let url = if preview {
        app.commit_view.embed_url()
    } else {
        app.commit_view.frontend_url()
    };

    if let Some(url) = url.map(str::to_string) {
        open_url(app, &url);
    }
}

pub(super) fn handle_open_glulam_preview(app: &mut App) {
    if let Some(url) = app.glulams_view.selected_embed_url().map(str::to_string) {
        open_url(app, &url);
    }
}

/// Reports a failed task. Only a failed receive of the commit still awaited
/// cancels the wait; failures of older requests leave it in place.
pub(super) fn handle_error(app: &mut App, origin: TaskOrigin, message: String) {
    let awaited = match &origin {
        TaskOrigin::Receive(object_id) => app.pending_object.as_ref() == Some(object_id),
        TaskOrigin::Stream | TaskOrigin::Submit(_) => false,
    };
    if awaited {
        app.pending_object = None;
    }
    app.settle_busy();
    app.status = Some(StatusLine::Error(message));
}

fn open_url(app: &mut App, url: &str) {
    match open::that_detached(url) {
        Ok(()) => {
            app.status = Some(StatusLine::Info(format!("Opened {}", url)));
        }
        Err(e) => {
            log::warn!("event=open_url module=events url={} error={}", url, e);
            app.status = Some(StatusLine::Error(format!("Failed to open {}: {}", url, e)));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use pretty_assertions::assert_eq;
    use speckledash::{
        config::AppConfig,
        speckle::{Paginated, Stream, StreamWrapper},
    };

    use super::*;

    fn app_with_session() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let mut app = App::new(AppConfig::default(), task_tx);

        let stream = Stream {
            id: "s1".to_string(),
            name: "glulam factory".to_string(),
            description: None,
            branches: Paginated::default(),
            collaborators: Vec::new(),
        };
        app.session = Some(Session {
            wrapper: StreamWrapper::parse("https://speckle.xyz/streams/s1").unwrap(),
            summary: StreamSummary::new(&stream, &[]),
            graphs: StreamGraphs::new(&stream),
            stream,
        });

        (app, task_rx)
    }

    fn root(ids: &[&str]) -> Base {
        let glulams: Vec<Base> = ids
            .iter()
            .map(|id| Base::new("Objects.Other.Glulam").with_id(*id))
            .collect();
        Base::default().with_member(GLULAMS, glulams)
    }

    fn awaiting(app: &mut App, object_id: &str) {
        app.pending_object = Some(object_id.to_string());
        app.busy = Some(RECEIVING_COMMIT.to_string());
    }

    #[test]
    fn older_receive_failure_keeps_waiting_for_selected_commit() {
        let (mut app, _tasks) = app_with_session();
        awaiting(&mut app, "B");

        handle_error(&mut app, TaskOrigin::Receive("A".to_string()), "boom".to_string());

        assert_eq!(app.pending_object.as_deref(), Some("B"));
        assert_eq!(app.busy.as_deref(), Some(RECEIVING_COMMIT));
        assert_eq!(app.status, Some(StatusLine::Error("boom".to_string())));

        handle_commit_received(&mut app, "B", root(&["g1", "g2"]));

        assert_eq!(app.glulams_view.len(), 2);
        assert_eq!(app.displayed_object.as_deref(), Some("B"));
        assert_eq!(app.busy, None);
    }

    #[test]
    fn failed_receive_of_selected_commit_stops_waiting() {
        let (mut app, _tasks) = app_with_session();
        awaiting(&mut app, "B");

        handle_error(&mut app, TaskOrigin::Receive("B".to_string()), "boom".to_string());

        assert_eq!(app.pending_object, None);
        assert_eq!(app.busy, None);
    }

    #[test]
    fn failed_submission_keeps_pending_receive() {
        let (mut app, _tasks) = app_with_session();
        awaiting(&mut app, "B");

        handle_error(&mut app, TaskOrigin::Submit("B".to_string()), "denied".to_string());

        assert_eq!(app.pending_object.as_deref(), Some("B"));
        assert_eq!(app.busy.as_deref(), Some(RECEIVING_COMMIT));
    }

    #[test]
    fn submitted_notes_only_replace_the_commit_on_screen() {
        let (mut app, _tasks) = app_with_session();
        awaiting(&mut app, "A");
        handle_commit_received(&mut app, "A", root(&["g1"]));

        let committed = || NoteSubmission::Committed {
            commit_id: "c1".to_string(),
            updated: vec!["g1".to_string()],
        };
        let returned = vec![
            Base::new("Objects.Other.Glulam").with_id("x1"),
            Base::new("Objects.Other.Glulam").with_id("x2"),
        ];

        handle_notes_submitted(&mut app, "other", committed(), returned.clone());
        assert_eq!(app.glulams_view.len(), 1);

        handle_notes_submitted(&mut app, "A", committed(), returned);
        assert_eq!(app.glulams_view.len(), 2);
    }

    #[test]
    fn submission_carries_the_displayed_commit() {
        let (mut app, tasks) = app_with_session();

        handle_submit_notes(&mut app).unwrap();
        assert!(tasks.try_recv().is_err());

        awaiting(&mut app, "A");
        handle_commit_received(&mut app, "A", root(&["g1"]));
        handle_submit_notes(&mut app).unwrap();

        match tasks.try_recv().unwrap() {
            AppTask::SubmitNotes { object_id, glulams, .. } => {
                assert_eq!(object_id, "A");
                assert_eq!(glulams.len(), 1);
            }
            other => panic!("unexpected task {:?}", other),
        }
    }
}
