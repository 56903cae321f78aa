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

//! Application events and the main event loop.
//!
//! Everything that changes UI state arrives here as an [`AppEvent`]: raw key
//! presses from the input thread, results from the task worker, and requests
//! raised by components. Each event is applied to the [`App`] and the frame is
//! redrawn.

mod handlers;
mod key_handlers;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use speckledash::{
    notes::NoteSubmission,
    speckle::{Base, Stream, StreamWrapper},
};

use crate::{App, MainView, render::draw, tasks::TaskOrigin};

/// A freshly fetched stream together with the URL it was reached through.
#[derive(Debug)]
pub(crate) struct LoadedStream {
    pub wrapper: StreamWrapper,
    pub stream: Stream,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetMainView(MainView),
    NextView,
    PreviousView,

    Connect,
    StreamLoaded(Box<LoadedStream>),

    BranchSelectionChanged,
    CommitSelectionChanged,
    CommitReceived { object_id: String, root: Box<Base> },

    SubmitNotes,
    NotesSubmitted {
        object_id: String,
        outcome: NoteSubmission,
        glulams: Vec<Base>,
    },

    OpenCommit,
    OpenCommitPreview,
    OpenGlulamPreview,

    Tick,

    ExitApplication,

    /// A worker task failed.
    Error { origin: TaskOrigin, message: String },
}

/// A component that consumes terminal input.
pub(crate) trait AppEventProcessor {
    /// Handles `event`, returning whether it was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
            AppEvent::SetMainView(view) => handlers::handle_set_main_view(app, view),
            AppEvent::NextView => handlers::handle_step_view(app, 1),
            AppEvent::PreviousView => handlers::handle_step_view(app, -1),
            AppEvent::Connect => handlers::handle_connect(app)?,
            AppEvent::StreamLoaded(loaded) => handlers::handle_stream_loaded(app, *loaded)?,
            AppEvent::BranchSelectionChanged => handlers::handle_branch_selection_changed(app)?,
            AppEvent::CommitSelectionChanged => handlers::handle_commit_selection_changed(app)?,
            AppEvent::CommitReceived { object_id, root } => {
                handlers::handle_commit_received(app, &object_id, *root)
            }
            AppEvent::SubmitNotes => handlers::handle_submit_notes(app)?,
            AppEvent::NotesSubmitted {
                object_id,
                outcome,
                glulams,
            } => handlers::handle_notes_submitted(app, &object_id, outcome, glulams),
            AppEvent::OpenCommit => handlers::handle_open_commit(app, false),
            AppEvent::OpenCommitPreview => handlers::handle_open_commit(app, true),
            AppEvent::OpenGlulamPreview => handlers::handle_open_glulam_preview(app),
            AppEvent::Error { origin, message } => handlers::handle_error(app, origin, message),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
