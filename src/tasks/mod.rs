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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! service requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into calls on the session's
//! service client and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! There is exactly one worker, so requests run strictly one after another
//! and never overlap. The worker owns the client; loading a stream replaces
//! it.

mod handlers;

use std::{
    collections::HashMap,
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use speckledash::{
    config::AppConfig,
    speckle::{Base, SpeckleClient, StreamWrapper},
};

use crate::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AppTask {
    /// Connect to the stream behind `url` and fetch its branches and commits.
    LoadStream { url: String, token: String },

    /// Receive the object graph referenced by a commit.
    ReceiveCommit { object_id: String },

    /// Commit edited glulam notes back to the stream. `object_id` is the
    /// received commit the glulams came from.
    SubmitNotes {
        object_id: String,
        glulams: Vec<Base>,
        edits: HashMap<String, String>,
    },
}

/// The request a worker result or failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TaskOrigin {
    Stream,
    Receive(String),
    Submit(String),
}

impl AppTask {
    pub(crate) fn origin(&self) -> TaskOrigin {
        match self {
            AppTask::LoadStream { .. } => TaskOrigin::Stream,
            AppTask::ReceiveCommit { object_id } => TaskOrigin::Receive(object_id.clone()),
            AppTask::SubmitNotes { object_id, .. } => TaskOrigin::Submit(object_id.clone()),
        }
    }
}

/// The connection established by the last successful [`AppTask::LoadStream`].
struct WorkerSession {
    wrapper: StreamWrapper,
    client: SpeckleClient,
}

/// Spawns a background thread to process application tasks.
///
/// The worker enters a blocking loop, listening for incoming [`AppTask`]s
/// until the sending side is dropped.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let mut session = None;

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                session: &mut session,
            };

            let origin = task.origin();
            if let Err(e) = handle_task(task, &mut ctx) {
                log::error!("event=task_failed module=tasks origin={:?} error={:#}", origin, e);
                let _ = event_tx.send(AppEvent::Error {
                    origin,
                    message: format!("{:#}", e),
                });
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    session: &'a mut Option<WorkerSession>,
}

/// Orchestrates the execution of a single task.
///
/// Each handler sends its result back through the application event channel.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadStream { url, token } => handlers::load_stream(ctx, &url, &token),
        AppTask::ReceiveCommit { object_id } => handlers::receive_commit(ctx, object_id),
        AppTask::SubmitNotes {
            object_id,
            glulams,
            edits,
        } => handlers::submit_notes(ctx, object_id, glulams, &edits),
    }
}
