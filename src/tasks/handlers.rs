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

use std::collections::HashMap;

use anyhow::{Context, Result};

use speckledash::{
    notes,
    speckle::{Base, SpeckleApi, StreamWrapper},
};

use crate::{
    events::{AppEvent, LoadedStream},
    tasks::{TaskContext, WorkerSession},
};

pub(super) fn load_stream(ctx: &mut TaskContext, url: &str, token: &str) -> Result<()> {
    let wrapper = StreamWrapper::parse(url).context("Invalid stream URL")?;
    let client = wrapper
        .client(token)
        .with_context(|| format!("Failed to create client for {}", wrapper.server_url))?;

    let stream = client
        .get_stream(
            &wrapper.stream_id,
            ctx.config.branch_limit,
            ctx.config.commit_limit,
        )
        .with_context(|| format!("Failed to fetch stream {}", wrapper.stream_id))?;

    log::info!(
        "event=stream_loaded module=tasks stream={} branches={} authenticated={}",
        stream.id,
        stream.branches.items.len(),
        client.is_authenticated()
    );

    *ctx.session = Some(WorkerSession {
        wrapper: wrapper.clone(),
        client,
    });

    ctx.event_tx
        .send(AppEvent::StreamLoaded(Box::new(LoadedStream { wrapper, stream })))?;

    Ok(())
}

pub(super) fn receive_commit(ctx: &mut TaskContext, object_id: String) -> Result<()> {
    let session = current_session(ctx)?;

    let root = session
        .client
        .receive(&session.wrapper.stream_id, &object_id)
        .with_context(|| format!("Failed to receive object {}", object_id))?;

    ctx.event_tx.send(AppEvent::CommitReceived {
        object_id,
        root: Box::new(root),
    })?;

    Ok(())
}

pub(super) fn submit_notes(
    ctx: &mut TaskContext,
    object_id: String,
    mut glulams: Vec<Base>,
    edits: &HashMap<String, String>,
) -> Result<()> {
    let session = current_session(ctx)?;

    let outcome = notes::submit_notes(
        &session.client,
        &session.wrapper.stream_id,
        &mut glulams,
        edits,
    )
    .context("Failed to send notes")?;

    ctx.event_tx.send(AppEvent::NotesSubmitted {
        object_id,
        outcome,
        glulams,
    })?;

    Ok(())
}

fn current_session<'a>(ctx: &'a TaskContext) -> Result<&'a WorkerSession> {
    ctx.session.as_ref().context("No stream loaded")
}
