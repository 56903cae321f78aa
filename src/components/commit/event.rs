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

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};

use crate::{
    components::CommitView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for CommitView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        match key.code {
            KeyCode::Char('o') => event_tx.send(AppEvent::OpenCommit)?,
            KeyCode::Char('p') => event_tx.send(AppEvent::OpenCommitPreview)?,
            _ => return Ok(false),
        }

        Ok(true)
    }
}
