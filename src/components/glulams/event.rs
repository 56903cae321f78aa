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
use tui_input::{Input, backend::crossterm::EventHandler};

use speckledash::notes::{MAX_NOTE_LENGTH, clamp_note};

use crate::{
    components::GlulamsView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for GlulamsView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        if self.editing {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.editing = false,
                _ => {
                    self.note_input.handle_event(event);
                    if self.note_input.value().chars().count() > MAX_NOTE_LENGTH {
                        self.note_input = Input::new(clamp_note(self.note_input.value()).to_string());
                    }
                    self.store_note_input();
                }
            }
            return Ok(true);
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.select_offset(true),
            KeyCode::Char('k') | KeyCode::Up => self.select_offset(false),
            KeyCode::Char('e') | KeyCode::Enter => {
                if self.selected_id().is_some() {
                    self.editing = true;
                }
            }
            KeyCode::Char('S') => event_tx.send(AppEvent::SubmitNotes)?,
            KeyCode::Char('o') => event_tx.send(AppEvent::OpenGlulamPreview)?,
            _ => return Ok(false),
        }

        Ok(true)
    }
}
