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
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{ConnectField, ConnectForm},
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for ConnectForm {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        if !self.editing {
            match key.code {
                KeyCode::Char('e') => self.edit(ConnectField::Url),
                KeyCode::Char('t') => self.edit(ConnectField::Token),
                KeyCode::Enter => event_tx.send(AppEvent::Connect)?,
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => self.editing = false,
            KeyCode::Tab | KeyCode::BackTab => self.toggle_field(),
            KeyCode::Enter => {
                self.editing = false;
                event_tx.send(AppEvent::Connect)?;
            }
            _ => {
                self.focused_input().handle_event(event);
            }
        }

        Ok(true)
    }
}
