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
    components::PrintView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for PrintView {
    fn process_event(&mut self, event: &Event, _event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key) = event else {
            return Ok(false);
        };

        match key.code {
            KeyCode::Char('c') => self.cycle_path_metric(),
            KeyCode::Char('t') => self.show_table = !self.show_table,
            KeyCode::Char('j') | KeyCode::Down if self.show_table => self.table_state.select_next(),
            KeyCode::Char('k') | KeyCode::Up if self.show_table => {
                self.table_state.select_previous()
            }
            KeyCode::Char('g') if self.show_table => self.table_state.select_first(),
            KeyCode::Char('G') if self.show_table => self.table_state.select_last(),
            _ => return Ok(false),
        }

        Ok(true)
    }
}
