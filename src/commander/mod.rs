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

//! Command-line input logic and state management.
//!
//! This module implements a `:` command line. It owns a text input component
//! and, when a command is submitted, raises the corresponding application
//! event.
//!
//! | Command              | Effect                                      |
//! |----------------------|---------------------------------------------|
//! | `q`                  | quit                                        |
//! | `connect`, `reload`  | (re)load the stream from the connect form   |
//! | `send`               | commit edited glulam notes                  |
//! | `open`               | open the selected commit in the browser     |
//! | `preview`            | open the commit's embedded viewer           |
//! | `1` .. `6`           | switch view                                 |

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
    pub(crate) error: Option<String>,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
            error: None,
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning whether the command line consumed
    /// it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                self.error = None;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;
                if !buffer.is_empty() {
                    match parse_command(&buffer) {
                        Some(event) => event_tx.send(event)?,
                        None => self.error = Some(format!("Unknown command: {}", buffer)),
                    }
                }
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] | ["quit"] => AppEvent::ExitApplication,

        ["connect"] | ["reload"] => AppEvent::Connect,

        ["send"] => AppEvent::SubmitNotes,

        ["open"] => AppEvent::OpenCommit,
        ["preview"] => AppEvent::OpenCommitPreview,

        [view] => {
            let index = view.parse::<usize>().ok()?.checked_sub(1)?;
            AppEvent::SetMainView(*MainView::ALL.get(index)?)
        }

        _ => return None,
    };

    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_view_numbers() {
        assert!(matches!(
            parse_command("3"),
            Some(AppEvent::SetMainView(MainView::Glulams))
        ));
        assert!(parse_command("0").is_none());
        assert!(parse_command("7").is_none());
    }

    #[test]
    fn unknown_commands_are_rejected() {
        assert!(matches!(parse_command("send"), Some(AppEvent::SubmitNotes)));
        assert!(parse_command("scan everything").is_none());
    }
}
