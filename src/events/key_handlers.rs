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

//! Keyboard routing.
//!
//! Keys go first to the command line, then to the component of the active
//! view, and finally to the global bindings.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App, MainView,
    browser::StreamBrowserPane,
    events::{AppEvent, AppEventProcessor},
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into application events. It handles:
///
/// * **Application Control**: exiting the program, switching views.
/// * **Navigation**: moving between branches and commits in the stream
///   browser.
/// * **Components**: text entry in the connect form and the note editor,
///   view-specific actions.
///
/// # Errors
///
/// Returns an error if an event or task fails to send.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx)? {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Inputs => {
            app.connect_form.process_event(&event, &app.event_tx)?
                || process_browser_key_event(app, key)?
        }
        MainView::Commit => app.commit_view.process_event(&event, &app.event_tx)?,
        MainView::Glulams => app.glulams_view.process_event(&event, &app.event_tx)?,
        MainView::Print => app.print_view.process_event(&event, &app.event_tx)?,
        MainView::Stats | MainView::Graphs => false,
    };
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_browser_key_event(app: &mut App, key: KeyEvent) -> Result<bool> {
    let changed = match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.stream_browser.next(),
        KeyCode::Char('k') | KeyCode::Up => app.stream_browser.previous(),

        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
            app.stream_browser.toggle_pane();
            return Ok(true);
        }

        _ => return Ok(false),
    };

    match changed {
        Some(StreamBrowserPane::Branch) => app.event_tx.send(AppEvent::BranchSelectionChanged)?,
        Some(StreamBrowserPane::Commit) => app.event_tx.send(AppEvent::CommitSelectionChanged)?,
        None => {}
    }

    Ok(true)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char(digit @ '1'..='6'), _) => {
            let index = digit as usize - '1' as usize;
            app.event_tx.send(AppEvent::SetMainView(MainView::ALL[index]))?;
        }

        (KeyCode::Tab, _) | (KeyCode::Char(']'), _) => app.event_tx.send(AppEvent::NextView)?,
        (KeyCode::BackTab, _) | (KeyCode::Char('['), _) => {
            app.event_tx.send(AppEvent::PreviousView)?
        }

        (KeyCode::Char('r'), _) => app.event_tx.send(AppEvent::Connect)?,

        _ => {}
    }

    Ok(())
}
