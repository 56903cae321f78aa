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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod browser;
pub(crate) mod chart;
mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::{
    App, MainView, StatusLine,
    components::{draw_graphs, draw_stats},
    render::{browser::draw_browser, commander::draw_commander},
    theme::Theme,
};

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a view selector, the active view, a status bar
/// and the command line. Views whose data is absent are dimmed in the
/// selector and cannot be entered.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    // Outer layout: header, main, status, command line
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    let main = outer[1];
    let theme = app.theme;
    match app.main_view {
        MainView::Inputs => draw_inputs(f, main, app),
        MainView::Commit => app.commit_view.draw(f, main, &theme),
        MainView::Glulams => app.glulams_view.draw(f, main, &theme),
        MainView::Print => app.print_view.draw(f, main, &theme),
        MainView::Stats => {
            if let Some(session) = &app.session {
                draw_stats(f, main, &session.summary, &theme);
            }
        }
        MainView::Graphs => {
            if let Some(session) = &app.session {
                draw_graphs(f, main, &session.graphs, &theme);
            }
        }
    }

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = MainView::ALL
        .iter()
        .enumerate()
        .map(|(index, view)| {
            let style = if app.is_available(*view) {
                Style::default().fg(app.theme.commander_colour)
            } else {
                Style::default().fg(app.theme.border_colour)
            };
            Line::from(Span::styled(format!("{} {}", index + 1, view.title()), style))
        })
        .collect();

    let selected = MainView::ALL
        .iter()
        .position(|view| *view == app.main_view)
        .unwrap_or_default();

    let stream_name = app
        .session
        .as_ref()
        .map(|session| format!(" {} ", session.stream.name))
        .unwrap_or_else(|| " Speckle Dashboard ".to_string());

    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(stream_name)
                .border_style(Style::default().fg(app.theme.border_colour)),
        );

    f.render_widget(tabs, area);
}

fn draw_inputs(f: &mut Frame, area: Rect, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let theme = app.theme;
    app.connect_form.draw(f, rows[0], &theme);
    draw_browser(f, rows[1], &mut app.stream_browser, &theme);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = if let Some(busy) = &app.busy {
        Line::from(Span::styled(
            format!("{}...", busy),
            Style::default().fg(theme.accent_colour),
        ))
    } else if let Some(message) = &app.commander.error {
        Line::from(Span::styled(message.as_str(), Style::default().fg(theme.error_colour)))
    } else {
        match &app.status {
            Some(StatusLine::Info(message)) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(theme.muted_colour),
            )),
            Some(StatusLine::Error(message)) => Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(theme.error_colour),
            )),
            None => Line::from(Span::styled(
                "1-6/Tab: views  r: reload  :: command  q: quit",
                Style::default().fg(theme.muted_colour),
            )),
        }
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.status_bar_colour)),
        area,
    );
}
