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

//! Render the stream browser.
//!
//! Two side-by-side pickers: the stream's branches and the commits of the
//! selected branch.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use speckledash::shaping::{format_branch, format_commit};

use crate::{
    browser::{StreamBrowser, StreamBrowserPane},
    theme::Theme,
};

/// Renders the branch and commit pickers.
pub(crate) fn draw_browser(f: &mut Frame, area: Rect, browser: &mut StreamBrowser, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let branch_items: Vec<ListItem> = browser
        .branches
        .iter()
        .filter_map(|b| format_branch(Some(b)))
        .map(ListItem::new)
        .collect();

    let commit_items: Vec<ListItem> = browser
        .commits()
        .iter()
        .filter_map(|c| format_commit(Some(c)))
        .map(ListItem::new)
        .collect();

    let active_pane = browser.active_pane;

    render_list(
        f,
        chunks[0],
        " Branch ",
        branch_items,
        &mut browser.branches_state,
        active_pane == StreamBrowserPane::Branch,
        theme,
    );

    render_list(
        f,
        chunks[1],
        " Commit ",
        commit_items,
        &mut browser.commits_state,
        active_pane == StreamBrowserPane::Commit,
        theme,
    );
}

fn render_list(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    state: &mut ListState,
    is_active: bool,
    theme: &Theme,
) {
    let style = if is_active {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border_colour)
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(style),
        )
        .highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
