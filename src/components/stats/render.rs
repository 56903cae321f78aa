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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use speckledash::shaping::{
    StreamGraphs, StreamSummary,
    charts::{branch_commits, commit_activity_chart, commits_by},
    list_to_md,
};

use crate::{
    render::chart::{draw_bars, draw_plot},
    theme::Theme,
};

/// Renders the four summary cards: branches, commits, connectors and
/// contributors.
pub(crate) fn draw_stats(f: &mut Frame, area: Rect, summary: &StreamSummary, theme: &Theme) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    draw_card(
        f,
        cards[0],
        "Number of branches",
        summary.branch_count.to_string(),
        Some(list_to_md(&summary.branch_names)),
        theme,
    );
    draw_card(
        f,
        cards[1],
        "Number of commits",
        summary.commit_count.to_string(),
        None,
        theme,
    );
    draw_card(
        f,
        cards[2],
        "Number of connectors",
        summary.connector_count.to_string(),
        Some(list_to_md(&summary.connectors)),
        theme,
    );
    draw_card(
        f,
        cards[3],
        "Number of contributors",
        summary.contributor_count.to_string(),
        Some(list_to_md(&summary.contributors)),
        theme,
    );
}

/// Renders commits by application and by author, commits per branch and the
/// daily commit activity.
pub(crate) fn draw_graphs(f: &mut Frame, area: Rect, graphs: &StreamGraphs, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    draw_bars(
        f,
        top[0],
        &commits_by("Commits by Source Application", &graphs.by_application),
        theme,
    );
    draw_bars(
        f,
        top[1],
        &commits_by("Commits by Author", &graphs.by_author),
        theme,
    );
    draw_bars(f, bottom[0], &branch_commits(&graphs.branch_commits), theme);
    draw_plot(f, bottom[1], &commit_activity_chart(&graphs.activity), theme);
}

fn draw_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    details: Option<String>,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    if let Some(details) = details {
        lines.extend(details.lines().map(|l| Line::from(l.to_string())));
    }

    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title))
                .border_style(Style::default().fg(theme.border_colour)),
        ),
        area,
    );
}
