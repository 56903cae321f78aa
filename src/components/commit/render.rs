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
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{components::CommitView, render::Render, theme::Theme};

impl Render for CommitView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = Style::default().fg(theme.muted_colour);
        let value = Style::default().fg(theme.commander_colour);
        let link = Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::UNDERLINED);

        let mut lines = vec![Line::from(Span::styled(
            self.label.as_deref().unwrap_or("No commit selected"),
            value.add_modifier(Modifier::BOLD),
        ))];

        if let Some(commit) = &self.commit {
            lines.push(Line::default());
            let fields = [
                ("Author", commit.author_name.as_deref().unwrap_or("unknown")),
                (
                    "Source application",
                    commit.source_application.as_deref().unwrap_or("unknown"),
                ),
                ("Referenced object", commit.referenced_object.as_str()),
            ];
            for (name, text) in fields {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<20}", name), label),
                    Span::styled(text, value),
                ]));
            }
            if let Some(count) = commit.total_children_count {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<20}", "Children"), label),
                    Span::styled(count.to_string(), value),
                ]));
            }
        }

        if let Some(url) = self.frontend_url() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Open this commit in the frontend (o)", label)));
            lines.push(Line::from(Span::styled(url, link)));
        }

        if let Some(url) = self.embed_url() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Embedded viewer (p)", label)));
            lines.push(Line::from(Span::styled(url, link)));
        }

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Selected Commit ")
                    .border_style(Style::default().fg(theme.border_colour)),
            ),
            area,
        );
    }
}
