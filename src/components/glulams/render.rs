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
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use speckledash::{
    notes::MAX_NOTE_LENGTH,
    shaping::{GlulamRow, Tabular, format_glulam},
};

use crate::{
    components::GlulamsView,
    render::{Render, chart::draw_plot},
    theme::Theme,
};

impl Render for GlulamsView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_table(f, columns[0], theme);

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Min(8),
                Constraint::Length(6),
            ])
            .split(columns[1]);

        self.draw_details(f, detail[0], theme);

        match self.selected_section() {
            Some(spec) => draw_plot(f, detail[1], spec, theme),
            None => f.render_widget(
                Paragraph::new("No display mesh").block(bordered(" Section ", theme)),
                detail[1],
            ),
        }

        self.draw_note(f, detail[2], theme);
    }
}

impl GlulamsView {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let changed = self.changed_flags();

        let rows = self.glulams().iter().enumerate().map(|(index, glulam)| {
            let marker = if changed[index] { "*" } else { "" };
            let mut cells = vec![Cell::from(Line::from(marker).style(Style::default().fg(theme.accent_colour)))];
            match self.rows.get(index).and_then(Option::as_ref) {
                Some(row) => cells.extend(row.cells().into_iter().map(Cell::from)),
                None => {
                    cells.push(Cell::from(glulam.id().unwrap_or_default().to_string()));
                    cells.push(Cell::from(Span::styled(
                        "not previewable",
                        Style::default().fg(theme.muted_colour),
                    )));
                }
            }
            Row::new(cells)
        });

        let headers = GlulamRow::headers();
        let header = Row::new(
            std::iter::once("")
                .chain(headers.iter().copied())
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
        .bottom_margin(1);

        let widths = [
            Constraint::Length(1),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Length(8),
            Constraint::Length(8),
        ];

        let title = match self.pending_changes() {
            0 => format!(" Glulams ({}) ", self.len()),
            n => format!(" Glulams ({}), {} note(s) changed ", self.len(), n),
        };

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .block(bordered(&title, theme));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn draw_details(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = Style::default().fg(theme.muted_colour);

        let title = self
            .selected()
            .and_then(|index| format_glulam(self.glulams().get(index)))
            .unwrap_or_else(|| "No glulam selected".to_string());

        let mut lines = vec![Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        if let Some(row) = self.selected_row() {
            let json = serde_json::to_string_pretty(row).unwrap_or_default();
            lines.extend(json.lines().map(|l| Line::from(l.to_string())));
        }

        if let Some(url) = self.selected_embed_url() {
            lines.push(Line::from(vec![
                Span::styled("viewer (o): ", label),
                Span::styled(url.to_string(), Style::default().fg(theme.accent_colour)),
            ]));
        }

        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(bordered(" Glulam ", theme)),
            area,
        );
    }

    fn draw_note(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_style = if self.editing {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let title = format!(
            " Note {}/{}  (e: edit, S: send notes) ",
            self.note_input.value().chars().count(),
            MAX_NOTE_LENGTH
        );

        f.render_widget(
            Paragraph::new(self.note_input.value())
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title)
                        .border_style(border_style),
                ),
            area,
        );

        if self.editing {
            let width = area.width.saturating_sub(2).max(1);
            let cursor = self.note_input.visual_cursor() as u16;
            f.set_cursor_position((
                area.x + 1 + cursor % width,
                area.y + 1 + (cursor / width).min(area.height.saturating_sub(3)),
            ));
        }
    }

    fn changed_flags(&self) -> Vec<bool> {
        self.glulams()
            .iter()
            .map(|glulam| {
                glulam.id().is_some_and(|id| {
                    self.edits()
                        .get(id)
                        .is_some_and(|edit| edit.as_str() != glulam.note().unwrap_or_default())
                })
            })
            .collect()
    }
}

fn bordered<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(theme.border_colour))
}
