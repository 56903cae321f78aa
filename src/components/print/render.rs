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
    widgets::{Block, Borders, Cell, Row, Table},
};

use speckledash::shaping::{PrintDataRow, Tabular};

use crate::{
    components::PrintView,
    render::{Render, chart::draw_plot},
    theme::Theme,
};

impl Render for PrintView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        if self.show_table {
            self.draw_table(f, area, theme);
            return;
        }

        let Some(charts) = &self.charts else {
            return;
        };

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
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        draw_plot(f, top[0], &charts.metrics, theme);
        draw_plot(f, top[1], &charts.speed_delta, theme);
        draw_plot(f, bottom[0], &charts.deviation_by_speed, theme);
        draw_plot(f, bottom[1], &charts.path, theme);
    }
}

impl PrintView {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(table) = &self.table else {
            return;
        };

        let rows: Vec<Row> = table
            .rows
            .iter()
            .map(|row| Row::new(row.cells().into_iter().map(Cell::from).collect::<Vec<_>>()))
            .collect();

        let header = Row::new(PrintDataRow::headers().iter().copied().map(Cell::from).collect::<Vec<_>>())
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1);

        let mut widths = vec![Constraint::Percentage(28)];
        widths.extend(std::iter::repeat_n(Constraint::Percentage(9), PrintDataRow::headers().len() - 1));

        let widget = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::default().bg(theme.highlight_bg).fg(theme.highlight_fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" Print Data ({} rows)  t: charts ", table.len()))
                    .border_style(Style::default().fg(theme.border_colour)),
            );

        f.render_stateful_widget(widget, area, &mut self.table_state);
    }
}
