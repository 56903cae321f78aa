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

//! Render chart specifications.
//!
//! Maps [`PlotSpec`] onto a ratatui [`Chart`] and [`BarSpec`] onto a
//! horizontal [`BarChart`]. Shares of a whole (commits by application or by
//! author) are drawn as bars labelled with their percentage.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, LegendPosition,
        Paragraph,
    },
};

use speckledash::shaping::charts::{BarSpec, PlotKind, PlotSpec};

use crate::theme::Theme;

pub(crate) fn draw_plot(f: &mut Frame, area: Rect, spec: &PlotSpec, theme: &Theme) {
    let block = chart_block(&spec.title, theme);

    if spec.series.iter().all(|s| s.points.is_empty()) {
        f.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }

    let graph_type = match spec.kind {
        PlotKind::Line => GraphType::Line,
        PlotKind::Scatter => GraphType::Scatter,
    };

    let datasets: Vec<Dataset> = spec
        .series
        .iter()
        .enumerate()
        .map(|(index, series)| {
            Dataset::default()
                .name(series.name.clone())
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(theme.series_colour(index, spec.graded)))
                .data(&series.points)
        })
        .collect();

    let axis_style = Style::default().fg(theme.muted_colour);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(spec.x_title.as_str())
                .style(axis_style)
                .bounds(spec.x_bounds)
                .labels(spec.x_labels.iter().map(String::as_str)),
        )
        .y_axis(
            Axis::default()
                .title(spec.y_title.as_str())
                .style(axis_style)
                .bounds(spec.y_bounds)
                .labels(spec.y_labels.iter().map(String::as_str)),
        )
        .legend_position(Some(LegendPosition::TopRight))
        .hidden_legend_constraints((Constraint::Percentage(60), Constraint::Percentage(60)));

    f.render_widget(chart, area);
}

pub(crate) fn draw_bars(f: &mut Frame, area: Rect, spec: &BarSpec, theme: &Theme) {
    let block = chart_block(&spec.title, theme);

    let total: u64 = spec.bars.iter().map(|(_, value)| value).sum();
    if total == 0 {
        f.render_widget(Paragraph::new("No data").block(block), area);
        return;
    }

    let bars: Vec<Bar> = spec
        .bars
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            let colour = theme.series_colour(index, false);
            Bar::default()
                .value(*value)
                .label(Line::from(label.as_str()))
                .text_value(format!("{} ({:.0}%)", value, *value as f64 * 100.0 / total as f64))
                .style(Style::default().fg(colour))
                .value_style(Style::default().fg(theme.background_colour).bg(colour))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    f.render_widget(chart, area);
}

fn chart_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {} ", title)).style(Style::default().add_modifier(Modifier::BOLD)))
        .border_style(Style::default().fg(theme.border_colour))
}
