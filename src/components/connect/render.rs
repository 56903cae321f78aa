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
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::{ConnectField, ConnectForm},
    render::Render,
    theme::Theme,
};

const TOKEN_MASK: char = '•';

impl Render for ConnectForm {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let masked: String = self.token().chars().map(|_| TOKEN_MASK).collect();
        let token_hint = if self.token().is_empty() {
            "(empty: use a local account)"
        } else {
            ""
        };

        self.draw_field(f, rows[0], " Stream URL ", self.url().to_string(), ConnectField::Url, theme);
        self.draw_field(
            f,
            rows[1],
            " Speckle token ",
            format!("{}{}", masked, token_hint),
            ConnectField::Token,
            theme,
        );

        let help = if self.editing {
            "Enter: connect  Tab: switch field  Esc: done"
        } else {
            "e: edit URL  t: edit token  Enter/r: connect"
        };
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(help, Style::default().fg(theme.muted_colour)))),
            rows[2],
        );
    }
}

impl ConnectForm {
    fn draw_field(
        &self,
        f: &mut Frame,
        area: Rect,
        title: &str,
        text: String,
        field: ConnectField,
        theme: &Theme,
    ) {
        let focused = self.editing && self.focus == field;
        let border_style = if focused {
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.border_colour)
        };

        let input = match field {
            ConnectField::Url => &self.url,
            ConnectField::Token => &self.token,
        };
        let width = area.width.saturating_sub(2) as usize;
        let scroll = input.visual_scroll(width);

        f.render_widget(
            Paragraph::new(text)
                .scroll((0, scroll as u16))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(title)
                        .border_style(border_style),
                ),
            area,
        );

        if focused {
            let cursor = input.visual_cursor().max(scroll) - scroll;
            f.set_cursor_position((area.x + 1 + cursor as u16, area.y + 1));
        }
    }
}
