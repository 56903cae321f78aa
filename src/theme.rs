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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) status_bar_colour: Color,
    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) highlight_bg: Color,
    pub(crate) highlight_fg: Color,

    /// Categorical colours for chart series and bars.
    pub(crate) series_colours: [Color; 6],
    /// Low to high colours for value-graded series.
    pub(crate) gradient_colours: [Color; 5],
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 24, 38),
            accent_colour: Color::Rgb(59, 130, 246),
            border_colour: Color::Rgb(102, 102, 102),
            status_bar_colour: Color::Rgb(30, 38, 56),
            commander_colour: Color::Rgb(255, 255, 255),
            error_colour: Color::Rgb(239, 68, 68),
            muted_colour: Color::Rgb(162, 161, 166),
            highlight_bg: Color::Rgb(59, 130, 246),
            highlight_fg: Color::Rgb(255, 255, 255),

            series_colours: [
                Color::Rgb(99, 110, 250),
                Color::Rgb(239, 85, 59),
                Color::Rgb(0, 204, 150),
                Color::Rgb(171, 99, 250),
                Color::Rgb(255, 161, 90),
                Color::Rgb(25, 211, 243),
            ],
            gradient_colours: [
                Color::Rgb(13, 8, 135),
                Color::Rgb(126, 3, 168),
                Color::Rgb(204, 71, 120),
                Color::Rgb(248, 149, 64),
                Color::Rgb(240, 249, 33),
            ],
        }
    }

    /// Colour for the `index`th series of a chart.
    pub(crate) fn series_colour(&self, index: usize, graded: bool) -> Color {
        if graded {
            self.gradient_colours[index.min(self.gradient_colours.len() - 1)]
        } else {
            self.series_colours[index % self.series_colours.len()]
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Only `Rgb` colours have a hex form.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
