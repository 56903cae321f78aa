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

//! Terminal emulator background control.
//!
//! The dashboard paints its own background colour behind the alternate screen
//! using OSC escape sequences, and hands the user's colour back on exit.
//! Terminals that do not understand OSC 11/111 ignore them.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Sets the terminal background to `colour` (OSC 11). Non-RGB colours are
/// left to the terminal.
pub(crate) fn set_terminal_bg(colour: Color) {
    if let Some(hex) = Theme::to_hex(colour) {
        write_sequence(&format!("\x1b]11;{}\x07", hex));
    }
}

/// Reverts the background to the user's configured colour (OSC 111).
pub(crate) fn reset_terminal_bg() {
    write_sequence("\x1b]111\x07");
}

fn write_sequence(sequence: &str) {
    let mut stdout = io::stdout();
    if stdout
        .write_all(sequence.as_bytes())
        .and_then(|_| stdout.flush())
        .is_err()
    {
        log::debug!("event=terminal_bg module=term status=unsupported");
    }
}
