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

//! Stream URL and token entry.

mod event;
mod render;

use tui_input::Input;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConnectField {
    #[default]
    Url,
    Token,
}

pub(crate) struct ConnectForm {
    pub(crate) url: Input,
    pub(crate) token: Input,
    pub(crate) focus: ConnectField,
    pub(crate) editing: bool,
}

impl ConnectForm {
    pub(crate) fn new(url: &str, token: Option<&str>) -> Self {
        Self {
            url: Input::new(url.to_string()),
            token: Input::new(token.unwrap_or_default().to_string()),
            focus: ConnectField::Url,
            editing: false,
        }
    }

    pub(crate) fn url(&self) -> &str {
        self.url.value()
    }

    pub(crate) fn token(&self) -> &str {
        self.token.value()
    }

    fn edit(&mut self, field: ConnectField) {
        self.focus = field;
        self.editing = true;
    }

    fn toggle_field(&mut self) {
        self.focus = match self.focus {
            ConnectField::Url => ConnectField::Token,
            ConnectField::Token => ConnectField::Url,
        };
    }

    fn focused_input(&mut self) -> &mut Input {
        match self.focus {
            ConnectField::Url => &mut self.url,
            ConnectField::Token => &mut self.token,
        }
    }
}
