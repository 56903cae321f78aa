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

//! Dashboard views.
//!
//! Each component owns the state of one view, consumes the keys sent to it
//! while its view is active, and renders itself.

mod commit;
mod connect;
mod glulams;
mod print;
mod stats;

pub(crate) use commit::CommitView;
pub(crate) use connect::{ConnectField, ConnectForm};
pub(crate) use glulams::GlulamsView;
pub(crate) use print::PrintView;
pub(crate) use stats::{draw_graphs, draw_stats};
