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

//! # Speckle stream dashboard.
//!
//! The library half of the dashboard. It holds everything that is not terminal
//! rendering:
//!
//! * [`speckle`]: the versioning service seam, a typed object graph and a thin
//!   blocking HTTP client.
//! * [`shaping`]: formatters, flatteners, summary tables, gap-filled activity
//!   series and chart specifications.
//! * [`notes`]: the glulam note diff-and-submit workflow.
//! * [`config`] and [`logging`]: ambient application setup.

pub mod config;
pub mod logging;
pub mod notes;
pub mod shaping;
pub mod speckle;

pub use notes::{NoteSubmission, submit_notes};
pub use speckle::{Base, ClientError, SpeckleApi, SpeckleClient, StreamWrapper};
