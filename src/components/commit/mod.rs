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

//! Selected commit preview.
//!
//! A terminal cannot host the embedded viewer, so the view lists the viewer
//! and frontend URLs of the selected commit and opens them in the system
//! browser on request.

mod event;
mod render;

use speckledash::{
    shaping::format_commit,
    speckle::{Commit, StreamWrapper},
};

#[derive(Default)]
pub(crate) struct CommitView {
    pub(crate) label: Option<String>,
    pub(crate) commit: Option<Commit>,
    pub(crate) frontend_url: Option<String>,
    pub(crate) embed_url: Option<String>,
}

impl CommitView {
    pub(crate) fn set_commit(&mut self, wrapper: &StreamWrapper, commit: Option<&Commit>) {
        self.label = format_commit(commit);
        self.commit = commit.cloned();
        self.frontend_url = commit.map(|c| wrapper.commit_url(&c.id));
        self.embed_url = commit.map(|c| wrapper.commit_embed_url(Some(&c.id)));
    }

    pub(crate) fn frontend_url(&self) -> Option<&str> {
        self.frontend_url.as_deref()
    }

    pub(crate) fn embed_url(&self) -> Option<&str> {
        self.embed_url.as_deref()
    }
}
