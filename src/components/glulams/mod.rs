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

//! Glulam analysis and note editing.
//!
//! Lists the glulams of the received commit, previews the selected one (its
//! flattened attributes, section and viewer URL) and keeps the user's note
//! edits until they are sent.

mod event;
mod render;

use std::collections::HashMap;

use ratatui::widgets::TableState;
use tui_input::Input;

use speckledash::{
    notes::diff_notes,
    shaping::{
        GlulamRow,
        charts::{PlotSpec, glulam_section},
        glulam_vertices, simplify_glulam,
    },
    speckle::{Base, StreamWrapper},
};

pub(crate) struct GlulamsView {
    glulams: Vec<Base>,
    /// Flattened glulams, `None` where the object cannot be previewed.
    rows: Vec<Option<GlulamRow>>,
    sections: Vec<Option<PlotSpec>>,
    embed_urls: Vec<Option<String>>,
    /// Edited note text by glulam id.
    edits: HashMap<String, String>,

    pub(crate) table_state: TableState,
    pub(crate) note_input: Input,
    pub(crate) editing: bool,
}

impl GlulamsView {
    pub(crate) fn new() -> Self {
        Self {
            glulams: vec![],
            rows: vec![],
            sections: vec![],
            embed_urls: vec![],
            edits: HashMap::new(),
            table_state: TableState::new(),
            note_input: Input::default(),
            editing: false,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.glulams.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.glulams.len()
    }

    pub(crate) fn glulams(&self) -> &[Base] {
        &self.glulams
    }

    pub(crate) fn edits(&self) -> &HashMap<String, String> {
        &self.edits
    }

    pub(crate) fn clear(&mut self) {
        self.glulams.clear();
        self.rows.clear();
        self.sections.clear();
        self.embed_urls.clear();
        self.edits.clear();
        self.table_state.select(None);
        self.note_input.reset();
        self.editing = false;
    }

    /// Shows a new glulam collection. Every note editor starts from the
    /// glulam's current note.
    pub(crate) fn set_glulams(&mut self, glulams: Vec<Base>, wrapper: &StreamWrapper) {
        self.clear();

        self.rows = glulams.iter().map(preview_row).collect();
        self.sections = glulams.iter().map(section).collect();
        self.embed_urls = glulams
            .iter()
            .map(|g| g.id().map(|id| wrapper.object_embed_url(id)))
            .collect();
        self.glulams = glulams;
        self.reset_edits();

        self.table_state
            .select((!self.glulams.is_empty()).then_some(0));
        self.load_note_input();
    }

    /// Replaces the glulams after their notes were committed, keeping the
    /// selection.
    pub(crate) fn replace_glulams(&mut self, glulams: Vec<Base>) {
        if glulams.len() != self.glulams.len() {
            log::warn!(
                "event=glulams_replaced module=glulams expected={} actual={}",
                self.glulams.len(),
                glulams.len()
            );
        }
        self.rows = glulams.iter().map(preview_row).collect();
        self.glulams = glulams;
        self.reset_edits();
        self.load_note_input();
    }

    /// Number of glulams whose edited note differs from their current note.
    pub(crate) fn pending_changes(&self) -> usize {
        diff_notes(&self.glulams, &self.edits).len()
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state
            .selected()
            .filter(|index| *index < self.glulams.len())
    }

    pub(crate) fn selected_id(&self) -> Option<&str> {
        self.glulams.get(self.selected()?)?.id()
    }

    pub(crate) fn selected_row(&self) -> Option<&GlulamRow> {
        self.rows.get(self.selected()?)?.as_ref()
    }

    pub(crate) fn selected_section(&self) -> Option<&PlotSpec> {
        self.sections.get(self.selected()?)?.as_ref()
    }

    pub(crate) fn selected_embed_url(&self) -> Option<&str> {
        self.embed_urls.get(self.selected()?)?.as_deref()
    }

    pub(crate) fn selected_note(&self) -> &str {
        self.selected_id()
            .and_then(|id| self.edits.get(id))
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn reset_edits(&mut self) {
        self.edits = self
            .glulams
            .iter()
            .filter_map(|g| {
                let id = g.id()?;
                Some((id.to_string(), g.note().unwrap_or_default().to_string()))
            })
            .collect();
    }

    fn load_note_input(&mut self) {
        self.note_input = Input::new(self.selected_note().to_string());
    }

    fn store_note_input(&mut self) {
        let Some(id) = self.selected_id().map(str::to_string) else {
            return;
        };
        self.edits.insert(id, self.note_input.value().to_string());
    }

    fn select_offset(&mut self, forward: bool) {
        let len = self.glulams.len();
        if len == 0 {
            return;
        }
        let next = match (self.selected(), forward) {
            (Some(i), true) if i + 1 < len => i + 1,
            (Some(_), true) | (None, _) => 0,
            (Some(0), false) => len - 1,
            (Some(i), false) => i - 1,
        };
        self.table_state.select(Some(next));
        self.load_note_input();
    }
}

fn preview_row(glulam: &Base) -> Option<GlulamRow> {
    if !glulam.has_glulam_attributes() {
        return None;
    }
    simplify_glulam(glulam)
        .inspect_err(|err| {
            log::warn!(
                "event=glulam_unavailable module=glulams id={} reason={}",
                glulam.id().unwrap_or("unknown"),
                err
            );
        })
        .ok()
}

fn section(glulam: &Base) -> Option<PlotSpec> {
    if !glulam.has_glulam_attributes() {
        return None;
    }
    glulam_vertices(glulam)
        .ok()
        .filter(|vertices| !vertices.is_empty())
        .map(|vertices| glulam_section(&vertices))
}
