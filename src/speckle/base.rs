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

//! Typed representation of a received object graph.
//!
//! Objects coming back from the service are dynamic: any object may carry any
//! member. Rather than probing attributes, callers go through the explicit
//! optional accessors on [`Base`] and [`Member`], and use capability checks such
//! as [`Base::has_glulam_attributes`] before handing an object to a flattener.

use indexmap::IndexMap;

/// Member name of the custom attribute set carried by glulam objects.
pub const GLULAM_ATTRIBUTES: &str = "@glulam";

/// Member name of the free-text note attached to a glulam.
pub const NOTE: &str = "note";

const DEFAULT_SPECKLE_TYPE: &str = "Base";

/// A node of the object graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Base {
    id: Option<String>,
    speckle_type: String,
    members: IndexMap<String, Member>,
}

/// A member value of a [`Base`].
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Member>),
    /// A plain dictionary, i.e. a JSON object without a `speckle_type`.
    Map(IndexMap<String, Member>),
    Object(Base),
}

impl Default for Base {
    fn default() -> Self {
        Self::new(DEFAULT_SPECKLE_TYPE)
    }
}

impl Base {
    pub fn new(speckle_type: impl Into<String>) -> Self {
        Self {
            id: None,
            speckle_type: speckle_type.into(),
            members: IndexMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_member(mut self, name: impl Into<String>, value: impl Into<Member>) -> Self {
        self.set(name, value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub(crate) fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    pub fn speckle_type(&self) -> &str {
        &self.speckle_type
    }

    pub fn members(&self) -> impl Iterator<Item = (&str, &Member)> {
        self.members.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Member>) {
        self.members.insert(name.into(), value.into());
    }

    /// Raw member lookup. A present `Null` is returned as such.
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    /// True when the member exists and is not null.
    pub fn has_member(&self, name: &str) -> bool {
        self.get(name).is_some_and(|m| !m.is_null())
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Member::as_text)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Member::as_number)
    }

    pub fn object(&self, name: &str) -> Option<&Base> {
        self.get(name).and_then(Member::as_object)
    }

    pub fn list(&self, name: &str) -> Option<&[Member]> {
        self.get(name).and_then(Member::as_list)
    }

    /// The object elements of a list member, skipping anything else.
    pub fn objects<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Base> + use<'a> {
        self.list(name)
            .unwrap_or_default()
            .iter()
            .filter_map(Member::as_object)
    }

    /// Capability check for the glulam custom attribute set.
    pub fn has_glulam_attributes(&self) -> bool {
        self.object(GLULAM_ATTRIBUTES).is_some()
    }

    pub fn note(&self) -> Option<&str> {
        self.text(NOTE)
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.set(NOTE, Member::Text(note.into()));
    }

    /// Number of distinct objects this graph detaches when sent.
    pub fn total_children_count(&self) -> u64 {
        super::serialize::serialize(self).total_children_count
    }
}

impl Member {
    pub fn is_null(&self) -> bool {
        matches!(self, Member::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Member::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Member::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Base> {
        match self {
            Member::Object(base) => Some(base),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Member]> {
        match self {
            Member::List(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a named field on an object or a plain dictionary.
    pub fn field(&self, name: &str) -> Option<&Member> {
        match self {
            Member::Object(base) => base.get(name),
            Member::Map(map) => map.get(name),
            _ => None,
        }
    }
}

impl From<bool> for Member {
    fn from(value: bool) -> Self {
        Member::Bool(value)
    }
}

impl From<f64> for Member {
    fn from(value: f64) -> Self {
        Member::Number(value)
    }
}

impl From<&str> for Member {
    fn from(value: &str) -> Self {
        Member::Text(value.to_string())
    }
}

impl From<String> for Member {
    fn from(value: String) -> Self {
        Member::Text(value)
    }
}

impl From<Base> for Member {
    fn from(value: Base) -> Self {
        Member::Object(value)
    }
}

impl From<Vec<Member>> for Member {
    fn from(value: Vec<Member>) -> Self {
        Member::List(value)
    }
}

impl From<Vec<Base>> for Member {
    fn from(value: Vec<Base>) -> Self {
        Member::List(value.into_iter().map(Member::Object).collect())
    }
}

impl From<Vec<f64>> for Member {
    fn from(value: Vec<f64>) -> Self {
        Member::List(value.into_iter().map(Member::Number).collect())
    }
}

impl<T: Into<Member>> From<Option<T>> for Member {
    fn from(value: Option<T>) -> Self {
        value.map_or(Member::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_members_are_treated_as_absent() {
        let base = Base::default().with_member("note", Member::Null);

        assert!(base.get("note").is_some());
        assert!(!base.has_member("note"));
        assert_eq!(base.note(), None);
    }

    #[test]
    fn glulam_capability_requires_an_attribute_object() {
        let plain = Base::default().with_member(GLULAM_ATTRIBUTES, "not an object");
        let glulam = Base::default().with_member(GLULAM_ATTRIBUTES, Base::default());

        assert!(!plain.has_glulam_attributes());
        assert!(glulam.has_glulam_attributes());
    }

    #[test]
    fn objects_skips_non_object_elements() {
        let base = Base::default().with_member(
            "@glulams",
            vec![
                Member::Object(Base::default().with_id("a")),
                Member::Number(1.0),
                Member::Object(Base::default().with_id("b")),
            ],
        );

        let ids: Vec<_> = base.objects("@glulams").filter_map(Base::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
