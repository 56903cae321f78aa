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

//! Conversion between wire JSON and [`Base`] graphs.
//!
//! Receiving: the server returns the root object and its whole closure as a
//! flat list. [`hydrate`] resolves `referencedId` placeholders and re-assembles
//! chunked members (`@(31250)vertices` becomes `vertices`).
//!
//! Sending: [`serialize`] detaches every object held by a member whose name
//! starts with `@`, replacing it with a reference, and gives each object a
//! content id derived from its JSON.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde_json::{Map, Value, json};
use sha2::{Digest, Sha256};

use crate::speckle::{
    ClientError,
    base::{Base, Member},
};

const ID: &str = "id";
const SPECKLE_TYPE: &str = "speckle_type";
const REFERENCED_ID: &str = "referencedId";
const REFERENCE_TYPE: &str = "reference";
const CLOSURE: &str = "__closure";
const TOTAL_CHILDREN_COUNT: &str = "totalChildrenCount";
const CHUNK_DATA: &str = "data";

const ID_LENGTH: usize = 32;

/// Objects ready to be uploaded, root first.
#[derive(Debug, Clone)]
pub(crate) struct SerializedObjects {
    pub(crate) root_id: String,
    pub(crate) total_children_count: u64,
    pub(crate) objects: Vec<Value>,
}

/// Rebuilds the graph rooted at `root_id` from a flat list of wire objects.
pub(crate) fn hydrate(root_id: &str, objects: Vec<Value>) -> Result<Base, ClientError> {
    let by_id: HashMap<String, Value> = objects
        .into_iter()
        .filter_map(|object| {
            let id = object.get(ID)?.as_str()?.to_string();
            Some((id, object))
        })
        .collect();

    let root = by_id
        .get(root_id)
        .ok_or_else(|| ClientError::MissingObject(root_id.to_string()))?;

    match to_member(root, &by_id)? {
        Member::Object(base) => Ok(base),
        // A root without a type is still usable as a plain object.
        Member::Map(map) => {
            let mut base = Base::default();
            for (name, value) in map {
                base.set(name, value);
            }
            base.set_id(Some(root_id.to_string()));
            Ok(base)
        }
        _ => Err(ClientError::MissingObject(root_id.to_string())),
    }
}

fn to_member(value: &Value, objects: &HashMap<String, Value>) -> Result<Member, ClientError> {
    let member = match value {
        Value::Null => Member::Null,
        Value::Bool(value) => Member::Bool(*value),
        Value::Number(value) => Member::Number(value.as_f64().unwrap_or_default()),
        Value::String(value) => Member::Text(value.clone()),
        Value::Array(items) => Member::List(
            items
                .iter()
                .map(|item| to_member(item, objects))
                .collect::<Result<_, _>>()?,
        ),
        Value::Object(map) => {
            if let Some(reference) = map.get(REFERENCED_ID).and_then(Value::as_str) {
                let target = objects
                    .get(reference)
                    .ok_or_else(|| ClientError::MissingObject(reference.to_string()))?;
                return to_member(target, objects);
            }

            match map.get(SPECKLE_TYPE).and_then(Value::as_str) {
                Some(speckle_type) => Member::Object(to_base(speckle_type, map, objects)?),
                None => Member::Map(
                    map.iter()
                        .map(|(name, value)| Ok((name.clone(), to_member(value, objects)?)))
                        .collect::<Result<_, ClientError>>()?,
                ),
            }
        }
    };

    Ok(member)
}

fn to_base(
    speckle_type: &str,
    map: &Map<String, Value>,
    objects: &HashMap<String, Value>,
) -> Result<Base, ClientError> {
    let mut base = Base::new(speckle_type);
    base.set_id(map.get(ID).and_then(Value::as_str).map(str::to_string));

    for (name, value) in map {
        if matches!(name.as_str(), ID | SPECKLE_TYPE | CLOSURE) {
            continue;
        }

        match chunked_member_name(name) {
            Some(member_name) => base.set(member_name, dechunk(to_member(value, objects)?)),
            None => base.set(name.clone(), to_member(value, objects)?),
        }
    }

    Ok(base)
}

// `@(31250)vertices` -> `vertices`
fn chunked_member_name(name: &str) -> Option<&str> {
    let rest = name.strip_prefix("@(")?;
    let (size, member) = rest.split_once(')')?;
    size.parse::<usize>().ok()?;
    Some(member)
}

fn dechunk(member: Member) -> Member {
    let Member::List(chunks) = member else {
        return member;
    };

    let mut data = Vec::new();
    for chunk in chunks {
        match chunk.field(CHUNK_DATA).and_then(Member::as_list) {
            Some(items) => data.extend(items.iter().cloned()),
            None => data.push(chunk),
        }
    }

    Member::List(data)
}

/// Serializes a graph into content-addressed wire objects.
pub(crate) fn serialize(base: &Base) -> SerializedObjects {
    let mut serializer = Serializer::default();
    let root = serializer.traverse_base(base);

    let mut objects = Vec::with_capacity(serializer.detached.len() + 1);
    objects.push(Value::Object(root.object));
    objects.extend(serializer.detached.into_values());

    SerializedObjects {
        root_id: root.id,
        total_children_count: root.closure.len() as u64,
        objects,
    }
}

#[derive(Default)]
struct Serializer {
    detached: IndexMap<String, Value>,
}

struct Traversed {
    id: String,
    object: Map<String, Value>,
    closure: IndexMap<String, u64>,
}

impl Serializer {
    fn traverse_base(&mut self, base: &Base) -> Traversed {
        let mut object = Map::new();
        let mut closure = IndexMap::new();

        object.insert(SPECKLE_TYPE.to_string(), json!(base.speckle_type()));
        for (name, member) in base.members() {
            if matches!(name, ID | SPECKLE_TYPE | CLOSURE | TOTAL_CHILDREN_COUNT) {
                continue;
            }
            let detach = name.starts_with('@');
            let value = self.traverse_member(member, detach, &mut closure);
            object.insert(name.to_string(), value);
        }

        object.insert(TOTAL_CHILDREN_COUNT.to_string(), json!(closure.len()));
        if !closure.is_empty() {
            let entries: Map<String, Value> = closure
                .iter()
                .map(|(id, depth)| (id.clone(), json!(depth)))
                .collect();
            object.insert(CLOSURE.to_string(), Value::Object(entries));
        }

        let id = content_id(&object);
        object.insert(ID.to_string(), json!(id));

        Traversed {
            id,
            object,
            closure,
        }
    }

    fn traverse_member(
        &mut self,
        member: &Member,
        detach: bool,
        closure: &mut IndexMap<String, u64>,
    ) -> Value {
        match member {
            Member::Null => Value::Null,
            Member::Bool(value) => json!(value),
            Member::Number(value) => json!(value),
            Member::Text(value) => json!(value),
            Member::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| self.traverse_member(item, detach, closure))
                    .collect(),
            ),
            Member::Map(map) => Value::Object(
                map.iter()
                    .map(|(name, value)| {
                        let detach = name.starts_with('@');
                        (name.clone(), self.traverse_member(value, detach, closure))
                    })
                    .collect(),
            ),
            Member::Object(base) => {
                let child = self.traverse_base(base);
                if detach {
                    add_to_closure(closure, &child.id, 1);
                    for (id, depth) in &child.closure {
                        add_to_closure(closure, id, depth + 1);
                    }
                    let reference = json!({ REFERENCED_ID: child.id, SPECKLE_TYPE: REFERENCE_TYPE });
                    self.detached.insert(child.id, Value::Object(child.object));
                    reference
                } else {
                    for (id, depth) in &child.closure {
                        add_to_closure(closure, id, *depth);
                    }
                    Value::Object(child.object)
                }
            }
        }
    }
}

fn add_to_closure(closure: &mut IndexMap<String, u64>, id: &str, depth: u64) {
    let entry = closure.entry(id.to_string()).or_insert(depth);
    *entry = (*entry).min(depth);
}

fn content_id(object: &Map<String, Value>) -> String {
    let json = Value::Object(object.clone()).to_string();
    let digest = Sha256::digest(json.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(ID_LENGTH);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chunked_member_names_are_recognised() {
        assert_eq!(chunked_member_name("@(31250)vertices"), Some("vertices"));
        assert_eq!(chunked_member_name("@displayValue"), None);
        assert_eq!(chunked_member_name("@(abc)vertices"), None);
    }

    #[test]
    fn chunked_references_are_hydrated_into_one_list() {
        let objects = vec![
            json!({
                "id": "root",
                "speckle_type": "Objects.Geometry.Mesh",
                "@(3)vertices": [
                    { "referencedId": "c1", "speckle_type": "reference" },
                    { "referencedId": "c2", "speckle_type": "reference" }
                ]
            }),
            json!({ "id": "c1", "speckle_type": "Speckle.Core.Models.DataChunk", "data": [1.0, 2.0, 3.0] }),
            json!({ "id": "c2", "speckle_type": "Speckle.Core.Models.DataChunk", "data": [4.0] }),
        ];

        let mesh = hydrate("root", objects).unwrap();

        let vertices: Vec<f64> = mesh
            .list("vertices")
            .unwrap()
            .iter()
            .filter_map(Member::as_number)
            .collect();
        assert_eq!(vertices, vec![1.0, 2.0, 3.0, 4.0]);
        assert!(mesh.get("@(3)vertices").is_none());
    }

    #[test]
    fn missing_reference_is_reported() {
        let objects = vec![json!({
            "id": "root",
            "speckle_type": "Base",
            "@glulams": [{ "referencedId": "gone", "speckle_type": "reference" }]
        })];

        assert!(matches!(
            hydrate("root", objects),
            Err(ClientError::MissingObject(id)) if id == "gone"
        ));
    }

    #[test]
    fn detached_children_become_references() {
        let child = Base::new("Objects.Other.Glulam").with_member("tag", "GL1");
        let root = Base::default().with_member("@glulams", vec![child]);

        let serialized = serialize(&root);

        assert_eq!(serialized.objects.len(), 2);
        assert_eq!(serialized.total_children_count, 1);

        let root_json = &serialized.objects[0];
        let reference = &root_json["@glulams"][0];
        assert_eq!(reference[SPECKLE_TYPE], json!(REFERENCE_TYPE));
        assert_eq!(reference[REFERENCED_ID], serialized.objects[1][ID]);
        assert_eq!(root_json[ID], json!(serialized.root_id));
    }

    #[test]
    fn content_ids_are_deterministic_and_content_sensitive() {
        let first = Base::default().with_member("note", "a");
        let same = Base::default().with_member("note", "a");
        let other = Base::default().with_member("note", "b");

        let first_id = serialize(&first).root_id;
        assert_eq!(first_id.len(), ID_LENGTH);
        assert_eq!(first_id, serialize(&same).root_id);
        assert_ne!(first_id, serialize(&other).root_id);
    }

    #[test]
    fn serialized_graph_hydrates_back() {
        let child = Base::new("Objects.Other.Glulam")
            .with_member("tag", "GL1")
            .with_member("note", "check");
        let root = Base::default().with_member("@glulams", vec![child]);

        let serialized = serialize(&root);
        let hydrated = hydrate(&serialized.root_id, serialized.objects).unwrap();

        let glulam = hydrated.objects("@glulams").next().unwrap();
        assert_eq!(glulam.text("tag"), Some("GL1"));
        assert_eq!(glulam.note(), Some("check"));
    }
}
