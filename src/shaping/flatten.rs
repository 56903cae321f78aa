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

//! Flattening of nested domain objects into table rows.
//!
//! Each flattener exposes exactly the documented fields and fails with a
//! [`ShapeError`] when a required nested member is missing. Callers treat a
//! failure as "not previewable", never as fatal.

use serde::Serialize;

use crate::{
    shaping::{ShapeError, Tabular},
    speckle::{
        Base, Member,
        base::GLULAM_ATTRIBUTES,
    },
};

const DISPLAY_VALUE: &str = "@displayValue";
const VERTICES: &str = "vertices";

/// Flat view of a glulam beam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlulamRow {
    pub id: String,
    pub tag: String,
    pub units: String,
    pub width: f64,
    pub height: f64,
}

/// Flat view of one 3D-print toolpath sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintDataRow {
    pub id: String,
    pub deviation: f64,
    pub speed: f64,
    pub speed_delta: f64,
    pub target: f64,
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Flattens a glulam for the data preview.
///
/// Reaches into the `@glulam.dataValue` attribute set; check
/// [`Base::has_glulam_attributes`] before calling this on arbitrary objects.
///
/// # Errors
///
/// Returns a [`ShapeError`] if the id, tag, units or section size is missing
/// or of the wrong type.
pub fn simplify_glulam(glulam: &Base) -> Result<GlulamRow, ShapeError> {
    Ok(GlulamRow {
        id: required_id(glulam)?,
        tag: text_at(glulam, &["tag"])?.to_string(),
        units: text_at(glulam, &["units"])?.to_string(),
        width: number_at(glulam, &[GLULAM_ATTRIBUTES, "dataValue", "width"])?,
        height: number_at(glulam, &[GLULAM_ATTRIBUTES, "dataValue", "height"])?,
    })
}

/// Flattens a print data point.
///
/// # Errors
///
/// Returns a [`ShapeError`] if any measurement or the position is missing.
pub fn simplify_print_data_point(point: &Base) -> Result<PrintDataRow, ShapeError> {
    Ok(PrintDataRow {
        id: required_id(point)?,
        deviation: number_at(point, &["deviation"])?,
        speed: number_at(point, &["speed"])?,
        speed_delta: number_at(point, &["speedDelta"])?,
        target: number_at(point, &["target"])?,
        time: number_at(point, &["time"])?,
        x: number_at(point, &["point", "x"])?,
        y: number_at(point, &["point", "y"])?,
        z: number_at(point, &["point", "z"])?,
    })
}

/// Vertices of the first display mesh of a glulam, as xyz triples.
///
/// A trailing incomplete triple is dropped.
pub fn glulam_vertices(glulam: &Base) -> Result<Vec<[f64; 3]>, ShapeError> {
    let display_path = format!("{}.{}", GLULAM_ATTRIBUTES, DISPLAY_VALUE);
    let meshes = walk(glulam, &[GLULAM_ATTRIBUTES, DISPLAY_VALUE])?
        .as_list()
        .ok_or_else(|| ShapeError::TypeMismatch {
            path: display_path.clone(),
            expected: "list",
        })?;

    let mesh = meshes
        .first()
        .ok_or_else(|| ShapeError::MissingMember(format!("{}[0]", display_path)))?;

    let vertices_path = format!("{}[0].{}", display_path, VERTICES);
    let flat = mesh
        .field(VERTICES)
        .and_then(Member::as_list)
        .ok_or_else(|| ShapeError::MissingMember(vertices_path.clone()))?;

    let coordinates = flat
        .iter()
        .map(|value| {
            value.as_number().ok_or_else(|| ShapeError::TypeMismatch {
                path: vertices_path.clone(),
                expected: "number",
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    Ok(coordinates
        .chunks_exact(3)
        .map(|xyz| [xyz[0], xyz[1], xyz[2]])
        .collect())
}

fn required_id(base: &Base) -> Result<String, ShapeError> {
    base.id()
        .map(str::to_string)
        .ok_or_else(|| ShapeError::MissingMember("id".to_string()))
}

fn walk<'a>(base: &'a Base, path: &[&str]) -> Result<&'a Member, ShapeError> {
    let missing = |depth: usize| ShapeError::MissingMember(path[..=depth].join("."));

    let Some((first, rest)) = path.split_first() else {
        return Err(ShapeError::MissingMember(String::new()));
    };
    let mut current = base.get(first).filter(|m| !m.is_null()).ok_or_else(|| missing(0))?;

    for (depth, name) in rest.iter().enumerate() {
        current = current
            .field(name)
            .filter(|m| !m.is_null())
            .ok_or_else(|| missing(depth + 1))?;
    }

    Ok(current)
}

fn number_at(base: &Base, path: &[&str]) -> Result<f64, ShapeError> {
    walk(base, path)?
        .as_number()
        .ok_or_else(|| ShapeError::TypeMismatch {
            path: path.join("."),
            expected: "number",
        })
}

fn text_at<'a>(base: &'a Base, path: &[&str]) -> Result<&'a str, ShapeError> {
    walk(base, path)?
        .as_text()
        .ok_or_else(|| ShapeError::TypeMismatch {
            path: path.join("."),
            expected: "text",
        })
}

impl Tabular for GlulamRow {
    fn headers() -> &'static [&'static str] {
        &["id", "tag", "units", "width", "height"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.tag.clone(),
            self.units.clone(),
            format!("{:.3}", self.width),
            format!("{:.3}", self.height),
        ]
    }
}

impl Tabular for PrintDataRow {
    fn headers() -> &'static [&'static str] {
        &["id", "deviation", "speed", "speedDelta", "target", "time", "x", "y", "z"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            format!("{:.4}", self.deviation),
            format!("{:.3}", self.speed),
            format!("{:.3}", self.speed_delta),
            format!("{:.3}", self.target),
            format!("{:.2}", self.time),
            format!("{:.3}", self.x),
            format!("{:.3}", self.y),
            format!("{:.3}", self.z),
        ]
    }
}
