//! Raw geometry records of one logical object
//!
//! A [`GeometryGroup`] holds positions, normals, faces and edges exactly as
//! they were declared in the source text, with indices converted to 0-based.
//! Groups are assembled through [`GroupBuilder`]. Faces and edges may name
//! positions declared later in the same group; every index is checked when
//! the builder finishes, so a finished group always satisfies its index
//! invariant.

use crate::error::{LineObjError, Result};
use serde::Serialize;

/// A 3-component float record (position or normal)
pub type Vec3 = [f32; 3];

/// Triangle as three 0-based position indices
pub type Face = [u32; 3];

/// Line segment as two 0-based position indices
pub type Edge = [u32; 2];

/// Named collection of raw geometric records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryGroup {
    name: String,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<Face>,
    edges: Vec<Edge>,
}

impl GeometryGroup {
    /// Create an empty group
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            positions: Vec::new(),
            normals: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a group from already 0-based records, validating every index
    pub fn from_parts<S: Into<String>>(
        name: S,
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        faces: Vec<Face>,
        edges: Vec<Edge>,
    ) -> Result<Self> {
        let group = Self {
            name: name.into(),
            positions,
            normals,
            faces,
            edges,
        };
        group.validate()?;
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Check if the group carries no records at all
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
            && self.normals.is_empty()
            && self.faces.is_empty()
            && self.edges.is_empty()
    }

    /// Check that every face and edge index refers to a declared position
    pub fn validate(&self) -> Result<()> {
        let count = self.positions.len();
        let faces = self.faces.iter().enumerate().map(|(i, f)| ("face", i, &f[..]));
        let edges = self.edges.iter().enumerate().map(|(i, e)| ("edge", i, &e[..]));

        for (kind, i, indices) in faces.chain(edges) {
            if let Some(bad) = indices.iter().find(|&&idx| idx as usize >= count) {
                return Err(LineObjError::invalid_geometry(format!(
                    "{} {} of group '{}' references position {} but only {} exist",
                    kind, i, self.name, bad, count
                )));
            }
        }

        Ok(())
    }
}

/// Incremental, index-checked construction of a [`GeometryGroup`]
///
/// Source line numbers are kept per face and edge so that an out-of-range
/// index found by [`GroupBuilder::finish`] points at the offending line.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    group: GeometryGroup,
    face_lines: Vec<usize>,
    edge_lines: Vec<usize>,
}

impl GroupBuilder {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            group: GeometryGroup::new(name),
            face_lines: Vec::new(),
            edge_lines: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.group.name
    }

    pub fn position_count(&self) -> usize {
        self.group.positions.len()
    }

    pub fn push_position(&mut self, position: Vec3) {
        self.group.positions.push(position);
    }

    pub fn push_normal(&mut self, normal: Vec3) {
        self.group.normals.push(normal);
    }

    /// Append a face declared on `line`
    pub fn push_face(&mut self, face: Face, line: usize) {
        self.group.faces.push(face);
        self.face_lines.push(line);
    }

    /// Append an edge declared on `line`
    pub fn push_edge(&mut self, edge: Edge, line: usize) {
        self.group.edges.push(edge);
        self.edge_lines.push(line);
    }

    /// Check every index against the final position count
    ///
    /// The earliest offending line is reported, with the index 1-based as
    /// written in the source.
    pub fn finish(self) -> Result<GeometryGroup> {
        let vertex_count = self.group.positions.len();
        let faces = self.group.faces.iter().map(|f| &f[..]).zip(&self.face_lines);
        let edges = self.group.edges.iter().map(|e| &e[..]).zip(&self.edge_lines);

        let first_bad = faces
            .chain(edges)
            .filter_map(|(indices, &line)| {
                indices
                    .iter()
                    .find(|&&idx| idx as usize >= vertex_count)
                    .map(|&idx| (line, idx))
            })
            .min_by_key(|&(line, _)| line);

        match first_bad {
            Some((line, idx)) => Err(LineObjError::IndexOutOfRange {
                line,
                index: u64::from(idx) + 1,
                vertex_count,
            }),
            None => Ok(self.group),
        }
    }
}
