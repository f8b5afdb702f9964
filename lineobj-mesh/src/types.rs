//! Mesh type definitions
//!
//! This module defines the flattened buffers produced by the mesh builder
//! and the metadata derived from them.

use lineobj_core::{Edge, Face, GeometryGroup, LineObjError, Result, Vec3};
use serde::Serialize;

/// Sub-mesh topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MeshTopology {
    Triangles,
    Lines,
}

impl MeshTopology {
    /// Number of indices per primitive
    pub fn indices_per_primitive(&self) -> usize {
        match self {
            MeshTopology::Triangles => 3,
            MeshTopology::Lines => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeshTopology::Triangles => "Triangles",
            MeshTopology::Lines => "Lines",
        }
    }
}

/// SubMesh descriptor
///
/// Sub-mesh 0 always holds the triangles, sub-mesh 1 the lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubMesh {
    pub topology: MeshTopology,
    pub index_count: usize,
}

impl SubMesh {
    pub fn primitive_count(&self) -> usize {
        self.index_count / self.topology.indices_per_primitive()
    }

    pub fn is_empty(&self) -> bool {
        self.index_count == 0
    }
}

/// Axis-Aligned Bounding Box
///
/// Stored as its exact corners; center and extent are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Aabb {
    min: [f32; 3],
    max: [f32; 3],
}

impl Aabb {
    /// Create an AABB from its corners
    pub fn from_min_max(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    /// Create an AABB from center and extent (half size)
    pub fn from_center_extent(center: [f32; 3], extent: [f32; 3]) -> Self {
        Self {
            min: std::array::from_fn(|axis| center[axis] - extent[axis]),
            max: std::array::from_fn(|axis| center[axis] + extent[axis]),
        }
    }

    /// Smallest box containing all points, `None` for no points
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Vec3>,
    {
        let mut points = points.into_iter();
        let first = *points.next()?;
        let (min, max) = points.fold((first, first), |(mut min, mut max), p| {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
            (min, max)
        });
        Some(Self::from_min_max(min, max))
    }

    /// Get minimum point
    pub fn min(&self) -> [f32; 3] {
        self.min
    }

    /// Get maximum point
    pub fn max(&self) -> [f32; 3] {
        self.max
    }

    /// Get center as array
    pub fn center(&self) -> [f32; 3] {
        // halve first so huge coordinates do not overflow
        std::array::from_fn(|axis| self.min[axis] * 0.5 + self.max[axis] * 0.5)
    }

    /// Get extent (half size) as array
    pub fn extent(&self) -> [f32; 3] {
        std::array::from_fn(|axis| self.max[axis] * 0.5 - self.min[axis] * 0.5)
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Aabb) -> Aabb {
        Self::from_min_max(
            std::array::from_fn(|axis| self.min[axis].min(other.min[axis])),
            std::array::from_fn(|axis| self.max[axis].max(other.max[axis])),
        )
    }

    pub fn contains(&self, point: &Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }

    /// Get volume
    pub fn volume(&self) -> f32 {
        (0..3).map(|axis| self.max[axis] - self.min[axis]).product()
    }
}

/// Flattened renderable buffers for one group or a merged set
///
/// Every index in `triangle_indices` and `line_indices` is below
/// `vertices.len()`; constructors enforce it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeshBuffers {
    vertices: Vec<Vec3>,
    triangle_indices: Vec<u32>,
    line_indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create buffers from raw parts, validating lengths and index ranges
    pub fn from_parts(
        vertices: Vec<Vec3>,
        triangle_indices: Vec<u32>,
        line_indices: Vec<u32>,
    ) -> Result<Self> {
        let buffers = Self {
            vertices,
            triangle_indices,
            line_indices,
        };
        buffers.check_invariants()?;
        Ok(buffers)
    }

    /// Assemble without validation; callers guarantee the invariants
    pub(crate) fn from_parts_unchecked(
        vertices: Vec<Vec3>,
        triangle_indices: Vec<u32>,
        line_indices: Vec<u32>,
    ) -> Self {
        Self {
            vertices,
            triangle_indices,
            line_indices,
        }
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    pub fn line_count(&self) -> usize {
        self.line_indices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Axis-aligned bounds of all vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(&self.vertices)
    }

    /// Sub-mesh 0 (triangles) and sub-mesh 1 (lines)
    pub fn sub_meshes(&self) -> [SubMesh; 2] {
        [
            SubMesh {
                topology: MeshTopology::Triangles,
                index_count: self.triangle_indices.len(),
            },
            SubMesh {
                topology: MeshTopology::Lines,
                index_count: self.line_indices.len(),
            },
        ]
    }

    /// Triangles resolved to vertex positions
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.triangle_indices.chunks_exact(3).map(|t| {
            [
                self.vertices[t[0] as usize],
                self.vertices[t[1] as usize],
                self.vertices[t[2] as usize],
            ]
        })
    }

    /// Line segments resolved to vertex positions
    pub fn lines(&self) -> impl Iterator<Item = [Vec3; 2]> + '_ {
        self.line_indices
            .chunks_exact(2)
            .map(|l| [self.vertices[l[0] as usize], self.vertices[l[1] as usize]])
    }

    /// Convert back into a geometry group (faces and edges re-chunked)
    pub fn to_group<S: Into<String>>(&self, name: S) -> Result<GeometryGroup> {
        let faces: Vec<Face> = self
            .triangle_indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        let edges: Vec<Edge> = self
            .line_indices
            .chunks_exact(2)
            .map(|l| [l[0], l[1]])
            .collect();

        GeometryGroup::from_parts(name, self.vertices.clone(), Vec::new(), faces, edges)
    }

    /// Get mesh information summary
    pub fn get_info(&self) -> MeshInfo {
        MeshInfo {
            vertex_count: self.vertex_count(),
            triangle_count: self.triangle_count(),
            line_count: self.line_count(),
            bounds: self.bounds(),
        }
    }

    pub(crate) fn check_invariants(&self) -> Result<()> {
        if self.triangle_indices.len() % 3 != 0 {
            return Err(LineObjError::invalid_geometry(format!(
                "triangle index count {} is not a multiple of 3",
                self.triangle_indices.len()
            )));
        }
        if self.line_indices.len() % 2 != 0 {
            return Err(LineObjError::invalid_geometry(format!(
                "line index count {} is not a multiple of 2",
                self.line_indices.len()
            )));
        }

        let count = self.vertices.len();
        let all = self.triangle_indices.iter().chain(&self.line_indices);
        if let Some(bad) = all.copied().find(|&idx| idx as usize >= count) {
            return Err(LineObjError::invalid_geometry(format!(
                "index {} is out of range for {} vertices",
                bad, count
            )));
        }

        Ok(())
    }
}

/// Mesh information summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshInfo {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub line_count: usize,
    pub bounds: Option<Aabb>,
}
