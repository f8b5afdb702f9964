//! Mesh processing implementation
//!
//! Validation, normal recalculation and statistics over built meshes.

use crate::types::{Aabb, MeshBuffers};
use lineobj_core::{LineObjError, Result, Vec3};
use serde::Serialize;
use tracing::warn;

/// Mesh processing configuration
#[derive(Debug, Clone, Default)]
pub struct MeshConfig {
    /// Maximum vertex count accepted by validation
    pub max_vertex_count: Option<usize>,
    /// Whether non-finite coordinates fail validation
    pub reject_non_finite: bool,
}

/// Mesh processor
pub struct MeshProcessor {
    config: MeshConfig,
}

impl MeshProcessor {
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    pub fn with_config(config: MeshConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    /// Validate mesh data
    pub fn validate_mesh(&self, mesh: &MeshBuffers) -> Result<()> {
        mesh.check_invariants()?;

        if let Some(max_vertices) = self.config.max_vertex_count {
            if mesh.vertex_count() > max_vertices {
                return Err(LineObjError::limit_exceeded(
                    max_vertices,
                    format!("mesh has {} vertices", mesh.vertex_count()),
                ));
            }
        }

        if self.config.reject_non_finite {
            if let Some(i) = mesh
                .vertices()
                .iter()
                .position(|v| v.iter().any(|c| !c.is_finite()))
            {
                return Err(LineObjError::invalid_geometry(format!(
                    "vertex {} has a non-finite coordinate",
                    i
                )));
            }
        }

        if mesh.is_empty() {
            warn!("Mesh has no vertices");
        }

        Ok(())
    }

    /// Area-weighted per-vertex normals computed from the triangles
    ///
    /// Vertices not used by any non-degenerate triangle get a zero normal.
    pub fn compute_vertex_normals(&self, mesh: &MeshBuffers) -> Vec<Vec3> {
        let vertices = mesh.vertices();
        let mut normals = vec![[0.0f32; 3]; vertices.len()];

        for tri in mesh.triangle_indices().chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            // unnormalized cross product is proportional to the triangle area
            let n = cross(sub(vertices[b], vertices[a]), sub(vertices[c], vertices[a]));
            for idx in [a, b, c] {
                for axis in 0..3 {
                    normals[idx][axis] += n[axis];
                }
            }
        }

        normals.iter_mut().for_each(|n| *n = normalize(*n));
        normals
    }

    /// Get mesh statistics
    pub fn get_mesh_stats(&self, meshes: &[&MeshBuffers]) -> MeshStats {
        let mut stats = MeshStats {
            total_meshes: meshes.len(),
            ..MeshStats::default()
        };

        for mesh in meshes {
            stats.total_vertices += mesh.vertex_count();
            stats.total_triangles += mesh.triangle_count();
            stats.total_lines += mesh.line_count();

            if mesh.line_count() > 0 && mesh.triangle_count() == 0 {
                stats.wireframe_meshes += 1;
            }

            stats.bounds = match (stats.bounds, mesh.bounds()) {
                (Some(acc), Some(b)) => Some(acc.union(&b)),
                (acc, b) => acc.or(b),
            };
        }

        if !meshes.is_empty() {
            stats.average_vertices = stats.total_vertices as f32 / meshes.len() as f32;
        }

        stats
    }
}

impl Default for MeshProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Mesh processing statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct MeshStats {
    pub total_meshes: usize,
    pub total_vertices: usize,
    pub total_triangles: usize,
    pub total_lines: usize,
    pub average_vertices: f32,
    /// Meshes with lines and no triangles
    pub wireframe_meshes: usize,
    pub bounds: Option<Aabb>,
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len > f32::EPSILON {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        [0.0; 3]
    }
}
