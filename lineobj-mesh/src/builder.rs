//! Mesh building
//!
//! Turns geometry groups into [`MeshBuffers`] and concatenates buffer sets
//! with offset indices.

use crate::types::MeshBuffers;
use lineobj_core::{GeometryDocument, GeometryGroup, LineObjError, Result};
use tracing::debug;

/// Mesh builder
///
/// Stateless; positions are copied verbatim and indices are flattened in
/// declaration order without welding or winding changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeshBuilder;

impl MeshBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the buffers of a single group
    pub fn build(&self, group: &GeometryGroup) -> MeshBuffers {
        let vertices = group.positions().to_vec();
        let triangle_indices: Vec<u32> = group.faces().iter().flatten().copied().collect();
        let line_indices: Vec<u32> = group.edges().iter().flatten().copied().collect();

        debug!(
            "Built group '{}': {} vertices, {} triangle indices, {} line indices",
            group.name(),
            vertices.len(),
            triangle_indices.len(),
            line_indices.len()
        );

        // groups only hold indices of declared positions
        MeshBuffers::from_parts_unchecked(vertices, triangle_indices, line_indices)
    }

    /// Concatenate buffers, offsetting each input's indices by the number of
    /// vertices that precede it
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineobj_mesh::{MeshBuffers, MeshBuilder};
    ///
    /// let segment = MeshBuffers::from_parts(vec![[0.0; 3], [1.0; 3]], vec![], vec![0, 1])?;
    /// let merged = MeshBuilder::new().combine(&[segment.clone(), segment])?;
    /// assert_eq!(merged.line_indices(), &[0, 1, 2, 3]);
    /// # Ok::<(), lineobj_core::LineObjError>(())
    /// ```
    pub fn combine(&self, buffers: &[MeshBuffers]) -> Result<MeshBuffers> {
        let vertex_total: usize = buffers.iter().map(MeshBuffers::vertex_count).sum();
        if u32::try_from(vertex_total).is_err() {
            return Err(LineObjError::IndexOverflow {
                vertex_count: vertex_total,
            });
        }

        let mut vertices = Vec::with_capacity(vertex_total);
        let mut triangle_indices =
            Vec::with_capacity(buffers.iter().map(|b| b.triangle_indices().len()).sum());
        let mut line_indices =
            Vec::with_capacity(buffers.iter().map(|b| b.line_indices().len()).sum());

        for mesh in buffers {
            // bounded by vertex_total, checked above
            let offset = vertices.len() as u32;
            vertices.extend_from_slice(mesh.vertices());
            triangle_indices.extend(mesh.triangle_indices().iter().map(|&i| i + offset));
            line_indices.extend(mesh.line_indices().iter().map(|&i| i + offset));
        }

        Ok(MeshBuffers::from_parts_unchecked(
            vertices,
            triangle_indices,
            line_indices,
        ))
    }

    /// Build every group of a document
    ///
    /// With `merge`, all groups are combined into a single entry named after
    /// the first group.
    pub fn build_document(
        &self,
        document: &GeometryDocument,
        merge: bool,
    ) -> Result<Vec<(String, MeshBuffers)>> {
        let built: Vec<(String, MeshBuffers)> = document
            .groups()
            .map(|group| (group.name().to_string(), self.build(group)))
            .collect();

        if !merge || built.len() < 2 {
            return Ok(built);
        }

        let name = built[0].0.clone();
        let meshes: Vec<MeshBuffers> = built.into_iter().map(|(_, mesh)| mesh).collect();
        let merged = self.combine(&meshes)?;
        debug!("Merged {} groups into '{}'", meshes.len(), name);

        Ok(vec![(name, merged)])
    }
}
