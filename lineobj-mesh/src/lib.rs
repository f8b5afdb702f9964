//! lineobj Mesh
//!
//! Converts parsed geometry groups into flattened vertex / index buffers.
//!
//! # Architecture
//!
//! - `types` - Core data structures (MeshBuffers, SubMesh, Aabb, ...)
//! - `builder` - Building buffers from groups and combining buffer sets
//! - `processor` - Validation, normals and statistics
//!
//! # Examples
//!
//! ```rust
//! use lineobj_mesh::MeshBuilder;
//! use lineobj_text::LineObjParser;
//!
//! let text = "o a\nv 0 0 0\nv 1 0 0\nl 1 2\no b\nv 0 1 0\nv 1 1 0\nl 1 2\n";
//! let doc = LineObjParser::new().parse_str(text)?.into_document();
//!
//! let meshes = MeshBuilder::new().build_document(&doc, true)?;
//! assert_eq!(meshes[0].1.line_indices(), &[0, 1, 2, 3]);
//! # Ok::<(), lineobj_core::LineObjError>(())
//! ```

pub mod builder;
pub mod processor;
pub mod types;

pub use builder::MeshBuilder;
pub use processor::{MeshConfig, MeshProcessor, MeshStats};
pub use types::{Aabb, MeshBuffers, MeshInfo, MeshTopology, SubMesh};

use lineobj_core::{GeometryGroup, Result};

/// Build the buffers of one group (convenience function)
pub fn build_mesh(group: &GeometryGroup) -> MeshBuffers {
    MeshBuilder::new().build(group)
}

/// Combine buffer sets with offset indices (convenience function)
pub fn combine_meshes(buffers: &[MeshBuffers]) -> Result<MeshBuffers> {
    MeshBuilder::new().combine(buffers)
}

/// Validate mesh data (convenience function)
pub fn validate_mesh(mesh: &MeshBuffers) -> Result<()> {
    MeshProcessor::default().validate_mesh(mesh)
}
