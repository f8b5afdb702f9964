//! Exporting built meshes

use lineobj_core::{GeometryDocument, LineObjError, Result};
use lineobj_mesh::MeshBuffers;
use lineobj_text::LineObjWriter;

/// Render a mesh as `.lineobj` text under a single `o` group
pub fn export_lineobj(mesh: &MeshBuffers, name: &str) -> Result<String> {
    let group = mesh.to_group(name)?;
    let writer = LineObjWriter::new().with_header(format!("{} (exported by lineobj)", name));
    Ok(writer.write_document(&GeometryDocument::single(group)))
}

/// Render a mesh's buffers as YAML
pub fn export_yaml(mesh: &MeshBuffers) -> Result<String> {
    serde_yaml::to_string(mesh)
        .map_err(|e| LineObjError::format(format!("Failed to serialize mesh: {}", e)))
}
