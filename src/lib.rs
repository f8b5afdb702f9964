//! lineobj
//!
//! Importer for `.lineobj` geometry files: a Wavefront OBJ subset with
//! triangulated faces plus standalone `l` line segments. Every imported mesh
//! carries two sub-meshes, triangles and lines, each bound to its own
//! material slot.
//!
//! # Examples
//!
//! ```rust
//! use lineobj::{LineObjImporter, MemorySink};
//!
//! let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nl 1 2\n";
//! let mut sink = MemorySink::new();
//! LineObjImporter::new().import_str("frame", text, &mut sink)?;
//!
//! let asset = sink.get("frame").unwrap();
//! assert_eq!(asset.mesh.triangle_indices(), &[0, 1, 2]);
//! assert_eq!(asset.mesh.line_indices(), &[0, 1]);
//! # Ok::<(), lineobj::LineObjError>(())
//! ```

pub use lineobj_core::{
    Edge, Face, GeometryDocument, GeometryGroup, GroupBuilder, LineObjError, Result, Vec3,
    constants::*,
};
pub use lineobj_mesh::{
    Aabb, MeshBuffers, MeshBuilder, MeshConfig, MeshInfo, MeshProcessor, MeshStats,
    MeshTopology, SubMesh,
};
pub use lineobj_text::{
    GroupMode, LineObjParser, LineObjWriter, ParseConfig, ParseOutcome, RejectReason,
    RejectedRecord, load_lineobj,
};

pub mod environment;
pub mod export;
pub mod importer;
pub mod settings;

pub use environment::Environment;
pub use export::{export_lineobj, export_yaml};
pub use importer::{
    AssetSink, ImportReport, ImportedAsset, LineObjImporter, MaterialSlot, MemorySink,
    asset_name_from_path,
};
pub use settings::ImportSettings;
