//! Asset import pipeline
//!
//! Parses a `.lineobj` source, builds its mesh buffers and hands the result
//! to an [`AssetSink`]. The sink is where a host editor wires the buffers
//! into its own mesh, material and component objects; this crate never
//! touches host types.

use crate::settings::ImportSettings;
use lineobj_core::{LineObjError, Result};
use lineobj_mesh::{MeshBuffers, MeshBuilder, MeshTopology};
use lineobj_text::{LineObjParser, ParseOutcome, RejectedRecord, load_lineobj};
use std::path::Path;
use tracing::{info, warn};

/// Material slot attached to one sub-mesh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSlot {
    pub name: String,
    pub sub_mesh: usize,
    pub topology: MeshTopology,
}

/// A finished asset, ready for the host
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedAsset {
    pub name: String,
    pub mesh: MeshBuffers,
    /// Face material (sub-mesh 0) and edge material (sub-mesh 1)
    pub materials: [MaterialSlot; 2],
}

impl ImportedAsset {
    pub fn face_material(&self) -> &MaterialSlot {
        &self.materials[0]
    }

    pub fn edge_material(&self) -> &MaterialSlot {
        &self.materials[1]
    }
}

/// Receiver of imported assets
pub trait AssetSink {
    fn receive(&mut self, asset: ImportedAsset) -> Result<()>;
}

impl<F> AssetSink for F
where
    F: FnMut(ImportedAsset) -> Result<()>,
{
    fn receive(&mut self, asset: ImportedAsset) -> Result<()> {
        self(asset)
    }
}

/// Sink that keeps every asset in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub assets: Vec<ImportedAsset>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&ImportedAsset> {
        self.assets.iter().find(|asset| asset.name == name)
    }
}

impl AssetSink for MemorySink {
    fn receive(&mut self, asset: ImportedAsset) -> Result<()> {
        self.assets.push(asset);
        Ok(())
    }
}

/// Summary of one import
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Names of the assets handed to the sink, in order
    pub asset_names: Vec<String>,
    /// Records skipped by the parser
    pub rejected: Vec<RejectedRecord>,
}

/// Derive the asset name from a source path: the file name without its last extension
pub fn asset_name_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            LineObjError::format(format!("Cannot derive asset name from {}", path.display()))
        })
}

/// `.lineobj` importer
#[derive(Debug, Clone, Default)]
pub struct LineObjImporter {
    settings: ImportSettings,
    builder: MeshBuilder,
}

impl LineObjImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: ImportSettings) -> Self {
        Self {
            settings,
            builder: MeshBuilder::new(),
        }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Import a file; the asset is named after the file stem
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use lineobj::{LineObjImporter, MemorySink};
    ///
    /// let mut sink = MemorySink::new();
    /// let report = LineObjImporter::new().import_path("Assets/grid.lineobj", &mut sink)?;
    /// assert_eq!(report.asset_names, vec!["grid".to_string()]);
    /// # Ok::<(), lineobj::LineObjError>(())
    /// ```
    pub fn import_path<P, S>(&self, path: P, sink: &mut S) -> Result<ImportReport>
    where
        P: AsRef<Path>,
        S: AssetSink + ?Sized,
    {
        let path = path.as_ref();
        let name = asset_name_from_path(path)?;
        let outcome = load_lineobj(path, &self.settings.parse)?;
        self.deliver(&name, outcome, sink)
    }

    /// Import in-memory text under the given asset name
    pub fn import_str<S>(&self, name: &str, text: &str, sink: &mut S) -> Result<ImportReport>
    where
        S: AssetSink + ?Sized,
    {
        let outcome = LineObjParser::with_config(self.settings.parse.clone()).parse_str(text)?;
        self.deliver(name, outcome, sink)
    }

    fn deliver<S>(&self, name: &str, outcome: ParseOutcome, sink: &mut S) -> Result<ImportReport>
    where
        S: AssetSink + ?Sized,
    {
        for record in &outcome.rejected {
            warn!("{}: {}", name, record);
        }

        let document = &outcome.document;
        let meshes: Vec<(String, MeshBuffers)> = if self.settings.merge_groups {
            let built: Vec<MeshBuffers> = document.groups().map(|g| self.builder.build(g)).collect();
            vec![(name.to_string(), self.builder.combine(&built)?)]
        } else {
            document
                .groups()
                .map(|g| (format!("{}/{}", name, g.name()), self.builder.build(g)))
                .collect()
        };

        let mut report = ImportReport {
            asset_names: Vec::with_capacity(meshes.len()),
            rejected: Vec::new(),
        };

        for (asset_name, mesh) in meshes {
            info!(
                "Importing '{}': {} vertices, {} triangles, {} lines",
                asset_name,
                mesh.vertex_count(),
                mesh.triangle_count(),
                mesh.line_count()
            );
            sink.receive(ImportedAsset {
                name: asset_name.clone(),
                mesh,
                materials: self.material_slots(),
            })?;
            report.asset_names.push(asset_name);
        }

        report.rejected = outcome.rejected;
        Ok(report)
    }

    fn material_slots(&self) -> [MaterialSlot; 2] {
        [
            MaterialSlot {
                name: self.settings.face_material.clone(),
                sub_mesh: 0,
                topology: MeshTopology::Triangles,
            },
            MaterialSlot {
                name: self.settings.edge_material.clone(),
                sub_mesh: 1,
                topology: MeshTopology::Lines,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name_from_path() {
        assert_eq!(asset_name_from_path("Assets/Models/grid.lineobj").unwrap(), "grid");
        assert_eq!(asset_name_from_path("a.b.lineobj").unwrap(), "a.b");
        assert_eq!(asset_name_from_path("plain").unwrap(), "plain");
        assert!(asset_name_from_path("").is_err());
    }

    #[test]
    fn test_import_str_merged() {
        let mut sink = MemorySink::new();
        let text = "o a\nv 0 0 0\nv 1 0 0\nl 1 2\no b\nv 0 1 0\nv 1 1 0\nl 1 2\n";
        let report = LineObjImporter::new()
            .import_str("pair", text, &mut sink)
            .unwrap();

        assert_eq!(report.asset_names, vec!["pair".to_string()]);
        let asset = sink.get("pair").unwrap();
        assert_eq!(asset.mesh.line_indices(), &[0, 1, 2, 3]);
        assert_eq!(asset.face_material().name, "Face Material");
        assert_eq!(asset.edge_material().sub_mesh, 1);
        assert_eq!(asset.edge_material().topology, MeshTopology::Lines);
    }

    #[test]
    fn test_import_str_per_group() {
        let mut sink = MemorySink::new();
        let text = "o a\nv 0 0 0\nv 1 0 0\nl 1 2\no b\nv 0 1 0\nv 1 1 0\nl 1 2\n";
        let report = LineObjImporter::with_settings(ImportSettings::per_group())
            .import_str("pair", text, &mut sink)
            .unwrap();

        assert_eq!(report.asset_names, vec!["pair/a", "pair/b"]);
        assert_eq!(sink.get("pair/b").unwrap().mesh.line_indices(), &[0, 1]);
    }

    #[test]
    fn test_closure_sink() {
        let mut names = Vec::new();
        let mut sink = |asset: ImportedAsset| -> Result<()> {
            names.push(asset.name);
            Ok(())
        };
        LineObjImporter::new()
            .import_str("tri", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", &mut sink)
            .unwrap();
        assert_eq!(names, vec!["tri".to_string()]);
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut sink = |_: ImportedAsset| -> Result<()> { Err(LineObjError::sink("rejected by host")) };
        let err = LineObjImporter::new()
            .import_str("tri", "v 0 0 0\n", &mut sink)
            .unwrap_err();
        assert!(matches!(err, LineObjError::Sink { .. }));
    }

    #[test]
    fn test_fatal_error_delivers_nothing() {
        let mut sink = MemorySink::new();
        let result = LineObjImporter::new().import_str("bad", "v 0 0 0\nv x 0 0\n", &mut sink);
        assert!(result.is_err());
        assert!(sink.assets.is_empty());
    }
}
