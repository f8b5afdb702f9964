//! Environment for working with many `.lineobj` files at once

use lineobj_core::{GeometryDocument, GeometryGroup, LineObjError, Result};
use lineobj_text::{ParseConfig, has_lineobj_extension, load_lineobj};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Directories that never hold source assets
const SKIPPED_DIRECTORIES: &[&str] = &["Library", "Temp", "Logs", "obj", "bin", "target"];

/// Parsed `.lineobj` documents keyed by path
#[derive(Debug, Default)]
pub struct Environment {
    config: ParseConfig,
    documents: BTreeMap<PathBuf, GeometryDocument>,
    rejected: BTreeMap<PathBuf, usize>,
    failures: Vec<(PathBuf, String)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParseConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load a file or, recursively, a directory
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        if path.is_file() {
            self.load_file(path)
        } else if path.is_dir() {
            self.load_directory(path)
        } else {
            Err(LineObjError::format(format!(
                "Path does not exist: {}",
                path.display()
            )))
        }
    }

    /// Load a single file; files without the `.lineobj` extension are skipped
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !has_lineobj_extension(path) {
            debug!("Skipping {}", path.display());
            return Ok(());
        }

        let outcome = load_lineobj(path, &self.config)?;
        if outcome.has_rejections() {
            self.rejected
                .insert(path.to_path_buf(), outcome.rejected.len());
        }
        self.documents.insert(path.to_path_buf(), outcome.document);
        Ok(())
    }

    /// Load every `.lineobj` file below a directory
    pub fn load_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(LineObjError::format(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }
        self.traverse_directory(path)
    }

    fn traverse_directory(&mut self, dir: &Path) -> Result<()> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            LineObjError::format(format!("Failed to read directory {}: {}", dir.display(), e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                LineObjError::format(format!("Failed to read directory entry: {}", e))
            })?;
            paths.push(entry.path());
        }
        paths.sort();

        for path in paths {
            if path.is_dir() {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if name.starts_with('.') || SKIPPED_DIRECTORIES.contains(&name) {
                    continue;
                }
                self.traverse_directory(&path)?;
            } else if path.is_file() {
                if let Err(e) = self.load_file(&path) {
                    warn!("Failed to load {}: {}", path.display(), e);
                    self.failures.push((path, e.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Loaded documents, ordered by path
    pub fn documents(&self) -> &BTreeMap<PathBuf, GeometryDocument> {
        &self.documents
    }

    pub fn get(&self, path: &Path) -> Option<&GeometryDocument> {
        self.documents.get(path)
    }

    /// Every group of every loaded document
    pub fn groups(&self) -> impl Iterator<Item = (&Path, &GeometryGroup)> {
        self.documents
            .iter()
            .flat_map(|(path, doc)| doc.groups().map(move |g| (path.as_path(), g)))
    }

    /// Groups with the given name across all documents
    pub fn find_groups(&self, name: &str) -> Vec<(&Path, &GeometryGroup)> {
        self.groups().filter(|(_, g)| g.name() == name).collect()
    }

    /// Number of rejected records per file, for files that had any
    pub fn rejected(&self) -> &BTreeMap<PathBuf, usize> {
        &self.rejected
    }

    /// Files that failed to load during directory traversal
    pub fn failures(&self) -> &[(PathBuf, String)] {
        &self.failures
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
