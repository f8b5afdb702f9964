//! Import settings
//!
//! Settings are plain serde structs so they can be kept next to the assets
//! as YAML.

use lineobj_core::{EDGE_MATERIAL_NAME, FACE_MATERIAL_NAME, LineObjError, Result};
use lineobj_text::ParseConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings controlling one import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Parser configuration
    pub parse: ParseConfig,
    /// Combine all groups of a file into one mesh
    pub merge_groups: bool,
    /// Name of the material slot for sub-mesh 0
    pub face_material: String,
    /// Name of the material slot for sub-mesh 1
    pub edge_material: String,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            parse: ParseConfig::default(),
            merge_groups: true,
            face_material: FACE_MATERIAL_NAME.to_string(),
            edge_material: EDGE_MATERIAL_NAME.to_string(),
        }
    }
}

impl ImportSettings {
    /// One asset per group instead of one merged asset per file
    pub fn per_group() -> Self {
        Self {
            merge_groups: false,
            ..Self::default()
        }
    }

    /// Parse settings from YAML text; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| LineObjError::settings(format!("Invalid settings: {}", e)))
    }

    /// Load settings from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| {
            LineObjError::settings(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize settings to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| LineObjError::settings(format!("Failed to serialize settings: {}", e)))
    }
}
