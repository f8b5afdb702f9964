//! Parsed .lineobj document
//!
//! A document is an insertion-ordered mapping from group name to
//! [`GeometryGroup`]. Files without object markers are simply documents with
//! a single [`DEFAULT_GROUP_NAME`](crate::constants::DEFAULT_GROUP_NAME) entry.

use crate::geometry::GeometryGroup;
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Ordered collection of named geometry groups
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GeometryDocument {
    groups: IndexMap<String, GeometryGroup>,
    #[serde(skip)]
    file_path: Option<PathBuf>,
}

impl GeometryDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document holding exactly one group
    pub fn single(group: GeometryGroup) -> Self {
        let mut doc = Self::new();
        doc.insert(group);
        doc
    }

    /// Set the source file path
    pub fn with_file_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Get the file path this document was loaded from
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Insert a group under its own name, returning any group it replaced
    pub fn insert(&mut self, group: GeometryGroup) -> Option<GeometryGroup> {
        self.groups.insert(group.name().to_string(), group)
    }

    /// Remove a group, keeping the order of the remaining ones
    pub fn take(&mut self, name: &str) -> Option<GeometryGroup> {
        self.groups.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&GeometryGroup> {
        self.groups.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// First group in declaration order
    pub fn first(&self) -> Option<&GeometryGroup> {
        self.groups.values().next()
    }

    /// Groups in declaration order
    pub fn groups(&self) -> impl Iterator<Item = &GeometryGroup> {
        self.groups.values()
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn into_groups(self) -> impl Iterator<Item = GeometryGroup> {
        self.groups.into_values()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of positions across all groups
    pub fn position_count(&self) -> usize {
        self.groups.values().map(|g| g.positions().len()).sum()
    }

    /// Total number of faces across all groups
    pub fn face_count(&self) -> usize {
        self.groups.values().map(|g| g.faces().len()).sum()
    }

    /// Total number of edges across all groups
    pub fn edge_count(&self) -> usize {
        self.groups.values().map(|g| g.edges().len()).sum()
    }
}
