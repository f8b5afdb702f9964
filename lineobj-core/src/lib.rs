//! lineobj Core
//!
//! Core data structures and types for `.lineobj` importing.
//! This crate provides the building blocks shared by the text front end,
//! the mesh builder and the importer facade.

pub mod constants;
pub mod document;
pub mod error;
pub mod geometry;

// Re-export main types
pub use constants::*;
pub use document::GeometryDocument;
pub use error::{LineObjError, Result};
pub use geometry::{Edge, Face, GeometryGroup, GroupBuilder, Vec3};
