//! Error types for .lineobj importing

use std::io;
use thiserror::Error;

/// Result type alias for .lineobj operations
pub type Result<T> = std::result::Result<T, LineObjError>;

/// Main error type for .lineobj parsing and mesh building
#[derive(Error, Debug)]
pub enum LineObjError {
    /// IO errors when reading/writing files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Generic format errors (unsupported file, bad path, ...)
    #[error("Format error: {0}")]
    Format(String),

    /// A numeric token that could not be parsed
    #[error("line {line}: malformed token '{token}' (expected {expected}): {content}")]
    MalformedToken {
        line: usize,
        token: String,
        expected: &'static str,
        content: String,
    },

    /// A directive with fewer fields than it needs
    #[error("line {line}: '{directive}' needs {expected} field(s), found {found}: {content}")]
    MissingField {
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
        content: String,
    },

    /// An index that does not refer to a declared position
    #[error("line {line}: index {index} is out of range for {vertex_count} position(s)")]
    IndexOutOfRange {
        line: usize,
        index: u64,
        vertex_count: usize,
    },

    /// Geometry that violates the index invariants
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// Configured limit exceeded
    #[error("Limit of {limit} exceeded: {message}")]
    LimitExceeded { limit: usize, message: String },

    /// Combined vertex count no longer addressable with u32 indices
    #[error("Vertex count {vertex_count} does not fit in 32-bit indices")]
    IndexOverflow { vertex_count: usize },

    /// Errors raised by an asset sink
    #[error("Sink error: {message}")]
    Sink { message: String },

    /// Import settings errors
    #[error("Settings error: {message}")]
    Settings { message: String },
}

impl LineObjError {
    /// Create a format error
    pub fn format<S: Into<String>>(message: S) -> Self {
        Self::Format(message.into())
    }

    /// Create a malformed token error
    pub fn malformed_token<T: Into<String>, C: Into<String>>(
        line: usize,
        token: T,
        expected: &'static str,
        content: C,
    ) -> Self {
        Self::MalformedToken {
            line,
            token: token.into(),
            expected,
            content: content.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field<C: Into<String>>(
        line: usize,
        directive: &'static str,
        expected: usize,
        found: usize,
        content: C,
    ) -> Self {
        Self::MissingField {
            line,
            directive,
            expected,
            found,
            content: content.into(),
        }
    }

    /// Create an invalid geometry error
    pub fn invalid_geometry<S: Into<String>>(message: S) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Create a limit exceeded error
    pub fn limit_exceeded<S: Into<String>>(limit: usize, message: S) -> Self {
        Self::LimitExceeded {
            limit,
            message: message.into(),
        }
    }

    /// Create a sink error
    pub fn sink<S: Into<String>>(message: S) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Create a settings error
    pub fn settings<S: Into<String>>(message: S) -> Self {
        Self::Settings {
            message: message.into(),
        }
    }

    /// Source line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedToken { line, .. }
            | Self::MissingField { line, .. }
            | Self::IndexOutOfRange { line, .. } => Some(*line),
            _ => None,
        }
    }
}
