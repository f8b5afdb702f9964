//! Line classification and token decoding
//!
//! A line is a directive when its first token is one of the supported
//! keywords and is followed by whitespace. Everything else is ignored by the
//! parser.

use lineobj_core::constants::{FACE_NORMAL_SEPARATOR, directive};
use lineobj_core::{LineObjError, Result};

/// Supported directive keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Object,
    Vertex,
    Normal,
    Face,
    Line,
}

impl DirectiveKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            directive::OBJECT => Some(Self::Object),
            directive::VERTEX => Some(Self::Vertex),
            directive::NORMAL => Some(Self::Normal),
            directive::FACE => Some(Self::Face),
            directive::LINE => Some(Self::Line),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Object => directive::OBJECT,
            Self::Vertex => directive::VERTEX,
            Self::Normal => directive::NORMAL,
            Self::Face => directive::FACE,
            Self::Line => directive::LINE,
        }
    }
}

/// One classified source line
#[derive(Debug, Clone, Copy)]
pub struct Directive<'a> {
    pub kind: DirectiveKind,
    /// 1-based line number
    pub line: usize,
    /// Whole source line, for diagnostics
    pub content: &'a str,
    rest: &'a str,
}

impl<'a> Directive<'a> {
    /// Classify a source line, returning `None` for anything that is not a directive
    pub fn classify(line: usize, content: &'a str) -> Option<Self> {
        let trimmed = content.trim_start();
        let split = trimmed.find(char::is_whitespace)?;
        let kind = DirectiveKind::from_keyword(&trimmed[..split])?;

        Some(Self {
            kind,
            line,
            content,
            rest: &trimmed[split..],
        })
    }

    /// Everything after the keyword, trimmed
    pub fn rest(&self) -> &'a str {
        self.rest.trim()
    }

    /// Whitespace-separated fields after the keyword
    pub fn fields(&self) -> Vec<&'a str> {
        self.rest.split_whitespace().collect()
    }

    /// Fail with a missing field error unless at least `expected` fields are present
    pub fn require<'f, 't>(&self, fields: &'f [&'t str], expected: usize) -> Result<&'f [&'t str]> {
        if fields.len() < expected {
            return Err(LineObjError::missing_field(
                self.line,
                self.kind.keyword(),
                expected,
                fields.len(),
                self.content,
            ));
        }
        Ok(&fields[..expected])
    }

    /// Decode three float fields
    pub fn vec3(&self, fields: &[&str]) -> Result<[f32; 3]> {
        let fields = self.require(fields, 3)?;
        Ok([
            self.float(fields[0])?,
            self.float(fields[1])?,
            self.float(fields[2])?,
        ])
    }

    pub fn float(&self, token: &str) -> Result<f32> {
        token
            .parse::<f32>()
            .map_err(|_| LineObjError::malformed_token(self.line, token, "a float", self.content))
    }

    /// Decode a face vertex token into a 0-based index.
    ///
    /// Anything from a `//` separator onwards is discarded, so `7//3` reads as `7`.
    pub fn face_index(&self, token: &str) -> Result<u32> {
        let raw = match token.find(FACE_NORMAL_SEPARATOR) {
            Some(pos) => &token[..pos],
            None => token,
        };
        self.decode_index(raw, token)
    }

    /// Decode a plain 1-based index token into a 0-based index
    pub fn index(&self, token: &str) -> Result<u32> {
        self.decode_index(token, token)
    }

    fn decode_index(&self, raw: &str, token: &str) -> Result<u32> {
        match raw.parse::<u32>() {
            Ok(value) if value >= 1 => Ok(value - 1),
            _ => Err(LineObjError::malformed_token(
                self.line,
                token,
                "a positive 1-based index",
                self.content,
            )),
        }
    }
}
