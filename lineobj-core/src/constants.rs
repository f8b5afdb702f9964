//! Constants for the .lineobj format
//!
//! Directive keywords, default names and line ending handling shared by the
//! parser, the writer and the importer.

/// File extension handled by the importer (without the dot)
pub const LINEOBJ_EXTENSION: &str = "lineobj";

/// Name of the implicit group used when a file has no `o` directive
pub const DEFAULT_GROUP_NAME: &str = "default";

/// Default name of the material rendering sub-mesh 0 (triangles)
pub const FACE_MATERIAL_NAME: &str = "Face Material";

/// Default name of the material rendering sub-mesh 1 (lines)
pub const EDGE_MATERIAL_NAME: &str = "Edge Material";

/// Directive keywords
pub mod directive {
    pub const OBJECT: &str = "o";
    pub const VERTEX: &str = "v";
    pub const NORMAL: &str = "vn";
    pub const FACE: &str = "f";
    pub const LINE: &str = "l";
}

/// Separator between the vertex index and the discarded normal index in a face token
pub const FACE_NORMAL_SEPARATOR: &str = "//";

/// Line ending types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Unix,    // \n
    Windows, // \r\n
    Mac,     // \r
}

impl Default for LineEnding {
    fn default() -> Self {
        #[cfg(windows)]
        return LineEnding::Windows;
        #[cfg(not(windows))]
        return LineEnding::Unix;
    }
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Unix => "\n",
            LineEnding::Windows => "\r\n",
            LineEnding::Mac => "\r",
        }
    }

    /// Detect the line ending used by a piece of text
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            LineEnding::Windows
        } else if text.contains('\n') {
            LineEnding::Unix
        } else if text.contains('\r') {
            LineEnding::Mac
        } else {
            LineEnding::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(LineEnding::detect("v 0 0 0\r\nv 1 0 0"), LineEnding::Windows);
        assert_eq!(LineEnding::detect("v 0 0 0\nv 1 0 0"), LineEnding::Unix);
        assert_eq!(LineEnding::detect("v 0 0 0\rv 1 0 0"), LineEnding::Mac);
        assert_eq!(LineEnding::Windows.as_str(), "\r\n");
    }
}
