//! .lineobj text writer
//!
//! Serializes a [`GeometryDocument`] back into `.lineobj` text with 1-based
//! indices. Every group is written under its own `o` directive.

use lineobj_core::{GeometryDocument, GeometryGroup, LineEnding, Result, Vec3};
use std::fmt::Write as _;
use std::io::Write;

/// Writer for `.lineobj` text
#[derive(Debug, Clone, Default)]
pub struct LineObjWriter {
    line_ending: LineEnding,
    header: Option<String>,
}

impl LineObjWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Comment emitted at the top of the output (one `#` line per text line)
    pub fn with_header<S: Into<String>>(mut self, header: S) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Render a whole document
    pub fn write_document(&self, document: &GeometryDocument) -> String {
        let mut out = String::new();
        self.write_header(&mut out);
        for group in document.groups() {
            self.write_group_into(&mut out, group);
        }
        out
    }

    /// Render a single group
    pub fn write_group(&self, group: &GeometryGroup) -> String {
        let mut out = String::new();
        self.write_header(&mut out);
        self.write_group_into(&mut out, group);
        out
    }

    /// Write a document to any byte sink
    pub fn write_to<W: Write>(&self, document: &GeometryDocument, mut writer: W) -> Result<()> {
        writer.write_all(self.write_document(document).as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn write_header(&self, out: &mut String) {
        let nl = self.line_ending.as_str();
        if let Some(header) = &self.header {
            for line in header.lines() {
                let _ = write!(out, "# {}{}", line, nl);
            }
        }
    }

    fn write_group_into(&self, out: &mut String, group: &GeometryGroup) {
        let nl = self.line_ending.as_str();

        let _ = write!(out, "o {}{}", group.name(), nl);
        for p in group.positions() {
            write_vec3(out, "v", p, nl);
        }
        for n in group.normals() {
            write_vec3(out, "vn", n, nl);
        }
        for [a, b, c] in group.faces() {
            let _ = write!(out, "f {} {} {}{}", a + 1, b + 1, c + 1, nl);
        }
        for [a, b] in group.edges() {
            let _ = write!(out, "l {} {}{}", a + 1, b + 1, nl);
        }
    }
}

fn write_vec3(out: &mut String, keyword: &str, v: &Vec3, nl: &str) {
    let _ = write!(out, "{} {} {} {}{}", keyword, v[0], v[1], v[2], nl);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::LineObjParser;

    #[test]
    fn test_write_group() {
        let group = GeometryGroup::from_parts(
            "wire",
            vec![[0.0, 0.0, 0.0], [1.5, -2.0, 0.25]],
            vec![],
            vec![],
            vec![[0, 1]],
        )
        .unwrap();

        let text = LineObjWriter::new()
            .with_line_ending(LineEnding::Unix)
            .write_group(&group);
        assert_eq!(text, "o wire\nv 0 0 0\nv 1.5 -2 0.25\nl 1 2\n");
    }

    #[test]
    fn test_written_document_reparses_identically() {
        let text = "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\nl 1 3\n\
                    o b\nv 0.1 0.2 0.3\nv 4 5 6\nl 2 1\n";
        let parser = LineObjParser::new();
        let doc = parser.parse_str(text).unwrap().into_document();

        let written = LineObjWriter::new()
            .with_line_ending(LineEnding::Windows)
            .with_header("exported\nby test")
            .write_document(&doc);
        assert!(written.starts_with("# exported\r\n# by test\r\n"));

        let reparsed = parser.parse_str(&written).unwrap().into_document();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_every_line_ending_reparses() {
        let text = "o a\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nl 1 2\no b\nv 2 2 2\nv 3 3 3\nl 2 1\n";
        let parser = LineObjParser::new();
        let doc = parser.parse_str(text).unwrap().into_document();

        for ending in [LineEnding::Unix, LineEnding::Windows, LineEnding::Mac] {
            let writer = LineObjWriter::new()
                .with_line_ending(ending)
                .with_header("round trip");

            let written = writer.write_document(&doc);
            assert_eq!(LineEnding::detect(&written), ending);
            assert_eq!(parser.parse_str(&written).unwrap().into_document(), doc);

            let mut bytes = Vec::new();
            writer.write_to(&doc, &mut bytes).unwrap();
            assert_eq!(bytes, written.as_bytes());
            assert_eq!(parser.parse_reader(&bytes[..]).unwrap().into_document(), doc);
        }
    }
}
