//! .lineobj parser
//!
//! Single-pass, line-by-line conversion of `.lineobj` text into a
//! [`GeometryDocument`]. Faces with more than three vertices are rejected and
//! reported through [`ParseOutcome::rejected`]; malformed numbers abort the
//! parse.

use crate::directive::{Directive, DirectiveKind};
use indexmap::IndexMap;
use lineobj_core::{
    DEFAULT_GROUP_NAME, GeometryDocument, GroupBuilder, LineObjError, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufRead;
use tracing::{debug, warn};

/// How `o` directives split a file into groups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    /// Records before the first `o` form the default group, which is
    /// discarded as soon as an `o` directive appears
    #[default]
    Auto,
    /// Only records after an `o` directive are kept
    Named,
    /// `o` directives are ignored and the whole file is one default group
    Single,
}

/// Parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Grouping behavior
    pub group_mode: GroupMode,
    /// Maximum number of `v` records accepted from one file
    pub max_vertices: Option<usize>,
}

impl ParseConfig {
    /// Multi-object files only: records outside an `o` block are dropped
    pub fn strict() -> Self {
        Self {
            group_mode: GroupMode::Named,
            ..Self::default()
        }
    }

    /// Treat the whole file as one object
    pub fn single_group() -> Self {
        Self {
            group_mode: GroupMode::Single,
            ..Self::default()
        }
    }

    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = Some(max_vertices);
        self
    }
}

/// Why a record was dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Face with more than three index fields
    NonTriangulatedFace { index_fields: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NonTriangulatedFace { index_fields } => write!(
                f,
                "face has {} vertices; the model must be exported with triangulated faces",
                index_fields
            ),
        }
    }
}

/// A record skipped without aborting the parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based line number
    pub line: usize,
    pub content: String,
    pub reason: RejectReason,
}

impl fmt::Display for RejectedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.reason, self.content)
    }
}

/// Parse result
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub document: GeometryDocument,
    pub rejected: Vec<RejectedRecord>,
}

impl ParseOutcome {
    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }

    pub fn into_document(self) -> GeometryDocument {
        self.document
    }
}

/// .lineobj text parser
#[derive(Debug, Clone, Default)]
pub struct LineObjParser {
    config: ParseConfig,
}

impl LineObjParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse a complete text buffer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lineobj_text::LineObjParser;
    ///
    /// let outcome = LineObjParser::new().parse_str("v 0 0 0\nv 1 0 0\nl 1 2\n")?;
    /// let group = outcome.document.first().unwrap();
    /// assert_eq!(group.edges(), &[[0, 1]]);
    /// # Ok::<(), lineobj_core::LineObjError>(())
    /// ```
    pub fn parse_str(&self, text: &str) -> Result<ParseOutcome> {
        self.parse_lines(source_lines(text))
    }

    /// Parse a sequence of lines
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ParseState::new(&self.config);
        for (i, line) in lines.into_iter().enumerate() {
            state.feed(i + 1, line.as_ref())?;
        }
        state.finish()
    }

    /// Parse from a buffered reader, stopping at the first I/O or fatal parse error
    pub fn parse_reader<R: BufRead>(&self, mut reader: R) -> Result<ParseOutcome> {
        let mut state = ParseState::new(&self.config);
        let mut chunk = String::new();
        let mut line_number = 0;

        loop {
            chunk.clear();
            if reader.read_line(&mut chunk)? == 0 {
                break;
            }
            // a `\n`-terminated chunk may still hold several `\r`-separated lines
            for line in source_lines(&chunk) {
                line_number += 1;
                state.feed(line_number, line)?;
            }
        }
        state.finish()
    }
}

/// Split text into lines ended by `\n`, `\r\n` or a lone `\r`
fn source_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Mutable state of one parse call
struct ParseState<'c> {
    config: &'c ParseConfig,
    groups: IndexMap<String, GroupBuilder>,
    /// Index into `groups` of the group receiving records
    current: Option<usize>,
    /// Whether `groups` holds only the implicit default group
    implicit: bool,
    vertex_total: usize,
    dropped: usize,
    rejected: Vec<RejectedRecord>,
}

impl<'c> ParseState<'c> {
    fn new(config: &'c ParseConfig) -> Self {
        let mut groups = IndexMap::new();
        let (current, implicit) = match config.group_mode {
            GroupMode::Named => (None, false),
            GroupMode::Auto | GroupMode::Single => {
                groups.insert(
                    DEFAULT_GROUP_NAME.to_string(),
                    GroupBuilder::new(DEFAULT_GROUP_NAME),
                );
                (Some(0), true)
            }
        };

        Self {
            config,
            groups,
            current,
            implicit,
            vertex_total: 0,
            dropped: 0,
            rejected: Vec::new(),
        }
    }

    fn current_group(&mut self) -> Option<&mut GroupBuilder> {
        let index = self.current?;
        self.groups.get_index_mut(index).map(|(_, group)| group)
    }

    fn feed(&mut self, line: usize, content: &str) -> Result<()> {
        let Some(directive) = Directive::classify(line, content) else {
            return Ok(());
        };

        match directive.kind {
            DirectiveKind::Object => self.begin_object(&directive),
            DirectiveKind::Vertex => {
                let position = directive.vec3(&directive.fields())?;
                self.count_vertex(&directive)?;
                match self.current_group() {
                    Some(group) => group.push_position(position),
                    None => self.dropped += 1,
                }
                Ok(())
            }
            DirectiveKind::Normal => {
                let normal = directive.vec3(&directive.fields())?;
                match self.current_group() {
                    Some(group) => group.push_normal(normal),
                    None => self.dropped += 1,
                }
                Ok(())
            }
            DirectiveKind::Face => self.face(&directive),
            DirectiveKind::Line => {
                let fields = directive.fields();
                let fields = directive.require(&fields, 2)?;
                let edge = [directive.index(fields[0])?, directive.index(fields[1])?];
                match self.current_group() {
                    Some(group) => group.push_edge(edge, line),
                    None => self.dropped += 1,
                }
                Ok(())
            }
        }
    }

    fn begin_object(&mut self, directive: &Directive<'_>) -> Result<()> {
        if self.config.group_mode == GroupMode::Single {
            debug!("Ignoring object directive on line {}", directive.line);
            return Ok(());
        }

        let name = directive.rest();
        if name.is_empty() {
            return Err(LineObjError::missing_field(
                directive.line,
                directive.kind.keyword(),
                1,
                0,
                directive.content,
            ));
        }

        if self.implicit {
            let discarded = self.groups.swap_remove(DEFAULT_GROUP_NAME);
            if let Some(group) = discarded.filter(|g| g.position_count() > 0) {
                debug!(
                    "Dropping {} position(s) declared before the first object",
                    group.position_count()
                );
            }
            self.implicit = false;
        }

        let index = match self.groups.get_index_of(name) {
            Some(index) => {
                debug!("Reopening object '{}' on line {}", name, directive.line);
                index
            }
            None => {
                debug!("Starting object '{}' on line {}", name, directive.line);
                let (index, _) = self
                    .groups
                    .insert_full(name.to_string(), GroupBuilder::new(name));
                index
            }
        };
        self.current = Some(index);
        Ok(())
    }

    fn face(&mut self, directive: &Directive<'_>) -> Result<()> {
        let fields = directive.fields();

        if fields.len() > 3 {
            let reason = RejectReason::NonTriangulatedFace {
                index_fields: fields.len(),
            };
            warn!("Rejected line {}: {}", directive.line, reason);
            self.rejected.push(RejectedRecord {
                line: directive.line,
                content: directive.content.to_string(),
                reason,
            });
            return Ok(());
        }

        let fields = directive.require(&fields, 3)?;
        let face = [
            directive.face_index(fields[0])?,
            directive.face_index(fields[1])?,
            directive.face_index(fields[2])?,
        ];
        match self.current_group() {
            Some(group) => group.push_face(face, directive.line),
            None => self.dropped += 1,
        }
        Ok(())
    }

    fn count_vertex(&mut self, directive: &Directive<'_>) -> Result<()> {
        self.vertex_total += 1;
        match self.config.max_vertices {
            Some(limit) if self.vertex_total > limit => Err(LineObjError::limit_exceeded(
                limit,
                format!("too many vertices at line {}", directive.line),
            )),
            _ => Ok(()),
        }
    }

    fn finish(self) -> Result<ParseOutcome> {
        if self.dropped > 0 {
            debug!("Dropped {} record(s) outside any object", self.dropped);
        }

        let mut document = GeometryDocument::new();
        for (_, group) in self.groups {
            document.insert(group.finish()?);
        }

        debug!(
            "Parsed {} group(s), {} position(s), {} face(s), {} edge(s), {} rejected",
            document.len(),
            document.position_count(),
            document.face_count(),
            document.edge_count(),
            self.rejected.len()
        );

        Ok(ParseOutcome {
            document,
            rejected: self.rejected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_parse_single_triangle() {
        let outcome = LineObjParser::new()
            .parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n")
            .unwrap();

        assert!(!outcome.has_rejections());
        let doc = outcome.into_document();
        assert_eq!(doc.len(), 1);

        let group = doc.get(DEFAULT_GROUP_NAME).unwrap();
        assert_eq!(
            group.positions(),
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
        );
        assert_eq!(group.faces(), &[[0, 1, 2]]);
        assert!(group.edges().is_empty());
    }

    #[test]
    fn test_auto_mode_drops_records_before_first_object() {
        let text = "v 9 9 9\nv 8 8 8\nl 1 2\no first\nv 0 0 0\nv 1 1 1\nl 1 2\n";
        let doc = LineObjParser::new().parse_str(text).unwrap().into_document();

        assert_eq!(doc.group_names().collect::<Vec<_>>(), vec!["first"]);
        let group = doc.get("first").unwrap();
        assert_eq!(group.positions(), &[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
        assert_eq!(group.edges(), &[[0, 1]]);
    }

    #[test]
    fn test_named_mode_without_objects_is_empty() {
        let doc = LineObjParser::with_config(ParseConfig::strict())
            .parse_str("v 0 0 0\nv 1 0 0\nl 1 2\n")
            .unwrap()
            .into_document();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_single_mode_ignores_objects() {
        let text = "o a\nv 0 0 0\no b\nv 1 0 0\nl 1 2\n";
        let doc = LineObjParser::with_config(ParseConfig::single_group())
            .parse_str(text)
            .unwrap()
            .into_document();

        assert_eq!(doc.len(), 1);
        let group = doc.get(DEFAULT_GROUP_NAME).unwrap();
        assert_eq!(group.positions().len(), 2);
        assert_eq!(group.edges(), &[[0, 1]]);
    }

    #[test]
    fn test_reopened_object_keeps_position() {
        let text = "o a\nv 0 0 0\no b\nv 1 0 0\no a\nv 2 0 0\nl 1 2\n";
        let doc = LineObjParser::new().parse_str(text).unwrap().into_document();

        assert_eq!(doc.group_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.get("a").unwrap().positions().len(), 2);
        assert_eq!(doc.get("a").unwrap().edges(), &[[0, 1]]);
        assert_eq!(doc.get("b").unwrap().positions().len(), 1);
    }

    #[test]
    #[traced_test]
    fn test_rejected_face_is_logged() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\nf 1 2 3\n";
        let outcome = LineObjParser::new().parse_str(text).unwrap();

        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].line, 5);
        assert_eq!(
            outcome.rejected[0].reason,
            RejectReason::NonTriangulatedFace { index_fields: 4 }
        );
        assert!(logs_contain("triangulated faces"));

        let group = outcome.document.first().unwrap();
        assert_eq!(group.faces(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_vertex_limit() {
        let parser = LineObjParser::with_config(ParseConfig::default().with_max_vertices(2));
        assert!(parser.parse_str("v 0 0 0\nv 1 0 0\n").is_ok());

        let err = parser.parse_str("v 0 0 0\nv 1 0 0\nv 2 0 0\n").unwrap_err();
        assert!(matches!(err, LineObjError::LimitExceeded { limit: 2, .. }));
    }

    #[test]
    fn test_empty_object_name_is_an_error() {
        let err = LineObjParser::new().parse_str("o   \n").unwrap_err();
        assert!(matches!(err, LineObjError::MissingField { line: 1, .. }));
    }

    #[test]
    fn test_faces_may_reference_later_positions() {
        let doc = LineObjParser::new()
            .parse_str("f 1 2 3
l 3 1
v 0 0 0
v 1 0 0
v 0 1 0
")
            .unwrap()
            .into_document();

        let group = doc.get(DEFAULT_GROUP_NAME).unwrap();
        assert_eq!(group.faces(), &[[0, 1, 2]]);
        assert_eq!(group.edges(), &[[2, 0]]);
    }

    #[test]
    fn test_unresolved_index_reports_its_line() {
        let err = LineObjParser::new()
            .parse_str("o a
v 0 0 0
l 1 2
v 1 0 0
f 1 2 5
")
            .unwrap_err();
        assert!(matches!(
            err,
            LineObjError::IndexOutOfRange {
                line: 5,
                index: 5,
                vertex_count: 2
            }
        ));
    }

    #[test]
    fn test_source_lines_endings() {
        let split = |text| source_lines(text).collect::<Vec<_>>();
        assert_eq!(split("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split("a\n\r\nb"), vec!["a", "", "b"]);
        assert!(split("").is_empty());
    }

    #[test]
    fn test_lone_carriage_returns_split_lines() {
        let text = "o a\rv 0 0 0\rv 1 0 0\rl 1 2\r";
        let parser = LineObjParser::new();

        for outcome in [
            parser.parse_str(text).unwrap(),
            parser.parse_reader(text.as_bytes()).unwrap(),
        ] {
            let group = outcome.document.get("a").unwrap();
            assert_eq!(group.positions().len(), 2);
            assert_eq!(group.edges(), &[[0, 1]]);
        }
    }
}
