//! lineobj Text
//!
//! Parsing and writing of the `.lineobj` text format: a restricted Wavefront
//! OBJ subset (`o`, `v`, `vn`, triangular `f`) extended with `l` line
//! segments.
//!
//! # Examples
//!
//! ```rust
//! use lineobj_text::{LineObjParser, ParseConfig};
//!
//! let text = "o frame\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\nl 1 2\n";
//! let outcome = LineObjParser::with_config(ParseConfig::default()).parse_str(text)?;
//!
//! let frame = outcome.document.get("frame").unwrap();
//! assert_eq!(frame.faces(), &[[0, 1, 2]]);
//! assert_eq!(frame.edges(), &[[0, 1]]);
//! # Ok::<(), lineobj_core::LineObjError>(())
//! ```

pub mod directive;
pub mod loader;
pub mod parser;
pub mod writer;

pub use directive::{Directive, DirectiveKind};
pub use loader::{has_lineobj_extension, load_lineobj};
pub use parser::{GroupMode, LineObjParser, ParseConfig, ParseOutcome, RejectReason, RejectedRecord};
pub use writer::LineObjWriter;
