//! File loading
//!
//! Opens a `.lineobj` file through a buffered reader and parses it. The file
//! handle lives only inside [`load_lineobj`], so it is closed on every return
//! path, including fatal parse errors.

use crate::parser::{LineObjParser, ParseConfig, ParseOutcome};
use lineobj_core::{LINEOBJ_EXTENSION, LineObjError, Result};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use tracing::info;

/// Load and parse a `.lineobj` file
///
/// # Examples
///
/// ```rust,no_run
/// use lineobj_text::{ParseConfig, load_lineobj};
///
/// let outcome = load_lineobj("Assets/wireframe.lineobj", &ParseConfig::default())?;
/// println!("groups: {}", outcome.document.len());
/// # Ok::<(), lineobj_core::LineObjError>(())
/// ```
pub fn load_lineobj<P: AsRef<Path>>(path: P, config: &ParseConfig) -> Result<ParseOutcome> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| {
        LineObjError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open file {}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let mut outcome = LineObjParser::with_config(config.clone()).parse_reader(reader)?;
    outcome.document = outcome.document.with_file_path(path);

    info!(
        "Loaded {} with {} group(s)",
        path.display(),
        outcome.document.len()
    );

    Ok(outcome)
}

/// Check if a path carries the `.lineobj` extension
pub fn has_lineobj_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(LINEOBJ_EXTENSION))
}
