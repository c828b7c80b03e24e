//! Reading command input from a file or stdin.

use std::io::Read;
use std::path::{Path, PathBuf};

use dockfmt_common::error::{DockfmtError, Result};

/// Reads all of `path`, or stdin when `path` is `None` or `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read as UTF-8 text.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => {
            tracing::debug!(path = %p.display(), "reading input file");
            std::fs::read_to_string(p).map_err(|source| DockfmtError::Io {
                path: p.to_path_buf(),
                source,
            })
        }
        _ => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    let _ = std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| DockfmtError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(buf)
}
