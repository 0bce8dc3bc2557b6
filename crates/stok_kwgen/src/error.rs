//! Errors reported by the keyword generator.

use std::io;
use std::path::{Path, PathBuf};

/// Fatal keyword generator error.
///
/// Every variant aborts the run; `main` prints the message and exits 1.
#[derive(Debug, thiserror::Error)]
pub enum KwgenError {
    /// An input file could not be read.
    #[error("{}", read_message(.path, .source))]
    Read { path: PathBuf, source: io::Error },

    /// Output could not be created or written.
    #[error("error writing output: {source}")]
    Write { source: io::Error },

    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),
}

impl KwgenError {
    #[cold]
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        KwgenError::Read {
            path: path.into(),
            source,
        }
    }

    #[cold]
    pub fn usage(message: impl Into<String>) -> Self {
        KwgenError::Usage(message.into())
    }
}

impl From<io::Error> for KwgenError {
    fn from(source: io::Error) -> Self {
        KwgenError::Write { source }
    }
}

/// User-facing message for a failed read, specialised by error kind.
fn read_message(path: &Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}
