//! Errors from pin operations

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while driving a pin.
///
/// Filesystem failures are passed through unmodified; there is no
/// retry or fallback. Callers decide on retry/log/abort policy.
#[derive(Debug)]
pub enum PinError {
    /// A filesystem operation failed (I/O error, permission denied,
    /// missing node).
    Io(io::Error),
    /// A control file held text outside the sysfs vocabulary.
    UnexpectedContents {
        /// The file that was read
        path: PathBuf,
        /// Its raw contents
        contents: String,
    },
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::Io(err) => write!(f, "filesystem error: {err}"),
            PinError::UnexpectedContents { path, contents } => {
                write!(
                    f,
                    "unexpected contents in {}: {:?}",
                    path.display(),
                    contents
                )
            }
        }
    }
}

impl std::error::Error for PinError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PinError::Io(err) => Some(err),
            PinError::UnexpectedContents { .. } => None,
        }
    }
}

impl From<io::Error> for PinError {
    fn from(err: io::Error) -> Self {
        PinError::Io(err)
    }
}
