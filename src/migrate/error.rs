use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error kinds for migration operations. Every kind aborts the run; the
/// best-effort auxiliary-asset copy is the only step that swallows its
/// failures instead of producing one of these.
#[derive(Debug)]
pub enum MigrateError {
    /// Legacy source file missing or unreadable
    Read { path: PathBuf, source: io::Error },
    /// Required `<body>...</body>` boundaries not found
    MalformedInput { path: PathBuf, detail: String },
    /// Output directory or file could not be written
    Write { path: PathBuf, source: io::Error },
    /// Configuration error
    Config(String),
}

impl fmt::Display for MigrateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrateError::Read { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            MigrateError::MalformedInput { path, detail } => {
                write!(f, "Malformed HTML in {}: {}", path.display(), detail)
            }
            MigrateError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            MigrateError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for MigrateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MigrateError::Read { source, .. } | MigrateError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}
