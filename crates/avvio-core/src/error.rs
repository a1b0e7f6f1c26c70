use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the startup registry service.
///
/// Scan-side failures (a shortcut that cannot be decoded, a directory
/// that does not exist) never reach this type — they degrade to absence
/// so that one bad file cannot block a full listing. Only mutations and
/// codec invocations report errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The program an entry should launch does not exist.
    #[error("target program does not exist: {0}")]
    TargetNotFound(PathBuf),

    /// The shortcut file backing an entry is gone.
    #[error("shortcut file does not exist: {0}")]
    ShortcutNotFound(PathBuf),

    /// An entry with the same name is already present in the user
    /// Startup folder and overwriting was not requested.
    #[error("a startup entry named \"{0}\" already exists")]
    AlreadyExists(String),

    /// The entry name cannot be used as a file name.
    #[error("invalid entry name: \"{0}\"")]
    InvalidName(String),

    /// The delegated shortcut tool failed to start, timed out, or
    /// exited with a non-zero status.
    #[error("shortcut tool failed: {0}")]
    ExternalTool(String),

    /// Directory creation, enumeration, or file deletion failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
