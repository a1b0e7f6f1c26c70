//! Startup folder resolution.
//!
//! Windows keeps two Startup folders: a per-user one under the roaming
//! profile and an all-users one under ProgramData. Shortcuts in either
//! are launched at logon; only the per-user folder is writable without
//! elevation.

use std::path::PathBuf;

const STARTUP_SUBPATH: &str = r"Microsoft\Windows\Start Menu\Programs\Startup";

/// Per-user Startup folder: `%APPDATA%\Microsoft\Windows\Start Menu\Programs\Startup`.
///
/// Returns `None` when `APPDATA` is not set, which on a real Windows
/// session does not happen outside stripped-down service contexts.
pub fn user_startup_dir() -> Option<PathBuf> {
    let base = std::env::var_os("APPDATA")?;
    Some(PathBuf::from(base).join(STARTUP_SUBPATH))
}

/// All-users Startup folder: `%ProgramData%\Microsoft\Windows\Start Menu\Programs\Startup`.
///
/// Read-only to Avvio: it is scanned, never written to.
pub fn system_startup_dir() -> Option<PathBuf> {
    let base = std::env::var_os("ProgramData")?;
    Some(PathBuf::from(base).join(STARTUP_SUBPATH))
}
