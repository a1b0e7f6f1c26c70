//! Windows platform implementation for Avvio.
//!
//! Provides the two [`avvio_core::ShortcutCodec`] implementations and
//! Startup folder resolution. The PowerShell codec is plain `std` and
//! compiles everywhere; the native codec and folder resolution are
//! Windows-only.

/// Startup folder resolution from environment variables.
#[cfg(windows)]
pub mod paths;

/// Delegated `.lnk` codec via `powershell.exe` and WScript.Shell.
pub mod powershell;

/// Native `.lnk` codec via the shell COM API.
#[cfg(windows)]
pub mod shortcut;

pub use powershell::PowerShellCodec;
#[cfg(windows)]
pub use shortcut::NativeCodec;
