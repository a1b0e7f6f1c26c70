mod loader;
pub mod template;
#[cfg(test)]
mod tests;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use loader::{config_dir, config_path, load, try_load};

use crate::log::LogConfig;

/// Top-level configuration for Avvio.
///
/// Loaded from `~/.config/avvio/config.toml`. Missing sections fall
/// back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Startup folder and codec settings.
    pub startup: StartupConfig,
    /// Diagnostic log settings.
    pub log: LogConfig,
}

/// The `[startup]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Override for the per-user Startup directory. When unset, the
    /// platform path is resolved at runtime from `%APPDATA%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_dir: Option<PathBuf>,
    /// Override for the all-users Startup directory. When unset,
    /// resolved from `%ProgramData%`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_dir: Option<PathBuf>,
    /// Which shortcut codec to use.
    pub codec: CodecKind,
    /// Timeout in seconds for the external PowerShell codec.
    pub tool_timeout_secs: u64,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            user_dir: None,
            system_dir: None,
            codec: CodecKind::default(),
            tool_timeout_secs: 10,
        }
    }
}

/// Selects a [`crate::ShortcutCodec`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    /// Read and write `.lnk` files natively through the shell COM API.
    #[default]
    Native,
    /// Delegate to `powershell.exe` and WScript.Shell, the mechanism
    /// older tooling used. Slower; kept as a fallback.
    Powershell,
}

impl Config {
    /// Clamps values to safe ranges.
    ///
    /// A zero timeout would make every delegated codec call fail
    /// instantly; an unbounded one would let a hung child process hang
    /// the caller forever.
    pub fn validate(&mut self) {
        self.startup.tool_timeout_secs = self.startup.tool_timeout_secs.clamp(1, 300);
    }
}
