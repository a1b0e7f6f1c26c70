//! Builds the startup service from configuration and platform paths.
//!
//! Directory overrides in `config.toml` win over the environment-derived
//! defaults; that is also how the test suite points the CLI at temp
//! directories.

use avvio_core::StartupService;
use avvio_core::config::Config;

/// Assembles a [`StartupService`] or explains why it cannot exist here.
pub fn build(config: &Config) -> Result<StartupService, String> {
    let user_dir = match &config.startup.user_dir {
        Some(dir) => dir.clone(),
        None => platform::user_dir()?,
    };
    let system_dir = match &config.startup.system_dir {
        Some(dir) => dir.clone(),
        None => platform::system_dir()?,
    };
    let codec = platform::codec(config)?;

    Ok(StartupService::new(user_dir, system_dir, codec))
}

#[cfg(windows)]
mod platform {
    use std::path::PathBuf;
    use std::time::Duration;

    use avvio_core::ShortcutCodec;
    use avvio_core::config::{CodecKind, Config};
    use avvio_windows::{NativeCodec, PowerShellCodec, paths};

    pub fn user_dir() -> Result<PathBuf, String> {
        paths::user_startup_dir().ok_or_else(|| "%APPDATA% is not set".into())
    }

    pub fn system_dir() -> Result<PathBuf, String> {
        paths::system_startup_dir().ok_or_else(|| "%ProgramData% is not set".into())
    }

    pub fn codec(config: &Config) -> Result<Box<dyn ShortcutCodec>, String> {
        Ok(match config.startup.codec {
            CodecKind::Native => Box::new(NativeCodec),
            CodecKind::Powershell => Box::new(PowerShellCodec::new(Duration::from_secs(
                config.startup.tool_timeout_secs,
            ))),
        })
    }
}

#[cfg(not(windows))]
mod platform {
    use std::path::PathBuf;

    use avvio_core::ShortcutCodec;
    use avvio_core::config::Config;

    const UNSUPPORTED: &str = "startup folders are only available on Windows";

    pub fn user_dir() -> Result<PathBuf, String> {
        Err(UNSUPPORTED.into())
    }

    pub fn system_dir() -> Result<PathBuf, String> {
        Err(UNSUPPORTED.into())
    }

    pub fn codec(_config: &Config) -> Result<Box<dyn ShortcutCodec>, String> {
        Err(UNSUPPORTED.into())
    }
}
