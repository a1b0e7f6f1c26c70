//! The startup registry service.
//!
//! This is the single contract the CLI depends on: list, add, remove,
//! and contains over the combined set of entries in the user and
//! system Startup folders. The service holds no mutable state — every
//! operation is a synchronous transform of current filesystem state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::ShortcutCodec;
use crate::entry::{Scope, StartupEntry};
use crate::error::{Error, Result};
use crate::scanner::{self, SHORTCUT_EXT};
use crate::{log_debug, log_info};

pub struct StartupService {
    user_dir: PathBuf,
    system_dir: PathBuf,
    codec: Box<dyn ShortcutCodec>,
}

impl StartupService {
    /// Creates a service over the given user (writable) and system
    /// (read-only) Startup directories.
    ///
    /// Directory paths are injected rather than read from globals so
    /// tests can point the service at temporary directories.
    pub fn new(
        user_dir: impl Into<PathBuf>,
        system_dir: impl Into<PathBuf>,
        codec: Box<dyn ShortcutCodec>,
    ) -> Self {
        Self {
            user_dir: user_dir.into(),
            system_dir: system_dir.into(),
            codec,
        }
    }

    /// Scans both Startup folders and returns every entry, sorted
    /// ascending by name.
    ///
    /// Duplicate names across scopes are both retained — one file per
    /// entry, in two separate directories.
    pub fn list_entries(&self) -> Vec<StartupEntry> {
        let mut entries = scanner::scan(&self.user_dir, Scope::User, self.codec.as_ref());
        entries.extend(scanner::scan(&self.system_dir, Scope::System, self.codec.as_ref()));
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        log_debug!("listed {} startup entries", entries.len());
        entries
    }

    /// Creates a `{name}.lnk` shortcut to `target` in the user Startup
    /// folder and returns the new entry.
    ///
    /// Fails with [`Error::TargetNotFound`] when `target` is not an
    /// existing file, and with [`Error::AlreadyExists`] when a shortcut
    /// with the same name is present and `overwrite` is false. The
    /// folder itself is created on first use.
    pub fn add_entry(
        &self,
        name: &str,
        target: &Path,
        arguments: &str,
        overwrite: bool,
    ) -> Result<StartupEntry> {
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(Error::InvalidName(name.to_string()));
        }
        if !target.is_file() {
            return Err(Error::TargetNotFound(target.to_path_buf()));
        }

        fs::create_dir_all(&self.user_dir)?;

        let location = self.user_dir.join(format!("{name}.{SHORTCUT_EXT}"));
        if location.exists() && !overwrite {
            return Err(Error::AlreadyExists(name.to_string()));
        }

        let description = format!("{name} - run at startup");
        self.codec.encode(&location, target, arguments, &description)?;
        log_info!("added startup entry \"{name}\" -> {}", target.display());

        Ok(StartupEntry {
            name: name.to_string(),
            target_path: target.to_path_buf(),
            arguments: arguments.to_string(),
            scope: Scope::User,
            source_location: location.clone(),
            created_at: scanner::creation_time(&location),
        })
    }

    /// Deletes the shortcut file backing `entry`.
    ///
    /// Fails with [`Error::ShortcutNotFound`] when the file is already
    /// gone (e.g. deleted externally since the listing). System-scope
    /// entries are not specially rejected here; deleting one simply
    /// fails at the filesystem level unless the process is elevated.
    pub fn remove_entry(&self, entry: &StartupEntry) -> Result<()> {
        if !entry.source_location.exists() {
            return Err(Error::ShortcutNotFound(entry.source_location.clone()));
        }
        fs::remove_file(&entry.source_location)?;
        log_info!("removed startup entry \"{}\"", entry.name);
        Ok(())
    }

    /// Returns whether any entry, in either scope, already points at
    /// `target` (case-insensitive).
    ///
    /// Always a full re-scan. The Startup folders hold a handful of
    /// files, so there is nothing worth caching.
    pub fn contains_target(&self, target: &Path) -> bool {
        self.list_entries()
            .iter()
            .any(|entry| entry.matches_target(target))
    }

    /// The writable (user-scope) Startup directory this service manages.
    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    /// The read-only (system-scope) Startup directory this service scans.
    pub fn system_dir(&self) -> &Path {
        &self.system_dir
    }
}
