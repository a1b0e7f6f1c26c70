use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

/// Whether a startup entry applies to the current user or to all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Per-user Startup folder. Entries here can be added and removed.
    User,
    /// All-users Startup folder. Scanned, never written to.
    System,
}

impl Scope {
    /// Returns whether entries in this scope may be created or deleted.
    pub fn is_writable(self) -> bool {
        matches!(self, Self::User)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::System => "system",
        }
    }
}

/// One discovered or freshly created startup item.
///
/// The backing shortcut file *is* the entry: it exists exactly as long
/// as the file does, and `source_location` is all that is needed to
/// delete it later. There is no separate persisted record.
#[derive(Debug, Clone, Serialize)]
pub struct StartupEntry {
    /// Display name, the shortcut file name without its extension.
    pub name: String,
    /// Absolute path of the program the shortcut launches.
    pub target_path: PathBuf,
    /// Command-line arguments passed to the target. May be empty.
    pub arguments: String,
    /// Which Startup folder the entry lives in.
    pub scope: Scope,
    /// Path of the backing shortcut file.
    pub source_location: PathBuf,
    /// Filesystem creation time of the shortcut, when the filesystem
    /// reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<SystemTime>,
}

impl StartupEntry {
    /// Compares the entry's target against `target`, ignoring case.
    ///
    /// Windows paths are case-insensitive, so `C:\Apps\Foo.exe` and
    /// `c:\apps\foo.exe` refer to the same program.
    pub fn matches_target(&self, target: &Path) -> bool {
        paths_equal_ignore_case(&self.target_path, target)
    }
}

pub(crate) fn paths_equal_ignore_case(a: &Path, b: &Path) -> bool {
    a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
}

/// Renders entries as pretty-printed JSON for machine consumers.
pub fn entries_to_json(entries: &[StartupEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_comparison_ignores_case() {
        let entry = StartupEntry {
            name: "Foo".into(),
            target_path: PathBuf::from(r"C:\Apps\Foo.exe"),
            arguments: String::new(),
            scope: Scope::User,
            source_location: PathBuf::from(r"C:\Startup\Foo.lnk"),
            created_at: None,
        };

        assert!(entry.matches_target(Path::new(r"c:\apps\foo.exe")));
        assert!(!entry.matches_target(Path::new(r"c:\apps\bar.exe")));
    }

    #[test]
    fn system_scope_is_read_only() {
        assert!(Scope::User.is_writable());
        assert!(!Scope::System.is_writable());
    }

    #[test]
    fn json_output_includes_scope_and_skips_missing_created_at() {
        let entry = StartupEntry {
            name: "Foo".into(),
            target_path: PathBuf::from(r"C:\Apps\Foo.exe"),
            arguments: "-x".into(),
            scope: Scope::System,
            source_location: PathBuf::from(r"C:\Startup\Foo.lnk"),
            created_at: None,
        };

        let json = entries_to_json(&[entry]);

        assert!(json.contains("\"scope\": \"system\""));
        assert!(json.contains("\"arguments\": \"-x\""));
        assert!(!json.contains("created_at"));
    }
}
