//! Startup directory scanning.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec::ShortcutCodec;
use crate::entry::{Scope, StartupEntry};

/// File extension of shortcut artifacts. Anything else in a Startup
/// folder (desktop.ini, stray files) is ignored.
pub const SHORTCUT_EXT: &str = "lnk";

/// Lists shortcut files in `dir` and converts each into a [`StartupEntry`].
///
/// A missing or unreadable directory yields an empty list. A file the
/// codec cannot decode is skipped with a log line; one bad file never
/// aborts the rest of the scan. Enumeration order is whatever the
/// filesystem returns — the service sorts later.
pub fn scan(dir: &Path, scope: Scope, codec: &dyn ShortcutCodec) -> Vec<StartupEntry> {
    let mut entries = Vec::new();

    let Ok(read_dir) = fs::read_dir(dir) else {
        return entries;
    };

    for file in read_dir.flatten() {
        let path = file.path();
        if !is_shortcut(&path) {
            continue;
        }
        match read_entry(&path, scope, codec) {
            Some(entry) => entries.push(entry),
            None => crate::log_warn!("skipping undecodable shortcut: {}", path.display()),
        }
    }

    entries
}

fn is_shortcut(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SHORTCUT_EXT))
}

/// Decodes one shortcut file into an entry. `None` means "skip".
fn read_entry(path: &Path, scope: Scope, codec: &dyn ShortcutCodec) -> Option<StartupEntry> {
    let info = codec.decode(path)?;
    let name = path.file_stem()?.to_string_lossy().into_owned();

    Some(StartupEntry {
        name,
        target_path: PathBuf::from(info.target_path),
        arguments: info.arguments,
        scope,
        source_location: path.to_path_buf(),
        created_at: creation_time(path),
    })
}

/// Filesystem creation time, where the platform reports one.
pub(crate) fn creation_time(path: &Path) -> Option<std::time::SystemTime> {
    fs::metadata(path).and_then(|m| m.created()).ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::codec::fake::FakeCodec;

    #[test]
    fn missing_directory_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");

        let entries = scan(&gone, Scope::User, &FakeCodec);

        assert!(entries.is_empty());
    }

    #[test]
    fn non_shortcut_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("desktop.ini"), "[.ShellClassInfo]").unwrap();
        fs::write(dir.path().join("readme.txt"), "hello").unwrap();

        let entries = scan(dir.path(), Scope::User, &FakeCodec);

        assert!(entries.is_empty());
    }

    #[test]
    fn one_corrupt_shortcut_does_not_abort_the_scan() {
        // Arrange: one well-formed shortcut and one file the codec
        // cannot decode.
        let dir = tempfile::tempdir().unwrap();
        FakeCodec
            .encode(
                &dir.path().join("Good.lnk"),
                Path::new(r"C:\Apps\good.exe"),
                "",
                "",
            )
            .unwrap();
        fs::write(dir.path().join("Bad.lnk"), b"\x00garbage").unwrap();

        // Act
        let entries = scan(dir.path(), Scope::User, &FakeCodec);

        // Assert: exactly one entry, not zero and not an aborted scan.
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Good");
    }

    #[test]
    fn entry_fields_come_from_file_and_codec() {
        let dir = tempfile::tempdir().unwrap();
        FakeCodec
            .encode(
                &dir.path().join("Editor.lnk"),
                Path::new(r"C:\Apps\editor.exe"),
                "--fast",
                "Editor - run at startup",
            )
            .unwrap();

        let entries = scan(dir.path(), Scope::System, &FakeCodec);

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.name, "Editor");
        assert_eq!(entry.target_path, Path::new(r"C:\Apps\editor.exe"));
        assert_eq!(entry.arguments, "--fast");
        assert_eq!(entry.scope, Scope::System);
        assert_eq!(entry.source_location, dir.path().join("Editor.lnk"));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        FakeCodec
            .encode(
                &dir.path().join("Upper.LNK"),
                Path::new(r"C:\Apps\upper.exe"),
                "",
                "",
            )
            .unwrap();

        let entries = scan(dir.path(), Scope::User, &FakeCodec);

        assert_eq!(entries.len(), 1);
    }
}
