//! The shortcut codec boundary.
//!
//! The core never touches the `.lnk` binary format itself. Everything
//! it needs from a shortcut file goes through [`ShortcutCodec`], and
//! the platform crate provides the implementations (native COM, or a
//! PowerShell fallback).

use std::path::Path;

use crate::error::Result;

/// Metadata recovered from, or written into, a shortcut file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutInfo {
    pub target_path: String,
    pub arguments: String,
    pub description: String,
}

/// Bidirectional mapping between shortcut metadata and an on-disk
/// `.lnk` file.
pub trait ShortcutCodec {
    /// Writes a shortcut at `location` pointing at `target`.
    ///
    /// The working directory stored in the shortcut is the parent
    /// directory of `target`.
    fn encode(
        &self,
        location: &Path,
        target: &Path,
        arguments: &str,
        description: &str,
    ) -> Result<()>;

    /// Reads target, arguments, and description back from `location`.
    ///
    /// Returns `None` when the file cannot be parsed as a shortcut.
    /// Callers treat that as "skip this file", never as an error.
    fn decode(&self, location: &Path) -> Option<ShortcutInfo>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! Plaintext stand-in codec for core tests.

    use std::fs;

    use super::{Path, Result, ShortcutCodec, ShortcutInfo};

    /// Stores shortcuts as three plain lines: target, arguments,
    /// description. Anything else fails to decode, which is exactly
    /// what the "corrupted shortcut" tests need.
    pub struct FakeCodec;

    impl ShortcutCodec for FakeCodec {
        fn encode(
            &self,
            location: &Path,
            target: &Path,
            arguments: &str,
            description: &str,
        ) -> Result<()> {
            let body = format!("{}\n{arguments}\n{description}\n", target.display());
            fs::write(location, body)?;
            Ok(())
        }

        fn decode(&self, location: &Path) -> Option<ShortcutInfo> {
            let body = fs::read_to_string(location).ok()?;
            let mut lines = body.lines();
            let target = lines.next().filter(|t| !t.is_empty())?;
            let arguments = lines.next()?;
            let description = lines.next()?;

            Some(ShortcutInfo {
                target_path: target.to_string(),
                arguments: arguments.to_string(),
                description: description.to_string(),
            })
        }
    }
}
