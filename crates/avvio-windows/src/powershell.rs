//! Delegated `.lnk` codec via `powershell.exe` and WScript.Shell.
//!
//! Kept as a fallback for environments where the shell COM API is
//! unavailable to the process. Every call spawns a child process under
//! an explicit timeout; a wedged PowerShell is killed rather than left
//! to hang the caller.

use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use avvio_core::{Error, Result, ShortcutCodec, ShortcutInfo, log_warn};

const POWERSHELL: &str = "powershell.exe";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Reads and writes shortcut files by scripting WScript.Shell.
pub struct PowerShellCodec {
    timeout: Duration,
}

impl PowerShellCodec {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Runs a script and returns its stdout.
    ///
    /// Fails when PowerShell cannot be started, exits non-zero, or the
    /// timeout expires (the child is killed in that case).
    fn run(&self, script: &str) -> Result<String> {
        let mut child = Command::new(POWERSHELL)
            .args(["-NoProfile", "-NonInteractive", "-Command", script])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::ExternalTool(format!("could not start {POWERSHELL}: {e}")))?;

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) if Instant::now() >= deadline => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::ExternalTool(format!(
                        "{POWERSHELL} timed out after {}s",
                        self.timeout.as_secs()
                    )));
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    let _ = child.kill();
                    return Err(Error::ExternalTool(format!(
                        "waiting for {POWERSHELL} failed: {e}"
                    )));
                }
            }
        };

        if !status.success() {
            return Err(Error::ExternalTool(format!("{POWERSHELL} exited with {status}")));
        }

        // The script output is a handful of short lines, far below the
        // pipe buffer size, so reading after exit cannot deadlock.
        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            let _ = stdout.read_to_string(&mut output);
        }
        Ok(output)
    }
}

impl ShortcutCodec for PowerShellCodec {
    fn encode(
        &self,
        location: &Path,
        target: &Path,
        arguments: &str,
        description: &str,
    ) -> Result<()> {
        let workdir = target.parent().unwrap_or(Path::new(""));
        let script = encode_script(location, target, arguments, workdir, description);
        self.run(&script).map(|_| ())
    }

    fn decode(&self, location: &Path) -> Option<ShortcutInfo> {
        // WScript.Shell silently creates a blank in-memory shortcut for
        // a path that doesn't exist; check first so decode means "read".
        if !location.is_file() {
            return None;
        }

        match self.run(&decode_script(location)) {
            Ok(output) => Some(parse_decode_output(&output)),
            Err(e) => {
                log_warn!("decode of {} failed: {e}", location.display());
                None
            }
        }
    }
}

/// Builds the WScript.Shell script that writes a shortcut.
fn encode_script(
    location: &Path,
    target: &Path,
    arguments: &str,
    workdir: &Path,
    description: &str,
) -> String {
    format!(
        "$sh = New-Object -ComObject WScript.Shell\n\
         $lnk = $sh.CreateShortcut('{loc}')\n\
         $lnk.TargetPath = '{target}'\n\
         $lnk.Arguments = '{args}'\n\
         $lnk.WorkingDirectory = '{dir}'\n\
         $lnk.Description = '{desc}'\n\
         $lnk.Save()",
        loc = quote(&location.display().to_string()),
        target = quote(&target.display().to_string()),
        args = quote(arguments),
        dir = quote(&workdir.display().to_string()),
        desc = quote(description),
    )
}

/// Builds the script that prints a shortcut's fields as labeled lines.
fn decode_script(location: &Path) -> String {
    format!(
        "$sh = New-Object -ComObject WScript.Shell\n\
         $lnk = $sh.CreateShortcut('{loc}')\n\
         Write-Output \"TargetPath:$($lnk.TargetPath)\"\n\
         Write-Output \"Arguments:$($lnk.Arguments)\"\n\
         Write-Output \"Description:$($lnk.Description)\"",
        loc = quote(&location.display().to_string()),
    )
}

/// Escapes a value for a single-quoted PowerShell string literal.
///
/// Inside single quotes PowerShell interprets nothing except a doubled
/// quote, so this is the entire escaping story.
fn quote(s: &str) -> String {
    s.replace('\'', "''")
}

/// Extracts the three labeled fields from the decode script's output.
///
/// Lines without a known label are ignored; absent fields stay empty.
fn parse_decode_output(output: &str) -> ShortcutInfo {
    let mut info = ShortcutInfo::default();
    for line in output.lines() {
        if let Some(rest) = line.strip_prefix("TargetPath:") {
            info.target_path = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Arguments:") {
            info.arguments = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix("Description:") {
            info.description = rest.trim().to_string();
        }
    }
    info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_three_labeled_fields() {
        let output = "TargetPath:C:\\Apps\\foo.exe\r\nArguments:-x -y\r\nDescription:Foo - run at startup\r\n";

        let info = parse_decode_output(output);

        assert_eq!(info.target_path, "C:\\Apps\\foo.exe");
        assert_eq!(info.arguments, "-x -y");
        assert_eq!(info.description, "Foo - run at startup");
    }

    #[test]
    fn unlabeled_lines_are_ignored_and_absent_fields_stay_empty() {
        let output = "Loading personal profile...\nTargetPath:C:\\foo.exe\nsome noise\n";

        let info = parse_decode_output(output);

        assert_eq!(info.target_path, "C:\\foo.exe");
        assert_eq!(info.arguments, "");
        assert_eq!(info.description, "");
    }

    #[test]
    fn single_quotes_are_doubled_for_powershell() {
        assert_eq!(quote("O'Brien's app"), "O''Brien''s app");
        assert_eq!(quote("plain"), "plain");
    }

    #[test]
    fn encode_script_derives_workdir_from_target_parent() {
        let script = encode_script(
            Path::new(r"C:\Startup\Foo.lnk"),
            Path::new(r"C:\Apps\foo.exe"),
            "-x",
            Path::new(r"C:\Apps"),
            "Foo - run at startup",
        );

        assert!(script.contains(r"$lnk.TargetPath = 'C:\Apps\foo.exe'"));
        assert!(script.contains(r"$lnk.WorkingDirectory = 'C:\Apps'"));
        assert!(script.contains("$lnk.Arguments = '-x'"));
        assert!(script.contains("$lnk.Save()"));
    }

    #[test]
    fn decode_of_missing_file_is_none_without_spawning() {
        let codec = PowerShellCodec::new(Duration::from_secs(1));

        assert!(codec.decode(Path::new("/definitely/not/here.lnk")).is_none());
    }
}
