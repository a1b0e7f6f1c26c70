//! Generates the default `config.toml` with explanatory comments.
//!
//! Written by `avvio init`; never overwrites an existing file.

/// Returns the commented default configuration file contents.
pub fn generate_config() -> String {
    r#"# Avvio configuration
# Location: ~/.config/avvio/config.toml
# Every setting is optional; missing sections use the defaults shown.

[startup]
# Which shortcut codec reads and writes .lnk files.
#   "native"     - shell COM API, no external processes (default)
#   "powershell" - delegate to powershell.exe + WScript.Shell
codec = "native"

# Timeout in seconds for the powershell codec. A hung child process is
# killed once this expires. Clamped to 1..=300.
tool_timeout_secs = 10

# Startup directory overrides. Normally left unset: the per-user folder
# is resolved from %APPDATA% and the all-users folder from %ProgramData%.
# user_dir = 'C:\Users\you\AppData\Roaming\Microsoft\Windows\Start Menu\Programs\Startup'
# system_dir = 'C:\ProgramData\Microsoft\Windows\Start Menu\Programs\Startup'

[log]
# File logging for diagnostics, written to ~/.config/avvio/logs/avvio.log.
enabled = false

# Minimum level: "debug", "info", "warn", or "error".
level = "info"

# Rotate the log file once it exceeds this many megabytes (one backup kept).
max_file_mb = 5
"#
    .to_string()
}
