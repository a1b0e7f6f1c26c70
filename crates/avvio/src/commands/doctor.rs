use avvio_core::config::{self, CodecKind, Config};

/// ANSI escape helpers for doctor output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";
const FIXED: &str = "\x1b[36m[fixed]\x1b[0m";

pub fn execute(config: &Config) {
    println!("avvio doctor");
    println!();
    check_config_dir();
    check_config_file();
    check_startup_dirs(config);
    check_codec(config);
    println!();
}

fn check_config_dir() {
    match config::config_dir() {
        Some(dir) if dir.is_dir() => {
            println!("  {OK} Config directory exists ({})", dir.display());
        }
        Some(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                println!("  {FIXED} Created config directory ({})", dir.display());
            }
            Err(e) => {
                println!("  {FAIL} Config directory missing and could not create it: {e}");
            }
        },
        None => {
            println!("  {FAIL} Could not determine home directory");
        }
    }
}

fn check_config_file() {
    match config::config_path() {
        Some(path) if path.is_file() => match config::try_load() {
            Ok(_) => println!("  {OK} config.toml parses"),
            Err(e) => println!("  {FAIL} config.toml is invalid: {e}"),
        },
        Some(_) => {
            println!("  {WARN} No config.toml (defaults in effect; run `avvio init` to create it)");
        }
        None => {
            println!("  {FAIL} Could not determine config path");
        }
    }
}

fn check_startup_dirs(config: &Config) {
    let service = match crate::service::build(config) {
        Ok(service) => service,
        Err(e) => {
            println!("  {FAIL} Startup folders unavailable: {e}");
            return;
        }
    };

    // The user folder is created lazily on the first add, so a missing
    // one is normal on a fresh profile.
    if service.user_dir().is_dir() {
        println!("  {OK} User Startup folder exists ({})", service.user_dir().display());
    } else {
        println!(
            "  {WARN} User Startup folder does not exist yet ({})",
            service.user_dir().display()
        );
    }

    if service.system_dir().is_dir() {
        println!(
            "  {OK} All-users Startup folder exists ({})",
            service.system_dir().display()
        );
    } else {
        println!(
            "  {WARN} All-users Startup folder not found ({})",
            service.system_dir().display()
        );
    }
}

fn check_codec(config: &Config) {
    match config.startup.codec {
        CodecKind::Native => {
            if cfg!(windows) {
                println!("  {OK} Native shortcut codec selected (shell COM)");
            } else {
                println!("  {FAIL} Native codec requires Windows");
            }
        }
        CodecKind::Powershell => check_powershell(config),
    }
}

fn check_powershell(config: &Config) {
    let probe = std::process::Command::new("powershell.exe")
        .args(["-NoProfile", "-NonInteractive", "-Command", "exit 0"])
        .output();

    match probe {
        Ok(out) if out.status.success() => {
            println!(
                "  {OK} powershell.exe responds (timeout {}s)",
                config.startup.tool_timeout_secs
            );
        }
        Ok(out) => println!("  {FAIL} powershell.exe exited with {}", out.status),
        Err(e) => println!("  {FAIL} powershell.exe could not be started: {e}"),
    }
}
