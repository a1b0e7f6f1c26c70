use std::path::Path;

use avvio_core::config::Config;

/// Adds a program to the user Startup folder.
///
/// Refuses when the target is already registered under another entry,
/// or when an entry with the same name exists; `--force` overrides both.
pub fn execute(config: &Config, name: &str, target: &str, arguments: &str, force: bool) {
    let service = match crate::service::build(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let target = Path::new(target);

    if !force && service.contains_target(target) {
        eprintln!("Error: {} is already registered to run at startup.", target.display());
        eprintln!("Use --force to add it anyway.");
        std::process::exit(1);
    }

    match service.add_entry(name, target, arguments, force) {
        Ok(entry) => {
            println!("Added \"{}\" -> {}", entry.name, entry.target_path.display());
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
