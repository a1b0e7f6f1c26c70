use avvio_core::config::Config;
use avvio_core::entry::entries_to_json;

/// Prints every startup entry from both Startup folders.
pub fn execute(config: &Config, json: bool) {
    let service = match crate::service::build(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let entries = service.list_entries();

    if json {
        println!("{}", entries_to_json(&entries));
        return;
    }

    if entries.is_empty() {
        println!("No startup entries found.");
        return;
    }

    println!("{} startup entries:", entries.len());
    for entry in &entries {
        println!();
        println!("  {} [{}]", entry.name, entry.scope.as_str());
        if entry.arguments.is_empty() {
            println!("      {}", entry.target_path.display());
        } else {
            println!("      {} {}", entry.target_path.display(), entry.arguments);
        }
    }
}
