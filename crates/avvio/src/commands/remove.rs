use avvio_core::config::Config;
use avvio_core::{Scope, StartupEntry};

/// Removes a startup entry by its display name.
///
/// When the name exists in both scopes the user-scope entry wins:
/// that is the one this tool created and the one deletable without
/// elevation. Removing a system-scope entry is attempted as asked and
/// fails with a permission error for ordinary users.
pub fn execute(config: &Config, name: &str) {
    let service = match crate::service::build(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let entries = service.list_entries();
    let Some(entry) = pick_entry(&entries, name) else {
        eprintln!("Error: no startup entry named \"{name}\".");
        std::process::exit(1);
    };

    if entry.scope == Scope::System {
        println!("\"{name}\" lives in the all-users Startup folder; removal may require elevation.");
    }

    match service.remove_entry(entry) {
        Ok(()) => println!("Removed \"{name}\"."),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Finds the entry to delete, preferring user scope over system scope.
fn pick_entry<'a>(entries: &'a [StartupEntry], name: &str) -> Option<&'a StartupEntry> {
    entries
        .iter()
        .find(|e| e.name == name && e.scope == Scope::User)
        .or_else(|| entries.iter().find(|e| e.name == name))
}
