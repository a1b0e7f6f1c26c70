use std::path::Path;

use avvio_core::config::Config;

/// Reports whether `target` is already registered to run at startup.
///
/// Exits 0 when found, 1 when not, so scripts can use the result
/// without parsing output. Path comparison is case-insensitive.
pub fn execute(config: &Config, target: &str) {
    let service = match crate::service::build(config) {
        Ok(service) => service,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if service.contains_target(Path::new(target)) {
        println!("{target} runs at startup.");
    } else {
        println!("{target} does not run at startup.");
        std::process::exit(1);
    }
}
