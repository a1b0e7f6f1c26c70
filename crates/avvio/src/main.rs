mod commands;
mod service;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "avvio",
    version,
    about = "Manage Windows startup entries via the Startup folders"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List startup entries from both Startup folders
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a program to the user Startup folder
    Add {
        /// Display name for the entry
        name: String,
        /// Path of the program to launch at logon
        target: String,
        /// Command-line arguments passed to the program
        #[arg(default_value = "")]
        arguments: String,
        /// Replace an existing entry with the same name or target
        #[arg(long)]
        force: bool,
    },
    /// Remove an entry by name
    Remove {
        /// Name of the entry, as shown by `list`
        name: String,
    },
    /// Check whether a program already runs at startup (exit 1 if not)
    Check {
        /// Path of the program to look for
        target: String,
    },
    /// Diagnose configuration and environment problems
    Doctor,
}

fn main() {
    let cli = Cli::parse();
    let config = avvio_core::config::load();
    avvio_core::log::init(&config.log);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List { json } => commands::list::execute(&config, json),
        Commands::Add {
            name,
            target,
            arguments,
            force,
        } => commands::add::execute(&config, &name, &target, &arguments, force),
        Commands::Remove { name } => commands::remove::execute(&config, &name),
        Commands::Check { target } => commands::check::execute(&config, &target),
        Commands::Doctor => commands::doctor::execute(&config),
    }
}
