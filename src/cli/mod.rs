pub mod commands;
pub mod logging;
pub mod types;

use clap::Parser;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    match &cli.command {
        Some(command @ types::Commands::Migrate { .. }) => {
            commands::handle_migrate_command(command, cli.source.as_ref(), cli.destination.as_ref());
        }
        Some(command @ types::Commands::Routes { .. }) => {
            commands::handle_routes_command(command);
        }
        None => {
            // Default to the migrate command when none is provided
            let default = types::Commands::Migrate {
                config: None,
                verbose: false,
                report: false,
            };
            commands::handle_migrate_command(&default, cli.source.as_ref(), cli.destination.as_ref());
        }
    }
}
