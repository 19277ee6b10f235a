use std::process;

use crate::cli::types::Commands;
use crate::config;
use crate::migrate::rewrite::file_to_route;

pub fn handle_routes_command(command: &Commands) {
    if let Commands::Routes {
        config: config_file,
    } = command
    {
        let cfg = match config::load_config(config_file.as_deref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        };

        for page in &cfg.pages {
            println!("{} -> {}", page, file_to_route(page, &cfg.home_page));
        }
    }
}
