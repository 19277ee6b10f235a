use std::path::PathBuf;
use std::process;

use crate::cli::types::Commands;
use crate::config;
use crate::migrate;

pub fn handle_migrate_command(
    command: &Commands,
    source_dir: Option<&PathBuf>,
    destination_dir: Option<&PathBuf>,
) {
    if let Commands::Migrate {
        config: config_file,
        verbose,
        report,
    } = command
    {
        let cfg = match config::load_config(config_file.as_deref()) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        };

        // CLI flags take precedence over the configured roots
        let source_dir = source_dir.cloned().unwrap_or_else(|| cfg.template_root.clone());
        let destination_dir = destination_dir
            .cloned()
            .unwrap_or_else(|| cfg.project_root.clone());

        if *verbose {
            log::info!("Source directory: {}", source_dir.display());
            log::info!("Destination directory: {}", destination_dir.display());
        }

        if !source_dir.exists() {
            log::error!("Source directory does not exist: {}", source_dir.display());
            process::exit(1);
        }

        let options = migrate::MigrationOptions {
            source_dir,
            dest_dir: destination_dir.clone(),
            verbose: *verbose,
        };

        let summary = match migrate::run_migration(&cfg, &options) {
            Ok(summary) => summary,
            Err(e) => {
                log::error!("{}", e);
                process::exit(1);
            }
        };

        for warning in &summary.warnings {
            log::warn!("{}", warning);
        }

        if *report {
            match migrate::generate_migration_report(&summary, &destination_dir) {
                Ok(report_path) => {
                    log::info!("Migration report generated at: {}", report_path.display())
                }
                Err(e) => {
                    log::error!("{}", e);
                    process::exit(1);
                }
            }
        }

        println!(
            "Migrated {} pages into {}",
            summary.pages_migrated(),
            cfg.pages_dir
        );
    }
}
