use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "matizes-migrate")]
#[command(about = "Migrates the Bagery HTML template pack into Astro pages", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Legacy template directory (defaults to the configured template root)
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Astro project root (defaults to the configured project root)
    #[arg(short, long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Migrate the legacy pages into Astro page templates
    #[command(alias = "m")]
    Migrate {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Log each migrated file
        #[arg(short, long, default_value_t = false)]
        verbose: bool,

        /// Write a MIGRATION.md change report into the destination
        #[arg(long, default_value_t = false)]
        report: bool,
    },

    /// Print the filename -> route table for the configured pages
    Routes {
        /// Custom configuration file
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}
