// Module declarations
pub mod cli;
pub mod config;
pub mod migrate;
