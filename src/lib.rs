//! tutorbill library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod mail;
pub mod models;
pub mod render;
pub mod sheet;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Invoice { .. } => cli::commands::invoice::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Clients { .. } => cli::commands::clients::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load();

    // Command-line overrides for the workbook and output locations
    if let Some(custom_sheet) = &cli.sheet {
        cfg.workbook = custom_sheet.clone();
    }
    if let Some(custom_out) = &cli.out {
        cfg.output_dir = custom_out.clone();
    }

    dispatch(&cli, &cfg)
}
