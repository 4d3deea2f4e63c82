//! rPatients library root.
//! Exposes the CLI parser, the high-level run() function and the in-memory
//! patient/daily-visit session the shell operates on.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Shell) => cli::commands::shell::handle(cfg),
        Some(cmd @ Commands::Import { .. }) => cli::commands::import::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // settings live for this process only
    let cfg = Config::with_overrides(cli.keep_existing, cli.import_dir.as_deref());

    dispatch(&cli, &cfg)
}
