//! Command-line layer: clap definitions and command handlers.

pub mod commands;
pub mod parser;
