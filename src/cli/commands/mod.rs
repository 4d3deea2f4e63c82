pub mod config;
pub mod import;
pub mod list;
pub mod log;
pub mod shell;
