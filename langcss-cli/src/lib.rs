//! CLI library for testing purposes

pub mod config;
pub mod generate;

pub use config::{CliOverrides, FileConfig, Settings, resolve_settings};
pub use generate::run_generate_command;
