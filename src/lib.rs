use core::fmt;

use cli::CliParseError;
use colored::Colorize as _;

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod install;
pub mod interact;
pub mod selector;
pub mod types;
pub mod utils;

/// Represents errors that can be thrown by this App
#[derive(Debug)]
pub enum RawgentError {
    CliParseError(CliParseError),
}

impl fmt::Display for RawgentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let error = "error".bright_red().bold();
        match self {
            RawgentError::CliParseError(cli_parse_error) => {
                write!(f, "{error}: {cli_parse_error}",)
            },
        }
    }
}

impl std::error::Error for RawgentError {}

pub const CONFIG_ROOT: &str = ".rawgent";
pub const CONFIG_FILE: &str = "config.toml";
pub const APP_NAME: &str = "rawgent";
