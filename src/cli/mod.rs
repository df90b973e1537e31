//! CLI layer: argument parsing and dispatch to the runner

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::Cli;
pub use commands::execute_command;
pub use error::{CliError, CliResult};
