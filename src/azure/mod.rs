//! Azure CLI interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`commands`] - The `az` command lines the collector issues
//! - [`replay`] - Canned responses standing in for the CLI

mod cli;
pub mod commands;
mod replay;

// Re-export public types and functions
pub use cli::{parse_json, run, AzCli, CliError, CommandRunner};
pub use replay::ReplayRunner;
