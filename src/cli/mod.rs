//! Command-line front end.
//!
//! Commands are organized by category and automatically generate help text
//! from metadata. Each command holds the shared [`Services`] it acts on.
//!
//! [`Services`]: crate::service_manager::Services

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use commands::player::parse_position;
pub use registry::CommandRegistry;
pub use service::{CliService, split_command_line};
pub use types::{ArgType, CliError, Command, CommandArg, CommandMetadata, CommandResult};
