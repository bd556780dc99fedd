//! Configuration inspection commands.
mod path;
mod schema;
mod show;

use std::sync::Arc;

pub use path::PathCommand;
pub use schema::SchemaCommand;
pub use show::ShowCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

const CATEGORY_NAME: &str = "config";

/// Registers all configuration-related commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, services: &Arc<Services>) {
    registry.register_command(CATEGORY_NAME, Box::new(ShowCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand::new()));
    registry.register_command(CATEGORY_NAME, Box::new(PathCommand::new()));
}
