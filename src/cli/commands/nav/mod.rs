//! Navigation commands: where am I, go somewhere, go back.
mod back;
mod current;
mod go;

use std::sync::Arc;

pub use back::BackCommand;
pub use current::CurrentCommand;
pub use go::GoCommand;

use crate::{cli::CommandRegistry, navigation::Route, service_manager::Services};

const CATEGORY_NAME: &str = "nav";

/// Registers all navigation commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, services: &Arc<Services>) {
    registry.register_command(CATEGORY_NAME, Box::new(CurrentCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(GoCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(BackCommand::new(services.clone())));
}

fn describe(route: Option<&Route>) -> String {
    route.map_or_else(|| "splash (checking session)".to_string(), Route::to_string)
}
