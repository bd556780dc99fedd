//! Catalog browsing commands for the home, search and library screens.
mod home;
mod list;
mod search;
mod tracks;

use std::sync::Arc;

pub use home::HomeCommand;
pub use list::ListCommand;
pub use search::SearchCommand;
pub use tracks::TracksCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

const CATEGORY_NAME: &str = "library";

/// Registers all catalog commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, services: &Arc<Services>) {
    registry.register_command(CATEGORY_NAME, Box::new(HomeCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SearchCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ListCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(TracksCommand::new(services.clone())));
}
