//! Session commands standing in for the sign-in screens.
mod login;
mod reset;
mod status;

use std::sync::Arc;

pub use login::{LoginCommand, LogoutCommand};
pub use reset::ResetCommand;
pub use status::StatusCommand;

use crate::{cli::CommandRegistry, service_manager::Services};

const CATEGORY_NAME: &str = "session";

/// Registers all session commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, services: &Arc<Services>) {
    registry.register_command(CATEGORY_NAME, Box::new(LoginCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(LogoutCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ResetCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(services.clone())));
}
