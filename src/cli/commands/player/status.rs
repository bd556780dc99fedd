use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_now_playing,
        types::CommandMetadata,
    },
    service_manager::Services,
};

/// Shows the full-screen player view of the current state.
pub struct StatusCommand {
    services: Arc<Services>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(format_now_playing(&self.services.player.get()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show what is playing and the player settings".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["encore player status".to_string()],
        }
    }
}

/// Prints the raw player state as JSON.
pub struct StateCommand {
    services: Arc<Services>,
}

impl StateCommand {
    /// Creates a new StateCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for StateCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        serde_json::to_string_pretty(&self.services.player.get())
            .map_err(|e| CliError::service("Player", e))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "state".to_string(),
            description: "Print the player state snapshot as JSON".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["encore player state".to_string()],
        }
    }
}
