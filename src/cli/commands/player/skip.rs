use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_mini_player, types::CommandMetadata},
    service_manager::Services,
    services::player::{SkipDirection, SkipOutcome, skip},
};

/// Skips to the next or previous track through the queue resolver.
pub struct SkipCommand {
    services: Arc<Services>,
    direction: SkipDirection,
}

impl SkipCommand {
    /// Creates a new SkipCommand for one direction
    pub fn new(services: Arc<Services>, direction: SkipDirection) -> Self {
        Self {
            services,
            direction,
        }
    }
}

#[async_trait]
impl Command for SkipCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let mut resolver = self.services.resolver.lock().await;

        match skip(&self.services.player, &mut *resolver, self.direction) {
            SkipOutcome::Loaded(_) => Ok(format_mini_player(&self.services.player.get())),
            SkipOutcome::Ended => Ok("End of queue, playback stopped".to_string()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        let (name, description) = match self.direction {
            SkipDirection::Next => ("next", "Skip to the next track"),
            SkipDirection::Previous => (
                "previous",
                "Go to the previous track, or restart the current one",
            ),
        };

        CommandMetadata {
            name: name.to_string(),
            description: description.to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec![format!("encore player {name}")],
        }
    }
}
