use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::player::{PlayerAction, RepeatMode},
};

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Flips shuffle.
pub struct ShuffleCommand {
    services: Arc<Services>,
}

impl ShuffleCommand {
    /// Creates a new ShuffleCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for ShuffleCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services.player.dispatch(PlayerAction::ToggleShuffle);
        Ok(format!(
            "Shuffle: {}",
            on_off(self.services.player.get().shuffled)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "shuffle".to_string(),
            description: "Toggle shuffle".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["encore player shuffle".to_string()],
        }
    }
}

/// Shows or sets the repeat mode.
pub struct RepeatCommand {
    services: Arc<Services>,
}

impl RepeatCommand {
    /// Creates a new RepeatCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for RepeatCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let Some(mode) = args.first() else {
            return Ok(format!(
                "Repeat: {}",
                self.services.player.get().repeat_mode
            ));
        };

        let mode = mode
            .parse::<RepeatMode>()
            .map_err(|reason| CliError::invalid("mode", reason))?;
        self.services
            .player
            .dispatch(PlayerAction::SetRepeatMode(mode));

        Ok(format!("Repeat: {mode}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "repeat".to_string(),
            description: "Show or set the repeat mode".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "mode".to_string(),
                description: "off, track or queue".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "encore player repeat".to_string(),
                "encore player repeat queue".to_string(),
                "encore player repeat off".to_string(),
            ],
        }
    }
}

/// Switches between the mini player and the full-screen player.
pub struct MinimizeCommand {
    services: Arc<Services>,
}

impl MinimizeCommand {
    /// Creates a new MinimizeCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for MinimizeCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services.player.dispatch(PlayerAction::ToggleMinimized);
        let view = if self.services.player.get().is_minimized {
            "mini player"
        } else {
            "full player"
        };
        Ok(format!("Showing {view}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "minimize".to_string(),
            description: "Toggle between the mini and full-screen player".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["encore player minimize".to_string()],
        }
    }
}
