use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::format_mini_player,
        types::CommandMetadata,
    },
    service_manager::Services,
    services::player::PlayerAction,
};

/// Transport control a [`TransportCommand`] performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// Start playback
    Play,
    /// Pause playback
    Pause,
    /// Flip between playing and paused
    Toggle,
    /// Stop and rewind
    Stop,
}

impl Transport {
    fn name(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Toggle => "toggle",
            Self::Stop => "stop",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Play => "Start playback of the current track",
            Self::Pause => "Pause playback",
            Self::Toggle => "Toggle between play and pause",
            Self::Stop => "Stop playback and rewind to the start",
        }
    }

    fn action(self) -> PlayerAction {
        match self {
            Self::Play => PlayerAction::Play,
            Self::Pause => PlayerAction::Pause,
            Self::Toggle => PlayerAction::TogglePlayPause,
            Self::Stop => PlayerAction::Stop,
        }
    }
}

/// Play, pause, toggle or stop the player.
pub struct TransportCommand {
    services: Arc<Services>,
    transport: Transport,
}

impl TransportCommand {
    /// Creates a new TransportCommand for one control
    pub fn new(services: Arc<Services>, transport: Transport) -> Self {
        Self {
            services,
            transport,
        }
    }
}

#[async_trait]
impl Command for TransportCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services.player.dispatch(self.transport.action());
        Ok(format_mini_player(&self.services.player.get()))
    }

    fn metadata(&self) -> CommandMetadata {
        let name = self.transport.name();
        CommandMetadata {
            name: name.to_string(),
            description: self.transport.description().to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec![format!("encore player {name}")],
        }
    }
}
