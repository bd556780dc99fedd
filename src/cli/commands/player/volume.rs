use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::player::PlayerAction,
};

/// Shows or sets the player volume.
///
/// The value is passed through as given; the player keeps whatever it is
/// told and the store logs a warning for values outside `0.0..=1.0`.
pub struct VolumeCommand {
    services: Arc<Services>,
}

impl VolumeCommand {
    /// Creates a new VolumeCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for VolumeCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let Some(level) = args.first() else {
            return Ok(format!("Volume: {:.2}", self.services.player.get().volume));
        };

        let volume = level
            .parse::<f64>()
            .ok()
            .filter(|volume| volume.is_finite())
            .ok_or_else(|| CliError::invalid("level", "Volume must be a number (e.g. 0.5)"))?;

        self.services.player.dispatch(PlayerAction::SetVolume(volume));

        Ok(format!("Volume set to {volume:.2}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "volume".to_string(),
            description: "Show or set the volume (0.0 to 1.0)".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "level".to_string(),
                description: "New volume level. Shows the current volume if omitted".to_string(),
                required: false,
                value_type: ArgType::Number,
            }],
            examples: vec![
                "encore player volume".to_string(),
                "encore player volume 0.5".to_string(),
            ],
        }
    }
}
