//! Player commands: transport, seeking, modes and queue management.
mod queue;
mod seek;
mod skip;
mod status;
mod toggles;
mod transport;
mod volume;

use std::sync::Arc;

pub use queue::{EnqueueCommand, LoadCommand, QueueCommand, SetQueueCommand};
pub use seek::{SeekCommand, parse_position};
pub use skip::SkipCommand;
pub use status::{StateCommand, StatusCommand};
pub use toggles::{MinimizeCommand, RepeatCommand, ShuffleCommand};
pub use transport::{Transport, TransportCommand};
pub use volume::VolumeCommand;

use crate::{
    cli::{CliError, CommandRegistry},
    service_manager::Services,
    services::player::{SkipDirection, Track, TrackId},
};

const CATEGORY_NAME: &str = "player";

/// Registers all player commands with the command registry.
pub fn register_commands(registry: &mut CommandRegistry, services: &Arc<Services>) {
    registry.register_command(CATEGORY_NAME, Box::new(StatusCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(StateCommand::new(services.clone())));

    for transport in [
        Transport::Play,
        Transport::Pause,
        Transport::Toggle,
        Transport::Stop,
    ] {
        registry.register_command(
            CATEGORY_NAME,
            Box::new(TransportCommand::new(services.clone(), transport)),
        );
    }

    registry.register_command(CATEGORY_NAME, Box::new(SeekCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(VolumeCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(ShuffleCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(RepeatCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(MinimizeCommand::new(services.clone())));

    registry.register_command(
        CATEGORY_NAME,
        Box::new(SkipCommand::new(services.clone(), SkipDirection::Next)),
    );
    registry.register_command(
        CATEGORY_NAME,
        Box::new(SkipCommand::new(services.clone(), SkipDirection::Previous)),
    );

    registry.register_command(CATEGORY_NAME, Box::new(QueueCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(EnqueueCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(LoadCommand::new(services.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(SetQueueCommand::new(services.clone())));
}

/// Looks a track up in the catalog by its id argument.
fn lookup_track(services: &Services, id: &str) -> Result<Track, CliError> {
    services
        .catalog
        .track(&TrackId::new(id))
        .cloned()
        .map_err(|e| CliError::invalid("track-id", e.to_string()))
}
