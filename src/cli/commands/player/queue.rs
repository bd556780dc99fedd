use std::sync::Arc;

use async_trait::async_trait;

use super::lookup_track;
use crate::{
    cli::{
        Command, CommandResult,
        commands::first_arg,
        formatting::{format_description, format_duration, format_mini_player},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::player::PlayerAction,
};

fn track_id_arg(description: &str) -> CommandArg {
    CommandArg {
        name: "track-id".to_string(),
        description: description.to_string(),
        required: true,
        value_type: ArgType::String,
    }
}

/// Lists the upcoming tracks.
pub struct QueueCommand {
    services: Arc<Services>,
}

impl QueueCommand {
    /// Creates a new QueueCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for QueueCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let state = self.services.player.get();
        if state.queue.is_empty() {
            return Ok(format_description("Queue is empty"));
        }

        let lines: Vec<String> = state
            .queue
            .iter()
            .enumerate()
            .map(|(index, track)| {
                format!(
                    "{:>2}. {} - {} {} {}",
                    index + 1,
                    track.title,
                    track.artist,
                    format_duration(track.duration_secs),
                    format_description(&format!("[{}]", track.id)),
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "queue".to_string(),
            description: "List the upcoming tracks".to_string(),
            category: "player".to_string(),
            args: vec![],
            examples: vec!["encore player queue".to_string()],
        }
    }
}

/// Appends a catalog track to the queue.
pub struct EnqueueCommand {
    services: Arc<Services>,
}

impl EnqueueCommand {
    /// Creates a new EnqueueCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for EnqueueCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let track = lookup_track(&self.services, first_arg(args, "track-id", "enqueue")?)?;
        let title = track.title.clone();

        self.services.player.dispatch(PlayerAction::Enqueue(track));

        Ok(format!(
            "Queued '{title}' ({} up next)",
            self.services.player.get().queue.len()
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "enqueue".to_string(),
            description: "Add a track to the end of the queue".to_string(),
            category: "player".to_string(),
            args: vec![track_id_arg("Catalog id of the track to queue")],
            examples: vec!["encore player enqueue 3".to_string()],
        }
    }
}

/// Makes a catalog track the current track.
///
/// The playback status is left as it was, so a playing player keeps
/// playing the new track from the start.
pub struct LoadCommand {
    services: Arc<Services>,
}

impl LoadCommand {
    /// Creates a new LoadCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for LoadCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let track = lookup_track(&self.services, first_arg(args, "track-id", "load")?)?;

        self.services
            .player
            .dispatch(PlayerAction::SetCurrentTrack(track));

        Ok(format_mini_player(&self.services.player.get()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "load".to_string(),
            description: "Load a track as the current track".to_string(),
            category: "player".to_string(),
            args: vec![track_id_arg("Catalog id of the track to load")],
            examples: vec!["encore player load 2".to_string()],
        }
    }
}

/// Replaces the queue wholesale.
pub struct SetQueueCommand {
    services: Arc<Services>,
}

impl SetQueueCommand {
    /// Creates a new SetQueueCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for SetQueueCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let tracks = args
            .first()
            .map(|ids| {
                ids.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| lookup_track(&self.services, id))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        let count = tracks.len();
        self.services.player.dispatch(PlayerAction::SetQueue(tracks));

        Ok(format!("Queue replaced with {count} track(s)"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "set-queue".to_string(),
            description: "Replace the queue with the given tracks".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: "track-ids".to_string(),
                description: "Comma-separated catalog ids. Clears the queue if omitted"
                    .to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "encore player set-queue 2,3,4".to_string(),
                "encore player set-queue".to_string(),
            ],
        }
    }
}
