use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_duration},
        types::CommandMetadata,
    },
    service_manager::Services,
};

/// Lists the catalog tracks with the ids the player commands take.
pub struct TracksCommand {
    services: Arc<Services>,
}

impl TracksCommand {
    /// Creates a new TracksCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for TracksCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let lines: Vec<String> = self
            .services
            .catalog
            .tracks()
            .iter()
            .map(|track| {
                format!(
                    "{:>3}  {} - {} {}",
                    track.id,
                    track.title,
                    track.artist,
                    format_description(&format_duration(track.duration_secs))
                )
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "tracks".to_string(),
            description: "List playable tracks and their ids".to_string(),
            category: "library".to_string(),
            args: vec![],
            examples: vec!["encore library tracks".to_string()],
        }
    }
}
