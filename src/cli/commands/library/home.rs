use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::CommandMetadata,
    },
    service_manager::Services,
    services::catalog::PlaylistCard,
};

/// Renders the home feed.
pub struct HomeCommand {
    services: Arc<Services>,
}

impl HomeCommand {
    /// Creates a new HomeCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

fn playlist_lines(cards: &[PlaylistCard]) -> impl Iterator<Item = String> + '_ {
    cards.iter().map(|card| {
        format!(
            "  {} {}",
            card.title,
            format_description(&format!("- {} [playlist:{}]", card.description, card.id))
        )
    })
}

#[async_trait]
impl Command for HomeCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let feed = self.services.catalog.home_feed();
        let mut lines = vec![format_subheader("Recently played")];

        lines.extend(
            feed.recently_played
                .iter()
                .map(|item| format!("  {}", item.title)),
        );

        lines.push(String::new());
        lines.push(format_subheader("Featured playlists"));
        lines.extend(playlist_lines(&feed.featured));

        lines.push(String::new());
        lines.push(format_subheader("Made for you"));
        lines.extend(playlist_lines(&feed.made_for_you));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "home".to_string(),
            description: "Show the home feed".to_string(),
            category: "library".to_string(),
            args: vec![],
            examples: vec!["encore library home".to_string()],
        }
    }
}
