use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::catalog::SearchView,
};

/// Searches the catalog, or shows the browse categories for an empty query.
pub struct SearchCommand {
    services: Arc<Services>,
}

impl SearchCommand {
    /// Creates a new SearchCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let query = args.first().map(|q| q.trim()).unwrap_or_default();

        let lines: Vec<String> = match self.services.catalog.search(query) {
            SearchView::Browse(categories) => std::iter::once(format_subheader("Browse all"))
                .chain(categories.iter().map(|category| format!("  {}", category.title)))
                .collect(),
            SearchView::Results(results) => {
                std::iter::once(format_subheader(&format!("Results for '{query}'")))
                    .chain(results.iter().map(|result| {
                        format!(
                            "  {} {}",
                            result.title,
                            format_description(&format!("- {} ({})", result.subtitle, result.kind))
                        )
                    }))
                    .collect()
            }
        };

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "search".to_string(),
            description: "Search songs, artists, albums and playlists".to_string(),
            category: "library".to_string(),
            args: vec![CommandArg {
                name: "query".to_string(),
                description: "Search text. Shows browse categories if omitted".to_string(),
                required: false,
                value_type: ArgType::String,
            }],
            examples: vec![
                "encore library search".to_string(),
                "encore library search \"summer vibes\"".to_string(),
            ],
        }
    }
}
