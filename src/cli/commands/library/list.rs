use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::{format_description, format_subheader},
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::catalog::{LibraryFilter, LibrarySort},
};

const ALL_ITEMS: &str = "all";

/// Lists the library, optionally filtered and sorted.
pub struct ListCommand {
    services: Arc<Services>,
}

impl ListCommand {
    /// Creates a new ListCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }

    fn parse_filter(arg: Option<&String>) -> Result<Option<LibraryFilter>, CliError> {
        match arg.map(String::as_str) {
            None | Some(ALL_ITEMS) => Ok(None),
            Some(filter) => filter
                .parse()
                .map(Some)
                .map_err(|reason| CliError::invalid("filter", reason)),
        }
    }
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let filter = Self::parse_filter(args.first())?;
        let sort = args
            .get(1)
            .map(|sort| sort.parse::<LibrarySort>())
            .transpose()
            .map_err(|reason| CliError::invalid("sort", reason))?
            .unwrap_or_default();

        let items = self.services.catalog.library(filter, sort);
        if items.is_empty() {
            return Ok(format_description("Nothing here yet"));
        }

        let mut lines = vec![format_subheader(&sort.to_string())];
        lines.extend(items.iter().map(|item| {
            format!(
                "  {}{} {}",
                if item.pinned { "* " } else { "  " },
                item.title,
                format_description(&format!("- {} · {}", item.kind, item.count))
            )
        }));

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "list".to_string(),
            description: "List your library".to_string(),
            category: "library".to_string(),
            args: vec![
                CommandArg {
                    name: "filter".to_string(),
                    description: "all, playlists, artists, albums or downloaded".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
                CommandArg {
                    name: "sort".to_string(),
                    description: "recently-added (default) or alphabetical".to_string(),
                    required: false,
                    value_type: ArgType::String,
                },
            ],
            examples: vec![
                "encore library list".to_string(),
                "encore library list playlists".to_string(),
                "encore library list all alphabetical".to_string(),
            ],
        }
    }
}
