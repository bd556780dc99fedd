use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        commands::first_arg,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    navigation::Route,
    service_manager::Services,
};

/// Opens a screen by route.
pub struct GoCommand {
    services: Arc<Services>,
}

impl GoCommand {
    /// Creates a new GoCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for GoCommand {
    /// # Errors
    ///
    /// Returns CliError if the route does not parse or is not reachable
    /// from the current session
    async fn execute(&self, args: &[String]) -> CommandResult {
        let route = first_arg(args, "route", "go")?
            .parse::<Route>()
            .map_err(|e| CliError::invalid("route", e.to_string()))?;

        let shown = self
            .services
            .navigator
            .lock()
            .await
            .navigate(route)
            .map_err(|e| CliError::service("Navigation", e))?;

        Ok(format!("Now showing {shown}"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "go".to_string(),
            description: "Navigate to a screen".to_string(),
            category: "nav".to_string(),
            args: vec![CommandArg {
                name: "route".to_string(),
                description: "login, signup, forgot-password, home, search, library, player[:track-id], playlist:<id>, artist:<id> or album:<id>".to_string(),
                required: true,
                value_type: ArgType::Route,
            }],
            examples: vec![
                "encore nav go signup".to_string(),
                "encore nav go library".to_string(),
                "encore nav go playlist:4".to_string(),
                "encore nav go player:1".to_string(),
            ],
        }
    }
}
