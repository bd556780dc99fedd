use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Prints the effective configuration as TOML.
pub struct ShowCommand {
    services: Arc<Services>,
}

impl ShowCommand {
    /// Creates a new ShowCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services
            .config
            .to_toml()
            .map_err(|e| CliError::service("Config", e))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "show".to_string(),
            description: "Print the effective configuration".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["encore config show".to_string()],
        }
    }
}
