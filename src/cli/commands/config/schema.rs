use async_trait::async_trait;
use schemars::schema_for;

use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::Config,
};

/// Prints the JSON schema of the configuration file.
pub struct SchemaCommand {}

impl SchemaCommand {
    /// Creates a new SchemaCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for SchemaCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        serde_json::to_string_pretty(&schema_for!(Config))
            .map_err(|e| CliError::service("Config", e))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON schema for config.toml".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["encore config schema > encore.schema.json".to_string()],
        }
    }
}
