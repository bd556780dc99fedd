use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    config::ConfigPaths,
};

/// Prints where the configuration file lives.
pub struct PathCommand {}

impl PathCommand {
    /// Creates a new PathCommand
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command for PathCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(ConfigPaths::main_config()?.display().to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "path".to_string(),
            description: "Print the configuration file location".to_string(),
            category: "config".to_string(),
            args: vec![],
            examples: vec!["encore config path".to_string()],
        }
    }
}
