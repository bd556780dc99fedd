use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Shows the session state.
pub struct StatusCommand {
    services: Arc<Services>,
}

impl StatusCommand {
    /// Creates a new StatusCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for StatusCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        Ok(format!("Session: {}", self.services.session.state()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "status".to_string(),
            description: "Show whether you are signed in".to_string(),
            category: "session".to_string(),
            args: vec![],
            examples: vec!["encore session status".to_string()],
        }
    }
}
