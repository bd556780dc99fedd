use std::sync::Arc;

use async_trait::async_trait;

use super::describe;
use crate::{
    cli::{Command, CommandResult, formatting::format_description, types::CommandMetadata},
    service_manager::Services,
};

/// Shows the visible screen.
pub struct CurrentCommand {
    services: Arc<Services>,
}

impl CurrentCommand {
    /// Creates a new CurrentCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for CurrentCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let navigator = self.services.navigator.lock().await;

        Ok(format!(
            "{} {}",
            describe(navigator.current().as_ref()),
            format_description(&format!(
                "(session: {}, depth: {})",
                navigator.session(),
                navigator.depth()
            ))
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "current".to_string(),
            description: "Show the current screen".to_string(),
            category: "nav".to_string(),
            args: vec![],
            examples: vec!["encore nav current".to_string()],
        }
    }
}
