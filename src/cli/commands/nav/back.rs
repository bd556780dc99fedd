use std::sync::Arc;

use async_trait::async_trait;

use super::describe;
use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Returns to the previous screen.
pub struct BackCommand {
    services: Arc<Services>,
}

impl BackCommand {
    /// Creates a new BackCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for BackCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let mut navigator = self.services.navigator.lock().await;
        let popped = navigator.go_back();
        let current = describe(navigator.current().as_ref());

        if popped {
            Ok(format!("Back to {current}"))
        } else {
            Ok(format!("Already at {current}"))
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "back".to_string(),
            description: "Go back to the previous screen".to_string(),
            category: "nav".to_string(),
            args: vec![],
            examples: vec!["encore nav back".to_string()],
        }
    }
}
