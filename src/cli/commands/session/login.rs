use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, types::CommandMetadata},
    service_manager::Services,
};

/// Signs in. No credentials are checked.
pub struct LoginCommand {
    services: Arc<Services>,
}

impl LoginCommand {
    /// Creates a new LoginCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for LoginCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services.session.login();
        self.services.sync_navigation().await;
        Ok("Signed in".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "login".to_string(),
            description: "Sign in and open the home tab".to_string(),
            category: "session".to_string(),
            args: vec![],
            examples: vec!["encore session login".to_string()],
        }
    }
}

/// Signs out and returns to the login screen.
pub struct LogoutCommand {
    services: Arc<Services>,
}

impl LogoutCommand {
    /// Creates a new LogoutCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for LogoutCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        self.services.session.logout();
        self.services.sync_navigation().await;
        Ok("Signed out".to_string())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "logout".to_string(),
            description: "Sign out and return to the login screen".to_string(),
            category: "session".to_string(),
            args: vec![],
            examples: vec!["encore session logout".to_string()],
        }
    }
}
