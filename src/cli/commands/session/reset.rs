use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        commands::first_arg,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::session::SessionError,
};

/// Requests password reset instructions from the signed-out screens.
pub struct ResetCommand {
    services: Arc<Services>,
}

impl ResetCommand {
    /// Creates a new ResetCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for ResetCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let email = first_arg(args, "email", "reset")?;

        let sent_to = self
            .services
            .session
            .request_password_reset(email)
            .map_err(|e| match e {
                SessionError::BlankEmail => CliError::invalid("email", e.to_string()),
                SessionError::AlreadySignedIn => CliError::service("session", e),
            })?;

        Ok(format!(
            "Check your email\nPassword reset instructions sent to {sent_to}"
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "reset".to_string(),
            description: "Request password reset instructions while signed out".to_string(),
            category: "session".to_string(),
            args: vec![CommandArg {
                name: "email".to_string(),
                description: "Address to send the instructions to".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec!["encore session reset ada@example.com".to_string()],
        }
    }
}
