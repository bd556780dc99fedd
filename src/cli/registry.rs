use std::{collections::HashMap, sync::Arc};

use tracing::debug;

use super::{
    CliError, Command,
    commands::{config, library, nav, player, session},
    types::CommandMetadata,
};
use crate::service_manager::Services;

/// Registry for CLI commands organized by category.
///
/// ```text
/// registry
/// ├── player
/// │   ├── play
/// │   ├── seek
/// │   └── ...
/// ├── library
/// ├── nav
/// ├── session
/// └── config
/// ```
pub struct CommandRegistry {
    /// category name -> (command name -> command implementation)
    categories: HashMap<String, HashMap<String, Box<dyn Command>>>,
    services: Arc<Services>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new(services: Arc<Services>) -> Self {
        Self {
            categories: HashMap::new(),
            services,
        }
    }

    /// Registers a command in the specified category.
    ///
    /// A command with the same name in the same category is replaced.
    pub fn register_command(&mut self, category: &str, command: Box<dyn Command>) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(command.metadata().name, command);
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `CliError::CommandNotFound` if the category or command does not
    /// exist, `CliError::InvalidArguments` if the argument count does not fit
    /// the command's metadata, and whatever the command itself returns.
    pub async fn execute(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        let found_category = self.categories.get(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let found_command = found_category.get(command_name).ok_or_else(|| {
            CliError::CommandNotFound(format!(
                "Failed to find command '{command_name}' in '{category}'"
            ))
        })?;

        Self::validate_args(&found_command.metadata(), args)?;

        debug!(category, command = command_name, ?args, "Executing command");
        found_command.execute(args).await
    }

    /// Lists all registered commands organized by category, sorted.
    pub fn list_commands(&self) -> Vec<(String, Vec<String>)> {
        let mut categories: Vec<(String, Vec<String>)> = self
            .categories
            .iter()
            .map(|(category, commands)| {
                let mut command_list: Vec<String> = commands.keys().cloned().collect();
                command_list.sort();

                (category.clone(), command_list)
            })
            .collect();

        categories.sort();

        categories
    }

    /// Metadata for every command in `category`, sorted by name.
    pub fn category_metadata(&self, category: &str) -> Option<Vec<CommandMetadata>> {
        self.categories.get(category).map(|commands| {
            let mut metadata: Vec<CommandMetadata> =
                commands.values().map(|command| command.metadata()).collect();
            metadata.sort_by(|a, b| a.name.cmp(&b.name));
            metadata
        })
    }

    fn validate_args(metadata: &CommandMetadata, args: &[String]) -> Result<(), CliError> {
        let required_count = metadata.args.iter().filter(|arg| arg.required).count();
        let total_count = metadata.args.len();

        if args.len() < required_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at least {} arguments, got {}",
                required_count,
                args.len(),
            )));
        }

        if args.len() > total_count {
            return Err(CliError::InvalidArguments(format!(
                "Expected at most {} arguments, got {}",
                total_count,
                args.len(),
            )));
        }

        Ok(())
    }

    /// Registers every built-in command.
    pub fn register_all_commands(&mut self) {
        let services = self.services.clone();

        player::register_commands(self, &services);
        library::register_commands(self, &services);
        nav::register_commands(self, &services);
        session::register_commands(self, &services);
        config::register_commands(self, &services);
    }
}
