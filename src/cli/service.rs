use std::sync::Arc;

use crate::service_manager::Services;

use super::{
    CliError, CommandRegistry,
    formatting::{
        format_category, format_command, format_description, format_header, format_subheader,
        format_usage,
    },
    types::CommandMetadata,
};

const HELP_CATEGORY: &str = "help";

/// High-level service for managing and executing CLI commands.
///
/// Commands are organized by category and can be listed or executed by name.
/// `help` is handled here rather than registered, since it reads the
/// registry itself.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    pub fn new(services: Arc<Services>) -> Self {
        let mut registry = CommandRegistry::new(services);
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// `help [category [command]]` and a bare `<category>` render help text.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the
    /// category, or the command's own error if it fails.
    pub async fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        if category == HELP_CATEGORY {
            return match (command_name, args.first()) {
                ("", _) => Ok(self.render_overview()),
                (category, None) => self.render_category(category),
                (category, Some(command)) => self.render_command(category, command),
            };
        }

        if command_name.is_empty() {
            return self.render_category(category);
        }

        self.registry.execute(category, command_name, args).await
    }

    /// Lists all available commands organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry.list_commands()
    }

    fn render_overview(&self) -> String {
        let mut lines = vec![
            format_header("encore"),
            String::new(),
            format_subheader("Usage:"),
            "  encore <category> <command> [args...]".to_string(),
            "  encore shell".to_string(),
            "  encore help [category [command]]".to_string(),
            String::new(),
            format_subheader("Categories:"),
        ];

        for (category, commands) in self.list_all() {
            lines.push(format!(
                "  {}  {}",
                format_category(&category),
                format_description(&commands.join(", "))
            ));
        }

        lines.join("\n")
    }

    fn render_category(&self, category: &str) -> Result<String, CliError> {
        let commands = self.registry.category_metadata(category).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find category '{category}'"))
        })?;

        let mut lines = vec![format_header(&format!("encore {category}")), String::new()];
        for metadata in &commands {
            lines.push(format!(
                "  {} {}",
                format_command(&format!("{:<12}", metadata.name)),
                format_description(&metadata.description)
            ));
        }

        Ok(lines.join("\n"))
    }

    fn render_command(&self, category: &str, command: &str) -> Result<String, CliError> {
        let metadata = self
            .registry
            .category_metadata(category)
            .and_then(|commands| commands.into_iter().find(|m| m.name == command))
            .ok_or_else(|| {
                CliError::CommandNotFound(format!(
                    "Failed to find command '{command}' in '{category}'"
                ))
            })?;

        Ok(render_metadata(&metadata))
    }
}

fn render_metadata(metadata: &CommandMetadata) -> String {
    let usage_args: Vec<String> = metadata
        .args
        .iter()
        .map(|arg| {
            if arg.required {
                format!("<{}>", arg.name)
            } else {
                format!("[{}]", arg.name)
            }
        })
        .collect();

    let mut lines = vec![
        format_header(&format!("encore {} {}", metadata.category, metadata.name)),
        format_description(&metadata.description),
        String::new(),
        format_subheader("Usage:"),
        format!(
            "  encore {} {} {}",
            metadata.category,
            metadata.name,
            usage_args.join(" ")
        )
        .trim_end()
        .to_string(),
    ];

    if !metadata.args.is_empty() {
        lines.push(String::new());
        lines.push(format_subheader("Arguments:"));
        for arg in &metadata.args {
            lines.push(format!(
                "  {} ({}) {}",
                format_command(&arg.name),
                arg.value_type.hint(),
                format_description(&arg.description)
            ));
        }
    }

    if !metadata.examples.is_empty() {
        lines.push(String::new());
        lines.push(format_subheader("Examples:"));
        for example in &metadata.examples {
            lines.push(format!("  {}", format_usage(example)));
        }
    }

    lines.join("\n")
}

/// Splits a shell line into words, keeping double-quoted text together.
///
/// ```
/// use encore::cli::split_command_line;
///
/// assert_eq!(
///     split_command_line(r#"library search "summer vibes""#),
///     ["library", "search", "summer vibes"]
/// );
/// ```
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_word = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_word = true;
            }
            ch if ch.is_whitespace() && !in_quotes => {
                if has_word {
                    words.push(std::mem::take(&mut current));
                    has_word = false;
                }
            }
            ch => {
                current.push(ch);
                has_word = true;
            }
        }
    }

    if has_word {
        words.push(current);
    }

    words
}
