use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command or category was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Wrong number of arguments for a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A required argument was not supplied.
    #[error("Missing argument '{arg}' for '{command}'")]
    MissingArgument {
        /// Name of the missing argument
        arg: String,
        /// Command that needed it
        command: String,
    },

    /// An argument value could not be used.
    #[error("Invalid value for '{arg}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// A service refused or failed the request.
    #[error("{service} error: {details}")]
    ServiceError {
        /// Service that failed
        service: String,
        /// Failure details
        details: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CliError {
    /// Shorthand for [`CliError::InvalidArgument`].
    pub fn invalid(arg: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg: arg.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`CliError::ServiceError`].
    pub fn service(service: &str, details: impl ToString) -> Self {
        Self::ServiceError {
            service: service.to_string(),
            details: details.to_string(),
        }
    }
}

/// Type alias for command execution results.
///
/// Commands return the text to show the user on success.
pub type CommandResult = Result<String, CliError>;

/// Description of a single command argument.
#[derive(Debug, Clone)]
pub struct CommandArg {
    /// The name of the argument (e.g., "seconds", "track-id").
    pub name: String,

    /// Human-readable description of what this argument does.
    pub description: String,

    /// Whether this argument is required for command execution.
    pub required: bool,

    /// The expected type of this argument for help display.
    pub value_type: ArgType,
}

/// Type classification for command arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A general string value.
    String,

    /// A numeric value (integer or float).
    Number,

    /// A navigation route such as `home` or `playlist:4`.
    Route,
}

impl ArgType {
    /// Placeholder shown in usage lines
    pub fn hint(self) -> &'static str {
        match self {
            Self::String => "text",
            Self::Number => "number",
            Self::Route => "route",
        }
    }
}

/// Complete metadata for a CLI command.
///
/// Drives help generation and argument-count validation.
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    /// The command name (e.g., "play", "seek").
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// All arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,

    /// Category this command belongs to (e.g., "player", "nav").
    pub category: String,
}

/// Interface for all CLI commands.
///
/// Commands receive their dependencies through their constructors.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with the provided arguments.
    ///
    /// The registry has already checked the argument count against
    /// [`Command::metadata`]; the command validates values.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for invalid argument values or refused requests.
    async fn execute(&self, args: &[String]) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}
