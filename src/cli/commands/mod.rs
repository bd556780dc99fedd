//! Built-in command groups, one module per category.

pub mod config;
pub mod library;
pub mod nav;
pub mod player;
pub mod session;

use super::CliError;

/// Returns the first argument or a `MissingArgument` error naming it.
pub(crate) fn first_arg<'a>(
    args: &'a [String],
    arg: &str,
    command: &str,
) -> Result<&'a str, CliError> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingArgument {
            arg: arg.to_string(),
            command: command.to_string(),
        })
}
