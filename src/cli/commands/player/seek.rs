use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        commands::first_arg,
        formatting::format_duration,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    service_manager::Services,
    services::player::PlayerAction,
};

const ARG: &str = "position";

/// Parses a seek target into whole seconds.
///
/// Accepts plain seconds (`30`), `mm:ss` (`1:30`), a percentage of
/// `duration_secs` (`50%`) or a delta from `current_secs` (`+10`, `-10`).
/// Relative seeks saturate at zero.
///
/// # Errors
/// Returns `CliError::InvalidArgument` when the input matches none of the
/// formats, or a percentage is out of range or used without a duration.
pub fn parse_position(input: &str, current_secs: u32, duration_secs: u32) -> Result<u32, CliError> {
    if let Some(percentage) = input.strip_suffix('%') {
        let percentage = percentage
            .parse::<f64>()
            .map_err(|_| CliError::invalid(ARG, "Invalid percentage format"))?;

        if !(0.0..=100.0).contains(&percentage) {
            return Err(CliError::invalid(ARG, "Percentage must be between 0 and 100"));
        }

        if duration_secs == 0 {
            return Err(CliError::invalid(
                ARG,
                "Cannot use percentage - track length unknown",
            ));
        }

        return Ok((f64::from(duration_secs) * percentage / 100.0).round() as u32);
    }

    if let Some(delta) = input.strip_prefix('+') {
        let delta = parse_seconds(delta, "Invalid relative seek format")?;
        return Ok(current_secs.saturating_add(delta));
    }

    if let Some(delta) = input.strip_prefix('-') {
        let delta = parse_seconds(delta, "Invalid relative seek format")?;
        return Ok(current_secs.saturating_sub(delta));
    }

    if let Some((minutes, seconds)) = input.split_once(':') {
        let minutes = parse_seconds(minutes, "Invalid minutes value")?;
        let seconds = parse_seconds(seconds, "Invalid seconds value")?;

        if seconds >= 60 {
            return Err(CliError::invalid(ARG, "Seconds must be less than 60"));
        }

        return minutes
            .checked_mul(60)
            .and_then(|secs| secs.checked_add(seconds))
            .ok_or_else(|| CliError::invalid(ARG, "Position is too large"));
    }

    parse_seconds(
        input,
        "Invalid position format. Use seconds, mm:ss, percentage (50%), or relative (+10, -10)",
    )
}

fn parse_seconds(input: &str, reason: &str) -> Result<u32, CliError> {
    input.parse::<u32>().map_err(|_| CliError::invalid(ARG, reason))
}

/// Command to seek within the current track
///
/// Supports various time formats like seconds, mm:ss, or percentage
pub struct SeekCommand {
    services: Arc<Services>,
}

impl SeekCommand {
    /// Creates a new SeekCommand
    pub fn new(services: Arc<Services>) -> Self {
        Self { services }
    }
}

#[async_trait]
impl Command for SeekCommand {
    /// Seeks to the requested position
    ///
    /// # Errors
    ///
    /// Returns CliError if nothing is loaded, the position cannot be parsed,
    /// or it lies past the end of the track
    async fn execute(&self, args: &[String]) -> CommandResult {
        let input = first_arg(args, ARG, "seek")?;

        let state = self.services.player.get();
        if state.current_track.is_none() {
            return Err(CliError::service("Player", "Nothing loaded to seek in"));
        }

        let target = parse_position(input, state.progress_secs, state.duration_secs)?;
        if target > state.duration_secs {
            return Err(CliError::invalid(
                ARG,
                format!(
                    "Position {} exceeds track length {}",
                    format_duration(target),
                    format_duration(state.duration_secs)
                ),
            ));
        }

        self.services
            .player
            .dispatch(PlayerAction::UpdateProgress(target));

        Ok(format!(
            "Seeked to {} / {}",
            format_duration(target),
            format_duration(state.duration_secs)
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "seek".to_string(),
            description: "Seek to a specific position in the current track".to_string(),
            category: "player".to_string(),
            args: vec![CommandArg {
                name: ARG.to_string(),
                description: "Target position - seconds (30), time (1:30), percentage (50%), or relative (+10, -10)".to_string(),
                required: true,
                value_type: ArgType::String,
            }],
            examples: vec![
                "encore player seek 30".to_string(),
                "encore player seek 1:30".to_string(),
                "encore player seek 50%".to_string(),
                "encore player seek +10".to_string(),
                "encore player seek -15".to_string(),
            ],
        }
    }
}
