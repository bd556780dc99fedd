//! Unit tests for CLI module
//!
//! Tests command registry, seek parsing, help text and command execution
//! against an in-memory session.

use std::sync::Arc;

use crate::{
    cli::{CliError, CliService, CommandRegistry, formatting::format_duration, parse_position},
    config::Config,
    navigation::{Route, TabRoute},
    service_manager::Services,
    services::player::{PlaybackStatus, RepeatMode, TrackId},
};

fn services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()))
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

async fn run(service: &CliService, category: &str, command: &str, values: &[&str]) -> String {
    match service
        .execute_command(category, command, &args(values))
        .await
    {
        Ok(output) => output,
        Err(e) => panic!("{category} {command} failed: {e}"),
    }
}

#[test]
fn registry_lists_all_categories_sorted() {
    let mut registry = CommandRegistry::new(services());
    registry.register_all_commands();

    let categories: Vec<String> = registry
        .list_commands()
        .into_iter()
        .map(|(category, _)| category)
        .collect();
    assert_eq!(categories, ["config", "library", "nav", "player", "session"]);

    let player = registry
        .list_commands()
        .into_iter()
        .find(|(category, _)| category == "player")
        .map(|(_, commands)| commands)
        .unwrap_or_default();
    for expected in ["play", "pause", "toggle", "stop", "seek", "next", "previous"] {
        assert!(player.iter().any(|c| c == expected), "missing {expected}");
    }
}

#[tokio::test]
async fn registry_rejects_unknown_category_and_command() {
    let mut registry = CommandRegistry::new(services());
    registry.register_all_commands();

    let result = registry.execute("video", "play", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));

    let result = registry.execute("player", "rewind", &[]).await;
    assert!(matches!(result, Err(CliError::CommandNotFound(_))));
}

#[tokio::test]
async fn registry_validates_argument_count() {
    let mut registry = CommandRegistry::new(services());
    registry.register_all_commands();

    let result = registry.execute("player", "seek", &[]).await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));

    let result = registry.execute("player", "play", &args(&["now"])).await;
    assert!(matches!(result, Err(CliError::InvalidArguments(_))));
}

#[test]
fn parse_position_plain_seconds() {
    assert_eq!(parse_position("30", 0, 203).ok(), Some(30));
    assert_eq!(parse_position("0", 50, 203).ok(), Some(0));
}

#[test]
fn parse_position_minutes_and_seconds() {
    assert_eq!(parse_position("1:30", 0, 203).ok(), Some(90));
    assert!(parse_position("1:75", 0, 203).is_err());
    assert!(parse_position("a:10", 0, 203).is_err());
}

#[test]
fn parse_position_percentage() {
    assert_eq!(parse_position("50%", 0, 200).ok(), Some(100));
    assert_eq!(parse_position("100%", 0, 203).ok(), Some(203));
    assert!(parse_position("150%", 0, 203).is_err());
    assert!(parse_position("50%", 0, 0).is_err());
}

#[test]
fn parse_position_relative_saturates_at_zero() {
    assert_eq!(parse_position("+10", 20, 203).ok(), Some(30));
    assert_eq!(parse_position("-10", 20, 203).ok(), Some(10));
    assert_eq!(parse_position("-60", 20, 203).ok(), Some(0));
}

#[test]
fn parse_position_rejects_garbage() {
    let error = parse_position("soon", 0, 203);
    assert!(matches!(
        error,
        Err(CliError::InvalidArgument { ref arg, .. }) if arg == "position"
    ));
}

#[test]
fn format_duration_pads_seconds() {
    assert_eq!(format_duration(203), "3:23");
    assert_eq!(format_duration(65), "1:05");
    assert_eq!(format_duration(0), "0:00");
}

#[tokio::test]
async fn help_lists_categories_and_command_details() {
    let service = CliService::new(services());

    let overview = run(&service, "help", "", &[]).await;
    assert!(overview.contains("player"));
    assert!(overview.contains("session"));

    let category = run(&service, "player", "", &[]).await;
    assert!(category.contains("seek"));

    let detail = run(&service, "help", "player", &["seek"]).await;
    assert!(detail.contains("encore player seek 1:30"));
}

#[tokio::test]
async fn transport_commands_drive_the_player() {
    let services = services();
    let service = CliService::new(services.clone());

    run(&service, "player", "play", &[]).await;
    assert_eq!(services.player.get().status, PlaybackStatus::Playing);

    run(&service, "player", "toggle", &[]).await;
    assert_eq!(services.player.get().status, PlaybackStatus::Paused);

    run(&service, "player", "seek", &["1:00"]).await;
    assert_eq!(services.player.get().progress_secs, 60);

    run(&service, "player", "stop", &[]).await;
    let state = services.player.get();
    assert_eq!(state.status, PlaybackStatus::Stopped);
    assert_eq!(state.progress_secs, 0);
}

#[tokio::test]
async fn seek_past_the_end_is_rejected() {
    let services = services();
    let service = CliService::new(services.clone());

    let result = service
        .execute_command("player", "seek", &args(&["4:00"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    assert_eq!(services.player.get().progress_secs, 0);
}

#[tokio::test]
async fn volume_passes_values_through_unclamped() {
    let services = services();
    let service = CliService::new(services.clone());

    run(&service, "player", "volume", &["1.5"]).await;
    assert!((services.player.get().volume - 1.5).abs() < f64::EPSILON);

    let result = service
        .execute_command("player", "volume", &args(&["loud"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[tokio::test]
async fn mode_commands_update_flags() {
    let services = services();
    let service = CliService::new(services.clone());

    run(&service, "player", "shuffle", &[]).await;
    run(&service, "player", "repeat", &["queue"]).await;
    run(&service, "player", "minimize", &[]).await;

    let state = services.player.get();
    assert!(state.shuffled);
    assert_eq!(state.repeat_mode, RepeatMode::Queue);
    assert!(!state.is_minimized);

    let result = service
        .execute_command("player", "repeat", &args(&["forever"]))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn next_keeps_paused_status_and_advances_queue() {
    let services = services();
    let service = CliService::new(services.clone());

    run(&service, "player", "next", &[]).await;

    let state = services.player.get();
    assert_eq!(
        state.current_track.map(|track| track.id),
        Some(TrackId::new("2"))
    );
    assert_eq!(state.status, PlaybackStatus::Paused);
    assert_eq!(state.queue.len(), 3);
}

#[tokio::test]
async fn queue_commands_use_catalog_ids() {
    let services = services();
    let service = CliService::new(services.clone());

    run(&service, "player", "set-queue", &["3,4"]).await;
    run(&service, "player", "enqueue", &["5"]).await;
    let ids: Vec<String> = services
        .player
        .get()
        .queue
        .iter()
        .map(|track| track.id.to_string())
        .collect();
    assert_eq!(ids, ["3", "4", "5"]);

    run(&service, "player", "load", &["2"]).await;
    let state = services.player.get();
    assert_eq!(state.duration_secs, 210);
    assert_eq!(state.status, PlaybackStatus::Paused);

    let result = service
        .execute_command("player", "enqueue", &args(&["99"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[tokio::test]
async fn state_prints_json_snapshot() {
    let service = CliService::new(services());

    let json = run(&service, "player", "state", &[]).await;
    let value: serde_json::Value = match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => panic!("invalid json: {e}"),
    };

    assert_eq!(value["status"], "paused");
    assert_eq!(value["current_track"]["duration"], 203);
}

#[tokio::test]
async fn navigation_follows_the_session() {
    let services = services();
    let service = CliService::new(services.clone());

    let result = service.execute_command("nav", "go", &args(&["home"])).await;
    assert!(matches!(result, Err(CliError::ServiceError { .. })));

    run(&service, "session", "login", &[]).await;
    assert_eq!(
        services.navigator.lock().await.current(),
        Some(Route::Main(TabRoute::Home))
    );

    run(&service, "nav", "go", &["playlist:4"]).await;
    let back = run(&service, "nav", "back", &[]).await;
    assert!(back.contains("home"));

    run(&service, "session", "logout", &[]).await;
    let current = run(&service, "nav", "current", &[]).await;
    assert!(current.starts_with("login"));
}

#[tokio::test]
async fn unknown_route_is_an_argument_error() {
    let service = CliService::new(services());

    let result = service
        .execute_command("nav", "go", &args(&["settings"]))
        .await;

    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[tokio::test]
async fn library_list_filters_and_rejects_unknown_filters() {
    let service = CliService::new(services());

    let downloaded = run(&service, "library", "list", &["downloaded"]).await;
    assert!(downloaded.contains("Liked Songs"));
    assert!(!downloaded.contains("Chill Hits"));

    let result = service
        .execute_command("library", "list", &args(&["podcasts"]))
        .await;
    assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
}

#[tokio::test]
async fn config_schema_is_json() {
    let service = CliService::new(services());

    let schema = run(&service, "config", "schema", &[]).await;

    assert!(serde_json::from_str::<serde_json::Value>(&schema).is_ok());
    assert!(schema.contains("tick_interval_ms"));
}

#[test]
fn split_command_line_handles_quotes_and_spacing() {
    use crate::cli::split_command_line;

    assert_eq!(
        split_command_line("  player   seek 1:30 "),
        ["player", "seek", "1:30"]
    );
    assert_eq!(
        split_command_line(r#"library search "heavy metal""#),
        ["library", "search", "heavy metal"]
    );
    assert_eq!(split_command_line(r#"player set-queue """#), ["player", "set-queue", ""]);
    assert!(split_command_line("   ").is_empty());
}

#[tokio::test]
async fn password_reset_requires_an_address_and_a_signed_out_session() {
    let service = CliService::new(services());

    let blank = service
        .execute_command("session", "reset", &args(&["  "]))
        .await;
    assert!(matches!(blank, Err(CliError::InvalidArgument { ref arg, .. }) if arg == "email"));

    let missing = service.execute_command("session", "reset", &[]).await;
    assert!(missing.is_err());

    let sent = run(&service, "session", "reset", &["ada@example.com"]).await;
    assert!(sent.contains("Check your email"));
    assert!(sent.contains("ada@example.com"));

    run(&service, "session", "login", &[]).await;
    let signed_in = service
        .execute_command("session", "reset", &args(&["ada@example.com"]))
        .await;
    assert!(matches!(signed_in, Err(CliError::ServiceError { .. })));
}
