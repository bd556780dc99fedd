//! Encore entry point
//!
//! `encore <category> <command> [args...]` runs one command against a fresh
//! session. `encore shell` keeps one session alive, runs simulated playback
//! and reads commands from stdin.

use std::{
    env,
    error::Error,
    io::{self, Write},
    process,
    sync::Arc,
};

use encore::{
    cli::{
        CliService,
        formatting::{format_description, format_error, format_header},
        split_command_line,
    },
    config::Config,
    service_manager::Services,
    services::player::TrackId,
    tracing_config,
};
use futures::StreamExt;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    pin,
    task::JoinHandle,
};
use tracing::{Instrument, Level, info, span};

const SHELL_COMMAND: &str = "shell";
const PROMPT: &str = "encore> ";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    };

    if args.first().map(String::as_str) == Some(SHELL_COMMAND) {
        let _guard = tracing_config::init_with_file(config.general.log_level)?;
        let span = span!(Level::INFO, "encore_shell");
        span.in_scope(|| info!("Starting Encore shell"));

        run_shell(config).instrument(span).await?;
    } else {
        tracing_config::init(config.general.log_level)?;
        run_cli_command(config, &args).await;
    }

    Ok(())
}

/// Executes one CLI command after the session check settles.
async fn run_cli_command(config: Config, args: &[String]) {
    let services = Arc::new(Services::new(config));
    services.check_session().await;

    let cli_service = CliService::new(services);

    let category = args.first().map(|s| s.as_str()).unwrap_or("help");
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    match cli_service
        .execute_command(category, command, command_args)
        .await
    {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}

/// Reads commands from stdin until EOF or `exit`.
///
/// The session check runs in the background so the prompt is usable while
/// it settles; navigation commands report the pending session until then.
async fn run_shell(config: Config) -> Result<(), Box<dyn Error>> {
    let services = Arc::new(Services::new(config));
    let cli_service = CliService::new(services.clone());

    let ticker = services.start_ticker();
    let track_logger = spawn_track_logger(&services);
    let session_check = tokio::spawn({
        let services = services.clone();
        async move { services.check_session().await }
    });

    println!("{}", format_header("Encore"));
    println!(
        "{}",
        format_description("Type 'help' for commands, 'exit' to quit.")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let words = split_command_line(&line);
        let Some(category) = words.first().map(String::as_str) else {
            continue;
        };

        if matches!(category, "exit" | "quit") {
            break;
        }

        let command = words.get(1).map(String::as_str).unwrap_or("");
        let command_args = words.get(2..).unwrap_or(&[]);

        match cli_service
            .execute_command(category, command, command_args)
            .await
        {
            Ok(output) if !output.trim().is_empty() => println!("{output}"),
            Ok(_) => {}
            Err(e) => eprintln!("{}", format_error(&e.to_string())),
        }
    }

    ticker.abort();
    track_logger.abort();
    session_check.abort();
    info!("Shell closed");

    Ok(())
}

/// Logs each time a different track becomes current.
fn spawn_track_logger(services: &Services) -> JoinHandle<()> {
    let states = services.player.watch();

    tokio::spawn(async move {
        pin!(states);
        let mut last: Option<TrackId> = None;

        while let Some(state) = states.next().await {
            let Some(track) = state.current_track else {
                continue;
            };

            if last.as_ref() != Some(&track.id) {
                info!(
                    track = %track.id,
                    title = %track.title,
                    artist = %track.artist,
                    "Now playing"
                );
                last = Some(track.id);
            }
        }
    })
}
