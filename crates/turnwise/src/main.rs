//! Turnwise - play tic-tac-toe against computer opponents from the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use turnwise::cli::{Cli, Command, PlayArgs, TournamentArgs};
use turnwise::{play_game, run_tournament_with, shared_input};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => play(args),
        Command::Tournament(args) => tournament(args),
    }
}

/// Plays one game.
///
/// With `--json` the prompts and board go to stderr so that stdout carries
/// only the final record.
#[instrument(skip_all)]
fn play(args: PlayArgs) -> Result<()> {
    let config = args.resolve().context("Invalid match configuration")?;
    info!(
        player_one = %config.player_one().name(),
        player_two = %config.player_two().name(),
        "Setting up game"
    );

    let input = shared_input(std::io::stdin().lock());
    let record = if args.seats.json {
        play_game(&config, input, std::io::stderr)
    } else {
        play_game(&config, input, std::io::stdout)
    }
    .context("Game ended with an error")?;

    if args.seats.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}

/// Plays a computer-vs-computer series and prints the tally.
#[instrument(skip_all)]
fn tournament(args: TournamentArgs) -> Result<()> {
    let config = args.resolve().context("Invalid match configuration")?;
    let json = args.seats.json;

    let tally = run_tournament_with(&config, |round, record| {
        if !json {
            println!(
                "Game {}: {} in {} moves",
                round + 1,
                record.status(),
                record.moves().len()
            );
        }
    })
    .context("Tournament stopped")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        println!("{}", tally);
    }
    Ok(())
}
