//! Solo Tic-Tac-Toe - terminal driver.
//!
//! A thin presentation layer over the game core: it forwards taps and
//! resets to the session and re-renders from published snapshots.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use solo_tictactoe::{GameEvent, GameSession, GameSnapshot, Persona, Position};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            delay_ms,
            seed,
            persona,
            json,
        } => play(delay_ms, seed, persona.into(), json).await,
    }
}

/// Runs the interactive prompt loop.
async fn play(delay_ms: u64, seed: Option<u64>, persona: Persona, json: bool) -> Result<()> {
    info!(delay_ms, ?seed, "starting game");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut session = GameSession::new(event_tx).with_delay(Duration::from_millis(delay_ms));
    if let Some(seed) = seed {
        session = session.with_seed(seed);
    }

    render(&session.snapshot(), &persona, json);
    println!("Tap a cell with 1-9, r to reset, q to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            event = event_rx.recv() => {
                match event {
                    Some(GameEvent::StateChanged(snapshot)) => {
                        let active = snapshot.active;
                        render(&snapshot, &persona, json);
                        if !active {
                            println!("Press r to play again, q to quit.");
                        }
                    }
                    Some(GameEvent::MoveMade { mover, position }) => {
                        debug!(?mover, %position, "move made");
                    }
                    Some(GameEvent::GameOver { winner }) => {
                        info!(?winner, "game over");
                    }
                    None => break,
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match line.trim() {
                    "" => {}
                    "q" => break,
                    "r" => session.reset(),
                    tap => match parse_tap(tap) {
                        Some(pos) => session.handle_tap(pos),
                        None => println!("Enter a cell number 1-9, r to reset, q to quit."),
                    },
                }
            }
        }
    }

    Ok(())
}

/// Parses a tapped cell number (1-9) into a board position.
fn parse_tap(input: &str) -> Option<Position> {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(Position::from_index)
}

/// Renders a published snapshot for the player.
fn render(snapshot: &GameSnapshot, persona: &Persona, json: bool) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{line}"),
            Err(error) => debug!(%error, "snapshot serialization failed"),
        }
        return;
    }

    println!();
    println!("{}", persona.render_board(&snapshot.board));
    println!("{}", snapshot.prompt);
}
