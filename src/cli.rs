//! Command-line interface for solo_tictactoe.

use clap::{Parser, Subcommand};
use solo_tictactoe::PersonaKind;

/// Solo Tic-Tac-Toe - play against a random computer opponent
#[derive(Parser, Debug)]
#[command(name = "solo_tictactoe")]
#[command(about = "Single-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Milliseconds the computer waits before replying
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Seed for the computer opponent (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Persona used to render the marks (classic, smiley, robot)
        #[arg(long, default_value = "classic")]
        persona: PersonaKind,

        /// Emit a JSON snapshot line after every state change
        #[arg(long)]
        json: bool,
    },
}
