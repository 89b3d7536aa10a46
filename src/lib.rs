//! Solo Tic-Tac-Toe library - a turn-based game core with a random opponent.
//!
//! # Architecture
//!
//! - **Game**: board types, win/draw rules, and the [`GameState`] turn machine
//! - **Session**: presentation boundary - applies taps, schedules the delayed
//!   computer reply, and publishes change events for the UI to re-render from
//! - **Persona**: cosmetic glyph selection for board rendering
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{GameState, Position};
//!
//! let mut game = GameState::new();
//! game.apply_human_move(Position::Center)?;
//! assert!(game.is_active());
//! # Ok::<(), solo_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod game;
mod persona;
mod session;

// Crate-level exports - Game types
pub use game::{
    Board, GameSnapshot, GameState, GameStatus, Move, MoveError, Player, Position, Square,
};

// Crate-level exports - Persona rendering
pub use persona::{Persona, PersonaKind};

// Crate-level exports - Session orchestration
pub use session::{COMPUTER_MOVE_DELAY, GameEvent, GameSession};
