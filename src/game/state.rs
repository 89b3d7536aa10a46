//! Turn-based state machine for a single human playing against a
//! randomized computer opponent.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// The human always moves first. Moves are validated before application;
/// a rejected move leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Move history for the current game.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, human to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Human,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true while play continues.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Returns the turn/outcome prompt shown to the player.
    pub fn prompt(&self) -> &'static str {
        match self.status {
            GameStatus::InProgress => match self.to_move {
                Player::Human => "Your turn!",
                Player::Computer => "Computer's turn...",
            },
            GameStatus::Won(Player::Human) => "Congratulations! You win!",
            GameStatus::Won(Player::Computer) => "Computer wins!",
            GameStatus::Draw => "It's a draw!",
        }
    }

    /// Returns the published fields the presentation layer renders from.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.is_active(),
            to_move: self.to_move,
            winner: self.status.winner(),
            prompt: self.prompt().to_string(),
        }
    }

    /// Applies a human move at the given position.
    ///
    /// Valid only while the game is in progress, it is the human's turn,
    /// and the square is empty. On success the move is recorded, end
    /// conditions are evaluated, and the turn passes to the computer if
    /// play continues.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the rejection; the board is
    /// never changed by a rejected move.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<(), MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != Player::Human {
            return Err(MoveError::WrongPlayer(Player::Human));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.place(Move::new(Player::Human, pos));
        self.conclude_or_pass();
        Ok(())
    }

    /// Applies a computer move, selecting uniformly at random among the
    /// currently empty squares.
    ///
    /// Valid only while the game is in progress and it is the computer's
    /// turn. Returns the chosen position. On success end conditions are
    /// evaluated and the turn passes back to the human if play continues.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] describing the rejection; the board is
    /// never changed by a rejected move.
    #[instrument(skip(self, rng))]
    pub fn apply_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Position, MoveError> {
        if !self.is_active() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != Player::Computer {
            return Err(MoveError::WrongPlayer(Player::Computer));
        }

        let open = Position::valid_moves(&self.board);
        // A full board was already concluded as a draw by the previous
        // move's evaluation, so there is always an open square here.
        let Some(pos) = open.choose(rng).copied() else {
            return Err(MoveError::GameOver);
        };

        self.place(Move::new(Player::Computer, pos));
        self.conclude_or_pass();
        Ok(pos)
    }

    /// Unconditionally restores the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("resetting game");
        *self = Self::new();
    }

    /// Records a validated move on the board.
    fn place(&mut self, mov: Move) {
        self.board.set(mov.position, Square::Occupied(mov.player));
        self.history.push(mov);
    }

    /// Shared end-condition evaluation: win, then draw, otherwise the
    /// turn passes to the other player.
    fn conclude_or_pass(&mut self) {
        if let Some(winner) = rules::win::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::draw::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Published view of the game for the presentation layer.
///
/// The UI re-reads this after every change notification; it carries the
/// board for rendering, the active flag (show/hide the reset control),
/// and the turn/outcome prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board to render.
    pub board: Board,
    /// True while play continues.
    pub active: bool,
    /// The player whose move is awaited.
    pub to_move: Player,
    /// The winner, once the game ended in a win.
    pub winner: Option<Player>,
    /// Human-readable turn/outcome prompt.
    pub prompt: String,
}
