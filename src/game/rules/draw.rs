//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::position::Position;
    use super::super::super::types::Player;
    use super::super::win::check_winner;
    use super::*;
    use strum::IntoEnumIterator;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::Human));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::iter() {
            board.set(pos, Square::Occupied(Player::Human));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // Draw scenario: X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Computer));
        board.set(Position::TopRight, Square::Occupied(Player::Human));
        board.set(Position::MiddleLeft, Square::Occupied(Player::Computer));
        board.set(Position::Center, Square::Occupied(Player::Human));
        board.set(Position::MiddleRight, Square::Occupied(Player::Human));
        board.set(Position::BottomLeft, Square::Occupied(Player::Computer));
        board.set(Position::BottomCenter, Square::Occupied(Player::Human));
        board.set(Position::BottomRight, Square::Occupied(Player::Computer));

        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // Human wins top row
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::TopCenter, Square::Occupied(Player::Human));
        board.set(Position::TopRight, Square::Occupied(Player::Human));
        board.set(Position::MiddleLeft, Square::Occupied(Player::Computer));
        board.set(Position::Center, Square::Occupied(Player::Computer));

        assert!(!is_draw(&board));
    }
}
