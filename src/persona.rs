//! Cosmetic persona selection for board rendering.
//!
//! A persona only changes the glyphs used to draw each player's marks;
//! it carries no gameplay semantics.

use crate::game::{Board, Player, Square};
use serde::{Deserialize, Serialize};

/// Preset persona choices selectable from the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum PersonaKind {
    /// Classic `X` versus `O`.
    Classic,
    /// Smiley face versus gear.
    Smiley,
    /// At-sign versus hash.
    Robot,
}

/// Display glyphs for the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    human: char,
    computer: char,
}

impl Persona {
    /// Creates a persona from explicit glyphs.
    pub fn new(human: char, computer: char) -> Self {
        Self { human, computer }
    }

    /// Returns the glyph for the given player.
    pub fn glyph(&self, player: Player) -> char {
        match player {
            Player::Human => self.human,
            Player::Computer => self.computer,
        }
    }

    /// Renders the board with this persona's glyphs.
    ///
    /// Empty squares show their cell number (1-9).
    pub fn render_board(&self, board: &Board) -> String {
        let mut result = String::new();
        for (i, square) in board.squares().iter().enumerate() {
            let symbol = match square {
                Square::Empty => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
                Square::Occupied(player) => self.glyph(*player),
            };
            result.push(symbol);
            if i % 3 < 2 {
                result.push('|');
            } else if i < 8 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Persona {
    fn default() -> Self {
        PersonaKind::Classic.into()
    }
}

impl From<PersonaKind> for Persona {
    fn from(kind: PersonaKind) -> Self {
        match kind {
            PersonaKind::Classic => Persona::new('X', 'O'),
            PersonaKind::Smiley => Persona::new('☺', '⚙'),
            PersonaKind::Robot => Persona::new('@', '#'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_default_renders_classic_marks() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));
        board.set(Position::Center, Square::Occupied(Player::Computer));

        let rendered = Persona::default().render_board(&board);
        assert_eq!(rendered, "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_persona_swaps_glyphs_only() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::Human));

        let rendered = Persona::from(PersonaKind::Robot).render_board(&board);
        assert!(rendered.starts_with('@'));
    }

    #[test]
    fn test_kind_parses_from_lowercase() {
        use std::str::FromStr;
        assert_eq!(PersonaKind::from_str("smiley"), Ok(PersonaKind::Smiley));
        assert!(PersonaKind::from_str("wizard").is_err());
    }
}
