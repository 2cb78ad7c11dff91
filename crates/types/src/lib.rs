//! Core types module - shared data structures and constants
//!
//! This module defines the plain data types used throughout the application.
//! Nothing here knows about rules, terminals or input devices, so the types can
//! be shared by the engine, the renderer and the key mapping alike.
//!
//! # Board Dimensions
//!
//! The default game is played on a small board:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 4 | Columns (selected as 1-4 by the player) |
//! | `DEFAULT_HEIGHT` | 4 | Rows (row 0 is the top) |
//! | `DEFAULT_WIN_COUNT` | 4 | Stones in a row needed to win |
//! | `MAX_DIMENSION` | 16 | Upper bound for either dimension |
//!
//! # Examples
//!
//! ```
//! use tui_connect_four_types::{Cell, Outcome, Player, DEFAULT_WIDTH};
//!
//! let player = Player::Player1;
//! assert_eq!(player.other(), Player::Player2);
//! assert_eq!(player.stone(), 'o');
//!
//! assert_eq!(Cell::from(player), Cell::Player1);
//! assert_eq!(Cell::Empty.player(), None);
//!
//! assert!(Outcome::Win(player).is_terminal());
//! assert_eq!(DEFAULT_WIDTH, 4);
//! ```

use std::fmt;

/// Default board width in columns
pub const DEFAULT_WIDTH: u8 = 4;

/// Default board height in rows
pub const DEFAULT_HEIGHT: u8 = 4;

/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_COUNT: u8 = 4;

/// Largest supported width or height.
///
/// Boards are stored in a fixed `MAX_CELLS` array so they never allocate.
pub const MAX_DIMENSION: u8 = 16;

/// Cell capacity of the board storage
pub const MAX_CELLS: usize = (MAX_DIMENSION as usize) * (MAX_DIMENSION as usize);

/// The two players
///
/// Player1 always opens the game. Stones are drawn as `o` for Player1 and
/// `x` for Player2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The opponent
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_connect_four_types::Player;
    ///
    /// assert_eq!(Player::Player1.other(), Player::Player2);
    /// assert_eq!(Player::Player2.other(), Player::Player1);
    /// ```
    pub fn other(&self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Stone glyph used by renderers
    pub fn stone(&self) -> char {
        match self {
            Player::Player1 => 'o',
            Player::Player2 => 'x',
        }
    }

    /// 1-based player number
    pub fn number(&self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {} ({})", self.number(), self.stone())
    }
}

/// A cell on the game board
///
/// A cell starts `Empty` and is marked at most once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Glyph used by text renderers (`' '` for empty cells)
    pub fn glyph(&self) -> char {
        self.player().map(|p| p.stone()).unwrap_or(' ')
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }
}

/// Result of a game so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Win(Player),
    Draw,
}

impl Outcome {
    /// `Win` and `Draw` are terminal: no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => f.write_str("in progress"),
            Outcome::Win(player) => write!(f, "{player} won"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Board coordinate: `x` is the 0-based column, `y` the row (0 = top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Step `steps` times along `dir`
    pub fn offset(self, dir: Direction, steps: i8) -> Self {
        Self {
            x: self.x + dir.dx * steps,
            y: self.y + dir.dy * steps,
        }
    }
}

/// Direction vector used by the win scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub const fn negated(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// The four axis base vectors: vertical, horizontal and both diagonals.
///
/// Each axis is scanned along the vector and along its negation.
pub const AXES: [Direction; 4] = [
    Direction::new(0, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(-1, -1),
];

/// Game actions produced by input mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Drop a stone into the given 1-based column
    DropStone(u32),
    /// Start a new game with the same configuration
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dimensions_fit_storage() {
        assert!(DEFAULT_WIDTH <= MAX_DIMENSION);
        assert!(DEFAULT_HEIGHT <= MAX_DIMENSION);
        assert_eq!(MAX_CELLS, 256);
    }

    #[test]
    fn negated_axes_cover_all_eight_neighbours() {
        let mut dirs: Vec<(i8, i8)> = AXES
            .iter()
            .flat_map(|d| [(d.dx, d.dy), (d.negated().dx, d.negated().dy)])
            .collect();
        dirs.sort();
        dirs.dedup();
        assert_eq!(dirs.len(), 8);
        assert!(!dirs.contains(&(0, 0)));
    }

    #[test]
    fn position_offset_walks_direction() {
        let p = Position::new(1, 2);
        assert_eq!(p.offset(Direction::new(1, -1), 2), Position::new(3, 0));
        assert_eq!(p.offset(Direction::new(1, -1).negated(), 1), Position::new(0, 3));
    }

    #[test]
    fn outcome_display() {
        assert_eq!(Outcome::Win(Player::Player2).to_string(), "player 2 (x) won");
        assert_eq!(Outcome::Draw.to_string(), "draw");
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn only_a_win_has_a_winner() {
        assert_eq!(Outcome::Win(Player::Player2).winner(), Some(Player::Player2));
        assert_eq!(Outcome::Draw.winner(), None);
        assert_eq!(Outcome::InProgress.winner(), None);
    }
}
