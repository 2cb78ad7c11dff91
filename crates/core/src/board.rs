//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds a
//! player's stone. Storage is a flat array sized for the largest supported
//! board, so boards never allocate and can be copied freely.
//! Coordinates: (x, y) where x is the column (left to right) and y the row,
//! with y = 0 at the top. Stones fall towards the largest y.

use std::fmt;

use crate::config::GameConfig;
use crate::types::{Cell, Direction, Player, Position, MAX_CELLS};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major cells (y * width + x); only the first width * height are used
    cells: [Cell; MAX_CELLS],
}

impl Board {
    /// Create a new empty board for the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self {
            width: config.width(),
            height: config.height(),
            cells: [Cell::Empty; MAX_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Lowest empty row in a 0-based column, scanning bottom-up.
    ///
    /// Returns None if the column is full or does not exist.
    pub fn landing_row(&self, x: u8) -> Option<i8> {
        if x >= self.width {
            return None;
        }
        (0..self.height as i8)
            .rev()
            .find(|&y| self.get(x as i8, y) == Some(Cell::Empty))
    }

    /// A column is full when its top cell is taken
    pub fn is_column_full(&self, x: u8) -> bool {
        self.landing_row(x).is_none()
    }

    /// Number of empty cells left
    #[cfg(test)]
    pub(crate) fn empty_count(&self) -> u16 {
        let used = (self.width as usize) * (self.height as usize);
        self.cells[..used].iter().filter(|c| c.is_empty()).count() as u16
    }

    /// Mark an empty cell. Returns false if out of bounds or already taken.
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> bool {
        match self.index(pos.x, pos.y) {
            Some(idx) if self.cells[idx].is_empty() => {
                self.cells[idx] = Cell::from(player);
                true
            }
            _ => false,
        }
    }

    /// Count consecutive stones of `player` starting one step away from
    /// `from` along `dir`, taking at most `max_steps` steps.
    ///
    /// Stops at the board edge or at the first cell not owned by `player`.
    /// `from` itself is never counted.
    pub fn run_length(&self, from: Position, dir: Direction, player: Player, max_steps: u8) -> u8 {
        let mine = Cell::from(player);
        let mut count = 0;
        for step in 1..=max_steps as i8 {
            let pos = from.offset(dir, step);
            match self.get(pos.x, pos.y) {
                Some(cell) if cell == mine => count += 1,
                _ => break,
            }
        }
        count
    }

    /// Iterate rows top to bottom as cell slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        let used = (self.width as usize) * (self.height as usize);
        self.cells[..used].chunks(self.width as usize)
    }

    /// Build a board from text rows (top row first): `o`, `x`, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(config: &GameConfig, rows: &[&str]) -> Self {
        assert_eq!(rows.len(), config.height() as usize);
        let mut board = Self::new(config);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), config.width() as usize);
            for (x, ch) in row.chars().enumerate() {
                let player = match ch {
                    'o' => Player::Player1,
                    'x' => Player::Player2,
                    _ => continue,
                };
                board.place(Position::new(x as i8, y as i8), player);
            }
        }
        board
    }
}

/// One line per row, stones as `o`/`x` and blanks for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> GameConfig {
        GameConfig::new(3, 2, 2).unwrap()
    }

    #[test]
    fn test_board_index_uses_configured_width() {
        let board = Board::new(&small());
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(2, 0), Some(2));
        assert_eq!(board.index(0, 1), Some(3));
        assert_eq!(board.index(2, 1), Some(5));
        assert_eq!(board.index(3, 0), None);
        assert_eq!(board.index(0, 2), None);
        assert_eq!(board.index(-1, 0), None);
    }

    #[test]
    fn test_landing_row_fills_bottom_up() {
        let config = small();
        let mut board = Board::new(&config);
        assert_eq!(board.landing_row(1), Some(1));

        assert!(board.place(Position::new(1, 1), Player::Player1));
        assert_eq!(board.landing_row(1), Some(0));

        assert!(board.place(Position::new(1, 0), Player::Player2));
        assert_eq!(board.landing_row(1), None);
        assert!(board.is_column_full(1));
        assert!(!board.is_column_full(0));
        assert_eq!(board.landing_row(3), None);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new(&small());
        let pos = Position::new(0, 1);
        assert!(board.place(pos, Player::Player1));
        assert!(!board.place(pos, Player::Player2));
        assert_eq!(board.get(0, 1), Some(Cell::Player1));
        assert!(!board.place(Position::new(5, 5), Player::Player1));
    }

    #[test]
    fn test_run_length_stops_at_gap_edge_and_limit() {
        let config = GameConfig::default();
        let board = Board::from_rows(&config, &["    ", "    ", "    ", "ooxo"]);
        let right = Direction::new(1, 0);
        let left = right.negated();

        assert_eq!(board.run_length(Position::new(0, 3), right, Player::Player1, 4), 1);
        assert_eq!(board.run_length(Position::new(0, 3), left, Player::Player1, 4), 0);
        assert_eq!(board.run_length(Position::new(3, 3), left, Player::Player2, 4), 1);

        let full = Board::from_rows(&config, &["    ", "    ", "    ", "oooo"]);
        assert_eq!(full.run_length(Position::new(0, 3), right, Player::Player1, 4), 3);
        assert_eq!(full.run_length(Position::new(0, 3), right, Player::Player1, 2), 2);
    }

    #[test]
    fn test_display_renders_rows() {
        let config = small();
        let board = Board::from_rows(&config, &["  x", "o x"]);
        assert_eq!(board.to_string(), "  x\no x\n");
        assert_eq!(board.empty_count(), 3);
    }
}
