//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game. It has **no dependencies** on
//! terminals, input devices or I/O: a presentation layer feeds it column
//! choices and reads back the board, the player to move and the outcome.
//!
//! # Module Structure
//!
//! - [`board`]: flat-array grid with gravity and line scanning
//! - [`config`]: validated board dimensions and win length
//! - [`error`]: move and configuration errors
//! - [`game_state`]: turn order, move validation and win/draw detection
//!
//! # Game Rules
//!
//! - Players alternate, Player1 (`o`) opens
//! - A stone dropped into a column falls to the lowest empty row
//! - A line of `win_count` stones (horizontal, vertical or diagonal) through
//!   the stone just placed wins immediately
//! - Filling the last cell without a line is a draw
//! - After a win or draw every move is refused until a new game starts
//!
//! # Example
//!
//! ```
//! use tui_connect_four_core::{new_game, MoveError};
//! use tui_connect_four_core::types::{Outcome, Player};
//!
//! let mut game = new_game();
//! for column in [1, 2, 1, 2, 1, 2] {
//!     game.apply_move(column).unwrap();
//! }
//! let placement = game.apply_move(1).unwrap();
//! assert_eq!(placement.outcome, Outcome::Win(Player::Player1));
//!
//! assert_eq!(
//!     game.apply_move(3),
//!     Err(MoveError::GameOver(Outcome::Win(Player::Player1)))
//! );
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;

pub use tui_connect_four_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, MoveError};
pub use game_state::{GameState, Placement, WinningLine, MAX_LINE};

/// Fresh game on the default board with Player1 to move
pub fn new_game() -> GameState {
    GameState::default()
}
