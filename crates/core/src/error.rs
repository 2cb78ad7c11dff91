use crate::types::Outcome;

/// Reasons a move is rejected.
///
/// None of these are fatal: the state is left untouched and the caller can
/// re-prompt. `GameOver` is the only one that needs a new game to recover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("wrong input: {column} (column out of board, expected 1-{width})")]
    ColumnOutOfRange { column: u32, width: u8 },

    #[error("column {column} already full")]
    ColumnFull { column: u32 },

    /// Only reported while the game is still in progress; once a draw has
    /// been declared, moves fail with `GameOver(Outcome::Draw)` instead.
    #[error("no empty fields left - game ends with a draw")]
    BoardFull,

    #[error("game is over ({0}), start a new game")]
    GameOver(Outcome),
}

/// Errors that can occur when building a [`crate::GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },

    #[error("board {width}x{height} exceeds the maximum of {max}x{max}")]
    TooLarge { width: u8, height: u8, max: u8 },

    #[error("win count must be between 1 and {max}, got {win_count}")]
    WinCount { win_count: u8, max: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn move_error_display() {
        let err = MoveError::ColumnOutOfRange {
            column: 5,
            width: 4,
        };
        assert_eq!(
            err.to_string(),
            "wrong input: 5 (column out of board, expected 1-4)"
        );
        assert_eq!(
            MoveError::ColumnFull { column: 2 }.to_string(),
            "column 2 already full"
        );
        assert_eq!(
            MoveError::GameOver(Outcome::Win(Player::Player1)).to_string(),
            "game is over (player 1 (o) won), start a new game"
        );
    }
}
