//! Game state module - board, turn order and outcome
//!
//! `GameState` owns the board and is mutated only through
//! [`GameState::apply_move`]. Every move is validated completely before the
//! board is touched, so a rejected move leaves the state exactly as it was.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::types::{Cell, Outcome, Player, Position, AXES, MAX_DIMENSION};

/// Upper bound on the length of a line of stones
pub const MAX_LINE: usize = MAX_DIMENSION as usize;

/// Positions of the stones forming a winning line, in board order
pub type WinningLine = ArrayVec<Position, MAX_LINE>;

/// Where a move landed and what it led to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// 1-based column as supplied by the caller
    pub column: u32,
    pub position: Position,
    pub player: Player,
    pub outcome: Outcome,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    to_move: Player,
    empty_cells: u16,
    outcome: Outcome,
    last_placement: Option<Placement>,
    winning_line: WinningLine,
    moves_played: u16,
    /// Monotonic game counter (increments on restart).
    episode_id: u32,
}

impl GameState {
    /// Fresh game: empty board, Player1 to move
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::new(&config),
            to_move: Player::Player1,
            empty_cells: config.cell_count(),
            outcome: Outcome::InProgress,
            last_placement: None,
            winning_line: WinningLine::new(),
            moves_played: 0,
            episode_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at (x, y), None if out of bounds
    pub fn cell(&self, x: i8, y: i8) -> Option<Cell> {
        self.board.get(x, y)
    }

    /// The player whose stone the next accepted move places
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn empty_cells(&self) -> u16 {
        self.empty_cells
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Stones of the winning line; empty unless the game was won
    pub fn winning_line(&self) -> &[Position] {
        &self.winning_line
    }

    pub fn moves_played(&self) -> u16 {
        self.moves_played
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// 1-based columns that can still take a stone
    pub fn legal_columns(&self) -> ArrayVec<u32, MAX_LINE> {
        if self.is_over() {
            return ArrayVec::new();
        }
        (0..self.config.width())
            .filter(|&x| !self.board.is_column_full(x))
            .map(|x| u32::from(x) + 1)
            .collect()
    }

    /// Start over with the same configuration
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        *self = Self::new(self.config);
        self.episode_id = next_episode;
        debug!("restarted, episode {}", self.episode_id);
    }

    /// Drop the next player's stone into a 1-based column.
    ///
    /// Checks, in order: the game is not over, the board is not full, the
    /// column is within `1..=width`, the column has room. Any failure is
    /// returned without changing the state. On success the stone lands on the
    /// lowest empty row, the turn passes to the other player and the outcome
    /// is re-evaluated.
    pub fn apply_move(&mut self, column: u32) -> Result<Placement, MoveError> {
        let position = match self.validate_move(column) {
            Ok(position) => position,
            Err(err) => {
                debug!("rejected move in column {column}: {err}");
                return Err(err);
            }
        };

        let player = self.to_move;
        let placed = self.board.place(position, player);
        debug_assert!(placed, "validated landing cell must be empty");

        self.empty_cells -= 1;
        self.moves_played += 1;
        self.to_move = player.other();

        if let Some(line) = self.find_line(position, player) {
            self.outcome = Outcome::Win(player);
            self.winning_line = line;
            info!("{player} wins after {} moves", self.moves_played);
        } else if self.empty_cells == 0 {
            self.outcome = Outcome::Draw;
            info!("board full after {} moves, draw", self.moves_played);
        }

        let placement = Placement {
            column,
            position,
            player,
            outcome: self.outcome,
        };
        self.last_placement = Some(placement);
        debug!(
            "{player} dropped into column {column} at ({}, {})\n{}",
            position.x, position.y, self.board
        );
        Ok(placement)
    }

    fn validate_move(&self, column: u32) -> Result<Position, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver(self.outcome));
        }
        if self.empty_cells == 0 {
            return Err(MoveError::BoardFull);
        }

        let width = self.config.width();
        if column < 1 || column > u32::from(width) {
            return Err(MoveError::ColumnOutOfRange { column, width });
        }

        let x = (column - 1) as u8;
        let y = self
            .board
            .landing_row(x)
            .ok_or(MoveError::ColumnFull { column })?;
        Ok(Position::new(x as i8, y))
    }

    /// Look for a line of at least `win_count` stones through `pivot`.
    ///
    /// Each axis starts its count at 1 for the pivot and adds the runs found
    /// along the base vector and along its negation.
    fn find_line(&self, pivot: Position, player: Player) -> Option<WinningLine> {
        let win_count = self.config.win_count();
        for axis in AXES {
            let forward = self.board.run_length(pivot, axis, player, win_count);
            let backward = self
                .board
                .run_length(pivot, axis.negated(), player, win_count);
            let count = 1 + forward + backward;
            if count >= win_count {
                let start = pivot.offset(axis.negated(), backward as i8);
                return Some((0..count as i8).map(|i| start.offset(axis, i)).collect());
            }
        }
        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
