//! Game configuration: board dimensions and the win length.

use crate::error::ConfigError;
use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, DEFAULT_WIN_COUNT, MAX_DIMENSION};

/// Board dimensions and number of stones in a row needed to win.
///
/// A `GameConfig` can only be built through [`GameConfig::new`] or
/// [`Default`], so every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    width: u8,
    height: u8,
    win_count: u8,
}

impl GameConfig {
    /// Build a validated configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_connect_four_core::{ConfigError, GameConfig};
    ///
    /// let config = GameConfig::new(7, 6, 4).unwrap();
    /// assert_eq!(config.cell_count(), 42);
    ///
    /// assert!(matches!(GameConfig::new(0, 6, 4), Err(ConfigError::EmptyBoard { .. })));
    /// ```
    pub fn new(width: u8, height: u8, win_count: u8) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            win_count,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check dimension and win-length bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
                max: MAX_DIMENSION,
            });
        }
        let longest = self.width.max(self.height);
        if self.win_count == 0 || self.win_count > longest {
            return Err(ConfigError::WinCount {
                win_count: self.win_count,
                max: longest,
            });
        }
        Ok(())
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn win_count(&self) -> u8 {
        self.win_count
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> u16 {
        u16::from(self.width) * u16::from(self.height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            win_count: DEFAULT_WIN_COUNT,
        }
    }
}
