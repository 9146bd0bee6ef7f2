use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Options for creating a fresh game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOptions {
    /// Width of the board in cells
    pub width: usize,
    /// Height of the board in cells
    pub height: usize,
    /// Number of segments the snake starts with
    #[serde(default = "default_initial_length")]
    pub initial_length: usize,
}

fn default_initial_length() -> usize {
    DEFAULT_INITIAL_LENGTH
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            initial_length: DEFAULT_INITIAL_LENGTH,
        }
    }
}

impl GameOptions {
    /// Create options with a custom board size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_initial_length(mut self, initial_length: usize) -> Self {
        self.initial_length = initial_length;
        self
    }

    /// Checks that a snake created from these options fits on the board.
    ///
    /// The engine never runs this itself; hosts call it before starting a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.initial_length == 0 {
            return Err(ConfigError::EmptySnake);
        }
        // The body extends leftward from the centre column.
        let room = self.width / 2 + 1;
        if self.initial_length > room {
            return Err(ConfigError::SnakeTooLong {
                length: self.initial_length,
                width: self.width,
                max: room,
            });
        }
        Ok(())
    }
}
