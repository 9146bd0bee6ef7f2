use thiserror::Error;

/// Configuration values the game cannot start with
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one cell (got {width}x{height})")]
    EmptyBoard { width: usize, height: usize },

    #[error("snake needs at least one segment")]
    EmptySnake,

    #[error("snake of length {length} does not fit on a board {width} wide (max {max})")]
    SnakeTooLong {
        length: usize,
        width: usize,
        max: usize,
    },

    #[error("board of {width}x{height} exceeds the maximum of {max_width}x{max_height}")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max_width: usize,
        max_height: usize,
    },

    #[error("tick interval must be positive")]
    ZeroTickInterval,
}
