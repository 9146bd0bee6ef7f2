//! Host configuration: board size overrides, tick rate and seeding.
//!
//! Values come from an optional JSON file and are then overridden by CLI flags.

use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game::{DEFAULT_INITIAL_LENGTH, GameOptions};
use crate::render::BoardSize;
use crate::render::layout::{MAX_HEIGHT, MAX_WIDTH};

pub const DEFAULT_TICK_MS: u64 = 140;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Fixed board width; derived from the terminal when unset
    pub width: Option<usize>,
    /// Fixed board height; derived from the terminal when unset
    pub height: Option<usize>,
    pub initial_length: usize,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// Seed for food placement; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            initial_length: DEFAULT_INITIAL_LENGTH,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Board for the given terminal, with fixed dimensions taking precedence
    pub fn board_size(&self, columns: u16, rows: u16) -> BoardSize {
        let derived = BoardSize::from_terminal(columns, rows);
        BoardSize::new(
            self.width.unwrap_or(derived.width),
            self.height.unwrap_or(derived.height),
        )
    }

    pub fn game_options(&self, board: BoardSize) -> GameOptions {
        GameOptions::new(board.width, board.height).with_initial_length(self.initial_length)
    }

    /// Rejects settings that cannot produce a playable game on any terminal
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(0);
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(ConfigError::BoardTooLarge {
                width,
                height,
                max_width: MAX_WIDTH,
                max_height: MAX_HEIGHT,
            });
        }
        // A zero-sized terminal yields the smallest board we will ever use.
        self.game_options(self.board_size(0, 0)).validate()
    }
}
