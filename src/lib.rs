//! TUI Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic (game module): a deterministic, immutable-snapshot engine
//! - Key decoding (input module)
//! - TUI layout and drawing (render module)
//! - The interactive terminal host (modes module)

pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
