//! Core game logic module for Snake
//!
//! Pure state transitions with no I/O or rendering dependencies. Every
//! operation takes a [`GameState`] snapshot by value and returns the next one.

pub mod action;
pub mod config;
pub mod engine;
pub mod rng;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{DEFAULT_INITIAL_LENGTH, GameOptions};
pub use engine::{
    GameEngine, TickOutcome, create_initial_state, place_food, queue_direction, tick,
    tick_with_outcome, toggle_pause,
};
pub use rng::{FnSource, RandomSource, SequenceSource};
pub use state::{CollisionType, GameState, Point};
