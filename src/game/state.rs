use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move point by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move point one cell in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// Complete snapshot of a game.
///
/// Every engine operation consumes a snapshot and returns the next one; nothing
/// is mutated behind the host's back. `snake` is ordered head first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    pub snake: Vec<Point>,
    /// Heading applied on the most recent tick
    pub direction: Direction,
    /// Heading the next tick will apply
    pub next_direction: Direction,
    /// `None` once the snake covers the whole board
    pub food: Option<Point>,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub won: bool,
}

impl GameState {
    /// Head segment, if the snake has any segments at all
    pub fn head(&self) -> Option<Point> {
        self.snake.first().copied()
    }

    /// Check if a point is within the board bounds
    pub fn is_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    /// Check if a point is occupied by any snake segment
    pub fn is_occupied_by_snake(&self, point: Point) -> bool {
        self.snake.contains(&point)
    }
}
