use std::collections::HashSet;

use rand::rngs::ThreadRng;
use tracing::debug;

use super::{
    action::Direction,
    config::GameOptions,
    rng::RandomSource,
    state::{CollisionType, GameState, Point},
};

/// What a single tick did to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over, nothing changed
    Idle,
    /// Snake advanced one cell
    Moved,
    /// Snake advanced onto the food and grew
    Ate,
    /// Snake ate the last free cell
    Won,
    /// Snake hit a wall or itself
    Collided(CollisionType),
}

/// Build a fresh game: snake centred and facing right, body extending leftward.
///
/// The caller must ensure the board is large enough for `initial_length`;
/// see [`GameOptions::validate`].
pub fn create_initial_state<R>(options: &GameOptions, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    let start_x = (options.width / 2) as i32;
    let start_y = (options.height / 2) as i32;

    let snake: Vec<Point> = (0..options.initial_length)
        .map(|i| Point::new(start_x - i as i32, start_y))
        .collect();

    let food = place_food(options.width, options.height, &snake, rng);

    GameState {
        width: options.width,
        height: options.height,
        snake,
        direction: Direction::Right,
        next_direction: Direction::Right,
        food,
        score: 0,
        game_over: false,
        paused: false,
        won: false,
    }
}

/// Buffer a heading for the next tick. Last write wins.
///
/// Reversing onto the committed heading (not the buffered one) is ignored.
pub fn queue_direction(state: GameState, next: Direction) -> GameState {
    if state.direction.is_opposite(next) {
        return state;
    }

    GameState {
        next_direction: next,
        ..state
    }
}

/// Flip the pause flag; a finished game stays as it is.
pub fn toggle_pause(state: GameState) -> GameState {
    if state.game_over {
        return state;
    }

    GameState {
        paused: !state.paused,
        ..state
    }
}

/// Advance the game by one cell
pub fn tick<R>(state: GameState, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    tick_with_outcome(state, rng).0
}

/// Advance the game by one cell and report what happened
pub fn tick_with_outcome<R>(state: GameState, rng: &mut R) -> (GameState, TickOutcome)
where
    R: RandomSource + ?Sized,
{
    if state.game_over || state.paused {
        return (state, TickOutcome::Idle);
    }
    let Some(head) = state.head() else {
        return (state, TickOutcome::Idle);
    };

    let direction = state.next_direction;
    let next_head = head.moved_in_direction(direction);
    let will_eat = state.food == Some(next_head);

    if let Some(collision) = check_collision(&state, next_head, will_eat) {
        let state = GameState {
            direction,
            game_over: true,
            paused: false,
            ..state
        };
        return (state, TickOutcome::Collided(collision));
    }

    let GameState {
        width,
        height,
        mut snake,
        mut food,
        mut score,
        ..
    } = state;

    snake.insert(0, next_head);
    let mut won = state.won;

    if will_eat {
        score += 1;
        food = place_food(width, height, &snake, rng);
        if food.is_none() {
            won = true;
        }
    } else {
        snake.pop();
    }

    let outcome = match (will_eat, won) {
        (true, true) => TickOutcome::Won,
        (true, false) => TickOutcome::Ate,
        _ => TickOutcome::Moved,
    };

    let next = GameState {
        snake,
        direction,
        next_direction: direction,
        food,
        score,
        won,
        game_over: won || state.game_over,
        ..state
    };

    (next, outcome)
}

/// Pick a free cell for the food, or `None` when the snake covers the board.
///
/// Free cells are enumerated row-major (y outer, x inner) and the one at
/// `floor(rng * count)` is chosen, clamped to the last cell.
pub fn place_food<R>(width: usize, height: usize, snake: &[Point], rng: &mut R) -> Option<Point>
where
    R: RandomSource + ?Sized,
{
    let occupied: HashSet<usize> = snake
        .iter()
        .filter(|p| p.x >= 0 && p.y >= 0 && (p.x as usize) < width && (p.y as usize) < height)
        .map(|p| p.y as usize * width + p.x as usize)
        .collect();

    let empty: Vec<Point> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .filter(|&(x, y)| !occupied.contains(&(y * width + x)))
        .map(|(x, y)| Point::new(x as i32, y as i32))
        .collect();

    if empty.is_empty() {
        return None;
    }

    let scaled = (rng.next_unit() * empty.len() as f64).floor();
    let index = if scaled.is_nan() || scaled < 0.0 {
        0
    } else {
        (scaled as usize).min(empty.len() - 1)
    };
    Some(empty[index])
}

/// Check if moving the head to `next_head` ends the game.
///
/// When eating, the tail stays put this tick, so it still counts as body.
fn check_collision(state: &GameState, next_head: Point, will_eat: bool) -> Option<CollisionType> {
    if !state.is_in_bounds(next_head) {
        return Some(CollisionType::Wall);
    }

    let body = if will_eat {
        &state.snake[..]
    } else {
        &state.snake[..state.snake.len().saturating_sub(1)]
    };
    if body.contains(&next_head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// Host-facing wrapper that owns the game options and a random source, so
/// callers do not have to thread an rng through every call.
pub struct GameEngine<R: RandomSource = ThreadRng> {
    options: GameOptions,
    rng: R,
}

impl GameEngine<ThreadRng> {
    /// Create an engine backed by the thread-local generator
    pub fn new(options: GameOptions) -> Self {
        Self::with_rng(options, rand::thread_rng())
    }
}

impl<R: RandomSource> GameEngine<R> {
    pub fn with_rng(options: GameOptions, rng: R) -> Self {
        Self { options, rng }
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Replace the options used by subsequent resets
    pub fn set_options(&mut self, options: GameOptions) {
        self.options = options;
    }

    /// Start a new game from the current options
    pub fn reset(&mut self) -> GameState {
        create_initial_state(&self.options, &mut self.rng)
    }

    pub fn tick(&mut self, state: GameState) -> GameState {
        self.tick_with_outcome(state).0
    }

    pub fn tick_with_outcome(&mut self, state: GameState) -> (GameState, TickOutcome) {
        let (next, outcome) = tick_with_outcome(state, &mut self.rng);
        match outcome {
            TickOutcome::Idle | TickOutcome::Moved => {}
            TickOutcome::Ate => debug!(score = next.score, len = next.snake.len(), "ate food"),
            TickOutcome::Won => debug!(score = next.score, "board filled"),
            TickOutcome::Collided(kind) => debug!(?kind, score = next.score, "collision"),
        }
        (next, outcome)
    }
}
