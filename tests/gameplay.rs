use rand::SeedableRng;
use rand::rngs::StdRng;
use tui_snake::game::{
    CollisionType, Direction, GameEngine, GameOptions, GameState, Point, SequenceSource,
    TickOutcome, create_initial_state, place_food, queue_direction, tick, tick_with_outcome,
    toggle_pause,
};

fn assert_food_off_snake(state: &GameState) {
    if let Some(food) = state.food {
        assert!(!state.snake.contains(&food), "food {:?} on snake", food);
        assert!(state.is_in_bounds(food));
    }
}

fn assert_no_overlap(state: &GameState) {
    for (i, a) in state.snake.iter().enumerate() {
        assert!(!state.snake[i + 1..].contains(a), "segment {:?} repeated", a);
    }
}

/// Seeded games with periodic turns, checked after every tick.
#[test]
fn random_play_keeps_invariants() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = create_initial_state(&GameOptions::new(10, 8), &mut rng);
        let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

        for step in 0..400 {
            let before_score = state.score;
            let before_len = state.snake.len();

            if step % 7 == 0 {
                state = queue_direction(state, turns[(step / 7) % turns.len()]);
            }
            let (next, outcome) = tick_with_outcome(state, &mut rng);
            state = next;

            assert_food_off_snake(&state);
            assert_no_overlap(&state);
            match outcome {
                TickOutcome::Ate | TickOutcome::Won => {
                    assert_eq!(state.score, before_score + 1);
                    assert_eq!(state.snake.len(), before_len + 1);
                }
                _ => {
                    assert_eq!(state.score, before_score);
                    assert_eq!(state.snake.len(), before_len);
                }
            }

            if state.game_over {
                let frozen = state.clone();
                assert_eq!(tick(state, &mut rng), frozen);
                break;
            }
        }
    }
}

#[test]
fn filling_a_tiny_board_wins() {
    // 3x2 board, snake starts at (1,1),(0,1); food always lands on the first free cell
    let options = GameOptions::new(3, 2).with_initial_length(2);
    let mut rng = SequenceSource::constant(0.0);
    let mut state = create_initial_state(&options, &mut rng);
    assert_eq!(state.snake, vec![Point::new(1, 1), Point::new(0, 1)]);
    assert_eq!(state.food, Some(Point::new(0, 0)));

    let route = [
        (Direction::Up, TickOutcome::Moved),
        (Direction::Left, TickOutcome::Ate),
        (Direction::Down, TickOutcome::Moved),
        (Direction::Right, TickOutcome::Moved),
        (Direction::Right, TickOutcome::Moved),
        (Direction::Up, TickOutcome::Ate),
        (Direction::Left, TickOutcome::Moved),
        (Direction::Left, TickOutcome::Ate),
        (Direction::Down, TickOutcome::Won),
    ];

    for (direction, expected) in route {
        state = queue_direction(state, direction);
        let (next, outcome) = tick_with_outcome(state, &mut rng);
        state = next;
        assert_eq!(outcome, expected, "moving {:?}", direction);
        assert_food_off_snake(&state);
        assert_no_overlap(&state);
    }

    assert!(state.won);
    assert!(state.game_over);
    assert_eq!(state.food, None);
    assert_eq!(state.score, 4);
    assert_eq!(state.snake.len(), 6);

    // a finished game ignores pause and further ticks
    assert_eq!(toggle_pause(state.clone()), state);
    assert_eq!(tick(state.clone(), &mut rng), state);
}

#[test]
fn wall_hit_from_initial_position() {
    let mut engine = GameEngine::with_rng(GameOptions::new(5, 5), SequenceSource::constant(0.0));
    let mut state = engine.reset();
    assert_eq!(state.snake[0], Point::new(2, 2));

    let mut last = TickOutcome::Idle;
    for _ in 0..3 {
        let (next, outcome) = engine.tick_with_outcome(state);
        state = next;
        last = outcome;
    }

    assert_eq!(last, TickOutcome::Collided(CollisionType::Wall));
    assert_eq!(state.snake[0], Point::new(4, 2));
    assert!(state.game_over);
    assert!(!state.won);
}

#[test]
fn food_never_lands_on_snake_for_any_draw() {
    let snake = [Point::new(1, 1), Point::new(1, 2), Point::new(2, 2), Point::new(3, 2)];
    for step in 0..=100 {
        let draw = step as f64 / 100.0;
        let food = place_food(4, 3, &snake, &mut SequenceSource::constant(draw))
            .expect("board has free cells");
        assert!(!snake.contains(&food));
    }
}
