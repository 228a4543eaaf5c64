use torus_snake::game::{Command, GameState, GameStatus, StepOutcome};
use torus_snake::grid::{Cell, GridSize};
use torus_snake::snake::{Direction, Snake};

#[test]
fn stepwise_food_collection_wrap_and_self_collision() {
    let mut state = GameState::new_with_seed(GridSize::new(6), 42);
    state.snake = Snake::new(Cell::new(4, 1), Direction::Right);
    state.food = Some(Cell::new(5, 1));

    assert!(matches!(state.step(), StepOutcome::Ate { .. }));
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 2);

    // Off the right edge and back in on the left.
    state.food = Some(Cell::new(0, 1));
    assert!(matches!(state.step(), StepOutcome::Ate { .. }));
    assert_eq!(state.snake.head(), Cell::new(0, 1));
    assert_eq!(state.snake.len(), 3);

    state.food = Some(Cell::new(1, 1));
    state.step();
    state.food = Some(Cell::new(3, 3));
    assert_eq!(state.snake.len(), 4);

    // Curl back into the body: down, left, up.
    state.apply_command(Command::RequestDirection(Direction::Down));
    assert_eq!(state.step(), StepOutcome::Moved);
    state.apply_command(Command::RequestDirection(Direction::Left));
    assert_eq!(state.step(), StepOutcome::Moved);
    state.apply_command(Command::RequestDirection(Direction::Up));
    assert_eq!(state.step(), StepOutcome::Died);

    assert_eq!(state.status, GameStatus::Dead);
    assert_eq!(state.high_score, 3);

    state.apply_command(Command::Restart);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.high_score, 3);
}

#[test]
fn same_seed_gives_same_food_sequence() {
    let run = |seed| {
        let mut state = GameState::new_with_seed(GridSize::new(10), seed);
        let mut foods = Vec::new();
        for _ in 0..5 {
            let food = state.food.expect("food present");
            foods.push(food);
            let start = food.offset(Direction::Left).wrapped(state.size());
            state.snake = Snake::new(start, Direction::Right);
            state.step();
        }
        foods
    };

    assert_eq!(run(99), run(99));
}
