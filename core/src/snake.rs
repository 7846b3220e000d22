//! Grid snake. Independent of the fight; shares only `Status` and the RNG shape.
//!
//! Randomness is injected as `FnMut() -> f64` returning values in [0, 1), so
//! callers pick between a seeded `LcgRng` and anything else.

use serde::{Deserialize, Serialize};

use crate::constants::SNAKE_DEFAULT_GRID;
use crate::types::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnakeState {
    pub grid_size: i32,
    /// Head first.
    pub snake: Vec<Cell>,
    pub dir: Direction,
    pub pending_dir: Direction,
    /// None once the board is full.
    pub food: Option<Cell>,
    pub score: u32,
    pub status: Status,
}

pub fn create_snake_state(grid_size: i32, rng: impl FnMut() -> f64) -> SnakeState {
    let mid = grid_size / 2;
    let snake = vec![
        Cell { x: mid + 1, y: mid },
        Cell { x: mid, y: mid },
        Cell { x: mid - 1, y: mid },
    ];
    let food = place_food(grid_size, &snake, rng);
    SnakeState {
        grid_size,
        snake,
        dir: Direction::Right,
        pending_dir: Direction::Right,
        food,
        score: 0,
        status: Status::Ready,
    }
}

pub fn create_default_snake_state(rng: impl FnMut() -> f64) -> SnakeState {
    create_snake_state(SNAKE_DEFAULT_GRID, rng)
}

pub fn start_snake(state: &SnakeState) -> SnakeState {
    if state.status != Status::Ready {
        return state.clone();
    }
    SnakeState {
        status: Status::Running,
        ..state.clone()
    }
}

pub fn is_opposite(a: Direction, b: Direction) -> bool {
    use Direction::*;
    matches!(
        (a, b),
        (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
    )
}

pub fn next_head(head: Cell, dir: Direction) -> Cell {
    match dir {
        Direction::Up => Cell { x: head.x, y: head.y - 1 },
        Direction::Down => Cell { x: head.x, y: head.y + 1 },
        Direction::Left => Cell { x: head.x - 1, y: head.y },
        Direction::Right => Cell { x: head.x + 1, y: head.y },
    }
}

pub fn is_out_of_bounds(pos: Cell, grid_size: i32) -> bool {
    pos.x < 0 || pos.y < 0 || pos.x >= grid_size || pos.y >= grid_size
}

/// With `ignore_tail`, the last segment doesn't count: it moves out of the
/// way on the same step.
pub fn is_on_snake(pos: Cell, snake: &[Cell], ignore_tail: bool) -> bool {
    let limit = if ignore_tail {
        snake.len().saturating_sub(1)
    } else {
        snake.len()
    };
    snake[..limit].contains(&pos)
}

/// Uniform pick among free cells in row-major order.
pub fn place_food(grid_size: i32, snake: &[Cell], mut rng: impl FnMut() -> f64) -> Option<Cell> {
    let free: Vec<Cell> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Cell { x, y }))
        .filter(|c| !is_on_snake(*c, snake, false))
        .collect();
    if free.is_empty() {
        return None;
    }
    let idx = ((rng() * free.len() as f64).floor() as usize).min(free.len() - 1);
    Some(free[idx])
}

/// Advance one cell. Only a running game moves; reversing into the neck is
/// ignored and the snake keeps its heading.
pub fn step_snake(
    state: &SnakeState,
    input_dir: Direction,
    rng: impl FnMut() -> f64,
) -> SnakeState {
    if state.status != Status::Running {
        return state.clone();
    }
    let Some(&head) = state.snake.first() else {
        return SnakeState {
            status: Status::GameOver,
            ..state.clone()
        };
    };

    let dir = if is_opposite(state.dir, input_dir) {
        state.dir
    } else {
        input_dir
    };
    let next = next_head(head, dir);

    let eats = state.food == Some(next);
    let hits_body = is_on_snake(next, &state.snake, !eats);

    if is_out_of_bounds(next, state.grid_size) || hits_body {
        return SnakeState {
            dir,
            status: Status::GameOver,
            ..state.clone()
        };
    }

    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(next);
    snake.extend_from_slice(&state.snake);
    if !eats {
        snake.pop();
    }

    let mut food = state.food;
    let mut score = state.score;
    let mut status = state.status;
    if eats {
        score += 1;
        food = place_food(state.grid_size, &snake, rng);
        if food.is_none() {
            status = Status::GameOver;
        }
    }

    SnakeState {
        grid_size: state.grid_size,
        snake,
        dir,
        pending_dir: dir,
        food,
        score,
        status,
    }
}

/// Queue a turn for the next step, unless it reverses the queued heading.
pub fn with_pending_dir(state: &SnakeState, next_dir: Direction) -> SnakeState {
    if state.status == Status::GameOver || is_opposite(state.pending_dir, next_dir) {
        return state.clone();
    }
    SnakeState {
        pending_dir: next_dir,
        ..state.clone()
    }
}
