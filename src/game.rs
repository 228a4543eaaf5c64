use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{BASE_TICK_INTERVAL, DEFAULT_SPEED, MAX_SPEED, MIN_SPEED};
use crate::food::place_food;
use crate::grid::{Cell, GridSize};
use crate::snake::{Direction, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    Dead,
    /// The snake filled every cell; terminal until restart, like `Dead`.
    Won,
}

impl GameStatus {
    /// Returns true for states that only a restart can leave.
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, Self::Dead | Self::Won)
    }
}

/// Speed multiplier in `MIN_SPEED..=MAX_SPEED`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Speed(u8);

impl Speed {
    /// Creates a speed, clamping the multiplier into the supported range.
    #[must_use]
    pub fn new(multiplier: u8) -> Self {
        Self(multiplier.clamp(MIN_SPEED, MAX_SPEED))
    }

    #[must_use]
    pub fn multiplier(self) -> u8 {
        self.0
    }

    /// Time between two simulation steps at this speed.
    #[must_use]
    pub fn tick_interval(self) -> Duration {
        BASE_TICK_INTERVAL / u32::from(self.0)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

/// Discrete requests from the input bridge, applied between steps.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    RequestDirection(Direction),
    TogglePause,
    Resume,
    Restart,
    SetSpeed(u8),
    Resize(u16),
}

/// What a single call to [`GameState::step`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// Moved one cell, length unchanged.
    Moved,
    /// Ate the food and grew by one.
    Ate { new_high_score: bool },
    /// Hit its own body; the snake was left untouched.
    Died,
    /// Ate the last free cell.
    Won,
}

impl StepOutcome {
    /// Returns true when the high score must be written out after this step.
    #[must_use]
    pub fn persists_high_score(self) -> bool {
        matches!(
            self,
            Self::Ate {
                new_high_score: true
            } | Self::Died
                | Self::Won
        )
    }
}

/// Title and message shown over the board while the game is not running.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Overlay {
    pub title: &'static str,
    pub message: &'static str,
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    /// Always `Some` except after the board has been cleared.
    pub food: Option<Cell>,
    pub score: u32,
    pub high_score: u32,
    pub speed: Speed,
    pub tick_count: u64,
    pub status: GameStatus,
    size: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a running game seeded from system entropy.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self::with_rng(size, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(size: GridSize, seed: u64) -> Self {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    fn with_rng(size: GridSize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(size.center(), Direction::Right),
            food: None,
            score: 0,
            high_score: 0,
            speed: Speed::default(),
            tick_count: 0,
            status: GameStatus::Running,
            size,
            rng,
        };
        state.reset();
        state
    }

    /// Sets the persisted high score this session starts from.
    #[must_use]
    pub fn with_high_score(mut self, high_score: u32) -> Self {
        self.high_score = self.high_score.max(high_score);
        self
    }

    #[must_use]
    pub fn with_speed(mut self, speed: Speed) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Advances the simulation by exactly one tick.
    pub fn step(&mut self) -> StepOutcome {
        if self.status != GameStatus::Running {
            return StepOutcome::Idle;
        }

        self.tick_count += 1;
        self.snake.commit_queued_direction();
        let new_head = self.snake.next_head(self.size);

        // Checked against the body before the tail moves, so entering the
        // cell the tail is about to vacate still counts as a collision.
        if self.snake.occupies(new_head) {
            self.status = GameStatus::Dead;
            self.high_score = self.high_score.max(self.score);
            return StepOutcome::Died;
        }

        self.snake.push_head(new_head);

        if self.food != Some(new_head) {
            self.snake.pop_tail();
            return StepOutcome::Moved;
        }

        self.score += 1;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }

        self.food = place_food(&mut self.rng, &self.snake, self.size);
        if self.food.is_none() {
            self.status = GameStatus::Won;
            return StepOutcome::Won;
        }

        StepOutcome::Ate { new_high_score }
    }

    /// Applies one input command. Returns whether it changed anything.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::RequestDirection(direction) => {
                !self.status.is_over() && self.snake.request_direction(direction)
            }
            Command::TogglePause => match self.status {
                GameStatus::Running => {
                    self.status = GameStatus::Paused;
                    true
                }
                GameStatus::Paused => {
                    self.status = GameStatus::Running;
                    true
                }
                GameStatus::Dead | GameStatus::Won => false,
            },
            Command::Resume => {
                if self.status != GameStatus::Paused {
                    return false;
                }
                self.status = GameStatus::Running;
                true
            }
            Command::Restart => {
                self.reset();
                true
            }
            Command::SetSpeed(multiplier) => {
                let speed = Speed::new(multiplier);
                let changed = speed != self.speed;
                self.speed = speed;
                changed
            }
            Command::Resize(side) => {
                let was_paused = self.status == GameStatus::Paused;
                self.size = GridSize::new(side);
                self.reset();
                if was_paused {
                    self.status = GameStatus::Paused;
                }
                true
            }
        }
    }

    /// Returns the overlay to display for the current status, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<Overlay> {
        match self.status {
            GameStatus::Running => None,
            GameStatus::Paused => Some(Overlay {
                title: "Game Paused",
                message: "Press Space or Esc to resume",
            }),
            GameStatus::Dead => Some(Overlay {
                title: "Game Over",
                message: "Press Enter to restart",
            }),
            GameStatus::Won => Some(Overlay {
                title: "Board Cleared",
                message: "Press Enter to play again",
            }),
        }
    }

    /// Replaces snake, food and score with a fresh running game.
    fn reset(&mut self) {
        self.snake = Snake::new(self.size.center(), Direction::Right);
        self.food = place_food(&mut self.rng, &self.snake, self.size);
        self.score = 0;
        self.tick_count = 0;
        self.status = GameStatus::Running;
    }
}
