use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::config::{MAX_GRID_SIZE, MIN_GRID_SIZE, SWIPE_THRESHOLD};
use crate::game::{Command, Speed};
use crate::grid::GridSize;
use crate::snake::Direction;

/// High-level input events produced from raw terminal events.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputAction {
    Command(Command),
    Quit,
}

/// Maps a key press to an action. Speed and grid keys step relative to
/// the values currently in effect.
#[must_use]
pub fn map_key(key: KeyEvent, speed: Speed, grid: GridSize) -> Option<InputAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Command::RequestDirection(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Command::RequestDirection(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Command::RequestDirection(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => Command::RequestDirection(Direction::Right),
        KeyCode::Char(' ') | KeyCode::Esc => Command::TogglePause,
        KeyCode::Enter => Command::Restart,
        KeyCode::Char('+' | '=') => {
            Command::SetSpeed(speed.multiplier().saturating_add(1))
        }
        KeyCode::Char('-' | '_') => {
            Command::SetSpeed(speed.multiplier().saturating_sub(1))
        }
        KeyCode::Char(']') => Command::Resize(step_grid(grid.side(), 1)),
        KeyCode::Char('[') => Command::Resize(step_grid(grid.side(), -1)),
        KeyCode::Char('q' | 'Q') => return Some(InputAction::Quit),
        _ => return None,
    };

    Some(InputAction::Command(command))
}

fn step_grid(side: u16, delta: i32) -> u16 {
    let next = (i32::from(side) + delta).clamp(i32::from(MIN_GRID_SIZE), i32::from(MAX_GRID_SIZE));
    u16::try_from(next).unwrap_or(MIN_GRID_SIZE)
}

/// Turns a drag vector (columns, rows) into a direction.
///
/// Rows count double since terminal cells are about twice as tall as wide.
/// Drags shorter than the threshold on both axes are ignored.
#[must_use]
pub fn classify_swipe(dx: i32, dy: i32) -> Option<Direction> {
    let ax = dx.abs();
    let ay = dy.abs() * 2;

    if ax.max(ay) < SWIPE_THRESHOLD {
        return None;
    }

    if ax > ay {
        Some(if dx > 0 {
            Direction::Right
        } else {
            Direction::Left
        })
    } else {
        Some(if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

/// Tracks a left-button drag from press to release.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
}

impl SwipeTracker {
    /// Feeds one mouse event; returns a direction when a drag completes.
    pub fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Direction> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((mouse.column, mouse.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (sx, sy) = self.start.take()?;
                classify_swipe(
                    i32::from(mouse.column) - i32::from(sx),
                    i32::from(mouse.row) - i32::from(sy),
                )
            }
            _ => None,
        }
    }
}

/// Reads terminal events and converts them into actions.
#[derive(Debug, Default)]
pub struct InputHandler {
    swipe: SwipeTracker,
}

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits up to `timeout` for the first event, then drains whatever else
    /// is already pending into `actions`.
    pub fn poll_actions(
        &mut self,
        timeout: Duration,
        speed: Speed,
        grid: GridSize,
        actions: &mut Vec<InputAction>,
    ) -> io::Result<()> {
        let mut wait = timeout;

        while event::poll(wait)? {
            if let Some(action) = self.translate(event::read()?, speed, grid) {
                actions.push(action);
            }
            wait = Duration::ZERO;
        }

        Ok(())
    }

    fn translate(&mut self, event: Event, speed: Speed, grid: GridSize) -> Option<InputAction> {
        match event {
            Event::Key(key) => map_key(key, speed, grid),
            Event::Mouse(mouse) => self
                .swipe
                .on_mouse(mouse)
                .map(|direction| InputAction::Command(Command::RequestDirection(direction))),
            _ => None,
        }
    }
}
