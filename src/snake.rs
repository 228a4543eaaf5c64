use std::collections::VecDeque;

use crate::grid::{Cell, GridSize};

/// Canonical movement directions in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit vector `(dx, dy)` for this direction.
    #[must_use]
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Snake body plus the committed and queued movement directions.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    queued: Option<Direction>,
}

impl Snake {
    /// Creates a one-cell snake at `start` heading in `direction`.
    #[must_use]
    pub fn new(start: Cell, direction: Direction) -> Self {
        Self::from_segments(vec![start], direction)
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            queued: None,
        }
    }

    /// Queues a direction for the next tick, last request wins.
    ///
    /// The reversal guard compares against the committed direction, so a
    /// pending turn never makes its own reverse legal before it is applied.
    /// Returns whether the request was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }

        self.queued = Some(direction);
        true
    }

    /// Promotes the queued direction, if any, to the committed direction.
    pub fn commit_queued_direction(&mut self) {
        if let Some(direction) = self.queued.take() {
            self.direction = direction;
        }
    }

    /// Returns where the head lands after one move in the committed direction.
    #[must_use]
    pub fn next_head(&self, size: GridSize) -> Cell {
        self.head().offset(self.direction).wrapped(size)
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    /// Drops the tail segment. The last remaining segment is never removed.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() > 1 {
            self.body.pop_back()
        } else {
            None
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; kept for parity with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the committed movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the direction waiting to be committed on the next tick.
    #[must_use]
    pub fn queued_direction(&self) -> Option<Direction> {
        self.queued
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}
