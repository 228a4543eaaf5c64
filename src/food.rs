use rand::Rng;

use crate::grid::{Cell, GridSize};
use crate::snake::Snake;

/// Picks a cell uniformly from those not occupied by the snake.
///
/// Returns `None` when the snake covers the whole grid.
#[must_use]
pub fn place_food<R: Rng + ?Sized>(rng: &mut R, snake: &Snake, size: GridSize) -> Option<Cell> {
    let candidates: Vec<Cell> = size.cells().filter(|cell| !snake.occupies(*cell)).collect();

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
