use crate::config::MIN_CORE_GRID_SIZE;
use crate::snake::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`, without wrapping.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns this cell wrapped onto the torus on both axes.
    #[must_use]
    pub fn wrapped(self, size: GridSize) -> Self {
        Self {
            x: wrap(self.x, size.side()),
            y: wrap(self.y, size.side()),
        }
    }

    /// Returns true when both coordinates lie in `0..size`.
    #[must_use]
    pub fn is_inside(self, size: GridSize) -> bool {
        let side = i32::from(size.side());
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }
}

/// Wraps `coord` into `0..size`, also for negative input.
#[must_use]
pub fn wrap(coord: i32, size: u16) -> i32 {
    coord.rem_euclid(i32::from(size))
}

/// Side length of the square, toroidal play field.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize(u16);

impl GridSize {
    /// Creates a grid size, raising anything below the representable minimum.
    #[must_use]
    pub fn new(side: u16) -> Self {
        Self(side.max(MIN_CORE_GRID_SIZE))
    }

    #[must_use]
    pub fn side(self) -> u16 {
        self.0
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Returns the starting cell for a fresh snake.
    #[must_use]
    pub fn center(self) -> Cell {
        let mid = i32::from(self.0 / 2);
        Cell::new(mid, mid)
    }

    /// Iterates every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let side = i32::from(self.0);
        (0..side).flat_map(move |y| (0..side).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, GridSize, wrap};
    use crate::snake::Direction;

    #[test]
    fn wrap_handles_both_edges() {
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(4, 10), 4);
        assert_eq!(wrap(-21, 10), 9);
    }

    #[test]
    fn offset_then_wrap_stays_inside() {
        let size = GridSize::new(10);
        let cell = Cell::new(0, 0).offset(Direction::Left).wrapped(size);

        assert_eq!(cell, Cell::new(9, 0));
        assert!(cell.is_inside(size));

        let cell = Cell::new(3, 9).offset(Direction::Down).wrapped(size);
        assert_eq!(cell, Cell::new(3, 0));
    }

    #[test]
    fn grid_size_never_drops_below_two() {
        assert_eq!(GridSize::new(0).side(), 2);
        assert_eq!(GridSize::new(1).side(), 2);
        assert_eq!(GridSize::new(7).side(), 7);
    }

    #[test]
    fn cells_cover_the_whole_grid_once() {
        let size = GridSize::new(4);
        let cells: Vec<_> = size.cells().collect();

        assert_eq!(cells.len(), size.total_cells());
        assert_eq!(cells.first(), Some(&Cell::new(0, 0)));
        assert_eq!(cells.last(), Some(&Cell::new(3, 3)));
    }

    #[test]
    fn center_rounds_down() {
        assert_eq!(GridSize::new(20).center(), Cell::new(10, 10));
        assert_eq!(GridSize::new(5).center(), Cell::new(2, 2));
    }
}
