use crate::options::GridSize;

/// A position on the grid.  Coordinates are signed so that a head which has
/// just run off the edge can still be represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) struct Cell {
    pub(super) x: i32,
    pub(super) y: i32,
}

impl Cell {
    pub(super) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    /// Is the cell inside a square grid of side `size`?
    pub(super) fn in_grid(self, size: GridSize) -> bool {
        let side = i32::from(size.get());
        (0..side).contains(&self.x) && (0..side).contains(&self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Cell {
        Cell { x, y }
    }
}

/// Iterate over every cell of a square grid of side `size`, row by row
pub(super) fn grid_cells(size: GridSize) -> impl Iterator<Item = Cell> {
    let side = i32::from(size.get());
    (0..side).flat_map(move |y| (0..side).map(move |x| Cell { x, y }))
}
