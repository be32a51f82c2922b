//! Wall/empty grid underlying the maze

use crate::error::MazeError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
}

/// Rectangular cell grid with synchronized symbolic and binary views.
///
/// Cells whose coordinates are both odd are *rooms*, the nodes of the maze
/// graph; the interstitial cells are connectors, carved to join two adjacent
/// rooms. Both views are indexed `[x][y]` — consumers that want `[row][col]`
/// must transpose themselves.
///
/// A fresh grid is fully walled. [`crate::MazeBuilder`] carves it into a
/// perfect maze and [`crate::Braider`] may open further walls; readers treat
/// it as immutable after that.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Vec<Cell>>,
    /// Binary mirror of `cells`: 1 = wall, 0 = empty.
    binary: Vec<Vec<u8>>,
}

impl Grid {
    /// Create a fully walled grid.
    ///
    /// Both dimensions must be odd and at least 3, so that the boundary is
    /// all wall and the interior tiles evenly into rooms and connectors.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width % 2 == 0 || height % 2 == 0 || width < 3 || height < 3 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Grid {
            width,
            height,
            cells: vec![vec![Cell::Wall; height]; width],
            binary: vec![vec![1; height]; width],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), MazeError> {
        if x >= self.width || y >= self.height {
            return Err(MazeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Whether the cell is a wall; fails with `OutOfBounds` off the grid.
    pub fn is_wall(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[x][y] == Cell::Wall)
    }

    /// Whether the cell is open; fails with `OutOfBounds` off the grid.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, MazeError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[x][y] == Cell::Empty)
    }

    /// Unchecked open-cell read for in-crate callers that stay in bounds.
    pub(crate) fn open_at(&self, x: usize, y: usize) -> bool {
        self.cells[x][y] == Cell::Empty
    }

    pub(crate) fn wall_at(&self, x: usize, y: usize) -> bool {
        self.cells[x][y] == Cell::Wall
    }

    fn set_empty(&mut self, x: usize, y: usize) {
        self.cells[x][y] = Cell::Empty;
        self.binary[x][y] = 0;
    }

    /// Mark (x, y) empty in both views.
    ///
    /// With `is_entry`, a cell adjacent to the north boundary (y == 1) also
    /// opens the boundary cell (x, 0); otherwise a cell adjacent to the west
    /// boundary (x == 1, y != 1) opens (0, y). The start room (1, 1) thus
    /// opens northwards. Coordinates must be in bounds.
    pub fn carve_cell(&mut self, x: usize, y: usize, is_entry: bool) {
        if is_entry {
            if y == 1 {
                self.set_empty(x, 0);
            } else if x == 1 {
                self.set_empty(0, y);
            }
        }
        self.set_empty(x, y);
    }

    /// Count open cells among the four distance-1 neighbors.
    ///
    /// Callers pass interior cells only; the boundary stays walled by
    /// construction, so no bounds check is needed here.
    pub fn count_open_neighbors(&self, x: usize, y: usize) -> usize {
        [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
            .iter()
            .filter(|&&(nx, ny)| self.cells[nx][ny] == Cell::Empty)
            .count()
    }

    /// Snapshot of the binary view: 1 = wall, 0 = empty, indexed `[x][y]`.
    pub fn to_binary_matrix(&self) -> Vec<Vec<u8>> {
        self.binary.clone()
    }
}
