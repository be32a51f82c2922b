//! Deadend detection and probabilistic braiding

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::Grid;

/// Scans a finished maze for deadends.
pub struct DeadendFinder<'a> {
    grid: &'a Grid,
}

impl<'a> DeadendFinder<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    /// Collect every interior open cell with exactly one open neighbor.
    ///
    /// The result is a snapshot at call time; callers must not rely on its
    /// order.
    pub fn scan(&self) -> Vec<(usize, usize)> {
        let mut deadends = Vec::new();
        for x in 1..self.grid.width() - 1 {
            for y in 1..self.grid.height() - 1 {
                if self.grid.open_at(x, y) && self.grid.count_open_neighbors(x, y) == 1 {
                    deadends.push((x, y));
                }
            }
        }
        deadends
    }
}

/// Opens deadends of a perfect maze into loops.
///
/// Braiding runs a single pass over a shuffled snapshot of the current
/// deadends; each one is culled with the given probability by carving one of
/// its wall neighbors, which joins the deadend corridor to the corridor
/// behind the wall.
pub struct Braider<R = StdRng> {
    rng: R,
}

impl Braider<StdRng> {
    /// Braider with its own RNG, seeded for reproducible outcomes or from
    /// entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: match seed {
                Some(state) => StdRng::seed_from_u64(state),
                None => StdRng::from_entropy(),
            },
        }
    }
}

impl<R: Rng> Braider<R> {
    /// Braider over a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Cull deadends with probability `p`, carving one wall neighbor each.
    ///
    /// `p` must lie in [0, 1]; `braid(0.0)` leaves the grid untouched and
    /// `braid(1.0)` removes every deadend that still has a legal wall
    /// neighbor when it is processed. A deadend whose wall neighbors are all
    /// too close to the boundary is left as is. Effects of a carve on other
    /// deadends are not reprocessed within the same pass.
    pub fn braid(&mut self, grid: &mut Grid, p: f64) -> Result<(), MazeError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(MazeError::InvalidProbability(p));
        }

        let mut deadends = DeadendFinder::new(grid).scan();
        deadends.shuffle(&mut self.rng);

        for (x, y) in deadends {
            // An earlier carve in this pass may already have opened this
            // cell up; skip without drawing.
            if grid.count_open_neighbors(x, y) > 1 {
                continue;
            }
            if !self.rng.gen_bool(p) {
                continue;
            }
            if let Some(&(cx, cy)) = self.wall_neighbors(grid, x, y).choose(&mut self.rng) {
                grid.carve_cell(cx, cy, false);
            }
        }
        Ok(())
    }

    /// Wall neighbors of (x, y) eligible for carving.
    ///
    /// The margins keep the carve away from the boundary wall. They are kept
    /// exactly as the carving interior bounds dictate per direction: north
    /// and west require the neighbor at row/column 2 or deeper, south and
    /// east stop two rooms short of the far edge.
    fn wall_neighbors(&self, grid: &Grid, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut neighbors = Vec::new();
        if y >= 3 && grid.wall_at(x, y - 1) {
            neighbors.push((x, y - 1));
        }
        if y + 4 <= grid.height() && grid.wall_at(x, y + 1) {
            neighbors.push((x, y + 1));
        }
        if x >= 3 && grid.wall_at(x - 1, y) {
            neighbors.push((x - 1, y));
        }
        if x + 4 <= grid.width() && grid.wall_at(x + 1, y) {
            neighbors.push((x + 1, y));
        }
        neighbors
    }
}
