//! Randomized depth-first maze carving

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::Grid;

/// Room-to-room offsets: north, south, west, east.
const DIRECTIONS: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

/// Carves a perfect maze into a [`Grid`] with iterative depth-first search.
///
/// Rooms sit on odd coordinates; every newly visited room opens exactly one
/// connector back towards the path, so the carved room graph is a spanning
/// tree. The entrance is opened on the west or north boundary next to the
/// start room and the exit on the south boundary.
pub struct MazeBuilder<R = StdRng> {
    rng: R,
}

impl MazeBuilder<StdRng> {
    /// Builder with its own RNG, seeded for reproducible mazes or from
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

impl<R: Rng> MazeBuilder<R> {
    /// Builder over a caller-supplied random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a maze starting from the room (`start_x`, `start_y`).
    ///
    /// Both start coordinates must be odd and lie within the interior
    /// [1, width-2] x [1, height-2]; otherwise `InvalidStart` is returned
    /// and the grid is untouched.
    ///
    /// Returns the goal as (row, col) = (height - 2, exit column), the
    /// convention downstream consumers expect. Note the axis swap relative
    /// to the grid's (x, y) addressing.
    pub fn build(
        &mut self,
        grid: &mut Grid,
        start_x: usize,
        start_y: usize,
    ) -> Result<(usize, usize), MazeError> {
        let (width, height) = (grid.width(), grid.height());
        if start_x % 2 == 0 || start_y % 2 == 0 || start_x > width - 2 || start_y > height - 2 {
            return Err(MazeError::InvalidStart {
                x: start_x,
                y: start_y,
            });
        }

        // Visited rooms, keyed by linearized cell index. Local to this call.
        let mut visited = vec![false; width * height];
        let idx = |x: usize, y: usize| x * height + y;

        let mut stack = vec![(start_x, start_y)];
        visited[idx(start_x, start_y)] = true;
        grid.carve_cell(start_x, start_y, true);

        while let Some(&(x, y)) = stack.last() {
            let candidates: Vec<(isize, isize)> = DIRECTIONS
                .iter()
                .copied()
                .filter(|&(dx, dy)| {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    nx >= 1
                        && nx <= (width - 2) as isize
                        && ny >= 1
                        && ny <= (height - 2) as isize
                        && !visited[idx(nx as usize, ny as usize)]
                })
                .collect();

            match candidates.choose(&mut self.rng) {
                // Dead end on the carving path: backtrack.
                None => {
                    stack.pop();
                }
                Some(&(dx, dy)) => {
                    let nx = (x as isize + dx) as usize;
                    let ny = (y as isize + dy) as usize;
                    // Open the connector, then the room behind it.
                    grid.carve_cell((x as isize + dx / 2) as usize, (y as isize + dy / 2) as usize, false);
                    grid.carve_cell(nx, ny, false);
                    visited[idx(nx, ny)] = true;
                    stack.push((nx, ny));
                }
            }
        }

        // Exit on the south boundary at a random odd column; the room above
        // it is already open.
        let exit_x = 1 + 2 * self.rng.gen_range(0..(width - 1) / 2);
        grid.carve_cell(exit_x, height - 1, false);
        Ok((height - 2, exit_x))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashSet, VecDeque};

    use super::*;

    fn built(width: usize, height: usize, seed: u64) -> (Grid, (usize, usize)) {
        let mut grid = Grid::new(width, height).unwrap();
        let goal = MazeBuilder::new(Some(seed))
            .build(&mut grid, 1, 1)
            .unwrap();
        (grid, goal)
    }

    /// All open cells reachable from `start` through open 4-neighbors.
    fn reachable(grid: &Grid, start: (usize, usize)) -> HashSet<(usize, usize)> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some((x, y)) = queue.pop_front() {
            for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                if nx < 0
                    || ny < 0
                    || nx >= grid.width() as isize
                    || ny >= grid.height() as isize
                {
                    continue;
                }
                let next = (nx as usize, ny as usize);
                if grid.is_empty(next.0, next.1).unwrap() && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn rejects_even_or_out_of_range_start() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut builder = MazeBuilder::new(Some(0));
        assert_eq!(
            builder.build(&mut grid, 2, 1).unwrap_err(),
            MazeError::InvalidStart { x: 2, y: 1 }
        );
        assert!(builder.build(&mut grid, 1, 2).is_err());
        assert!(builder.build(&mut grid, 5, 1).is_err());
        // Failed validation must not have carved anything.
        assert!(grid.to_binary_matrix().iter().flatten().all(|&b| b == 1));
    }

    #[test]
    fn every_room_is_reachable_from_start() {
        for seed in 0..5 {
            let (grid, _) = built(11, 9, seed);
            let seen = reachable(&grid, (1, 1));
            for x in (1..10).step_by(2) {
                for y in (1..8).step_by(2) {
                    assert!(grid.is_empty(x, y).unwrap(), "room ({x}, {y}) walled");
                    assert!(seen.contains(&(x, y)), "room ({x}, {y}) unreachable");
                }
            }
        }
    }

    #[test]
    fn carved_connectors_form_a_spanning_tree() {
        for seed in 0..5 {
            let (grid, _) = built(13, 13, seed);
            let rooms = 6 * 6;
            let connectors = (1..12)
                .flat_map(|x| (1..12).map(move |y| (x, y)))
                .filter(|&(x, y)| (x % 2 == 0 || y % 2 == 0) && grid.is_empty(x, y).unwrap())
                .count();
            assert_eq!(connectors, rooms - 1);
        }
    }

    #[test]
    fn five_by_five_goal_row_and_column() {
        for seed in 0..10 {
            let (grid, (row, col)) = built(5, 5, seed);
            assert_eq!(row, 3);
            assert!(col == 1 || col == 3);
            assert!(grid.is_empty(col, 4).unwrap());
            let open = grid
                .to_binary_matrix()
                .iter()
                .flatten()
                .filter(|&&b| b == 0)
                .count();
            assert_eq!(reachable(&grid, (1, 1)).len(), open);
        }
    }

    #[test]
    fn three_by_three_is_a_single_room_maze() {
        let (grid, goal) = built(3, 3, 42);
        assert_eq!(goal, (1, 1));
        assert!(grid.is_empty(1, 1).unwrap());
        // Exit on the south boundary at x = 1.
        assert!(grid.is_empty(1, 2).unwrap());
        // Entrance on the north or west boundary.
        assert!(grid.is_empty(1, 0).unwrap() || grid.is_empty(0, 1).unwrap());
    }

    #[test]
    fn identical_seeds_build_identical_mazes() {
        let (a, goal_a) = built(21, 21, 7);
        let (b, goal_b) = built(21, 21, 7);
        assert_eq!(goal_a, goal_b);
        assert_eq!(a.to_binary_matrix(), b.to_binary_matrix());
    }

    #[test]
    fn boundary_stays_walled_except_entrance_and_exit() {
        let (grid, _) = built(9, 9, 3);
        let open_boundary: Vec<(usize, usize)> = (0..9)
            .flat_map(|x| (0..9).map(move |y| (x, y)))
            .filter(|&(x, y)| x == 0 || y == 0 || x == 8 || y == 8)
            .filter(|&(x, y)| grid.is_empty(x, y).unwrap())
            .collect();
        assert_eq!(open_boundary.len(), 2);
    }
}
