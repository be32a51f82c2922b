//! Grid maze generation with randomized depth-first carving and braiding
//!
//! A [`Grid`] starts fully walled; [`MazeBuilder`] carves a perfect maze
//! into it (a spanning tree over the odd-coordinate rooms) with one entrance
//! and one exit, and [`Braider`] may then open some deadends into loops.
//! Randomness is seeded, so a seed reproduces a maze exactly.
//!
//! # Examples
//! ```
//! use braidmaze::{Braider, DeadendFinder, Grid, MazeBuilder};
//!
//! let mut grid = Grid::new(21, 21)?;
//! let (goal_row, goal_col) = MazeBuilder::new(Some(7)).build(&mut grid, 1, 1)?;
//! assert_eq!(goal_row, 19);
//!
//! Braider::new(Some(7)).braid(&mut grid, 0.9)?;
//!
//! // Downstream consumers read the binary view: 1 = wall, 0 = empty,
//! // indexed [x][y].
//! let matrix = grid.to_binary_matrix();
//! assert_eq!(matrix[goal_col][goal_row], 0);
//!
//! let deadends = DeadendFinder::new(&grid).scan();
//! println!("{}", braidmaze::render::render(&grid));
//! println!("{} deadends survived the braid", deadends.len());
//! # Ok::<(), braidmaze::MazeError>(())
//! ```

pub mod braid;
pub mod builder;
pub mod error;
pub mod grid;
pub mod render;

pub use braid::{Braider, DeadendFinder};
pub use builder::MazeBuilder;
pub use error::MazeError;
pub use grid::{Cell, Grid};
