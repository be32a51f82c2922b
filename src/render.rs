//! Read-only console rendering of a finished grid
//!
//! The core never prints; these functions turn a grid into a `String` for
//! whoever owns the terminal.

use itertools::Itertools;

use crate::grid::Grid;

const S_WALL: char = '█';
const S_EMPTY: char = ' ';
/// Path overlay on an open cell.
const S_PATH: char = '.';
/// Path overlay that landed on a wall, rendered loudly.
const S_PATH_ERROR: char = 'E';

/// Render the grid row by row, walls as blocks.
pub fn render(grid: &Grid) -> String {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| if grid.open_at(x, y) { S_EMPTY } else { S_WALL })
                .join("")
        })
        .join("\n")
}

/// Render the grid with a solved path overlaid.
///
/// Path entries are (row, col) pairs, the convention used by consumers of
/// the builder's goal coordinates; note the transpose against the grid's
/// (x, y) addressing.
pub fn render_with_path(grid: &Grid, path: &[(usize, usize)]) -> String {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    if path.contains(&(y, x)) {
                        if grid.open_at(x, y) {
                            S_PATH
                        } else {
                            S_PATH_ERROR
                        }
                    } else if grid.open_at(x, y) {
                        S_EMPTY
                    } else {
                        S_WALL
                    }
                })
                .join("")
        })
        .join("\n")
}
