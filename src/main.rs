//! CLI for maze generation

use clap::Parser;

use braidmaze::{render, Braider, Grid, MazeBuilder};

/// Generate a grid maze, optionally braided with loops
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width, odd and at least 3
    #[arg(long, default_value_t = 21)]
    width: usize,

    /// Maze height, odd and at least 3
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Start room x coordinate, odd
    #[arg(long, default_value_t = 1)]
    start_x: usize,

    /// Start room y coordinate, odd
    #[arg(long, default_value_t = 1)]
    start_y: usize,

    /// Probability of culling each deadend into a loop, in [0, 1]
    #[arg(short, long)]
    braid: Option<f64>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Build the maze, print it with the goal coordinates
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut grid = Grid::new(args.width, args.height)?;
    let goal = MazeBuilder::new(args.seed).build(&mut grid, args.start_x, args.start_y)?;
    if let Some(p) = args.braid {
        Braider::new(args.seed).braid(&mut grid, p)?;
    }

    println!("{}", render::render(&grid));
    println!("goal: (row {}, col {})", goal.0, goal.1);
    Ok(())
}
