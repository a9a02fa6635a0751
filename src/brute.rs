// vim: set ai et ts=4 sw=4 sts=4:
use itertools::Itertools;
use log::debug;

use super::clues::grid_to_clues;
use super::deadline::Deadline;
use super::error::TimeoutError;
use super::grid::{Grid, SquareStatus};
use super::puzzle::Puzzle;

/// Squares of a candidate filling, as row-major indices `row * width + col`.
pub type Placement = Vec<usize>;

/// Tries every way of choosing as many squares as the clues fill in, and
/// keeps the choices whose induced row and column clues match the puzzle's.
///
/// The number of combinations explodes quickly; this is an oracle for small
/// puzzles, bounded by `deadline`, which is checked before each combination.
pub fn brute_force(puzzle: &Puzzle, deadline: &Deadline) -> Result<Vec<Placement>, TimeoutError> {
    let width = puzzle.width();
    let height = puzzle.height();
    let filled = puzzle.row_clues()
                       .iter()
                       .flat_map(|clue| clue.iter())
                       .sum::<i32>() as usize;

    let mut results = Vec::<Placement>::new();
    let mut tried: usize = 0;
    for placement in (0..width*height).combinations(filled) {
        deadline.check()?;
        tried += 1;
        if matches_clues(puzzle, &placement) {
            results.push(placement);
        }
    }
    debug!(target: "brute", "{} of {} combination(s) match the clues", results.len(), tried);
    Ok(results)
}

/// Builds the fully determined grid for a placement.
pub fn placement_grid(width: usize, height: usize, placement: &[usize]) -> Grid {
    let mut grid = Grid { squares: vec![vec![SquareStatus::CrossedOut; width]; height] };
    for &index in placement {
        grid.set_square(index % width, index / width, SquareStatus::FilledIn);
    }
    grid
}

fn matches_clues(puzzle: &Puzzle, placement: &[usize]) -> bool {
    let grid = placement_grid(puzzle.width(), puzzle.height(), placement);
    let (rows, cols) = grid_to_clues(&grid);
    rows == puzzle.row_clues() && cols == puzzle.col_clues()
}
