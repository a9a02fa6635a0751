// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use log::{debug, trace};

use super::clues::Clue;
use super::deadline::Deadline;
use super::error::Error;
use super::puzzle::Puzzle;

/// Result of looking for a square that, once forced filled, makes the puzzle
/// uniquely solvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Unnecessary,                      // propagation already solves the puzzle uniquely
    Force { row: usize, col: usize },
    Unavailable,                      // no single square does the trick
}

impl Hint {
    pub fn coordinate(&self) -> Option<(usize, usize)> {
        match *self {
            Hint::Force { row, col } => Some((row, col)),
            _                        => None,
        }
    }
    /// The `(row, col)` pair, with `(-1, -1)` standing in for "no square".
    pub fn as_pair(&self) -> (isize, isize) {
        match *self {
            Hint::Force { row, col } => (row as isize, col as isize),
            _                        => (-1, -1),
        }
    }
}
impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Hint::Unnecessary         => write!(f, "no hint needed"),
            Hint::Force { row, col }  => write!(f, "fill (row={}, col={})", row, col),
            Hint::Unavailable         => write!(f, "no single square makes it unique"),
        }
    }
}

/// Propagates a fresh puzzle and reports whether that alone determines every
/// square (with at least one filled and one crossed-out square).
pub fn check_uniqueness(rows: &[Clue], cols: &[Clue], max_rounds: usize, deadline: &Deadline)
    -> Result<bool, Error>
{
    let mut puzzle = Puzzle::new(rows, cols)?;
    puzzle.solve_before(max_rounds, deadline)?;
    let unique = puzzle.is_uniquely_solved();
    debug!(target: "uniqueness", "{}x{} puzzle is {}unique",
           puzzle.width(), puzzle.height(), if unique { "" } else { "not " });
    Ok(unique)
}

/// Finds the first square, in row-major order, whose forced filling makes the
/// puzzle uniquely solvable. Squares already determined by plain propagation
/// are skipped. The hint is first-found, not minimal.
pub fn uniquisation(rows: &[Clue], cols: &[Clue], max_rounds: usize, deadline: &Deadline)
    -> Result<Hint, Error>
{
    let mut baseline = Puzzle::new(rows, cols)?;
    baseline.solve_before(max_rounds, deadline)?;
    if baseline.is_uniquely_solved() {
        return Ok(Hint::Unnecessary);
    }

    for row in 0..baseline.height() {
        for col in 0..baseline.width() {
            if baseline.grid().get_square(col, row).is_known() {
                continue;
            }
            deadline.check()?;

            let mut candidate = Puzzle::new(rows, cols)?;
            candidate.fill(row, col)?;
            candidate.solve_before(max_rounds, deadline)?;
            trace!(target: "uniqueness", "forcing (row={}, col={}): {}", row, col, candidate.representation());
            if candidate.is_uniquely_solved() {
                debug!(target: "uniqueness", "forcing (row={}, col={}) makes the puzzle unique", row, col);
                return Ok(Hint::Force { row, col });
            }
        }
    }
    debug!(target: "uniqueness", "no single forced square makes the puzzle unique");
    Ok(Hint::Unavailable)
}
