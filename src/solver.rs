// vim: set ai et ts=4 sw=4 sts=4:
use log::{debug, info};

use super::brute::{self, Placement};
use super::clues::Clue;
use super::deadline::Deadline;
use super::error::Error;
use super::limits::Limits;
use super::puzzle::Puzzle;
use super::uniqueness::{self, Hint};

/// Entry point for collaborators: every operation builds its own fresh
/// puzzles from the clues and runs under the deadline configured in `limits`.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    pub limits: Limits,
}

impl Solver {
    pub fn new(limits: Limits) -> Self {
        Solver { limits }
    }

    /// Propagates to a fixpoint (or the round cap) and returns the `{-1, 0, 1}`
    /// matrix. Only fails on malformed clues.
    pub fn solve(&self, rows: &[Clue], cols: &[Clue]) -> Result<Vec<Vec<i8>>, Error> {
        let mut puzzle = Puzzle::new(rows, cols)?;
        puzzle.solve_before(self.limits.max_rounds, &Deadline::never("solve"))?;
        Ok(puzzle.matrix())
    }

    pub fn check_uniqueness(&self, rows: &[Clue], cols: &[Clue]) -> Result<bool, Error> {
        uniqueness::check_uniqueness(rows, cols, self.limits.max_rounds, &self.limits.uniqueness_deadline())
    }

    pub fn uniquisation(&self, rows: &[Clue], cols: &[Clue]) -> Result<Hint, Error> {
        uniqueness::uniquisation(rows, cols, self.limits.max_rounds, &self.limits.uniquisation_deadline())
    }

    /// Solves the puzzle, first forcing a hint square if propagation alone
    /// can't determine it. Returns the matrix along with the hint used.
    pub fn full_solve(&self, rows: &[Clue], cols: &[Clue]) -> Result<(Vec<Vec<i8>>, Hint), Error> {
        let deadline = self.limits.full_solve_deadline();
        let max_rounds = self.limits.max_rounds;

        let hint = match uniqueness::check_uniqueness(rows, cols, max_rounds,
                                                      &deadline.earliest(self.limits.uniqueness_deadline()))? {
            true  => Hint::Unnecessary,
            false => uniqueness::uniquisation(rows, cols, max_rounds,
                                              &deadline.earliest(self.limits.uniquisation_deadline()))?,
        };

        let mut puzzle = Puzzle::new(rows, cols)?;
        if let Some((row, col)) = hint.coordinate() {
            puzzle.fill(row, col)?;
        }
        puzzle.solve_before(max_rounds, &deadline)?;
        info!(target: "solver", "full solve of {}x{} puzzle: {}", puzzle.width(), puzzle.height(), hint);
        Ok((puzzle.matrix(), hint))
    }

    pub fn brute_force(&self, puzzle: &Puzzle) -> Result<Vec<Placement>, Error> {
        let solutions = brute::brute_force(puzzle, &self.limits.brute_force_deadline())?;
        debug!(target: "solver", "brute force found {} solution(s)", solutions.len());
        Ok(solutions)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use super::*;

    #[test]
    fn test_solve_returns_matrix() {
        let solver = Solver::default();
        assert_eq!(solver.solve(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap(),
                   vec![vec![1, 1], vec![-1, 1]]);
    }

    #[test]
    fn test_solve_rejects_malformed_clues() {
        let solver = Solver::default();
        assert!(matches!(solver.solve(&[vec![3], vec![1]], &[vec![1], vec![2]]),
                         Err(Error::Validation(_))));
    }

    #[test]
    fn test_full_solve_of_unique_puzzle() {
        let solver = Solver::default();
        let (matrix, hint) = solver.full_solve(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap();
        assert_eq!(matrix, vec![vec![1, 1], vec![-1, 1]]);
        assert_eq!(hint.as_pair(), (-1, -1));
    }

    #[test]
    fn test_full_solve_forces_hint() {
        let solver = Solver::default();
        let (matrix, hint) = solver.full_solve(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        assert_eq!(hint, Hint::Force { row: 0, col: 0 });
        assert_eq!(matrix, vec![vec![1, -1], vec![-1, 1]]);
    }

    #[test]
    fn test_zero_timeouts_fail_without_matrix() {
        let solver = Solver::new(Limits::default().with_timeout(Duration::from_secs(0)));
        let rows = vec![vec![1], vec![1]];
        let cols = vec![vec![1], vec![1]];
        assert!(solver.check_uniqueness(&rows, &cols).unwrap_err().is_timeout());
        assert!(solver.uniquisation(&rows, &cols).unwrap_err().is_timeout());
        assert!(solver.full_solve(&rows, &cols).unwrap_err().is_timeout());
        let puzzle = Puzzle::new(&rows, &cols).unwrap();
        assert!(solver.brute_force(&puzzle).unwrap_err().is_timeout());
        // plain propagation has no deadline
        assert!(solver.solve(&rows, &cols).is_ok());
    }

    #[test]
    fn test_round_cap_is_configurable() {
        let solver = Solver::new(Limits::default().with_max_rounds(0));
        assert_eq!(solver.solve(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap(),
                   vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn test_brute_force_stops_midway_through_enumeration() {
        // 5x5 checkerboard: C(25, 13) candidate fillings, far more than a
        // few milliseconds allow
        let rows = vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]];
        let puzzle = Puzzle::new(&rows, &rows).unwrap();
        let solver = Solver::new(Limits::default().with_timeout(Duration::from_millis(20)));
        assert!(solver.limits.brute_force_deadline().check().is_ok());

        let err = solver.brute_force(&puzzle).unwrap_err();
        assert!(err.is_timeout());
        assert!(err.to_string().contains("brute force"));
    }
}
