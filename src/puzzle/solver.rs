// vim: set ai et ts=4 sts=4 sw=4:
use log::{debug, trace};

use super::Puzzle;
use super::super::deadline::Deadline;
use super::super::error::TimeoutError;
use super::super::grid::SquareStatus;
use super::super::limits::DEFAULT_MAX_ROUNDS;

/// How a call to `solve` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOutcome {
    pub rounds: usize,
    pub converged: bool,  // false if the round cap ran out first
}

impl Puzzle {
    /// Settles every row, then every column.
    pub fn multi_step(&mut self) {
        for row in self.rows.iter_mut().chain(self.cols.iter_mut()) {
            row.one_step();
        }
    }

    /// Carries what is known about each square between the two views. Rows
    /// and columns keep independent label sets, so a square found filled (or
    /// crossed out) in its row only constrains its column after this step,
    /// and vice versa.
    pub fn transpose_check(&mut self) {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.cells.iter().enumerate() {
                self.cols[x].cells[y].restrict_to_status(cell.status());
            }
        }
        for (x, col) in self.cols.iter().enumerate() {
            for (y, cell) in col.cells.iter().enumerate() {
                self.rows[y].cells[x].restrict_to_status(cell.status());
            }
        }
    }

    /// Propagates until a round no longer changes any row, or `DEFAULT_MAX_ROUNDS`
    /// rounds have run. Hitting the cap is not an error: the grid then simply
    /// holds whatever was determined so far.
    pub fn solve(&mut self) -> SolveOutcome {
        self._solve(DEFAULT_MAX_ROUNDS, None)
            .unwrap_or(SolveOutcome { rounds: 0, converged: false })
    }

    /// Like `solve`, but with a configurable round cap and a deadline that is
    /// checked before every round.
    pub fn solve_before(&mut self, max_rounds: usize, deadline: &Deadline)
        -> Result<SolveOutcome, TimeoutError>
    {
        self._solve(max_rounds, Some(deadline))
    }

    fn _solve(&mut self, max_rounds: usize, deadline: Option<&Deadline>)
        -> Result<SolveOutcome, TimeoutError>
    {
        let mut before = self.representation();
        let mut rounds = 0;
        let mut converged = false;

        while rounds < max_rounds {
            if let Some(d) = deadline {
                d.check()?;
            }
            rounds += 1;
            self.multi_step();
            self.transpose_check();
            self.update_grid();

            let after = self.representation();
            trace!(target: "puzzle", "round {}: {}", rounds, after);
            if after == before {
                converged = true;
                break;
            }
            before = after;
        }

        debug!(target: "puzzle", "{}x{} puzzle {} after {} round(s), {} square(s) undetermined",
               self.width(), self.height(),
               if converged { "settled" } else { "hit the round cap" },
               rounds, self.grid.count(SquareStatus::Unknown));
        Ok(SolveOutcome { rounds, converged })
    }

    /// Whether propagation left every square determined, with at least one
    /// filled and one crossed-out square. All-filled and all-blank grids do
    /// not count.
    pub fn is_uniquely_solved(&self) -> bool {
        self.grid.is_complete()
            && self.grid.count(SquareStatus::FilledIn) > 0
            && self.grid.count(SquareStatus::CrossedOut) > 0
    }
}
