// vim: set ai et ts=4 sw=4 sts=4:
//! Constraint-propagation engine for nonograms.
//!
//! Every cell of a line carries the set of clue labels it could still take;
//! forward and backward passes over each row and column shrink those sets,
//! and the row and column views are synchronised until nothing changes.
//! On top of that sit a uniqueness check, a search for a single square that
//! makes an ambiguous puzzle uniquely solvable, and a brute-force verifier.
pub mod util;
pub mod error;
pub mod deadline;
pub mod limits;
pub mod naming;
pub mod grid;
pub mod clues;
pub mod row;
pub mod puzzle;
pub mod uniqueness;
pub mod brute;
pub mod solver;
pub mod catalog;
pub mod picture;

pub use crate::clues::Clue;
pub use crate::deadline::Deadline;
pub use crate::error::{Error, ParseError, TimeoutError, ValidationError};
pub use crate::grid::{Grid, SquareStatus};
pub use crate::limits::Limits;
pub use crate::puzzle::Puzzle;
pub use crate::solver::Solver;
pub use crate::uniqueness::Hint;
