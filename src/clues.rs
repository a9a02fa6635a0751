// vim: set ai et ts=4 sw=4 sts=4:
use itertools::Itertools;

use super::grid::{Grid, SquareStatus};

/// Run lengths of one line, in order. A line without filled squares is `[0]`.
pub type Clue = Vec<i32>;

/// Run-length encodes a line of statuses into its clue. Only `FilledIn`
/// squares count towards a run; anything else ends it.
pub fn row_to_clues<'a, I>(line: I) -> Clue
    where I: IntoIterator<Item=&'a SquareStatus>
{
    let result = line.into_iter()
                     .chunk_by(|&&s| s == SquareStatus::FilledIn)
                     .into_iter()
                     .filter(|(filled, _)| *filled)
                     .map(|(_, run)| run.count() as i32)
                     .collect::<Vec<_>>();
    if result.is_empty() {
        return vec![0];
    }
    result
}

/// Same as `row_to_clues`, over the `{-1, 0, 1}` matrix encoding.
pub fn values_to_clues(line: &[i8]) -> Clue {
    let statuses = line.iter().map(|&v| SquareStatus::from_value(v)).collect::<Vec<_>>();
    row_to_clues(&statuses)
}

/// Derives row and column clues from a (fully determined) grid.
pub fn grid_to_clues(grid: &Grid) -> (Vec<Clue>, Vec<Clue>) {
    let rows = grid.squares.iter()
                           .map(|row| row_to_clues(row))
                           .collect();
    let cols = (0..grid.width()).map(|x| row_to_clues(&grid.column(x)))
                                .collect();
    (rows, cols)
}

/// An empty clue list means the same as `[0]`.
pub fn normalize(clue: &[i32]) -> Clue {
    if clue.is_empty() {
        return vec![0];
    }
    clue.to_vec()
}

pub fn total(clues: &[Clue]) -> i64 {
    clues.iter()
         .flat_map(|c| c.iter())
         .map(|&len| i64::from(len))
         .sum()
}

/// Squares needed by a line: every run plus one separating gap between runs.
pub fn required_length(clue: &[i32]) -> i64 {
    let runs: i64 = clue.iter().map(|&len| i64::from(len)).sum();
    runs + (clue.len() as i64 - 1).max(0)
}

/// Formats a list of clues the way persisted puzzle definitions write them,
/// e.g. `[[1, 2], [0], [3]]`.
pub fn format_clue_list(clues: &[Clue]) -> String {
    format!("[{}]", clues.iter()
                         .map(|clue| format!("[{}]", clue.iter().join(", ")))
                         .join(", "))
}
