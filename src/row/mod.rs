// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

use std::fmt;
use std::collections::BTreeSet;

use super::util::Direction;
use super::grid::SquareStatus;
use super::naming::{Label, SuccessorMap, cell_naming, immediate_successors};

/// The labels a single square may still take. Only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    labels: BTreeSet<Label>,
}

impl Cell {
    pub fn new(labels: BTreeSet<Label>) -> Self {
        Cell { labels }
    }
    pub fn labels(&self) -> &BTreeSet<Label> { &self.labels }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Filled if only run labels remain, crossed out if only gap labels remain.
    /// A cell with no labels left is a contradiction and counts as unknown.
    pub fn status(&self) -> SquareStatus {
        if self.labels.is_empty() {
            return SquareStatus::Unknown;
        }
        if self.labels.iter().all(|&x| x > 0) {
            SquareStatus::FilledIn
        } else if self.labels.iter().all(|&x| x < 0) {
            SquareStatus::CrossedOut
        } else {
            SquareStatus::Unknown
        }
    }

    /// Keeps only the labels in `allowed`; returns whether anything was removed.
    pub fn restrict_to(&mut self, allowed: &BTreeSet<Label>) -> bool {
        let before = self.labels.len();
        self.labels.retain(|x| allowed.contains(x));
        self.labels.len() != before
    }
    pub fn keep_filled(&mut self) -> bool {
        let before = self.labels.len();
        self.labels.retain(|&x| x > 0);
        self.labels.len() != before
    }
    pub fn keep_crossed_out(&mut self) -> bool {
        let before = self.labels.len();
        self.labels.retain(|&x| x < 0);
        self.labels.len() != before
    }
    /// Restricts the cell to agree with a status determined elsewhere.
    pub fn restrict_to_status(&mut self, status: SquareStatus) -> bool {
        match status {
            SquareStatus::FilledIn   => self.keep_filled(),
            SquareStatus::CrossedOut => self.keep_crossed_out(),
            SquareStatus::Unknown    => false,
        }
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.labels.iter()
                                       .map(|x| x.to_string())
                                       .collect::<Vec<_>>()
                                       .join(","))
    }
}

// -------------------------------------------------------------

/// A row or a column: one `Cell` per square plus the transition relations of
/// its clue's naming.
#[derive(Debug, Clone)]
pub struct Row {
    pub direction: Direction,
    pub index:     usize,
    pub length:    usize,
    pub cells:     Vec<Cell>,
    successors:    SuccessorMap,
    predecessors:  SuccessorMap,
    first:         BTreeSet<Label>,
    last:          BTreeSet<Label>,
}

impl Row {
    pub fn new(direction: Direction,
               row_index: usize,
               row_length: usize,
               run_lengths: &[i32]) -> Self
    {
        let naming = cell_naming(run_lengths);
        let all_labels = naming.iter().cloned().collect::<BTreeSet<_>>();
        // cell_naming always yields at least the opening and closing gap
        let first = naming.first().cloned().into_iter().collect::<BTreeSet<_>>();
        let last  = naming.last().cloned().into_iter().collect::<BTreeSet<_>>();

        Row {
            direction,
            index:        row_index,
            length:       row_length,
            cells:        (0..row_length).map(|_| Cell::new(all_labels.clone())).collect(),
            successors:   immediate_successors(naming.iter().cloned()),
            predecessors: immediate_successors(naming.iter().rev().cloned()),
            first,
            last,
        }
    }

    pub fn statuses(&self) -> Vec<SquareStatus> {
        self.cells.iter().map(|c| c.status()).collect()
    }
    pub fn is_completed(&self) -> bool {
        self.cells.iter().all(|c| c.status().is_known())
    }
    pub fn has_contradiction(&self) -> bool {
        self.cells.iter().any(|c| c.is_empty())
    }
    /// Total number of candidate labels left across the row. Since cells only
    /// shrink, an unchanged total means no cell changed.
    pub fn candidate_count(&self) -> usize {
        self.cells.iter().map(|c| c.len()).sum()
    }

    /// Shows every cell's candidate set, e.g. `[{-5,-3,-1,2,4},...]`.
    pub fn details_str(&self) -> String {
        format!("[{}]", self.cells.iter()
                                  .map(|c| c.to_string())
                                  .collect::<Vec<_>>()
                                  .join(","))
    }

    pub fn forward(&mut self) -> Forward {
        Forward { row: self }
    }
    pub fn reversed(&mut self) -> Reversed {
        Reversed { row: self }
    }
}
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in &self.cells {
            write!(f, "{}", c.status().glyph())?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------

/// A direction-aware window onto a row's cells. A solver pass walks a
/// sequence from its start, seeding with `first()` and stepping through
/// `successors()`; the reversed view maps positions back to front and swaps in
/// the predecessor relation, so the same pass runs in both directions.
pub trait DirectionalSequence
{
    fn get_row(&self) -> &Row;
    fn get_row_mut(&mut self) -> &mut Row;
    fn first(&self) -> &BTreeSet<Label>;
    fn successors(&self) -> &SuccessorMap;
    fn cell_index(&self, at: usize) -> usize;

    fn len(&self) -> usize {
        self.get_row().length
    }
    fn get_cell(&self, at: usize) -> &Cell {
        let idx = self.cell_index(at);
        &self.get_row().cells[idx]
    }
    fn get_cell_mut(&mut self, at: usize) -> &mut Cell {
        let idx = self.cell_index(at);
        &mut self.get_row_mut().cells[idx]
    }
}

pub struct Forward<'a> {
    row: &'a mut Row,
}
impl<'a> DirectionalSequence for Forward<'a> {
    fn get_row(&self) -> &Row { &*self.row }
    fn get_row_mut(&mut self) -> &mut Row { &mut *self.row }
    fn first(&self) -> &BTreeSet<Label> { &self.row.first }
    fn successors(&self) -> &SuccessorMap { &self.row.successors }
    fn cell_index(&self, at: usize) -> usize { at }
}

pub struct Reversed<'a> {
    row: &'a mut Row,
}
impl<'a> DirectionalSequence for Reversed<'a> {
    fn get_row(&self) -> &Row { &*self.row }
    fn get_row_mut(&mut self) -> &mut Row { &mut *self.row }
    fn first(&self) -> &BTreeSet<Label> { &self.row.last }
    fn successors(&self) -> &SuccessorMap { &self.row.predecessors }
    fn cell_index(&self, at: usize) -> usize { self.row.length - 1 - at }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(labels: &[Label]) -> Cell {
        Cell::new(labels.iter().cloned().collect())
    }

    #[test]
    fn test_new_row_cells_hold_every_label() {
        let row = Row::new(Direction::Horizontal, 0, 3, &[1, 1]);
        assert_eq!(row.details_str(), "[{-5,-3,-1,2,4},{-5,-3,-1,2,4},{-5,-3,-1,2,4}]");
        assert_eq!(row.to_string(), "///");
        assert!(!row.is_completed());
    }

    #[test]
    fn test_cell_status() {
        assert_eq!(cell(&[1, 5, 19, 23]).status(), SquareStatus::FilledIn);
        assert_eq!(cell(&[-1, -5, -19, -23]).status(), SquareStatus::CrossedOut);
        assert_eq!(cell(&[1, -5, -19, -23]).status(), SquareStatus::Unknown);
        assert_eq!(cell(&[]).status(), SquareStatus::Unknown);
    }

    #[test]
    fn test_cell_only_shrinks() {
        let mut c = cell(&[-3, -1, 2, 4]);
        assert!(c.keep_filled());
        assert_eq!(c, cell(&[2, 4]));
        assert!(!c.keep_filled());
        assert!(!c.restrict_to(&[2, 4, 6].iter().cloned().collect()));
        assert!(c.restrict_to(&[4].iter().cloned().collect()));
        assert_eq!(c, cell(&[4]));
        assert!(c.keep_crossed_out());
        assert!(c.is_empty());
    }

    #[test]
    fn test_views_map_positions_and_relations() {
        let mut row = Row::new(Direction::Vertical, 2, 4, &[2]);
        {
            let fwd = row.forward();
            assert_eq!(fwd.cell_index(0), 0);
            assert_eq!(fwd.first().iter().cloned().collect::<Vec<_>>(), vec![-1]);
            assert_eq!(fwd.successors()[&-1].iter().cloned().collect::<Vec<_>>(), vec![-1, 2]);
        }
        let mut rev = row.reversed();
        assert_eq!(rev.len(), 4);
        assert_eq!(rev.cell_index(0), 3);
        assert_eq!(rev.first().iter().cloned().collect::<Vec<_>>(), vec![-4]);
        assert_eq!(rev.successors()[&-4].iter().cloned().collect::<Vec<_>>(), vec![-4, 3]);
        rev.get_cell_mut(0).keep_crossed_out();
        assert_eq!(row.cells[3].status(), SquareStatus::CrossedOut);
    }
}
