// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::BTreeSet;
use log::trace;

use super::{Row, DirectionalSequence};
use super::super::naming::Label;

/// Performs a single narrowing pass over a sequence, in whichever direction
/// the sequence presents its cells.
///
/// Each cell may only hold labels that can directly follow some label still
/// possible in the cell before it (the `first` set stands in for the cell
/// before the start). E.g. with clues `[1, 1]` over three squares, a forward
/// pass leaves `[{-1,2}, {-1,2,-3}, {-1,2,-3,4}]`.
pub fn solver_pass<S: DirectionalSequence>(seq: &mut S) -> bool
{
    let mut changed = false;
    for at in 0..seq.len() {
        let allowed: BTreeSet<Label> = {
            let predecessor_cell = match at {
                0 => seq.first(),
                _ => seq.get_cell(at-1).labels(),
            };
            predecessor_cell.iter()
                            .filter_map(|label| seq.successors().get(label))
                            .flat_map(|successors| successors.iter().cloned())
                            .collect()
        };
        changed |= seq.get_cell_mut(at).restrict_to(&allowed);
    }
    changed
}

impl Row {
    pub fn forward_solver(&mut self) -> bool {
        solver_pass(&mut self.forward())
    }
    pub fn backward_solver(&mut self) -> bool {
        solver_pass(&mut self.reversed())
    }

    /// Alternates forward and backward passes until neither narrows any cell.
    /// Cells are finite and only shrink, so this always terminates. Returns
    /// the number of forward/backward iterations performed.
    pub fn one_step(&mut self) -> usize
    {
        let mut iterations = 0;
        loop {
            let before = self.candidate_count();
            self.forward_solver();
            self.backward_solver();
            iterations += 1;
            if self.candidate_count() == before {
                break;
            }
        }
        trace!(target: "row", "{} {} settled after {} iteration(s): {}",
               self.direction.line_name(), self.index, iterations, self);
        iterations
    }
}
