// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::{BTreeSet, HashMap};

/// Identifies one position within a line's encoding: positive labels name a
/// square inside a specific run, negative labels name a gap.
pub type Label = i32;

pub type SuccessorMap = HashMap<Label, BTreeSet<Label>>;

/// Labels every possible square of a line with the given run lengths.
///
/// Runs are numbered with consecutive positive labels, gaps (before, between
/// and after runs) with a negative label that is emitted twice. The doubling
/// makes `immediate_successors` see both "stay in the gap" and "leave the gap"
/// transitions without special-casing: `[1, 2]` is named
/// `[-1, -1, 2, -3, -3, 4, 5, -6, -6]`.
pub fn cell_naming(run_lengths: &[i32]) -> Vec<Label> {
    let total: i32 = run_lengths.iter().map(|&len| len.max(0)).sum();
    let mut result = Vec::<Label>::with_capacity(2*(run_lengths.len()+1) + total as usize);
    let mut it: Label = 1;

    for &len in run_lengths {
        result.push(-it);
        result.push(-it);
        it += 1;
        for _ in 0..len {
            result.push(it);
            it += 1;
        }
    }
    result.push(-it);
    result.push(-it);
    result
}

/// For each label in a naming, the set of labels observed directly after it.
/// Feeding in the reversed naming yields the predecessor relation instead.
pub fn immediate_successors<I>(naming: I) -> SuccessorMap
    where I: IntoIterator<Item=Label>
{
    let mut result = SuccessorMap::new();
    let mut naming = naming.into_iter();
    let mut predecessor = match naming.next() {
        Some(label) => label,
        None        => return result,
    };
    for current in naming {
        result.entry(predecessor).or_insert_with(BTreeSet::new).insert(current);
        predecessor = current;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn map(pairs: Vec<(Label, Vec<Label>)>) -> SuccessorMap {
        pairs.into_iter()
             .map(|(k, vs)| (k, vs.into_iter().collect::<BTreeSet<_>>()))
             .collect()
    }

    #[test]
    fn test_cell_naming_examples() {
        assert_eq!(cell_naming(&[1, 2]), vec![-1, -1, 2, -3, -3, 4, 5, -6, -6]);
        assert_eq!(cell_naming(&[1, 2, 3]), vec![-1, -1, 2, -3, -3, 4, 5, -6, -6, 7, 8, 9, -10, -10]);
        assert_eq!(cell_naming(&[0]), vec![-1, -1, -2, -2]);
        assert_eq!(cell_naming(&[]), vec![-1, -1]);
    }

    #[test]
    fn test_cell_naming_shape() {
        for clues in &[vec![3, 1], vec![2, 1, 6, 1], vec![5], vec![1, 1, 1, 1]] {
            let naming = cell_naming(clues);
            let total: i32 = clues.iter().sum();
            assert_eq!(naming.len(), 2*(clues.len()+1) + total as usize);
            assert!(naming[0] < 0);
            assert!(naming[naming.len()-1] < 0);

            let positives = naming.iter().filter(|&&x| x > 0).cloned().collect::<Vec<_>>();
            assert_eq!(positives.iter().unique().count(), total as usize);

            // maximal ascending runs of positive labels match the clues
            let runs = naming.iter()
                             .chunk_by(|&&x| x > 0)
                             .into_iter()
                             .filter(|(positive, _)| *positive)
                             .map(|(_, group)| group.count() as i32)
                             .collect::<Vec<_>>();
            assert_eq!(&runs, clues);
        }
    }

    #[test]
    fn test_immediate_successors_of_three_one() {
        let expected = map(vec![(-1, vec![-1, 2]), (2, vec![3]), (3, vec![4]), (4, vec![-5]),
                                (-5, vec![-5, 6]), (6, vec![-7]), (-7, vec![-7])]);
        assert_eq!(immediate_successors(cell_naming(&[3, 1])), expected);
    }

    #[test]
    fn test_immediate_predecessors_from_reversed_naming() {
        let naming = cell_naming(&[1, 2]);
        let expected = map(vec![(-6, vec![-6, 5]), (5, vec![4]), (4, vec![-3]), (-3, vec![-3, 2]),
                                (2, vec![-1]), (-1, vec![-1])]);
        assert_eq!(immediate_successors(naming.into_iter().rev()), expected);
    }

    #[test]
    fn test_immediate_successors_of_empty_naming() {
        assert!(immediate_successors(Vec::<Label>::new()).is_empty());
    }
}
