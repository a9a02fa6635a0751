// vim: set ai et ts=4 sw=4 sts=4:
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use nonolabel::brute::placement_grid;
use nonolabel::catalog;
use nonolabel::grid::render;
use nonolabel::{Error, Hint, Limits, Puzzle, Solver};

fn data_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn load_puzzles() -> Vec<Puzzle> {
    catalog::load_file(data_file("puzzles.txt")).unwrap()
}

#[test]
fn test_catalog_loads_every_block() {
    let puzzles = load_puzzles();
    assert_eq!(puzzles.len(), 4);
    assert_eq!((puzzles[0].width(), puzzles[0].height()), (3, 5));
    assert_eq!(puzzles[3].row_clues(), &[vec![0], vec![1], vec![1]][..]);
}

#[test]
fn test_propagation_agrees_with_brute_force() {
    let solver = Solver::default();
    let nine = &load_puzzles()[0];

    let matrix = solver.solve(nine.row_clues(), nine.col_clues()).unwrap();
    assert_eq!(render(&matrix), vec!["###", "# #", "###", "  #", "  #"]);

    let solutions = solver.brute_force(nine).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(placement_grid(3, 5, &solutions[0]).to_matrix(), matrix);
}

#[test]
fn test_hints_per_puzzle() {
    let solver = Solver::default();
    let hints = load_puzzles().iter()
                              .map(|p| solver.uniquisation(p.row_clues(), p.col_clues()).unwrap())
                              .collect::<Vec<_>>();
    assert_eq!(hints, vec![Hint::Unnecessary,
                           Hint::Force { row: 0, col: 0 },
                           Hint::Unavailable,
                           Hint::Force { row: 1, col: 0 }]);
}

#[test]
fn test_full_solve_uses_the_hint() {
    let solver = Solver::default();
    let puzzle = &load_puzzles()[3];
    let (matrix, hint) = solver.full_solve(puzzle.row_clues(), puzzle.col_clues()).unwrap();
    assert_eq!(hint.as_pair(), (1, 0));
    assert_eq!(render(&matrix), vec!["   ", "#  ", " # "]);
}

#[test]
fn test_classify_and_save() {
    let found = catalog::classify(load_puzzles(), &Solver::default()).unwrap();
    assert_eq!((found.unique.len(), found.non_unique.len(), found.hard.len()), (1, 2, 1));

    let path = std::env::temp_dir().join(format!("nonolabel-non-unique-{}.txt", std::process::id()));
    catalog::save_file(&path, &found.non_unique).unwrap();
    let reloaded = catalog::load_file(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(catalog::export(&reloaded), catalog::export(&found.non_unique));
}

#[test]
fn test_yaml_puzzle_file() {
    let path = std::env::temp_dir().join(format!("nonolabel-{}.yaml", std::process::id()));
    fs::write(&path, "rows:\n    - 2\n    - 1\ncols:\n    - 1\n    - 2\n").unwrap();
    let puzzles = catalog::load_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(puzzles.len(), 1);
    let mut puzzle = puzzles.into_iter().next().unwrap();
    puzzle.solve();
    assert!(puzzle.is_uniquely_solved());
    assert!(puzzle.check_if_correct());
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = catalog::load_file(data_file("no-such-catalog.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_zero_timeout_marks_everything_hard() {
    let solver = Solver::new(Limits::default().with_timeout(Duration::from_secs(0)));
    let found = catalog::classify(load_puzzles(), &solver).unwrap();
    assert_eq!(found.hard.len(), 4);
}
