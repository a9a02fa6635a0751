// vim: set ai et ts=4 sw=4 sts=4:
//! Persisted puzzle definitions.
//!
//! A catalog file holds one or more puzzles, separated by a single blank
//! line. Each puzzle is two lines: a literal list of row clues, then a literal
//! list of column clues. A line with nothing filled in is written `[0]`.
//!
//! ```text
//! [[1],[3],[1,1]]
//! [[1],[3],[1,1]]
//!
//! [[1,1],[0],[1,1]]
//! [[1,1],[0],[1,1]]
//! ```
use std::fs;
use std::path::Path;
use log::{debug, warn};

use super::clues::format_clue_list;
use super::error::{Error, ParseError};
use super::puzzle::{Puzzle, parse_clue_list};
use super::solver::Solver;
use super::uniqueness::Hint;

pub fn parse(text: &str) -> Result<Vec<Puzzle>, Error> {
    let mut puzzles = Vec::<Puzzle>::new();
    let mut block = Vec::<(usize, &str)>::new();

    // a trailing sentinel blank line flushes the last block
    for (line_num, line) in text.lines().chain(std::iter::once("")).enumerate() {
        if !line.trim().is_empty() {
            block.push((line_num+1, line));
            continue;
        }
        if block.is_empty() {
            continue;
        }
        if block.len() != 2 {
            return Err(Error::from(ParseError::new(block[0].0,
                format!("expected a row clue line and a column clue line, found {} line(s)", block.len()))));
        }
        let rows = parse_clue_list(block[0].1, block[0].0)?;
        let cols = parse_clue_list(block[1].1, block[1].0)?;
        puzzles.push(Puzzle::new(&rows, &cols)?);
        block.clear();
    }
    debug!(target: "catalog", "parsed {} puzzle(s)", puzzles.len());
    Ok(puzzles)
}

pub fn export(puzzles: &[Puzzle]) -> String {
    puzzles.iter()
           .map(|p| format!("{}\n{}", format_clue_list(p.row_clues()), format_clue_list(p.col_clues())))
           .collect::<Vec<_>>()
           .join("\n\n")
}

/// Loads puzzles from a file: `.yaml`/`.yml` files hold a single YAML puzzle,
/// anything else is read as a catalog.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(vec![Puzzle::from_yaml_str(&text)?]),
        _                          => parse(&text),
    }
}

pub fn save_file<P: AsRef<Path>>(path: P, puzzles: &[Puzzle]) -> Result<(), Error> {
    fs::write(path, export(puzzles))?;
    Ok(())
}

/// Puzzles sorted by how much help they need.
#[derive(Debug, Default)]
pub struct Catalog {
    pub unique: Vec<Puzzle>,      // propagation alone solves them
    pub non_unique: Vec<Puzzle>,  // one forced square makes them solvable
    pub hard: Vec<Puzzle>,        // neither, or the checks ran out of time
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.unique.len() + self.non_unique.len() + self.hard.len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn classify(puzzles: Vec<Puzzle>, solver: &Solver) -> Result<Catalog, Error> {
    let mut catalog = Catalog::default();
    for puzzle in puzzles {
        match _classify_one(&puzzle, solver) {
            Ok(Kind::Unique)    => catalog.unique.push(puzzle),
            Ok(Kind::NonUnique) => catalog.non_unique.push(puzzle),
            Ok(Kind::Hard)      => catalog.hard.push(puzzle),
            Err(ref e) if e.is_timeout() => {
                warn!(target: "catalog", "{}; treating {}x{} puzzle as hard", e, puzzle.width(), puzzle.height());
                catalog.hard.push(puzzle);
            },
            Err(e) => return Err(e),
        }
    }
    Ok(catalog)
}

enum Kind {
    Unique,
    NonUnique,
    Hard,
}

fn _classify_one(puzzle: &Puzzle, solver: &Solver) -> Result<Kind, Error> {
    let (rows, cols) = (puzzle.row_clues(), puzzle.col_clues());
    if solver.check_uniqueness(rows, cols)? {
        return Ok(Kind::Unique);
    }
    Ok(match solver.uniquisation(rows, cols)? {
        Hint::Force { .. } => Kind::NonUnique,
        _                  => Kind::Hard,
    })
}
