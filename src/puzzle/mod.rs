// vim: set ai et ts=4 sw=4 sts=4:
mod solver;

pub use self::solver::SolveOutcome;

use std::fmt;
use std::convert::TryFrom;
use yaml_rust::{Yaml, YamlLoader};

use super::clues::{self, Clue};
use super::error::{Error, ParseError, ValidationError};
use super::grid::{Grid, SquareStatus};
use super::row::Row;
use super::util::{ralign, lalign, Direction::*};

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub rows: Vec<Row>,
    pub cols: Vec<Row>,
    row_clues: Vec<Clue>,
    col_clues: Vec<Clue>,
    grid: Grid,
}

impl Puzzle {
    /// Builds a puzzle from row clues (top to bottom) and column clues (left to
    /// right). Clues are refused unless both sides fill the same number of
    /// squares, every line's runs fit, and no run length is negative.
    pub fn new(row_run_lengths: &[Clue],
               col_run_lengths: &[Clue]) -> Result<Self, ValidationError>
    {
        let row_clues = row_run_lengths.iter().map(|c| clues::normalize(c)).collect::<Vec<_>>();
        let col_clues = col_run_lengths.iter().map(|c| clues::normalize(c)).collect::<Vec<_>>();
        Self::validate(&row_clues, &col_clues)?;

        let width = col_clues.len();
        let height = row_clues.len();
        let rows = row_clues.iter()
                            .enumerate()
                            .map(|(y, clue)| Row::new(Horizontal, y, width, clue))
                            .collect::<Vec<_>>();
        let cols = col_clues.iter()
                            .enumerate()
                            .map(|(x, clue)| Row::new(Vertical, x, height, clue))
                            .collect::<Vec<_>>();
        let mut puzzle = Puzzle {
            rows,
            cols,
            row_clues,
            col_clues,
            grid: Grid::new(width, height),
        };
        puzzle.update_grid();
        Ok(puzzle)
    }

    fn validate(row_clues: &[Clue], col_clues: &[Clue]) -> Result<(), ValidationError> {
        if row_clues.is_empty() || col_clues.is_empty() {
            return Err(ValidationError::Empty);
        }

        let row_total = clues::total(row_clues);
        let col_total = clues::total(col_clues);
        if row_total != col_total {
            return Err(ValidationError::ClueTotalsDiffer { rows: row_total, cols: col_total });
        }

        for (direction, lines, available) in &[(Horizontal, row_clues, col_clues.len()),
                                               (Vertical,   col_clues, row_clues.len())] {
            for (index, clue) in lines.iter().enumerate() {
                if let Some(&value) = clue.iter().find(|&&len| len < 0) {
                    return Err(ValidationError::NegativeClue { direction: *direction, index, value });
                }
                let required = clues::required_length(clue);
                if required > *available as i64 {
                    return Err(ValidationError::RunsDontFit {
                        direction: *direction, index, required, available: *available
                    });
                }
            }
        }
        Ok(())
    }

    pub fn width(&self) -> usize { self.cols.len() }
    pub fn height(&self) -> usize { self.rows.len() }
    pub fn row_clues(&self) -> &[Clue] { &self.row_clues }
    pub fn col_clues(&self) -> &[Clue] { &self.col_clues }

    /// The latest `{-1, 0, 1}` snapshot, as of the last propagation round.
    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn matrix(&self) -> Vec<Vec<i8>> { self.grid.to_matrix() }

    pub(crate) fn update_grid(&mut self) {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.cells.iter().enumerate() {
                self.grid.set_square(x, y, cell.status());
            }
        }
    }

    /// Concatenated glyphs of every row, as used to detect progress between rounds.
    pub fn representation(&self) -> String {
        self.rows.iter()
                 .map(|row| row.to_string())
                 .collect::<String>()
    }

    fn _check_bounds(&self, row: usize, col: usize) -> Result<(), ValidationError> {
        if row >= self.height() || col >= self.width() {
            return Err(ValidationError::OutOfBounds {
                row, col, width: self.width(), height: self.height()
            });
        }
        Ok(())
    }
    /// Forces the given square to be filled in.
    pub fn fill(&mut self, row: usize, col: usize) -> Result<(), ValidationError> {
        self._check_bounds(row, col)?;
        self.rows[row].cells[col].keep_filled();
        Ok(())
    }
    /// Forces the given square to be crossed out.
    pub fn unfill(&mut self, row: usize, col: usize) -> Result<(), ValidationError> {
        self._check_bounds(row, col)?;
        self.rows[row].cells[col].keep_crossed_out();
        Ok(())
    }

    /// Whether the current snapshot reproduces the puzzle's own clues.
    pub fn check_if_correct(&self) -> bool {
        let (rows, cols) = clues::grid_to_clues(&self.grid);
        rows == self.row_clues && cols == self.col_clues
    }
}

impl Puzzle {
    /// Reads a YAML document with `rows` and `cols` lists. Each entry is either
    /// a string of space-separated run lengths, a single integer, or null for
    /// an empty line:
    ///
    /// ```yaml
    /// rows:
    ///     - 1 1
    ///     - 3
    ///     - ~
    /// cols: [2, 1, 2]
    /// ```
    pub fn from_yaml(doc: &Yaml) -> Result<Puzzle, Error>
    {
        let row_run_lengths = Self::_parse_row(&doc["rows"], "rows")?;
        let col_run_lengths = Self::_parse_row(&doc["cols"], "cols")?;
        Ok(Puzzle::new(&row_run_lengths, &col_run_lengths)?)
    }
    pub fn from_yaml_str(s: &str) -> Result<Puzzle, Error> {
        let docs = YamlLoader::load_from_str(s)
                              .map_err(|e| ParseError::new(e.marker().line()+1, e.to_string()))?;
        match docs.first() {
            Some(doc) => Self::from_yaml(doc),
            None      => Err(Error::from(ParseError::new(0, "empty YAML document"))),
        }
    }

    fn _parse_row(input: &Yaml, key: &str) -> Result<Vec<Clue>, ParseError> {
        let list: &Vec<Yaml> = input.as_vec()
                                    .ok_or_else(|| ParseError::new(0, format!("'{}' must be a list", key)))?;
        list.iter()
            .map(|yaml_val| Self::_parse_row_runs(yaml_val))
            .collect()
    }

    fn _parse_row_runs(input: &Yaml) -> Result<Clue, ParseError> {
        match input {
            Yaml::String(s)  => s.split_whitespace()
                                 .map(|int| int.trim().parse::<i32>()
                                               .map_err(|e| ParseError::new(0, format!("bad run length '{}': {}", int, e))))
                                 .collect(),
            Yaml::Integer(i) => i32::try_from(*i)
                                    .map(|v| vec![v])
                                    .map_err(|_| ParseError::new(0, format!("run length {} out of range", i))),
            Yaml::Array(_)   => Self::parse_literal_clue(input),
            Yaml::Null       => Ok(vec![]),
            _                => Err(ParseError::new(0, format!("unexpected data type: {:?}", input))),
        }
    }

    /// Reads the two-line literal form, e.g. `[[2],[1]]` then `[[1],[2]]`.
    pub fn from_literal(rows_line: &str, cols_line: &str) -> Result<Puzzle, Error> {
        let row_run_lengths = parse_clue_list(rows_line, 1)?;
        let col_run_lengths = parse_clue_list(cols_line, 2)?;
        Ok(Puzzle::new(&row_run_lengths, &col_run_lengths)?)
    }

    fn parse_literal_clue(input: &Yaml) -> Result<Clue, ParseError> {
        let list = input.as_vec()
                        .ok_or_else(|| ParseError::new(0, format!("expected a list of run lengths, got {:?}", input)))?;
        list.iter()
            .map(|v| v.as_i64()
                      .and_then(|i| i32::try_from(i).ok())
                      .ok_or_else(|| ParseError::new(0, format!("expected a run length, got {:?}", v))))
            .collect()
    }
}

/// Parses one literal list of clue lists, such as `[[5, 4], [0], [3]]`.
/// `line` is only used to locate errors.
pub fn parse_clue_list(s: &str, line: usize) -> Result<Vec<Clue>, ParseError> {
    let docs = YamlLoader::load_from_str(s.trim())
                          .map_err(|e| ParseError::new(line, e.to_string()))?;
    let list = docs.first()
                   .and_then(|doc| doc.as_vec())
                   .ok_or_else(|| ParseError::new(line, "expected a list of clue lists"))?;
    list.iter()
        .map(|clue| Puzzle::parse_literal_clue(clue).map_err(|e| ParseError::new(line, e.message)))
        .collect()
}

impl Puzzle {
    // helper functions for Puzzle::fmt
    fn _fmt_line(f: &mut fmt::Formatter,
                 prefix: &str,
                 left_delim: &str,
                 right_delim: &str,
                 columnwise_separator: &str,
                 content_parts: &[String]) -> fmt::Result
    {
        write!(f, "{} {}", prefix, left_delim)?;
        for (idx, s) in content_parts.iter().enumerate() {
            write!(f, "{}", s)?;
            if ((idx+1) % 5 == 0) && (idx < content_parts.len()-1) {
                write!(f, "{}", columnwise_separator)?;
            }
        }
        writeln!(f, "{}", right_delim)
    }

    fn _fmt_header(&self,
                   line_idx: usize,
                   prefix_len: usize,
                   f: &mut fmt::Formatter) -> fmt::Result
    {
        let content_parts = self.col_clues.iter()
                                          .map(|clue| match line_idx < clue.len() {
                                              true  => format!(" {}", lalign(&clue[clue.len()-1-line_idx].to_string(), 2)),
                                              false => String::from("   "),
                                          })
                                          .collect::<Vec<_>>();
        Self::_fmt_line(f, &ralign("", prefix_len), " ", " ", " ", &content_parts)
    }

    fn _fmt_border(&self, f: &mut fmt::Formatter, prefix_len: usize,
                   left: &str, right: &str, sep: &str, fill: &str) -> fmt::Result
    {
        Self::_fmt_line(f,
                        &ralign("", prefix_len),
                        left,
                        right,
                        sep,
                        &(0..self.width()).map(|_| fill.repeat(3)).collect::<Vec<_>>())
    }
}
impl fmt::Display for Puzzle {
    fn fmt(&self,
           f: &mut fmt::Formatter) -> fmt::Result
    {
        let row_prefixes = self.row_clues.iter()
                                         .map(|clue| clue.iter()
                                                         .map(|len| len.to_string())
                                                         .collect::<Vec<_>>()
                                                         .join(" "))
                                         .collect::<Vec<_>>();
        let prefix_len = row_prefixes.iter().map(|x| x.len()).max().unwrap_or(0);
        let max_col_runs = self.col_clues.iter().map(|clue| clue.len()).max().unwrap_or(0);

        for i in (0..max_col_runs).rev() {
            self._fmt_header(i, prefix_len, f)?;
        }

        // top board line
        self._fmt_border(f, prefix_len, "\u{2554}", "\u{2557}", "\u{2564}", "\u{2550}")?;

        for y in 0..self.height() {
            // board content line
            Self::_fmt_line(f,
                            &ralign(&row_prefixes[y], prefix_len),
                            "\u{2551}",
                            "\u{2551}",
                            "\u{2502}",
                            &self.grid.squares[y].iter()
                                                 .map(|s| format!(" {} ", match s {
                                                     SquareStatus::FilledIn   => "\u{25A0}",
                                                     SquareStatus::CrossedOut => " ",
                                                     SquareStatus::Unknown    => ".",
                                                 }))
                                                 .collect::<Vec<_>>())?;

            // horizontal board separator line
            if ((y+1) % 5 == 0) && (y != self.height()-1) {
                self._fmt_border(f, prefix_len, "\u{255F}", "\u{2562}", "\u{253C}", "\u{2500}")?;
            }
        }
        // bottom board line
        self._fmt_border(f, prefix_len, "\u{255A}", "\u{255D}", "\u{2567}", "\u{2550}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_rows_and_cols() {
        let puzzle = Puzzle::new(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap();
        assert_eq!(puzzle.width(), 2);
        assert_eq!(puzzle.height(), 2);
        assert_eq!(puzzle.rows[1].direction, Horizontal);
        assert_eq!(puzzle.cols[0].direction, Vertical);
        assert_eq!(puzzle.cols[0].length, 2);
        assert_eq!(puzzle.matrix(), vec![vec![0, 0], vec![0, 0]]);
    }

    #[test]
    fn test_rejects_different_totals() {
        let err = Puzzle::new(&[vec![2], vec![1]], &[vec![1], vec![1]]).unwrap_err();
        assert_eq!(err, ValidationError::ClueTotalsDiffer { rows: 3, cols: 2 });
    }

    #[test]
    fn test_rejects_runs_that_dont_fit() {
        let err = Puzzle::new(&[vec![1, 1], vec![0]], &[vec![1], vec![1]]).unwrap_err();
        assert_eq!(err, ValidationError::RunsDontFit { direction: Horizontal, index: 0, required: 3, available: 2 });
        let err = Puzzle::new(&[vec![1], vec![1]], &[vec![1, 1]]).unwrap_err();
        assert_eq!(err, ValidationError::RunsDontFit { direction: Vertical, index: 0, required: 3, available: 2 });
    }

    #[test]
    fn test_rejects_negative_clues() {
        let err = Puzzle::new(&[vec![-1, 2], vec![1]], &[vec![1], vec![1]]).unwrap_err();
        assert_eq!(err, ValidationError::NegativeClue { direction: Horizontal, index: 0, value: -1 });
    }

    #[test]
    fn test_rejects_empty_puzzle() {
        assert_eq!(Puzzle::new(&[], &[]).unwrap_err(), ValidationError::Empty);
    }

    #[test]
    fn test_empty_clue_means_zero() {
        let puzzle = Puzzle::new(&[vec![], vec![1]], &[vec![0], vec![1]]).unwrap();
        assert_eq!(puzzle.row_clues(), &[vec![0], vec![1]][..]);
    }

    #[test]
    fn test_fill_and_unfill_bounds() {
        let mut puzzle = Puzzle::new(&[vec![1], vec![1]], &[vec![1], vec![1]]).unwrap();
        assert!(puzzle.fill(0, 0).is_ok());
        assert!(puzzle.unfill(1, 1).is_ok());
        assert_eq!(puzzle.rows[0].cells[0].status(), SquareStatus::FilledIn);
        assert_eq!(puzzle.rows[1].cells[1].status(), SquareStatus::CrossedOut);
        assert_eq!(puzzle.fill(2, 0),
                   Err(ValidationError::OutOfBounds { row: 2, col: 0, width: 2, height: 2 }));
    }

    #[test]
    fn test_from_yaml() {
        let s = "
rows:
    - 1 1
    - 3
    - ~
cols: [1, 1, 2]
";
        // 1 1 over three squares forces #.#, column clues must agree
        let puzzle = Puzzle::from_yaml_str(s);
        assert!(matches!(puzzle, Err(Error::Validation(ValidationError::ClueTotalsDiffer { rows: 5, cols: 4 }))));

        let s = "
rows:
    - 1 1
    - 3
    - ~
cols: [2, 1, 2]
";
        let puzzle = Puzzle::from_yaml_str(s).unwrap();
        assert_eq!(puzzle.row_clues(), &[vec![1, 1], vec![3], vec![0]][..]);
        assert_eq!(puzzle.col_clues(), &[vec![2], vec![1], vec![2]][..]);
    }

    #[test]
    fn test_from_yaml_reports_bad_entries() {
        assert!(matches!(Puzzle::from_yaml_str("rows: [1]\n"), Err(Error::Parse(_))));
        assert!(matches!(Puzzle::from_yaml_str("rows: ['1 x']\ncols: [1]\n"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_from_literal() {
        let puzzle = Puzzle::from_literal("[[1,1],[0],[1,1]]", "[[1,1],[0],[1,1]]").unwrap();
        assert_eq!(puzzle.row_clues(), &[vec![1, 1], vec![0], vec![1, 1]][..]);
        assert!(matches!(Puzzle::from_literal("[[1,1],[0]", "[[1]]"), Err(Error::Parse(ParseError { line: 1, .. }))));
        assert!(matches!(Puzzle::from_literal("[[1]]", "[['a']]"), Err(Error::Parse(ParseError { line: 2, .. }))));
    }

    #[test]
    fn test_display_draws_board_with_clues() {
        let mut puzzle = Puzzle::new(&[vec![2], vec![1]], &[vec![1], vec![2]]).unwrap();
        puzzle.solve();
        let drawn = puzzle.to_string();
        let lines = drawn.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 1 + 1 + 2 + 1);
        assert_eq!(lines[0], "    1  2  ");
        assert_eq!(lines[2], "2 \u{2551} \u{25A0}  \u{25A0} \u{2551}");
        assert_eq!(lines[3], "1 \u{2551}    \u{25A0} \u{2551}");
    }
}
