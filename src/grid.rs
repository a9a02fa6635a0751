// vim: set ai et ts=4 sts=4:
use std::fmt;
use ansi_term::{Colour, Style, ANSIString};

use super::error::ValidationError;
use super::util::maybe_color;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum SquareStatus {
    FilledIn,
    CrossedOut,
    Unknown,
}
impl SquareStatus {
    /// The `{-1, 0, 1}` encoding used by matrix snapshots.
    pub fn value(&self) -> i8 {
        match *self {
            SquareStatus::FilledIn   =>  1,
            SquareStatus::CrossedOut => -1,
            SquareStatus::Unknown    =>  0,
        }
    }
    pub fn from_value(value: i8) -> Self {
        match value {
            v if v > 0 => SquareStatus::FilledIn,
            v if v < 0 => SquareStatus::CrossedOut,
            _          => SquareStatus::Unknown,
        }
    }
    pub fn is_known(&self) -> bool {
        *self != SquareStatus::Unknown
    }
    pub fn glyph(&self) -> &'static str {
        match *self {
            SquareStatus::FilledIn   => "#",
            SquareStatus::CrossedOut => " ",
            SquareStatus::Unknown    => "/",
        }
    }
    pub fn to_colored_string(&self) -> ANSIString<'static> {
        match *self {
            SquareStatus::FilledIn   => Style::new().on(Colour::Blue).paint("\u{25A0}"),
            SquareStatus::CrossedOut => Style::new().fg(Colour::Fixed(241)).paint("x"),
            SquareStatus::Unknown    => Style::default().paint("."),
        }
    }
}
impl fmt::Display for SquareStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            SquareStatus::FilledIn   => "FilledIn",
            SquareStatus::CrossedOut => "CrossedOut",
            SquareStatus::Unknown    => "Unknown",
        })
    }
}

// ------------------------------------------------

/// Snapshot of what is known about every square, indexed `[row][col]`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub squares: Vec<Vec<SquareStatus>>,
}
impl Grid {
    pub fn new(width: usize, height: usize)
        -> Self
    {
        Grid {
            squares: vec![vec![SquareStatus::Unknown; width]; height],
        }
    }
    pub fn from_matrix(matrix: &[Vec<i8>]) -> Result<Self, ValidationError> {
        let width = matrix.first().map(|row| row.len()).unwrap_or(0);
        if width == 0 {
            return Err(ValidationError::Empty);
        }
        if let Some((index, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ValidationError::Ragged { index, expected: width, found: row.len() });
        }
        Ok(Grid {
            squares: matrix.iter()
                           .map(|row| row.iter().map(|&v| SquareStatus::from_value(v)).collect())
                           .collect(),
        })
    }

    pub fn width(&self) -> usize { self.squares.first().map(|row| row.len()).unwrap_or(0) }
    pub fn height(&self) -> usize { self.squares.len() }
    pub fn get_square(&self, x: usize, y: usize) -> SquareStatus {
        self.squares[y][x]
    }
    pub fn set_square(&mut self, x: usize, y: usize, status: SquareStatus) {
        self.squares[y][x] = status;
    }
    pub fn column(&self, x: usize) -> Vec<SquareStatus> {
        self.squares.iter().map(|row| row[x]).collect()
    }

    pub fn to_matrix(&self) -> Vec<Vec<i8>> {
        self.squares.iter()
                    .map(|row| row.iter().map(|s| s.value()).collect())
                    .collect()
    }
    pub fn count(&self, status: SquareStatus) -> usize {
        self.squares.iter()
                    .flat_map(|row| row.iter())
                    .filter(|&&s| s == status)
                    .count()
    }
    pub fn is_complete(&self) -> bool {
        self.count(SquareStatus::Unknown) == 0
    }

    /// One string of glyphs per row: `#` filled, space blank, `/` undetermined.
    pub fn render(&self) -> Vec<String> {
        self.squares.iter()
                    .map(|row| row.iter().map(|s| s.glyph()).collect::<String>())
                    .collect()
    }
    pub fn render_colored(&self, emit_color: bool) -> Vec<String> {
        self.squares.iter()
                    .map(|row| row.iter()
                                  .map(|s| maybe_color(&s.to_colored_string(), emit_color))
                                  .collect::<String>())
                    .collect()
    }
}

/// Glyph rendering straight from a `{-1, 0, 1}` matrix.
pub fn render(matrix: &[Vec<i8>]) -> Vec<String> {
    matrix.iter()
          .map(|row| row.iter().map(|&v| SquareStatus::from_value(v).glyph()).collect::<String>())
          .collect()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        for s in &[SquareStatus::FilledIn, SquareStatus::CrossedOut, SquareStatus::Unknown] {
            assert_eq!(SquareStatus::from_value(s.value()), *s);
        }
    }

    #[test]
    fn test_render_matrix() {
        let matrix = vec![vec![1, -1, 0], vec![-1, 1, 1]];
        assert_eq!(render(&matrix), vec!["# /".to_string(), " ##".to_string()]);
        let grid = Grid::from_matrix(&matrix).unwrap();
        assert_eq!(grid.render(), render(&matrix));
        assert_eq!(grid.to_matrix(), matrix);
        assert_eq!(grid.count(SquareStatus::FilledIn), 3);
        assert!(!grid.is_complete());
        assert_eq!(grid.column(2), vec![SquareStatus::Unknown, SquareStatus::FilledIn]);
    }

    #[test]
    fn test_uncolored_render_matches_plain_glyph_count() {
        let grid = Grid::from_matrix(&[vec![1, -1, 0]]).unwrap();
        assert_eq!(grid.render_colored(false), vec!["\u{25A0}x.".to_string()]);
    }

    #[test]
    fn test_from_matrix_rejects_ragged_and_empty() {
        assert_eq!(Grid::from_matrix(&[]), Err(ValidationError::Empty));
        assert_eq!(Grid::from_matrix(&[vec![1, 1], vec![1]]),
                   Err(ValidationError::Ragged { index: 1, expected: 2, found: 1 }));
    }
}
