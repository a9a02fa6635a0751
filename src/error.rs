// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::io;
use std::time::Duration;

use super::util::Direction;

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum ValidationError {
    Empty,                                                   // no rows or no columns at all
    ClueTotalsDiffer { rows: i64, cols: i64 },               // row clues and column clues imply different fill counts
    RunsDontFit { direction: Direction, index: usize, required: i64, available: usize },
    NegativeClue { direction: Direction, index: usize, value: i32 },
    OutOfBounds { row: usize, col: usize, width: usize, height: usize },
    Ragged { index: usize, expected: usize, found: usize },  // a matrix whose lines don't all have the same length
}
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::Empty =>
                write!(f, "puzzle must have at least one row and one column"),
            ValidationError::ClueTotalsDiffer { rows, cols } =>
                write!(f, "row clues fill {} squares but column clues fill {}", rows, cols),
            ValidationError::RunsDontFit { direction, index, required, available } =>
                write!(f, "clues of {} {} need {} squares but only {} are available",
                       direction.line_name(), index, required, available),
            ValidationError::NegativeClue { direction, index, value } =>
                write!(f, "clues of {} {} contain negative run length {}",
                       direction.line_name(), index, value),
            ValidationError::OutOfBounds { row, col, width, height } =>
                write!(f, "square (row={}, col={}) lies outside the {}x{} grid", row, col, width, height),
            ValidationError::Ragged { index, expected, found } =>
                write!(f, "line {} has {} squares, expected {}", index, found, expected),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TimeoutError {
    pub operation: &'static str,
    pub limit: Duration,
}
impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} exceeded its time budget of {:.1}s", self.operation, self.limit.as_secs_f64())
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ParseError {
    pub line: usize, // 1-based; 0 if the location is unknown
    pub message: String,
}
impl ParseError {
    pub fn new<S: Into<String>>(line: usize, message: S) -> Self {
        ParseError { line, message: message.into() }
    }
}
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line {
            0 => write!(f, "{}", self.message),
            n => write!(f, "line {}: {}", n, self.message),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    Validation(ValidationError),
    Timeout(TimeoutError),
    Parse(ParseError),
    Io(io::Error),
    Image(image::ImageError),
}
impl Error {
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout(_) => true,
            _                 => false,
        }
    }
}
impl From<ValidationError> for Error {
    fn from(other: ValidationError) -> Self {
        Error::Validation(other)
    }
}
impl From<TimeoutError> for Error {
    fn from(other: TimeoutError) -> Self {
        Error::Timeout(other)
    }
}
impl From<ParseError> for Error {
    fn from(other: ParseError) -> Self {
        Error::Parse(other)
    }
}
impl From<io::Error> for Error {
    fn from(other: io::Error) -> Self {
        Error::Io(other)
    }
}
impl From<image::ImageError> for Error {
    fn from(other: image::ImageError) -> Self {
        Error::Image(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Validation(x) => write!(f, "ValidationError: {}", x),
            Error::Timeout(x)    => write!(f, "TimeoutError: {}", x),
            Error::Parse(x)      => write!(f, "ParseError: {}", x),
            Error::Io(x)         => write!(f, "IoError: {}", x),
            Error::Image(x)      => write!(f, "ImageError: {}", x),
        }
    }
}
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(x)    => Some(x),
            Error::Image(x) => Some(x),
            _               => None,
        }
    }
}
