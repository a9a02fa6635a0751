// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::os::unix::io::AsRawFd;
use ansi_term::ANSIString;

pub fn maybe_color(s: &ANSIString, emit_color: bool) -> String {
    match emit_color {
        true  => s.to_string(),
        false => (**s).to_string(), // deref once to get ANSIString, once more to get underlying str
    }
}
pub fn ralign(s: &str, width: usize) -> String {
    let visual_len = s.chars().count();
    if visual_len >= width {
        return String::from(s);
    }
    format!("{}{}", " ".repeat(width-visual_len), s)
}
pub fn lalign(s: &str, width: usize) -> String {
    let visual_len = s.chars().count();
    if visual_len >= width {
        return String::from(s);
    }
    format!("{}{}", s, " ".repeat(width-visual_len))
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
}
impl Direction {
    pub fn line_name(&self) -> &'static str {
        match self {
            Direction::Horizontal => "row",
            Direction::Vertical   => "col",
        }
    }
}
impl fmt::Display for Direction {
    fn fmt(&self,
           f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", match self {
            Direction::Horizontal => "Horizontal",
            Direction::Vertical   => "Vertical",
        })
    }
}

pub fn is_a_tty<T: AsRawFd>(handle: T) -> bool {
    extern crate libc;
    let fd = handle.as_raw_fd();
    unsafe { libc::isatty(fd) != 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_counts_chars_not_bytes() {
        assert_eq!(ralign("\u{25A0}", 3), "  \u{25A0}");
        assert_eq!(lalign("1", 3), "1  ");
        assert_eq!(ralign("1 2 3", 2), "1 2 3");
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::Horizontal.to_string(), "Horizontal");
        assert_eq!(Direction::Horizontal.line_name(), "row");
        assert_eq!(Direction::Vertical.line_name(), "col");
    }
}
