#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod session;

extern crate regex;

pub use session::session::{tokenize_file, tokenize_source, Session, SessionConfig, TokenStream};

/// Index of a loaded file inside the source arena of one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u32);

impl SourceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 1-based line and column of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Byte range of a token inside the buffer identified by `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub source: SourceId,
    pub start: u32,
    pub len: u32,
}

impl Span {
    pub fn end(&self) -> u32 {
        self.start + self.len
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end() as usize
    }
}

/// A position inside a named file, used for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: Rc<String>,
    pub position: Position,
}

impl Location {
    pub fn new(file: Rc<String>, position: Position) -> Self {
        Location { file, position }
    }

    pub fn null() -> Self {
        Location {
            file: Rc::new(String::from("<null>")),
            position: Position::start(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.position)
    }
}

/// Returns the text of the 1-based `line` in `source`, without its newline.
pub fn get_line_at_position(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.split('\n').nth(index)
}

pub fn render_error(error: &Error, source: Option<&str>) -> String {
    /*
        Error: message
        -> main.ul:3:9
          |
        3 | let a = #;
          | --------^
    */

    let location = error.get_location();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", location));

    let Some(line_text) = source.and_then(|source| get_line_at_position(source, location.position.line)) else {
        return out;
    };

    let line_string = location.position.line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = location.position.column as usize;
    let arrows = column.saturating_sub(removed_whitespace).max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: Option<&str>) {
    eprint!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();
    (&string[start..], start)
}
