//! Trivia skipping and the token classifiers.
//!
//! Every classifier looks at the cursor without moving it and reports the
//! kind and byte length of the token that starts there, if it recognises one.

use lazy_static::lazy_static;
use regex::Regex;

use super::{
    cursor::Cursor,
    tokens::{TokenKind, DELIMITERS, OPERATORS, RESERVED_LOOKUP},
};

lazy_static! {
    static ref KEYWORD: Regex =
        Regex::new(r"^(?:@include|let|if|return|else|while|iter|loop|this|enum|struct|union)")
            .unwrap();
    static ref IDENTIFIER: Regex =
        Regex::new(&format!(r"^[A-Za-z_][^ \n{}]*", regex::escape(DELIMITERS))).unwrap();
    static ref NUMBER: Regex = Regex::new(r"^[0-9]+(?:\.[0-9]*f?)?").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub kind: TokenKind,
    pub len: usize,
}

impl Classified {
    fn new(kind: TokenKind, len: usize) -> Self {
        Classified { kind, len }
    }
}

pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\n'
}

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(c)
}

fn ends_word(c: Option<char>) -> bool {
    c.map_or(true, |c| is_whitespace(c) || is_delimiter(c))
}

/// Advances past whitespace, line comments and (nested) block comments
/// until the cursor sits on token content or at the end of input.
pub fn skip_trivia(cursor: &mut Cursor) {
    loop {
        if cursor.match_literal("//") {
            while let Some(c) = cursor.peek() {
                if c == '\n' {
                    break;
                }
                cursor.advance();
            }
        } else if cursor.match_literal("/*") {
            skip_block_comment(cursor);
        } else if cursor.peek().is_some_and(is_whitespace) {
            cursor.advance();
        } else {
            break;
        }
    }
}

// An unterminated comment runs to the end of input.
fn skip_block_comment(cursor: &mut Cursor) {
    cursor.advance_n(2);
    let mut depth = 1usize;

    while depth > 0 && !cursor.at_eof() {
        if cursor.match_literal("/*") {
            depth += 1;
            cursor.advance_n(2);
        } else if cursor.match_literal("*/") {
            depth -= 1;
            cursor.advance_n(2);
        } else {
            cursor.advance();
        }
    }
}

/// A reserved word or the include directive, followed by whitespace, a
/// delimiter or the end of input. Anything else makes the run an identifier
/// (`returning` and `let#y` are not keywords).
pub fn classify_keyword(cursor: &Cursor) -> Option<Classified> {
    let remainder = cursor.remainder();
    let matched = KEYWORD.find(remainder)?.as_str();

    if !ends_word(remainder[matched.len()..].chars().next()) {
        return None;
    }

    RESERVED_LOOKUP
        .get(matched)
        .map(|kind| Classified::new(*kind, matched.len()))
}

pub fn classify_identifier(cursor: &Cursor) -> Option<Classified> {
    IDENTIFIER
        .find(cursor.remainder())
        .map(|m| Classified::new(TokenKind::Identifier, m.len()))
}

pub fn classify_number(cursor: &Cursor) -> Option<Classified> {
    NUMBER
        .find(cursor.remainder())
        .map(|m| Classified::new(TokenKind::NumberLiteral, m.len()))
}

pub fn classify_string(cursor: &Cursor) -> Option<Classified> {
    classify_quoted(cursor, '"', TokenKind::StringLiteral)
}

pub fn classify_char(cursor: &Cursor) -> Option<Classified> {
    classify_quoted(cursor, '\'', TokenKind::CharLiteral)
}

// Runs through the next matching quote, or to the end of input if there is none.
fn classify_quoted(cursor: &Cursor, quote: char, kind: TokenKind) -> Option<Classified> {
    let remainder = cursor.remainder();
    let body = remainder.strip_prefix(quote)?;

    let len = match body.find(quote) {
        Some(index) => 1 + index + quote.len_utf8(),
        None => remainder.len(),
    };

    Some(Classified::new(kind, len))
}

pub fn classify_operator(cursor: &Cursor) -> Option<Classified> {
    OPERATORS
        .iter()
        .find(|(symbol, _)| cursor.match_literal(symbol))
        .map(|(symbol, kind)| Classified::new(*kind, symbol.len()))
}

/// Runs the classifiers in priority order; the first match wins.
pub fn classify(cursor: &Cursor) -> Option<Classified> {
    classify_keyword(cursor)
        .or_else(|| classify_identifier(cursor))
        .or_else(|| classify_number(cursor))
        .or_else(|| classify_string(cursor))
        .or_else(|| classify_char(cursor))
        .or_else(|| classify_operator(cursor))
}
