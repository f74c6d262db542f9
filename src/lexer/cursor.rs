use std::rc::Rc;

use crate::{errors::errors::ErrorImpl, Position, SourceId, Span};

/// Checks that every byte offset of a `len` byte buffer fits a span.
pub fn check_source_len(file: &str, len: usize) -> Result<u32, ErrorImpl> {
    u32::try_from(len).map_err(|_| ErrorImpl::FileRead {
        path: file.to_string(),
        reason: format!("{} bytes exceeds the {} byte limit", len, u32::MAX),
    })
}

/// Read position into one file's text with line/column bookkeeping.
///
/// The cursor holds a shared handle to the buffer owned by the source arena,
/// so the arena can keep growing while a file is being scanned.
#[derive(Clone, Debug)]
pub struct Cursor {
    source: Rc<str>,
    source_id: SourceId,
    pos: usize,
    line: u32,
    column: u32,
}

impl Cursor {
    pub fn new(source: Rc<str>, source_id: SourceId) -> Cursor {
        Cursor {
            source,
            source_id,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// The next character, without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    /// Consumes one character. Past the end this is a no-op returning `None`.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consumes characters until `len` more bytes have been read.
    pub fn advance_bytes(&mut self, len: usize) {
        let end = (self.pos + len).min(self.source.len());
        while self.pos < end {
            self.advance();
        }
    }

    /// Whether the upcoming text starts with `literal`. Never consumes.
    pub fn match_literal(&self, literal: &str) -> bool {
        self.remainder().starts_with(literal)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn source_id(&self) -> SourceId {
        self.source_id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Span from byte offset `start` up to the current position. Buffers
    /// passed through `check_source_len` never saturate.
    pub fn span_from(&self, start: usize) -> Span {
        Span {
            source: self.source_id,
            start: u32::try_from(start).unwrap_or(u32::MAX),
            len: u32::try_from(self.pos - start).unwrap_or(u32::MAX),
        }
    }
}
