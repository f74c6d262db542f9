use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Location, SourceId, MK_TOKEN,
};

use super::{
    classify::{classify, skip_trivia},
    cursor::{check_source_len, Cursor},
    tokens::Token,
};

/// Emits the tokens of a single buffer, one per call.
#[derive(Clone, Debug)]
pub struct Lexer {
    cursor: Cursor,
    file: Rc<String>,
    failed: bool,
}

impl Lexer {
    pub fn new(source: Rc<str>, source_id: SourceId, file: Rc<String>) -> Lexer {
        Lexer {
            cursor: Cursor::new(source, source_id),
            file,
            failed: false,
        }
    }

    /// The next token, `Ok(None)` once the input is exhausted, or an error
    /// when the upcoming character cannot start any token.
    pub fn next_token(&mut self) -> Result<Option<Token>, Error> {
        skip_trivia(&mut self.cursor);

        let Some(c) = self.cursor.peek() else {
            return Ok(None);
        };

        let start = self.cursor.offset();
        let position = self.cursor.position();

        let Some(classified) = classify(&self.cursor) else {
            return Err(Error::new(
                ErrorImpl::UnclassifiableCharacter { character: c },
                Location::new(Rc::clone(&self.file), position),
            ));
        };

        self.cursor.advance_bytes(classified.len);

        Ok(Some(MK_TOKEN!(
            classified.kind,
            self.cursor.span_from(start),
            position
        )))
    }

    /// The source text a token produced by this lexer covers.
    pub fn text(&self, token: &Token) -> &str {
        self.cursor.source().get(token.span.range()).unwrap_or_default()
    }

    pub fn location(&self, token: &Token) -> Location {
        Location::new(Rc::clone(&self.file), token.position)
    }

    pub fn file(&self) -> &Rc<String> {
        &self.file
    }

    pub fn source_id(&self) -> SourceId {
        self.cursor.source_id()
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let next = self.next_token().transpose();
        if let Some(Err(_)) = next {
            self.failed = true;
        }
        next
    }
}

/// Lexes one buffer on its own. Include directives are left in the output
/// as `TokenKind::Include` tokens; resolving them is the session's job.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let file_name = if let Some(file) = file {
        Rc::new(file)
    } else {
        Rc::new(String::from("shell"))
    };

    check_source_len(&file_name, source.len())
        .map_err(|err| Error::new(err, Location::null()))?;

    Lexer::new(Rc::from(source), SourceId(0), file_name).collect()
}
