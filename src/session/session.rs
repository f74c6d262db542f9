//! Token stream assembly across `@include` directives.
//!
//! A `Session` drives the lexer of the entry file. Whenever the lexer yields
//! an include marker, the target file is loaded into the source arena and
//! lexed recursively, its tokens landing in the same output buffer at the
//! position of the directive. Each canonical path is spliced at most once.

use std::{
    env, fs,
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Location,
};

use super::{
    arena::{SourceArena, SourceFile},
    include::{include_base_of, literal_content, resolve_include_path, IncludeRegistry},
};

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Directory the entry file's include directives are resolved against.
    /// `None` means the working directory at tokenization time.
    pub base_dir: Option<PathBuf>,
}

impl SessionConfig {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

/// State shared by every level of include expansion.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    arena: SourceArena,
    registry: IncludeRegistry,
    tokens: Vec<Token>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            config,
            arena: SourceArena::new(),
            registry: IncludeRegistry::new(),
            tokens: vec![],
        }
    }

    /// Tokenizes the file at `path` and everything it transitively includes.
    pub fn tokenize_file(mut self, path: impl AsRef<Path>) -> Result<TokenStream, Error> {
        let path = path.as_ref();
        let include_base = self.base_dir()?;

        let canonical = fs::canonicalize(path).map_err(|err| {
            Error::new(
                ErrorImpl::FileRead {
                    path: path.to_string_lossy().into_owned(),
                    reason: err.to_string(),
                },
                Location::null(),
            )
        })?;

        self.registry.insert(&canonical);
        let lexer = self.load(&canonical, Location::null())?;
        self.expand(lexer, &include_base)?;

        Ok(self.finish())
    }

    /// Tokenizes an in-memory entry source. It has no path of its own, so it
    /// never takes part in include deduplication.
    pub fn tokenize_source(mut self, name: &str, source: String) -> Result<TokenStream, Error> {
        let include_base = self.base_dir()?;

        let name = Rc::new(name.to_string());
        let text: Rc<str> = Rc::from(source);
        let id = self
            .arena
            .add(Rc::clone(&name), None, Rc::clone(&text))
            .map_err(|err| Error::new(err, Location::null()))?;

        self.expand(Lexer::new(text, id, name), &include_base)?;

        Ok(self.finish())
    }

    fn base_dir(&self) -> Result<PathBuf, Error> {
        if let Some(base_dir) = &self.config.base_dir {
            return Ok(base_dir.clone());
        }

        env::current_dir().map_err(|err| {
            Error::new(
                ErrorImpl::WorkingDirectory {
                    reason: err.to_string(),
                },
                Location::null(),
            )
        })
    }

    /// Reads `canonical` into the arena and returns a lexer over it.
    /// `at` locates the directive that asked for the file.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD, which only fails the
    /// session if a token would start on one.
    fn load(&mut self, canonical: &Path, at: Location) -> Result<Lexer, Error> {
        let bytes = fs::read(canonical).map_err(|err| {
            Error::new(
                ErrorImpl::FileRead {
                    path: canonical.to_string_lossy().into_owned(),
                    reason: err.to_string(),
                },
                at.clone(),
            )
        })?;

        let name = Rc::new(canonical.to_string_lossy().into_owned());
        let text: Rc<str> = Rc::from(String::from_utf8_lossy(&bytes));
        let id = self
            .arena
            .add(
                Rc::clone(&name),
                Some(canonical.to_path_buf()),
                Rc::clone(&text),
            )
            .map_err(|err| Error::new(err, at))?;

        debug!(file = %name, bytes = text.len(), source = id.0, "loaded source file");

        Ok(Lexer::new(text, id, name))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(file = %lexer.file()))]
    fn expand(&mut self, mut lexer: Lexer, include_base: &Path) -> Result<(), Error> {
        while let Some(token) = lexer.next_token()? {
            if token.kind == TokenKind::Include {
                self.include(&mut lexer, &token, include_base)?;
            } else {
                self.tokens.push(token);
            }
        }

        Ok(())
    }

    fn include(&mut self, lexer: &mut Lexer, directive: &Token, include_base: &Path) -> Result<(), Error> {
        let path_token = match lexer.next_token()? {
            Some(token) if token.kind == TokenKind::StringLiteral => token,
            Some(token) => {
                return Err(Error::new(
                    ErrorImpl::ExpectedIncludePath {
                        found: lexer.text(&token).to_string(),
                    },
                    lexer.location(&token),
                ))
            }
            None => {
                return Err(Error::new(
                    ErrorImpl::ExpectedIncludePath {
                        found: String::from("end of input"),
                    },
                    lexer.location(directive),
                ))
            }
        };

        let location = lexer.location(&path_token);
        let relative = literal_content(lexer.text(&path_token));
        let canonical = resolve_include_path(include_base, relative)
            .map_err(|err| Error::new(err, location.clone()))?;

        if !self.registry.insert(&canonical) {
            debug!(path = %canonical.display(), "skipping already included file");
            return Ok(());
        }

        trace!(path = %canonical.display(), from = %location, "splicing included file");

        let included = self.load(&canonical, location)?;
        self.expand(included, &include_base_of(&canonical))
    }

    fn finish(self) -> TokenStream {
        debug!(
            tokens = self.tokens.len(),
            files = self.arena.len(),
            "token stream assembled"
        );

        TokenStream {
            tokens: self.tokens.into_boxed_slice(),
            arena: self.arena,
            included: self.registry.paths().to_vec(),
        }
    }
}

/// The finished, immutable token sequence together with the buffers its
/// tokens point into. Dropping it releases every loaded file.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Box<[Token]>,
    arena: SourceArena,
    included: Vec<PathBuf>,
}

impl TokenStream {
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The source text of `token`. Empty for tokens from another stream.
    pub fn text(&self, token: &Token) -> &str {
        self.arena.slice(&token.span).unwrap_or_default()
    }

    pub fn file_of(&self, token: &Token) -> Option<&SourceFile> {
        self.arena.get(token.source())
    }

    /// Every loaded file, entry source first, in load order.
    pub fn files(&self) -> std::slice::Iter<'_, SourceFile> {
        self.arena.files().iter()
    }

    pub fn arena(&self) -> &SourceArena {
        &self.arena
    }

    /// Canonical paths of the files read from disk, in first-seen order.
    pub fn included_paths(&self) -> &[PathBuf] {
        &self.included
    }

    pub fn into_parts(self) -> (Box<[Token]>, SourceArena) {
        (self.tokens, self.arena)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Tokenizes the file at `path` with the default configuration.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<TokenStream, Error> {
    Session::new(SessionConfig::default()).tokenize_file(path)
}

/// Tokenizes an in-memory source with the default configuration.
pub fn tokenize_source(name: &str, source: String) -> Result<TokenStream, Error> {
    Session::new(SessionConfig::default()).tokenize_source(name, source)
}
