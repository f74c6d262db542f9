use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use crate::{errors::errors::ErrorImpl, lexer::cursor::check_source_len, SourceId, Span};

/// One loaded file. `path` is the canonical path for files read from disk
/// and `None` for in-memory sources.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: Rc<String>,
    path: Option<PathBuf>,
    text: Rc<str>,
}

impl SourceFile {
    pub fn name(&self) -> &Rc<String> {
        &self.name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Owns every buffer loaded during a session. Buffers are only appended;
/// they are all released together when the arena is dropped.
#[derive(Debug, Clone, Default)]
pub struct SourceArena {
    files: Vec<SourceFile>,
}

impl SourceArena {
    pub fn new() -> Self {
        SourceArena { files: vec![] }
    }

    /// Stores a buffer. Fails when its offsets would not fit a `Span`.
    pub fn add(
        &mut self,
        name: Rc<String>,
        path: Option<PathBuf>,
        text: Rc<str>,
    ) -> Result<SourceId, ErrorImpl> {
        check_source_len(&name, text.len())?;
        let id = u32::try_from(self.files.len())
            .map(SourceId)
            .map_err(|_| ErrorImpl::FileRead {
                path: name.to_string(),
                reason: String::from("too many source files"),
            })?;

        self.files.push(SourceFile { name, path, text });
        Ok(id)
    }

    pub fn get(&self, id: SourceId) -> Option<&SourceFile> {
        self.files.get(id.index())
    }

    /// The text covered by `span`, if it belongs to this arena.
    pub fn slice(&self, span: &Span) -> Option<&str> {
        self.get(span.source)?.text().get(span.range())
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceId, &SourceFile)> {
        (0u32..).map(SourceId).zip(self.files.iter())
    }
}
