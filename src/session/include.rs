use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::errors::errors::ErrorImpl;

/// Canonical paths of every file already spliced into the stream.
///
/// A path is inserted before its file is scanned, so an include that leads
/// back to a file still being expanded finds it here and is skipped.
#[derive(Debug, Clone, Default)]
pub struct IncludeRegistry {
    seen: HashSet<PathBuf>,
    order: Vec<PathBuf>,
}

impl IncludeRegistry {
    pub fn new() -> Self {
        IncludeRegistry::default()
    }

    /// Records `path`; false if it was already present.
    pub fn insert(&mut self, path: &Path) -> bool {
        if self.seen.contains(path) {
            return false;
        }
        self.seen.insert(path.to_path_buf());
        self.order.push(path.to_path_buf());
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    /// Registered paths in the order they were first seen.
    pub fn paths(&self) -> &[PathBuf] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Content of a string literal token without its quotes. An unterminated
/// literal has no closing quote to strip.
pub fn literal_content(literal: &str) -> &str {
    let inner = literal.strip_prefix('"').unwrap_or(literal);
    inner.strip_suffix('"').unwrap_or(inner)
}

/// Joins the include path onto `base` and canonicalizes the result.
pub fn resolve_include_path(base: &Path, relative: &str) -> Result<PathBuf, ErrorImpl> {
    let joined = base.join(relative);

    fs::canonicalize(&joined).map_err(|err| ErrorImpl::PathResolution {
        path: joined.to_string_lossy().into_owned(),
        reason: err.to_string(),
    })
}

/// Directory includes inside the file at `canonical` are resolved against.
pub fn include_base_of(canonical: &Path) -> PathBuf {
    canonical
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("/"))
}
