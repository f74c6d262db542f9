//! Multi-file tokenization.
//!
//! A session owns everything that outlives a single file's lexer:
//!
//! - The source arena holding every loaded buffer
//! - The include registry of canonical paths already spliced in
//! - The growing output token buffer
//!
//! `@include "path"` directives are replaced in place by the tokens of the
//! target file, and a file is spliced at most once per session.

pub mod arena;
pub mod include;
pub mod session;

#[cfg(test)]
mod tests;
