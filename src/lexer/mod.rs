//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts the text of a
//! single file into tokens. It handles:
//!
//! - Character-level scanning with line/column tracking
//! - Recognition of keywords, identifiers, literals, and operators
//! - Maximal-munch matching of operators and punctuation
//! - Whitespace, line comments and nested block comments
//!
//! Following `@include` directives across files is done by `session`.

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod tokens;
