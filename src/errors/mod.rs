//! Error types and error handling for the tokenizer.
//!
//! This module defines the error types used throughout a tokenization
//! session. It includes:
//!
//! - Error structures with file, line and column information
//! - Specific error variants for file loading, include directives and lexing
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
