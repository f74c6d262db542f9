//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The macro keeps token construction in the lexer down to one line.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The byte span in the owning source buffer
/// * `$position` - Line and column of the first character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::NumberLiteral, span, position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr, $position:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            span: $span,
            position: $position,
        }
    };
}
