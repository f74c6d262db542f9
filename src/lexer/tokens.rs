use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, SourceId, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Keyword(Keyword::Let));
        map.insert("if", TokenKind::Keyword(Keyword::If));
        map.insert("return", TokenKind::Keyword(Keyword::Return));
        map.insert("else", TokenKind::Keyword(Keyword::Else));
        map.insert("while", TokenKind::Keyword(Keyword::While));
        map.insert("iter", TokenKind::Keyword(Keyword::Iter));
        map.insert("loop", TokenKind::Keyword(Keyword::Loop));
        map.insert("this", TokenKind::Keyword(Keyword::This));
        map.insert("enum", TokenKind::Keyword(Keyword::Enum));
        map.insert("struct", TokenKind::Keyword(Keyword::Struct));
        map.insert("union", TokenKind::Keyword(Keyword::Union));
        map.insert("@include", TokenKind::Include);
        map
    };
}

/// Operator and punctuation spellings, longest first. The first entry that
/// matches the upcoming text wins.
pub const OPERATORS: [(&str, TokenKind); 30] = [
    ("->>", TokenKind::LongArrow),
    ("->", TokenKind::Arrow),
    ("=>", TokenKind::FatArrow),
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    (">=", TokenKind::GreaterEquals),
    ("<=", TokenKind::LessEquals),
    ("<", TokenKind::Less),
    (">", TokenKind::Greater),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Dash),
    ("/", TokenKind::Slash),
    ("*", TokenKind::Star),
    ("%", TokenKind::Percent),
    ("!", TokenKind::Not),
    ("(", TokenKind::OpenParen),
    (")", TokenKind::CloseParen),
    ("[", TokenKind::OpenBracket),
    ("]", TokenKind::CloseBracket),
    ("{", TokenKind::OpenCurly),
    ("}", TokenKind::CloseCurly),
    (";", TokenKind::Semicolon),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
    (":", TokenKind::Colon),
    ("&", TokenKind::Ampersand),
    ("|", TokenKind::Pipe),
    ("=", TokenKind::Assignment),
];

/// Characters that end an identifier run.
pub const DELIMITERS: &str = ":.{}()[];,+*-|<>!=&/%";

#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Member,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Let,
    If,
    Return,
    Else,
    While,
    Iter,
    Loop,
    This,
    Enum,
    Struct,
    Union,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Let => "let",
            Keyword::If => "if",
            Keyword::Return => "return",
            Keyword::Else => "else",
            Keyword::While => "while",
            Keyword::Iter => "iter",
            Keyword::Loop => "loop",
            Keyword::This => "this",
            Keyword::Enum => "enum",
            Keyword::Struct => "struct",
            Keyword::Union => "union",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    StringLiteral,
    NumberLiteral,
    CharLiteral,

    // Only seen by the include resolver, never part of a finished stream
    Include,

    LongArrow, // ->>
    Arrow,     // ->
    FatArrow,  // =>

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And, // &&
    Or,  // ||
    Ampersand,
    Pipe,

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Semicolon,
    Comma,
    Dot,
    Colon,
}

impl TokenKind {
    /// Source spelling of keywords, the include directive and operators.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            TokenKind::Keyword(keyword) => Some(keyword.as_str()),
            TokenKind::Include => Some("@include"),
            _ => OPERATORS
                .iter()
                .find(|(_, kind)| kind == self)
                .map(|(symbol, _)| *symbol),
        }
    }

    /// Precedence of the kind when used as a binary operator.
    pub fn binding_power(&self) -> Option<BindingPower> {
        match self {
            TokenKind::Assignment => Some(BindingPower::Assignment),
            TokenKind::Or => Some(BindingPower::LogicalOr),
            TokenKind::And => Some(BindingPower::LogicalAnd),
            TokenKind::Pipe => Some(BindingPower::BitwiseOr),
            TokenKind::Ampersand => Some(BindingPower::BitwiseAnd),
            TokenKind::Equals | TokenKind::NotEquals => Some(BindingPower::Equality),
            TokenKind::Less
            | TokenKind::LessEquals
            | TokenKind::Greater
            | TokenKind::GreaterEquals => Some(BindingPower::Relational),
            TokenKind::Plus | TokenKind::Dash => Some(BindingPower::Additive),
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => {
                Some(BindingPower::Multiplicative)
            }
            TokenKind::Dot => Some(BindingPower::Member),
            _ => None,
        }
    }

    pub fn is_unary_prefix(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Dash | TokenKind::Not)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "Keyword({})", keyword.as_str()),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// One classified lexeme. The text is not copied: `span` points into the
/// buffer owned by the session's source arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.kind, self.position)
    }
}

impl Token {
    pub fn source(&self) -> SourceId {
        self.span.source
    }

    pub fn len(&self) -> usize {
        self.span.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.span.len == 0
    }
}
