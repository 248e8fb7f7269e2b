use std::fmt::Display;

use crate::Span;

/// The kinds of token an s-expression source can contain.
///
/// Operator names such as `+`, `++` or `<=` are ordinary symbols; whether
/// a symbol names a builtin operator is decided later against the builtin
/// table, not by the lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    OpenParen,
    CloseParen,
    Number,
    String,
    Symbol,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, span: Span) -> Self {
        Token { kind, value, span }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number | TokenKind::String | TokenKind::Symbol => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
