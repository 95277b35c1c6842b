//! Lexer tokens for one declaration line.

use crate::span::Span;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `[A-Za-z0-9_]+`
    Word(String),
    Star,
    LBracket,
    RBracket,
    ColonColon, // ::
    Semicolon,
    /// Any other non-whitespace character (`=`, `-`, `,`, ...).
    Other(char),

    Eof,
}

#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(w) => Some(w),
            _ => None,
        }
    }
}
