//! Lexer: one declaration line → tokens.

use gsgen_syntax::span::Span;
use gsgen_syntax::token::{Token, TokenKind};
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    /// Spans are relative to the start of `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars().peekable(),
            offset: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.offset += c.len_utf8() as u32;
        Some(c)
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.offset)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.next();
        }
    }

    fn skip_line_comment(&mut self) {
        while self.next().is_some() {}
    }

    fn read_word(&mut self) -> (String, Span) {
        let start = self.offset;
        let mut s = String::new();
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            s.push(c);
            self.next();
        }
        (s, self.span_from(start))
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let start = self.offset;

            let c = match self.peek() {
                Some(c) => c,
                None => return Token::new(TokenKind::Eof, self.span_from(start)),
            };

            if c.is_ascii_alphanumeric() || c == '_' {
                let (s, span) = self.read_word();
                return Token::new(TokenKind::Word(s), span);
            }

            self.next();
            let kind = match c {
                '/' if self.peek() == Some('/') => {
                    self.skip_line_comment();
                    continue;
                }
                ':' if self.peek() == Some(':') => {
                    self.next();
                    TokenKind::ColonColon
                }
                '*' => TokenKind::Star,
                '[' => TokenKind::LBracket,
                ']' => TokenKind::RBracket,
                ';' => TokenKind::Semicolon,
                other => TokenKind::Other(other),
            };
            return Token::new(kind, self.span_from(start));
        }
    }

    /// Lex the whole line into a token stream ending in `Eof` (for parser).
    pub fn collect_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let t = self.next_token();
            let is_eof = t.is_eof();
            tokens.push(t);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).collect_tokens().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lex_standard_declaration() {
        assert_eq!(
            kinds("int mcsi_Magi;"),
            vec![
                TokenKind::Word("int".into()),
                TokenKind::Word("mcsi_Magi".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_pointer_and_array() {
        assert_eq!(
            kinds("char *p[32];"),
            vec![
                TokenKind::Word("char".into()),
                TokenKind::Star,
                TokenKind::Word("p".into()),
                TokenKind::LBracket,
                TokenKind::Word("32".into()),
                TokenKind::RBracket,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_skips_trailing_comment() {
        assert_eq!(
            kinds("bool mb_On; // flag"),
            vec![
                TokenKind::Word("bool".into()),
                TokenKind::Word("mb_On".into()),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn lex_qualified_and_other() {
        assert_eq!(
            kinds("std::string a = -1"),
            vec![
                TokenKind::Word("std".into()),
                TokenKind::ColonColon,
                TokenKind::Word("string".into()),
                TokenKind::Word("a".into()),
                TokenKind::Other('='),
                TokenKind::Other('-'),
                TokenKind::Word("1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn spans_are_line_relative() {
        let tokens = Lexer::new("  int x;").collect_tokens();
        assert_eq!(tokens[0].span, Span::new(2, 5));
        assert_eq!(tokens[1].span, Span::new(6, 7));
        assert_eq!(tokens[2].span, Span::new(7, 8));
    }
}
