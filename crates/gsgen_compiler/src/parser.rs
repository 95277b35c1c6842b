//! Parser: line tokens → declaration syntax record (or a line diagnostic).
//!
//! Accepted forms, array form taking priority when a bracket group precedes `;`:
//!   <type-tokens> <'*'?><ident>[<size>];
//!   <type-tokens> <'*'?><ident>;

use crate::lexer::Lexer;
use gsgen_syntax::ast::DeclSyntax;
use gsgen_syntax::diagnostics::Diagnostic;
use gsgen_syntax::span::Location;
use gsgen_syntax::token::{Token, TokenKind};
use std::num::NonZeroU32;

/// Classify one trimmed, non-blank line.
pub fn parse_line(raw_line: &str, location: Location) -> Result<DeclSyntax, Diagnostic> {
    let tokens = Lexer::new(raw_line).collect_tokens();
    LineParser::new(tokens, raw_line, location).parse()
}

struct LineParser<'a> {
    tokens: Vec<Token>,
    raw_line: &'a str,
    location: Location,
}

/// Type and identifier of a declaration, before emptiness checks.
struct Head {
    type_words: Vec<String>,
    ident: Option<String>,
    is_pointer: bool,
}

impl<'a> LineParser<'a> {
    fn new(mut tokens: Vec<Token>, raw_line: &'a str, location: Location) -> Self {
        tokens.retain(|t| !t.is_eof());
        Self {
            tokens,
            raw_line,
            location,
        }
    }

    fn mismatch(&self) -> Diagnostic {
        Diagnostic::grammar_mismatch(self.raw_line, self.location)
    }

    fn parse(&self) -> Result<DeclSyntax, Diagnostic> {
        // Exactly one `;`, and it ends the line.
        let semi = self
            .tokens
            .iter()
            .position(|t| t.kind == TokenKind::Semicolon)
            .ok_or_else(|| self.mismatch())?;
        if semi + 1 != self.tokens.len() {
            return Err(self.mismatch());
        }
        let body = &self.tokens[..semi];

        let (head_tokens, size_tokens) = self.split_array(body)?;
        let head = self.parse_head(head_tokens)?;

        let array_size = match size_tokens {
            Some(size) => Some(self.parse_size(size)?),
            None => None,
        };

        let data_type = head.type_words.join(" ");
        let variable_name = head.ident.unwrap_or_default();
        if data_type.is_empty() || variable_name.is_empty() {
            return Err(Diagnostic::empty_after_strip(self.raw_line, self.location));
        }

        Ok(DeclSyntax {
            location: self.location,
            raw_line: self.raw_line.to_string(),
            data_type,
            variable_name,
            is_pointer: head.is_pointer,
            array_size,
        })
    }

    /// Split `head [ size ]` into head and size tokens; no trailing bracket means standard form.
    fn split_array<'t>(&self, body: &'t [Token]) -> Result<(&'t [Token], Option<&'t [Token]>), Diagnostic> {
        match body.last().map(|t| &t.kind) {
            Some(TokenKind::RBracket) => {
                let open = body
                    .iter()
                    .rposition(|t| t.kind == TokenKind::LBracket)
                    .ok_or_else(|| self.mismatch())?;
                Ok((&body[..open], Some(&body[open + 1..body.len() - 1])))
            }
            _ => Ok((body, None)),
        }
    }

    fn parse_head(&self, head: &[Token]) -> Result<Head, Diagnostic> {
        let stars = head.iter().filter(|t| t.kind == TokenKind::Star).count();
        if stars > 1 {
            return Err(self.mismatch());
        }
        let is_pointer = stars == 1;

        let (ident, rest) = match head.split_last() {
            Some((last, rest)) => match &last.kind {
                TokenKind::Word(w) => (Some(w.clone()), rest),
                TokenKind::Star => (None, rest),
                _ => return Err(self.mismatch()),
            },
            None => return Err(self.mismatch()),
        };

        let mut type_words: Vec<String> = Vec::new();
        let mut join_next = false;
        for t in rest {
            match &t.kind {
                TokenKind::Word(w) => {
                    if join_next {
                        if let Some(prev) = type_words.last_mut() {
                            prev.push_str(w);
                        }
                    } else {
                        type_words.push(w.clone());
                    }
                    join_next = false;
                }
                TokenKind::ColonColon => {
                    if join_next || type_words.is_empty() {
                        return Err(self.mismatch());
                    }
                    if let Some(prev) = type_words.last_mut() {
                        prev.push_str("::");
                    }
                    join_next = true;
                }
                TokenKind::Star if !join_next => {}
                _ => return Err(self.mismatch()),
            }
        }
        if join_next {
            return Err(self.mismatch());
        }

        // Without a `*` there is nothing to strip: a lone word is a grammar mismatch.
        if !is_pointer && (type_words.is_empty() || ident.is_none()) {
            return Err(self.mismatch());
        }

        Ok(Head {
            type_words,
            ident,
            is_pointer,
        })
    }

    fn parse_size(&self, size: &[Token]) -> Result<NonZeroU32, Diagnostic> {
        let invalid = || Diagnostic::invalid_array_size(self.raw_line, self.location);
        match size {
            [t] => t
                .word()
                .filter(|w| w.chars().all(|c| c.is_ascii_digit()))
                .and_then(|w| w.parse::<u32>().ok())
                .and_then(NonZeroU32::new)
                .ok_or_else(invalid),
            _ => Err(invalid()),
        }
    }
}
