//! Tokenizer with single-token lookahead.
//!
//! Walks an immutable source buffer and hands out one [`Token`] per call.
//! [`Tokenizer::peek_token`] scans ahead by exactly one token and buffers it;
//! the buffered token is handed out by the next retrieval call.
//!
//! The scan never fails. Characters that do not start a token come back as
//! `invalid` tokens, and once the buffer is exhausted every call yields `eof`.

use std::iter::FusedIterator;

use logos::Logos;
use tracing::{debug, trace};

use crate::keywords;
use crate::raw_token::RawToken;
use crate::{Span, Token, TokenKind};

/// Lexer state for one scanning session.
///
/// Each instance owns its cursor and lookahead, so independent sessions can
/// run side by side (including on separate threads).
pub struct Tokenizer<'src> {
    source: &'src str,
    raw: logos::Lexer<'src, RawToken>,
    /// At most one token scanned by `peek_token` and not yet handed out.
    lookahead: Option<Token>,
}

impl<'src> Tokenizer<'src> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'src str) -> Self {
        Tokenizer {
            source,
            raw: RawToken::lexer(source),
            lookahead: None,
        }
    }

    /// The buffer being scanned.
    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset just past the last scanned token.
    ///
    /// A buffered lookahead token has already been scanned, so it counts.
    #[inline]
    pub fn position(&self) -> usize {
        self.raw.span().end
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.scan(),
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Repeated calls return the same token until `next_token` takes it.
    pub fn peek_token(&mut self) -> &Token {
        let token = match self.lookahead.take() {
            Some(token) => token,
            None => self.scan(),
        };
        self.lookahead.insert(token)
    }

    /// Scan one token starting at the cursor.
    fn scan(&mut self) -> Token {
        let Some(result) = self.raw.next() else {
            return Token::eof(self.source.len());
        };

        let token = match result {
            Ok(RawToken::Number) => {
                Token::with_text(TokenKind::Number, self.raw.slice(), self.span())
            }
            Ok(RawToken::Ident) => {
                let text = self.raw.slice();
                match keywords::lookup(text) {
                    Some(kind) => Token::new(kind, self.span()),
                    None => Token::with_text(TokenKind::Id, text, self.span()),
                }
            }
            Ok(raw) => Token::new(raw.kind(), self.span()),
            Err(()) => self.invalid(),
        };

        trace!(kind = %token.kind, span = %token.span, "scanned token");
        token
    }

    /// Turn the current error span into an `invalid` token covering exactly
    /// one character.
    fn invalid(&mut self) -> Token {
        let start = self.raw.span().start;
        let ch = self
            .source
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);

        // The raw lexer may stop inside a multi-byte character.
        let char_end = (start + ch.len_utf8()).min(self.source.len());
        let end = self.raw.span().end;
        if end < char_end {
            self.raw.bump(char_end - end);
        }

        let span = self.span();
        debug!(?ch, %span, "unrecognized character");
        Token::with_text(TokenKind::Invalid, ch, span)
    }

    #[inline]
    fn span(&self) -> Span {
        Span::from_range(self.raw.span())
    }
}

/// Yields every token before `eof`.
impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

impl std::fmt::Debug for Tokenizer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("position", &self.position())
            .field("len", &self.source.len())
            .field("lookahead", &self.lookahead)
            .finish()
    }
}
