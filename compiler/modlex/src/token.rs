//! Token and token kind definitions.

use std::fmt;

use crate::{LexError, Span};

/// The category of a token.
///
/// Discriminants are part of the public contract: downstream code matches on
/// kind identity, so new kinds are only ever appended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Eof = 0,
    Number = 1,
    Id = 2,
    Module = 3,
    Semicolon = 4,
    Plus = 5,
    Minus = 6,
    Equals = 7,
    Var = 8,
    LBrace = 9,
    RBrace = 10,
    /// A character that does not start any token.
    Invalid = 11,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Eof,
        TokenKind::Number,
        TokenKind::Id,
        TokenKind::Module,
        TokenKind::Semicolon,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Equals,
        TokenKind::Var,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::Invalid,
    ];

    /// Stable numeric identity of this kind.
    #[inline]
    pub const fn discriminant(self) -> u8 {
        self as u8
    }

    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Number => "number",
            TokenKind::Id => "id",
            TokenKind::Module => "module",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Plus => "plus",
            TokenKind::Minus => "minus",
            TokenKind::Equals => "equals",
            TokenKind::Var => "var",
            TokenKind::LBrace => "lbrace",
            TokenKind::RBrace => "rbrace",
            TokenKind::Invalid => "invalid",
        }
    }

    /// Canonical source text for kinds with a fixed spelling.
    ///
    /// Returns `None` for kinds whose text varies (`number`, `id`, `invalid`)
    /// and for `eof`.
    pub const fn fixed_spelling(self) -> Option<&'static str> {
        match self {
            TokenKind::Module => Some("module"),
            TokenKind::Var => Some("var"),
            TokenKind::Semicolon => Some(";"),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Equals => Some("="),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            TokenKind::Eof | TokenKind::Number | TokenKind::Id | TokenKind::Invalid => None,
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self, TokenKind::Module | TokenKind::Var)
    }

    /// Whether tokens of this kind carry their source text.
    #[inline]
    pub const fn has_text(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Id | TokenKind::Invalid)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified lexical unit.
///
/// Tokens own their text, so a token stays valid however many further
/// tokens are drawn from the tokenizer that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    /// Source text for `number`, `id` and `invalid`; `None` otherwise.
    pub text: Option<String>,
    pub span: Span,
}

impl Token {
    /// Create a token without a text payload.
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            text: None,
            span,
        }
    }

    /// Create a token that carries its source text.
    #[inline]
    pub fn with_text(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: Some(text.into()),
            span,
        }
    }

    /// The end-of-input token for a buffer of `len` bytes.
    #[inline]
    pub fn eof(len: usize) -> Self {
        let end = Span::from_range(len..len);
        Token::new(TokenKind::Eof, end)
    }

    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Human-readable rendering of kind and text, e.g. `id "x"` or `plus`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// The lexical error this token stands for, if it is `invalid`.
    pub fn to_error(&self) -> Option<LexError> {
        if self.kind != TokenKind::Invalid {
            return None;
        }
        let ch = self
            .text()
            .and_then(|text| text.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Some(LexError::UnrecognizedChar {
            ch,
            span: self.span,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.text()) {
            (TokenKind::Invalid, Some(text)) => write!(f, "{} {text:?}", self.kind),
            (_, Some(text)) => write!(f, "{} \"{text}\"", self.kind),
            (kind, None) => write!(f, "{kind}"),
        }
    }
}
