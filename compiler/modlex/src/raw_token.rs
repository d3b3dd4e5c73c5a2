//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived scanner output before keyword
//! resolution and conversion to [`TokenKind`].

use logos::Logos;

use crate::TokenKind;

/// Raw token from logos (before keyword resolution).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"[0-9]+")]
    Number,

    // Keywords are not separate logos tokens: the whole run is captured and
    // then looked up in `keywords`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[token(";")]
    Semicolon,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("=")]
    Equals,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
}

impl RawToken {
    /// Token kind before keyword resolution (`Ident` maps to `Id`).
    pub(crate) fn kind(self) -> TokenKind {
        match self {
            RawToken::Number => TokenKind::Number,
            RawToken::Ident => TokenKind::Id,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Equals => TokenKind::Equals,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
        }
    }
}
