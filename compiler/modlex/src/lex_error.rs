//! Lexical error type.
//!
//! The tokenizer itself never fails: an unrecognized character becomes an
//! `invalid` token and the stream continues. Callers that want to stop (or
//! report and continue) convert that token with [`Token::to_error`].
//!
//! [`Token::to_error`]: crate::Token::to_error

use crate::Span;

/// A lexical problem found in the source.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// Input character that does not start any token.
    #[error("unrecognized character {ch:?} at {span}")]
    UnrecognizedChar { ch: char, span: Span },
}

impl LexError {
    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnrecognizedChar { span, .. } => *span,
        }
    }
}
