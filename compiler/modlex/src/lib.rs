//! Tokenizer for the module language.
//!
//! Converts a source buffer into classified tokens (numbers, identifiers,
//! the `module`/`var` keywords, punctuation, `eof`) with a one-token
//! lookahead interface for a downstream parser.
//!
//! ```
//! use modlex::{Tokenizer, TokenKind};
//!
//! let mut tokens = Tokenizer::new("var x = 1;");
//! assert_eq!(tokens.peek_token().kind, TokenKind::Var);
//! assert_eq!(tokens.next_token().kind, TokenKind::Var);
//! assert_eq!(tokens.next_token().text(), Some("x"));
//! ```

mod keywords;
mod lex_error;
mod raw_token;
mod span;
mod token;
mod tokenizer;

pub use lex_error::LexError;
pub use span::Span;
pub use token::{Token, TokenKind};
pub use tokenizer::Tokenizer;

/// Scan the whole buffer.
///
/// The returned list always ends with exactly one `eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut result: Vec<Token> = tokenizer.by_ref().collect();
    result.push(tokenizer.next_token());
    result
}

/// Human-readable rendering of a token for diagnostics.
pub fn describe(token: &Token) -> String {
    token.describe()
}
