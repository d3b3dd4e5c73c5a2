//! Keyword resolution.
//!
//! Identifier-shaped runs are captured in full first and only then compared
//! against the keyword table, so `modules` and `va` stay identifiers.

use crate::TokenKind;

/// Look up a reserved keyword by its complete text.
///
/// Returns `None` for regular identifiers. Keywords are 3-6 chars, so
/// anything outside that range is rejected before comparing.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(3..=6).contains(&text.len()) {
        return None;
    }

    match text {
        "var" => Some(TokenKind::Var),
        "module" => Some(TokenKind::Module),
        _ => None,
    }
}
