//! The lex command: read a buffer and print its token stream.

use std::collections::BTreeMap;
use std::io::{self, Read, Write};

use modlex::{describe, LexError, TokenKind, Tokenizer};
use tracing::{debug, warn};

use crate::{DriverError, Input, Options};

/// Counts gathered while printing a token stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexSummary {
    /// Tokens printed, including the final `eof`.
    pub total: usize,
    pub by_kind: BTreeMap<TokenKind, usize>,
    /// One entry per `invalid` token, in source order.
    pub errors: Vec<LexError>,
}

/// Read the whole source buffer.
pub fn read_input(input: &Input) -> Result<String, DriverError> {
    match input {
        Input::Stdin => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|source| DriverError::Read {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(content)
        }
        Input::File(path) => std::fs::read_to_string(path).map_err(|e| {
            let path = path.display().to_string();
            match e.kind() {
                io::ErrorKind::NotFound => DriverError::NotFound { path },
                _ => DriverError::Read { path, source: e },
            }
        }),
    }
}

/// Print one described token per line, up to and including `eof`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_source<W: Write>(
    source: &str,
    options: &Options,
    out: &mut W,
) -> Result<LexSummary, DriverError> {
    let mut tokenizer = Tokenizer::new(source);
    let mut summary = LexSummary::default();

    loop {
        let token = tokenizer.next_token();
        if let Some(err) = token.to_error() {
            warn!(%err, "skipping unrecognized input");
            summary.errors.push(err);
        }
        *summary.by_kind.entry(token.kind).or_default() += 1;
        summary.total += 1;

        if options.spans {
            writeln!(out, "{} @ {}", describe(&token), token.span)?;
        } else {
            writeln!(out, "{}", describe(&token))?;
        }

        if token.is_eof() {
            break;
        }
    }

    if options.kinds {
        writeln!(out)?;
        for (kind, count) in &summary.by_kind {
            writeln!(out, "{kind:>9}: {count}")?;
        }
    }

    debug!(
        total = summary.total,
        errors = summary.errors.len(),
        "token stream complete"
    );
    Ok(summary)
}

/// Run the driver for parsed options.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<LexSummary, DriverError> {
    let source = read_input(&options.input)?;
    let summary = lex_source(&source, options, out)?;

    if options.strict {
        if let Some(first) = summary.errors.first() {
            return Err(DriverError::Lex {
                count: summary.errors.len(),
                first: first.clone(),
            });
        }
    }
    Ok(summary)
}
