//! Driver for the module-language tokenizer.
//!
//! Reads a source buffer, runs it through [`modlex::Tokenizer`] and prints
//! one described token per line.

mod commands;
mod error;
mod options;
mod tracing_setup;

pub use commands::{lex_source, read_input, run, LexSummary};
pub use error::DriverError;
pub use options::{Input, Options, USAGE};
pub use tracing_setup::init_tracing;
