//! Command-line options.

use std::path::PathBuf;

use crate::DriverError;

/// Where the source buffer comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub input: Input,
    /// Fail if any `invalid` token was produced.
    pub strict: bool,
    /// Append the byte span to each printed token.
    pub spans: bool,
    /// Print a per-kind count after the stream.
    pub kinds: bool,
    pub help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: Input::Stdin,
            strict: false,
            spans: false,
            kinds: false,
            help: false,
        }
    }
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, DriverError> {
        let mut options = Options::default();
        let mut input = None;

        for arg in args {
            match arg.as_ref() {
                "--strict" => options.strict = true,
                "--spans" => options.spans = true,
                "--kinds" => options.kinds = true,
                "-h" | "--help" => options.help = true,
                "-" => set_input(&mut input, Input::Stdin)?,
                flag if flag.starts_with('-') => {
                    return Err(DriverError::Usage(format!("unknown option '{flag}'")));
                }
                path => set_input(&mut input, Input::File(PathBuf::from(path)))?,
            }
        }

        match input {
            Some(input) => options.input = input,
            None if options.help => {}
            None => return Err(DriverError::Usage("missing input file".to_string())),
        }
        Ok(options)
    }
}

fn set_input(slot: &mut Option<Input>, input: Input) -> Result<(), DriverError> {
    if slot.is_some() {
        return Err(DriverError::Usage("only one input may be given".to_string()));
    }
    *slot = Some(input);
    Ok(())
}

pub const USAGE: &str = "\
Usage: modlex <file|-> [options]

Print the token stream of a module source file, one token per line.

Options:
  --strict    Exit with an error if any character is unrecognized
  --spans     Show the byte span of each token
  --kinds     Print a count of tokens per kind
  -h, --help  Show this message

Set RUST_LOG (e.g. RUST_LOG=modlex=trace) to enable logging.";
