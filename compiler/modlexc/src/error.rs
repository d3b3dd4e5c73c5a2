use modlex::LexError;

/// Errors that stop the driver.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Strict mode saw at least one `invalid` token.
    #[error("{count} unrecognized character(s); first: {first}")]
    Lex { count: usize, first: LexError },
}

impl DriverError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Usage(_) => 2,
            _ => 1,
        }
    }
}
