use std::path::PathBuf;

use thiserror::Error;

use parlance_grammar::ValidationError;

/// Startup failure: loading, validating, or binding a grammar.
///
/// Unlike resolution errors these are fatal; a shell never starts on a
/// grammar it could not load and bind completely.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read grammar file {}: {error}", path.display())]
    ReadGrammar { path: PathBuf, error: std::io::Error },

    #[error("failed to parse grammar JSON {}: {error}", path.display())]
    ParseGrammar {
        path: PathBuf,
        error: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A grammar names a handler the registry does not know.
    #[error("unable to find handler \"{0}\"")]
    UnknownHandler(String),
}
