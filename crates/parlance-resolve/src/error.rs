use thiserror::Error;

/// Per-line resolution failure.
///
/// These are recoverable: the shell prints the message and reads the next
/// line. Rendered wording is part of the user-facing surface, so tests pin
/// it down.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The leading token matched no configured command.
    #[error("unable to find command \"{0}\"")]
    UnknownCommand(String),

    /// The text after the command matched no argument and the command has
    /// no fall-back argument.
    #[error("invalid use of the \"{0}\" command, no valid argument provided")]
    NoArgument(String),

    /// A short-form option with a required variable had no token left to
    /// take its value from.
    #[error("missing variable \"{variable}\" for option \"{option}\"")]
    MissingVariable { variable: String, option: String },

    /// A long-form option with a required variable was given without
    /// `=value`.
    #[error("required option \"{option}\" missing required variable \"{variable}\"")]
    MissingRequiredVariable { option: String, variable: String },

    /// A bare token appeared where only options or option values may.
    #[error("invalid text \"{0}\" detected")]
    InvalidText(String),
}
