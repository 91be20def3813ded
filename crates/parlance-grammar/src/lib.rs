//! Grammar data model and validation for parlance.
//!
//! A [`Grammar`] describes the full command surface of an interactive shell:
//! commands, their arguments, the options each argument accepts, and the
//! variables those options carry. Grammars are deserialized from JSON (or
//! built in code), validated once with [`Grammar::validate`], and treated as
//! immutable from then on. The resolution and help layers only ever borrow
//! from a validated grammar.

mod model;
mod validate;

pub use model::{Argument, Command, Grammar, OptionDef, Variable};
pub use validate::{ArgumentError, OptionError, ValidationError, VariableError};

/// Characters treated as whitespace when trimming and splitting input lines.
pub const WHITESPACE_CHARS: &[char] = &[' ', '\n', '\r', '\t'];

/// Whitespace characters never allowed inside labels.
pub const SPECIAL_WHITESPACE: &[char] = &['\n', '\r', '\t'];

/// Characters rejected in the name position of a short option.
pub const SHORT_RESERVED: &[char] = &['[', ']', '{', '}', '(', ')', '-', '='];

/// Characters rejected anywhere in a long option.
pub const LONG_RESERVED: &[char] = &['[', ']', '{', '}', '(', ')', '='];

/// Rendered in place of an empty argument label in help output.
pub const NO_ARGUMENTS_PLACEHOLDER: &str = "(no arguments)";
