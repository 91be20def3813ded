//! Input-line resolution and help rendering over a parlance grammar.
//!
//! An input line flows through three stages, each borrowing from the
//! validated [`parlance_grammar::Grammar`]:
//!
//! 1. [`resolve_command`] isolates the leading token and matches it to a
//!    configured command.
//! 2. [`resolve_argument`] locates the argument label inside the rest of the
//!    line (or falls back to the argument with the empty label).
//! 3. [`resolve_flags`] scans the remaining tokens into a [`ResolvedFlags`]
//!    table ready to hand to a handler.
//!
//! The [`help`] module renders usage text from the same grammar, at grammar,
//! command, or argument granularity. Everything here is pure: no I/O, no
//! mutation of the grammar, one fresh result per call.

mod argument;
mod command;
mod error;
mod flags;
pub mod help;

pub use argument::resolve_argument;
pub use command::resolve_command;
pub use error::ResolveError;
pub use flags::{FlagState, ResolvedFlags, resolve_flags};
