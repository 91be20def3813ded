use parlance_grammar::{Command, Grammar, WHITESPACE_CHARS};

use crate::ResolveError;

/// Match the leading token of `input` against the grammar's commands.
///
/// Returns the command and the rest of the line with leading whitespace
/// stripped. `input` is expected to be pre-trimmed; the shell trims every
/// line before resolution starts.
pub fn resolve_command<'g, 'i>(
    input: &'i str,
    grammar: &'g Grammar,
) -> Result<(&'g Command, &'i str), ResolveError> {
    let (label, remainder) = match input.find(' ') {
        Some(index) => (
            &input[..index],
            input[index..].trim_start_matches(WHITESPACE_CHARS),
        ),
        None => (input, ""),
    };

    grammar
        .commands
        .iter()
        .find(|command| command.label == label)
        .map(|command| (command, remainder))
        .ok_or_else(|| ResolveError::UnknownCommand(label.to_string()))
}
