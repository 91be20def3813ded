use parlance_grammar::{Argument, Command};

use crate::ResolveError;

/// Locate the argument selected by the text following a command.
///
/// Arguments are tried in declaration order. A non-empty label matches at
/// its first occurrence anywhere in `remainder`, provided the label is
/// followed by a space or the end of the text; the matched label is then
/// cut out (replaced by a single space) to form the options text. An
/// empty-label argument matches tentatively with the whole remainder and is
/// overridden by any later labeled match.
pub fn resolve_argument<'c>(
    remainder: &str,
    command: &'c Command,
) -> Result<(&'c Argument, String), ResolveError> {
    let mut fallback: Option<(&Argument, String)> = None;

    for argument in &command.arguments {
        if argument.is_default() {
            fallback = Some((argument, remainder.to_string()));
            continue;
        }

        let Some(index) = remainder.find(argument.label.as_str()) else {
            continue;
        };

        // The label must end at a word boundary; "daily-tasks-old" does not
        // select "daily-tasks".
        let after = &remainder[index + argument.label.len()..];
        if !after.is_empty() && !after.starts_with(' ') {
            continue;
        }

        let options_text = format!("{} {}", &remainder[..index], after);
        return Ok((argument, options_text));
    }

    fallback.ok_or_else(|| ResolveError::NoArgument(command.label.clone()))
}
