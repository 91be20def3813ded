use std::collections::HashMap;

use parlance_grammar::Argument;

use crate::ResolveError;

/// Resolution state of a single option after one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagState {
    /// The option appeared in the input.
    pub is_set: bool,
    /// The option carries a variable; `value` is meaningful.
    pub has_value: bool,
    pub value: String,
}

/// Option label to [`FlagState`], built fresh for every input line.
///
/// Every option of the resolved argument has an entry, set or not, so
/// handlers can distinguish "unknown label" from "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFlags {
    entries: HashMap<String, FlagState>,
}

impl ResolvedFlags {
    /// Whether the label is an option of the resolved argument at all.
    pub fn exists(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Whether the option was given in the input.
    pub fn is_set(&self, label: &str) -> bool {
        self.entries.get(label).is_some_and(|state| state.is_set)
    }

    /// The option's value, if it was given and carries a variable.
    ///
    /// Defaults count: an optional variable left out still yields its
    /// configured default here.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.entries
            .get(label)
            .filter(|state| state.is_set && state.has_value)
            .map(|state| state.value.as_str())
    }

    /// Full state for a label, if the label exists.
    pub fn get(&self, label: &str) -> Option<&FlagState> {
        self.entries.get(label)
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagState)> {
        self.entries
            .iter()
            .map(|(label, state)| (label.as_str(), state))
    }
}

/// Scan the options text into a [`ResolvedFlags`] table.
///
/// Tokens are the space-separated pieces of `options_text`; empty pieces
/// (from consecutive spaces) are skipped. A dash-prefixed token is matched
/// against the argument's options in declaration order: exact equality for
/// the short form, equality up to the first `=` for the long form. Tokens
/// that start with a dash but match nothing are ignored.
///
/// A short form with a variable takes the next token verbatim as its value,
/// whatever it looks like. A long form takes the text after `=`. In either
/// form, a missing value falls back to the variable's default, unless the
/// variable is required, which is an error.
pub fn resolve_flags(
    options_text: &str,
    argument: &Argument,
) -> Result<ResolvedFlags, ResolveError> {
    let mut entries: HashMap<String, FlagState> = argument
        .options
        .iter()
        .map(|option| (option.label.clone(), FlagState::default()))
        .collect();

    // Once a short form has consumed the following token, any later bare
    // token is tolerated rather than flagged as stray text.
    let mut expecting_value = false;

    let tokens: Vec<&str> = options_text.split(' ').collect();
    for (i, &token) in tokens.iter().enumerate() {
        if token.is_empty() {
            continue;
        }

        if token.starts_with('-') {
            let token_name = token.split_once('=').map_or(token, |(name, _)| name);

            for option in &argument.options {
                let short_form = option.short() == Some(token);
                let long_form = option.long() == Some(token_name);
                if !short_form && !long_form {
                    continue;
                }

                let Some(variable) = &option.variable else {
                    entries.insert(
                        option.label.clone(),
                        FlagState {
                            is_set: true,
                            has_value: false,
                            value: String::new(),
                        },
                    );
                    break;
                };

                let mut value = variable.default.clone();
                if short_form {
                    if let Some(next) = tokens.get(i + 1) {
                        value = (*next).to_string();
                    } else if variable.required {
                        return Err(ResolveError::MissingVariable {
                            variable: variable.label.clone(),
                            option: option.label.clone(),
                        });
                    }
                    expecting_value = true;
                } else if let Some((_, rest)) = token.split_once('=') {
                    value = rest.to_string();
                } else if variable.required {
                    return Err(ResolveError::MissingRequiredVariable {
                        option: option.label.clone(),
                        variable: variable.label.clone(),
                    });
                }

                entries.insert(
                    option.label.clone(),
                    FlagState {
                        is_set: true,
                        has_value: true,
                        value,
                    },
                );
                break;
            }
        } else if !expecting_value {
            return Err(ResolveError::InvalidText(token.to_string()));
        }
    }

    Ok(ResolvedFlags { entries })
}
