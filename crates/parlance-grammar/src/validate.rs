use std::collections::HashSet;

use thiserror::Error;

use crate::{
    Argument, Command, Grammar, LONG_RESERVED, OptionDef, SHORT_RESERVED, SPECIAL_WHITESPACE,
    Variable, WHITESPACE_CHARS,
};

/// Structural violation inside a [`Variable`].
#[derive(Debug, Error)]
pub enum VariableError {
    #[error("empty variable label detected")]
    EmptyLabel,
    #[error("invalid variable label \"{0}\", invalid whitespace characters detected")]
    LabelWhitespace(String),
}

/// Structural violation inside an [`OptionDef`].
#[derive(Debug, Error)]
pub enum OptionError {
    #[error("empty option label detected")]
    EmptyLabel,
    #[error("invalid option label \"{0}\", invalid whitespace characters detected")]
    LabelWhitespace(String),
    #[error("at least one of option short or option long must be provided")]
    MissingForm,
    #[error("invalid option short \"{0}\", must start with a single dash (-)")]
    ShortMissingDash(String),
    #[error("invalid option short \"{0}\", must be a single dash (-) followed by a single character")]
    ShortBadLength(String),
    #[error("invalid option short \"{0}\", whitespace characters detected")]
    ShortWhitespace(String),
    #[error("invalid option short \"{0}\", invalid characters detected")]
    ShortReservedChar(String),
    #[error("invalid option long \"{0}\", must start with a double dash (--)")]
    LongMissingDashes(String),
    #[error("invalid option long \"{0}\", must be longer than two characters")]
    LongBadLength(String),
    #[error("invalid option long \"{0}\", special whitespace characters detected")]
    LongWhitespace(String),
    #[error("invalid option long \"{0}\", invalid characters detected")]
    LongReservedChar(String),
    #[error("option \"{option}\", {source}")]
    Variable {
        option: String,
        source: VariableError,
    },
}

/// Structural violation inside an [`Argument`].
#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("invalid argument label \"{0}\", invalid special whitespace characters detected")]
    LabelSpecialWhitespace(String),
    #[error("invalid argument label \"{0}\", spaces detected at start")]
    LabelLeadingSpaces(String),
    #[error("invalid argument label \"{0}\", spaces detected at end")]
    LabelTrailingSpaces(String),
    #[error("argument \"{argument}\", multiple occurrences of the option label \"{label}\"")]
    DuplicateOptionLabel { argument: String, label: String },
    #[error("argument \"{argument}\", multiple occurrences of the option short \"{short}\"")]
    DuplicateOptionShort { argument: String, short: String },
    #[error("argument \"{argument}\", multiple occurrences of the option long \"{long}\"")]
    DuplicateOptionLong { argument: String, long: String },
    #[error("argument \"{argument}\", {source}")]
    Option {
        argument: String,
        source: OptionError,
    },
}

/// Structural violation at the grammar or command level.
///
/// Deeper violations arrive wrapped, so the rendered message always names
/// the full scope chain, e.g.
/// `command "show", argument "daily-tasks", option "readOnly", empty variable label detected`.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing/empty exit command \"exitCmd\"")]
    MissingExitCmd,
    #[error("missing/empty help command \"helpCmd\"")]
    MissingHelpCmd,
    #[error("missing/empty commands \"commands\"")]
    MissingCommands,
    #[error("command cannot share same label as exit command \"{0}\"")]
    ExitCmdCollision(String),
    #[error("command cannot share same label as help command \"{0}\"")]
    HelpCmdCollision(String),
    #[error("multiple occurrences of the command label \"{0}\"")]
    DuplicateCommandLabel(String),
    #[error("empty command label detected")]
    EmptyCommandLabel,
    #[error("invalid command label \"{0}\", invalid whitespace characters detected")]
    CommandLabelWhitespace(String),
    #[error("command \"{0}\" requires at least one argument")]
    NoArguments(String),
    #[error("command \"{command}\", multiple occurrences of the argument label \"{label}\"")]
    DuplicateArgumentLabel { command: String, label: String },
    #[error("command \"{command}\", {source}")]
    Argument {
        command: String,
        source: ArgumentError,
    },
}

impl Grammar {
    /// Check the whole grammar for structural well-formedness.
    ///
    /// Validation is read-only and stops at the first violation. A grammar
    /// that has passed once will pass again unchanged.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exit_cmd.is_empty() {
            return Err(ValidationError::MissingExitCmd);
        }
        if self.help_cmd.is_empty() {
            return Err(ValidationError::MissingHelpCmd);
        }
        if self.commands.is_empty() {
            return Err(ValidationError::MissingCommands);
        }

        let mut labels = HashSet::new();
        for command in &self.commands {
            if command.label == self.exit_cmd {
                return Err(ValidationError::ExitCmdCollision(self.exit_cmd.clone()));
            }
            if command.label == self.help_cmd {
                return Err(ValidationError::HelpCmdCollision(self.help_cmd.clone()));
            }
            if !labels.insert(command.label.as_str()) {
                return Err(ValidationError::DuplicateCommandLabel(command.label.clone()));
            }
            command.validate()?;
        }

        Ok(())
    }
}

impl Command {
    /// Check this command and everything beneath it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.is_empty() {
            return Err(ValidationError::EmptyCommandLabel);
        }

        // A command label is a single token, so even plain spaces are out.
        if self.label.contains(WHITESPACE_CHARS) {
            return Err(ValidationError::CommandLabelWhitespace(self.label.clone()));
        }

        if self.arguments.is_empty() {
            return Err(ValidationError::NoArguments(self.label.clone()));
        }

        let mut labels = HashSet::new();
        for argument in &self.arguments {
            argument
                .validate()
                .map_err(|source| ValidationError::Argument {
                    command: self.label.clone(),
                    source,
                })?;

            if !labels.insert(argument.label.as_str()) {
                return Err(ValidationError::DuplicateArgumentLabel {
                    command: self.label.clone(),
                    label: argument.label.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Argument {
    /// Check this argument and its options.
    ///
    /// An empty label is legal here: it marks the fall-back argument. The
    /// at-most-one rule for empty labels is enforced by the duplicate check
    /// in [`Command::validate`].
    pub fn validate(&self) -> Result<(), ArgumentError> {
        if self.label.contains(SPECIAL_WHITESPACE) {
            return Err(ArgumentError::LabelSpecialWhitespace(self.label.clone()));
        }

        // Interior spaces are allowed (multi-word labels), surrounding ones
        // would never survive input trimming.
        if self.label.trim_start_matches(' ') != self.label {
            return Err(ArgumentError::LabelLeadingSpaces(self.label.clone()));
        }
        if self.label.trim_end_matches(' ') != self.label {
            return Err(ArgumentError::LabelTrailingSpaces(self.label.clone()));
        }

        let mut labels = HashSet::new();
        let mut shorts = HashSet::new();
        let mut longs = HashSet::new();
        for option in &self.options {
            option.validate().map_err(|source| ArgumentError::Option {
                argument: self.label.clone(),
                source,
            })?;

            if !labels.insert(option.label.as_str()) {
                return Err(ArgumentError::DuplicateOptionLabel {
                    argument: self.label.clone(),
                    label: option.label.clone(),
                });
            }
            if let Some(short) = option.short() {
                if !shorts.insert(short) {
                    return Err(ArgumentError::DuplicateOptionShort {
                        argument: self.label.clone(),
                        short: short.to_string(),
                    });
                }
            }
            if let Some(long) = option.long() {
                if !longs.insert(long) {
                    return Err(ArgumentError::DuplicateOptionLong {
                        argument: self.label.clone(),
                        long: long.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl OptionDef {
    /// Check this option's label, forms, and variable.
    pub fn validate(&self) -> Result<(), OptionError> {
        if self.label.is_empty() {
            return Err(OptionError::EmptyLabel);
        }
        if self.label.contains(SPECIAL_WHITESPACE) {
            return Err(OptionError::LabelWhitespace(self.label.clone()));
        }

        let short = self.short();
        let long = self.long();
        if short.is_none() && long.is_none() {
            return Err(OptionError::MissingForm);
        }

        if let Some(short) = short {
            if !short.starts_with('-') {
                return Err(OptionError::ShortMissingDash(short.to_string()));
            }
            if short.len() != 2 {
                return Err(OptionError::ShortBadLength(short.to_string()));
            }
            if short[1..].contains(WHITESPACE_CHARS) {
                return Err(OptionError::ShortWhitespace(short.to_string()));
            }
            if short[1..].contains(SHORT_RESERVED) {
                return Err(OptionError::ShortReservedChar(short.to_string()));
            }
        }

        if let Some(long) = long {
            if !long.starts_with("--") {
                return Err(OptionError::LongMissingDashes(long.to_string()));
            }
            if long.len() == 2 {
                return Err(OptionError::LongBadLength(long.to_string()));
            }
            if long.contains(SPECIAL_WHITESPACE) {
                return Err(OptionError::LongWhitespace(long.to_string()));
            }
            if long.contains(LONG_RESERVED) {
                return Err(OptionError::LongReservedChar(long.to_string()));
            }
        }

        if let Some(variable) = &self.variable {
            variable.validate().map_err(|source| OptionError::Variable {
                option: self.label.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

impl Variable {
    /// Check this variable's label.
    pub fn validate(&self) -> Result<(), VariableError> {
        if self.label.is_empty() {
            return Err(VariableError::EmptyLabel);
        }
        if self.label.contains(SPECIAL_WHITESPACE) {
            return Err(VariableError::LabelWhitespace(self.label.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_only_option() -> OptionDef {
        OptionDef {
            label: "readOnly".to_string(),
            short: Some("-r".to_string()),
            long: Some("--read-only".to_string()),
            help: "Open in read-only mode".to_string(),
            ..Default::default()
        }
    }

    fn sample_grammar() -> Grammar {
        Grammar {
            prompt: "> ".to_string(),
            exit_cmd: "exit".to_string(),
            help_cmd: "help".to_string(),
            commands: vec![Command {
                label: "show".to_string(),
                arguments: vec![
                    Argument {
                        label: String::new(),
                        options: vec![read_only_option()],
                        ..Default::default()
                    },
                    Argument {
                        label: "daily-tasks".to_string(),
                        options: vec![OptionDef {
                            variable: Some(Variable {
                                label: "var4".to_string(),
                                required: true,
                                default: "das".to_string(),
                            }),
                            ..read_only_option()
                        }],
                        ..Default::default()
                    },
                ],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn valid_grammar_passes_and_revalidates() {
        let grammar = sample_grammar();
        grammar.validate().unwrap();
        grammar.validate().unwrap();
    }

    #[test]
    fn reserved_command_words_must_be_configured() {
        let mut grammar = sample_grammar();
        grammar.exit_cmd = String::new();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "missing/empty exit command \"exitCmd\""
        );

        let mut grammar = sample_grammar();
        grammar.help_cmd = String::new();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "missing/empty help command \"helpCmd\""
        );

        let mut grammar = sample_grammar();
        grammar.commands.clear();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "missing/empty commands \"commands\""
        );
    }

    #[test]
    fn command_label_must_not_shadow_reserved_words() {
        let mut grammar = sample_grammar();
        grammar.commands[0].label = "exit".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command cannot share same label as exit command \"exit\""
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].label = "help".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command cannot share same label as help command \"help\""
        );
    }

    #[test]
    fn command_labels_must_be_unique() {
        let mut grammar = sample_grammar();
        let duplicate = grammar.commands[0].clone();
        grammar.commands.push(duplicate);
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "multiple occurrences of the command label \"show\""
        );
    }

    #[test]
    fn command_label_shape_is_checked() {
        let mut grammar = sample_grammar();
        grammar.commands[0].label = String::new();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "empty command label detected"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].label = "sh ow".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "invalid command label \"sh ow\", invalid whitespace characters detected"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].label = "show\t".to_string();
        assert!(matches!(
            grammar.validate().unwrap_err(),
            ValidationError::CommandLabelWhitespace(_)
        ));
    }

    #[test]
    fn command_requires_at_least_one_argument() {
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments.clear();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\" requires at least one argument"
        );
    }

    #[test]
    fn argument_labels_must_be_unique_within_a_command() {
        let mut grammar = sample_grammar();
        let duplicate = grammar.commands[0].arguments[1].clone();
        grammar.commands[0].arguments.push(duplicate);
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", multiple occurrences of the argument label \"daily-tasks\""
        );
    }

    #[test]
    fn at_most_one_default_argument_per_command() {
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments.push(Argument {
            options: vec![read_only_option()],
            ..Default::default()
        });
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", multiple occurrences of the argument label \"\""
        );
    }

    #[test]
    fn argument_label_shape_is_checked() {
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].label = "daily\ttasks".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", invalid argument label \"daily\ttasks\", invalid special whitespace characters detected"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].label = " daily-tasks".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", invalid argument label \" daily-tasks\", spaces detected at start"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].label = "daily-tasks ".to_string();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", invalid argument label \"daily-tasks \", spaces detected at end"
        );

        // Interior spaces are fine.
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].label = "daily tasks".to_string();
        grammar.validate().unwrap();
    }

    #[test]
    fn option_label_and_forms_are_checked() {
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[0].options[0].label = String::new();
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"\", empty option label detected"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[0].options[0].short = None;
        grammar.commands[0].arguments[0].options[0].long = None;
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"\", at least one of option short or option long must be provided"
        );

        // An empty string counts as absent, same as leaving the form out.
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[0].options[0].short = Some(String::new());
        grammar.commands[0].arguments[0].options[0].long = None;
        assert!(matches!(
            grammar.validate().unwrap_err(),
            ValidationError::Argument {
                source: ArgumentError::Option {
                    source: OptionError::MissingForm,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn option_short_shape_is_checked() {
        let cases = [
            ("r", "invalid option short \"r\", must start with a single dash (-)"),
            (
                "-rr",
                "invalid option short \"-rr\", must be a single dash (-) followed by a single character",
            ),
            ("- ", "invalid option short \"- \", whitespace characters detected"),
            ("-=", "invalid option short \"-=\", invalid characters detected"),
            ("--", "invalid option short \"--\", invalid characters detected"),
        ];
        for (short, message) in cases {
            let mut grammar = sample_grammar();
            grammar.commands[0].arguments[0].options[0].short = Some(short.to_string());
            assert_eq!(
                grammar.validate().unwrap_err().to_string(),
                format!("command \"show\", argument \"\", {message}"),
                "short form {short:?}"
            );
        }
    }

    #[test]
    fn option_long_shape_is_checked() {
        let cases = [
            (
                "read-only",
                "invalid option long \"read-only\", must start with a double dash (--)",
            ),
            ("--", "invalid option long \"--\", must be longer than two characters"),
            (
                "--read\nonly",
                "invalid option long \"--read\nonly\", special whitespace characters detected",
            ),
            (
                "--read=only",
                "invalid option long \"--read=only\", invalid characters detected",
            ),
        ];
        for (long, message) in cases {
            let mut grammar = sample_grammar();
            grammar.commands[0].arguments[0].options[0].long = Some(long.to_string());
            assert_eq!(
                grammar.validate().unwrap_err().to_string(),
                format!("command \"show\", argument \"\", {message}"),
                "long form {long:?}"
            );
        }
    }

    #[test]
    fn option_identities_must_be_unique_within_an_argument() {
        let mut grammar = sample_grammar();
        let duplicate = grammar.commands[0].arguments[0].options[0].clone();
        grammar.commands[0].arguments[0].options.push(duplicate);
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"\", multiple occurrences of the option label \"readOnly\""
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[0].options.push(OptionDef {
            label: "recursive".to_string(),
            short: Some("-r".to_string()),
            ..Default::default()
        });
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"\", multiple occurrences of the option short \"-r\""
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[0].options.push(OptionDef {
            label: "readOnlyAlias".to_string(),
            long: Some("--read-only".to_string()),
            ..Default::default()
        });
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"\", multiple occurrences of the option long \"--read-only\""
        );
    }

    #[test]
    fn variable_label_is_checked_through_the_whole_chain() {
        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].options[0].variable = Some(Variable::default());
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"daily-tasks\", option \"readOnly\", empty variable label detected"
        );

        let mut grammar = sample_grammar();
        grammar.commands[0].arguments[1].options[0].variable = Some(Variable {
            label: "var\r4".to_string(),
            ..Default::default()
        });
        assert_eq!(
            grammar.validate().unwrap_err().to_string(),
            "command \"show\", argument \"daily-tasks\", option \"readOnly\", invalid variable label \"var\r4\", invalid whitespace characters detected"
        );
    }
}
