use serde::{Deserialize, Serialize};

use crate::NO_ARGUMENTS_PLACEHOLDER;

/// A named value carried by an option.
///
/// The label doubles as the lookup key in resolved flags and as the value
/// placeholder in help output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    #[serde(default)]
    pub label: String,

    /// Whether the value must be supplied whenever the option is used.
    #[serde(default)]
    pub required: bool,

    /// Value used when the option is given without one.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default: String,
}

/// A flag accepted by an argument, in short (`-x`) or long (`--name`) form.
///
/// Named `OptionDef` rather than `Option` to stay out of the prelude's way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionDef {
    /// Key under which the resolved flag state is reported.
    #[serde(default)]
    pub label: String,

    /// Short form: a single dash followed by one character.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,

    /// Long form: a double dash followed by a descriptive name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,

    /// Present when the option carries a value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Variable>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

impl OptionDef {
    /// Short form, treating an empty string the same as an absent one.
    pub fn short(&self) -> Option<&str> {
        self.short.as_deref().filter(|s| !s.is_empty())
    }

    /// Long form, treating an empty string the same as an absent one.
    pub fn long(&self) -> Option<&str> {
        self.long.as_deref().filter(|s| !s.is_empty())
    }
}

/// The word following a command that selects a handler.
///
/// An empty label marks the argument the command falls back to when the
/// input names no other argument.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argument {
    #[serde(default)]
    pub label: String,

    /// Options accepted after this argument, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDef>,

    /// Name of the handler invoked for this argument. Empty means the
    /// argument is not wired up yet; dispatch then reports that instead of
    /// failing.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exec_func: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub help: String,
}

impl Argument {
    /// Whether this is the fall-back argument with the empty label.
    pub fn is_default(&self) -> bool {
        self.label.is_empty()
    }

    /// Label as shown in help output; the empty label gets a placeholder.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            NO_ARGUMENTS_PLACEHOLDER
        } else {
            &self.label
        }
    }
}

/// The leading word of an input line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    #[serde(default)]
    pub label: String,

    /// Arguments recognized after this command, in declaration order.
    /// Order matters: it decides both resolution precedence and help layout.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<Argument>,
}

/// The complete command surface of a shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grammar {
    /// Printed before every read of an input line.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<Command>,

    /// Reserved word that terminates the shell. Validation rejects a
    /// grammar that leaves this empty.
    #[serde(default)]
    pub exit_cmd: String,

    /// Reserved word that routes a line to help output. Validation rejects
    /// a grammar that leaves this empty.
    #[serde(default)]
    pub help_cmd: String,

    /// Name of the handler whose output opens the session. Empty means no
    /// opening output.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub init_func: String,

    /// Name of the handler whose output closes the session. Empty means no
    /// closing output.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub exit_func: String,
}
