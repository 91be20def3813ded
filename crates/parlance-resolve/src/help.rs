//! Usage text rendered from a grammar.
//!
//! Three granularities, all pure functions over borrowed grammar data:
//! the whole grammar, one command, one argument. The layout follows command
//! synopsis convention: argument labels joined by `|` (bracketed when the
//! command also works without an argument), option groups ordered as
//! required shorts, required longs, then the bracketed optional short
//! cluster and optional longs, and tab-indented rows padded to the widest
//! entry of their column.

use parlance_grammar::{Argument, Command, Grammar, OptionDef};

/// Usage text for every command of the grammar, concatenated in
/// configuration order.
pub fn grammar_help(grammar: &Grammar) -> String {
    let mut out = String::new();
    for command in &grammar.commands {
        out.push_str(&command_help(command));
    }
    out
}

/// Usage text for one command: argument overview first, then one usage
/// block per argument.
pub fn command_help(command: &Command) -> String {
    let mut out = format!(
        "\nUsage: {}\n\n{} {}\n",
        command.label,
        command.label,
        describe_arguments(&command.arguments)
    );
    for argument in &command.arguments {
        out.push_str(&command.label);
        out.push(' ');
        out.push_str(&argument_usage(argument));
    }
    out
}

/// Usage text for one argument of a command.
pub fn argument_help(command: &Command, argument: &Argument) -> String {
    format!(
        "\nUsage: {} {}\n\n{} {}",
        command.label,
        argument.display_label(),
        command.label,
        argument_usage(argument)
    )
}

fn argument_usage(argument: &Argument) -> String {
    format!(
        "{} {}\n",
        argument.display_label(),
        describe_options(&argument.options)
    )
}

fn describe_arguments(arguments: &[Argument]) -> String {
    // Labels joined by `|`; an empty label means the command also runs
    // without an argument, shown by bracketing the list.
    let mut optional = false;
    let mut labels: Vec<&str> = Vec::new();
    for argument in arguments {
        if argument.is_default() {
            optional = true;
            continue;
        }
        labels.push(&argument.label);
    }
    let mut desc = labels.join("|");
    if optional {
        desc = format!("[{desc}]");
    }
    desc.push('\n');

    let width = arguments
        .iter()
        .map(|argument| argument.display_label().len())
        .max()
        .unwrap_or(0);
    for argument in arguments {
        desc.push_str(&format!(
            "\t{:<width$} {}\n",
            argument.display_label(),
            argument.help
        ));
    }
    desc
}

fn describe_options(options: &[OptionDef]) -> String {
    // Four groups: required shorts as `-x VAR` pairs, required longs as
    // `--name=VAR` pairs, optional shorts collapsed into one `-abc`
    // cluster, optional longs listed as-is. The optional groups are each
    // bracketed.
    let mut required_short = String::new();
    let mut required_long = String::new();
    let mut optional_short = String::new();
    let mut optional_long = String::new();
    for option in options {
        let required_variable = option
            .variable
            .as_ref()
            .filter(|variable| variable.required);
        match (required_variable, option.short()) {
            (Some(variable), Some(short)) => {
                required_short.push_str(&format!("{short} {} ", variable.label));
            }
            (Some(variable), None) => {
                if let Some(long) = option.long() {
                    required_long.push_str(&format!("{long}={} ", variable.label));
                }
            }
            (None, Some(short)) => {
                if optional_short.is_empty() {
                    optional_short.push_str(short);
                } else {
                    optional_short.push_str(&short[1..]);
                }
            }
            (None, None) => {
                if let Some(long) = option.long() {
                    optional_long.push_str(&format!("{long} "));
                }
            }
        }
    }

    let mut sections: Vec<String> = Vec::new();
    if !required_short.is_empty() {
        sections.push(required_short.trim_end().to_string());
    }
    if !required_long.is_empty() {
        sections.push(required_long.trim_end().to_string());
    }
    if !optional_short.is_empty() {
        sections.push(format!("[{optional_short}]"));
    }
    if !optional_long.is_empty() {
        sections.push(format!("[{}]", optional_long.trim_end()));
    }

    let mut desc = sections.join(" ");
    desc.push('\n');

    let width = options
        .iter()
        .map(|option| option.long().map_or(0, str::len))
        .max()
        .unwrap_or(0);
    for option in options {
        desc.push_str(&format!(
            "\t{} {:<width$} {}\n",
            option.short().unwrap_or_default(),
            option.long().unwrap_or_default(),
            option.help
        ));
    }
    desc
}
