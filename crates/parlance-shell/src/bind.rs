use std::collections::HashMap;
use std::sync::Arc;

use parlance_grammar::Grammar;
use parlance_resolve::ResolvedFlags;

use crate::ShellError;
use crate::registry::{Handler, Registry};

/// Handlers attached to a grammar, ready for dispatch.
///
/// Binding resolves every handler name in the grammar up front, so a
/// misspelled `execFunc` fails at startup instead of on first use.
pub struct Bindings {
    init: Handler,
    exit: Handler,
    commands: HashMap<String, HashMap<String, Handler>>,
}

/// Attach registry handlers to every handler name the grammar mentions.
///
/// Empty `initFunc` and `exitFunc` names bind to a silent no-op. An empty
/// `execFunc` binds to a canned reminder that the argument has no handler
/// configured yet, so partially wired grammars stay usable.
pub fn bind(grammar: &Grammar, registry: &Registry) -> Result<Bindings, ShellError> {
    let init = lifecycle_handler(&grammar.init_func, registry)?;
    let exit = lifecycle_handler(&grammar.exit_func, registry)?;

    let mut commands = HashMap::new();
    for command in &grammar.commands {
        let mut arguments = HashMap::new();
        for argument in &command.arguments {
            let handler = if argument.exec_func.is_empty() {
                placeholder_handler(&argument.exec_func)
            } else {
                registry.resolve(&argument.exec_func)?
            };
            arguments.insert(argument.label.clone(), handler);
        }
        commands.insert(command.label.clone(), arguments);
    }

    Ok(Bindings { init, exit, commands })
}

fn lifecycle_handler(name: &str, registry: &Registry) -> Result<Handler, ShellError> {
    if name.is_empty() {
        Ok(Arc::new(|_| Vec::new()))
    } else {
        registry.resolve(name)
    }
}

fn placeholder_handler(name: &str) -> Handler {
    let message = format!("\"{name}\" is not configured\n");
    Arc::new(move |_| message.clone().into_bytes())
}

impl Bindings {
    pub fn init_output(&self) -> Vec<u8> {
        (self.init)(&ResolvedFlags::default())
    }

    pub fn exit_output(&self) -> Vec<u8> {
        (self.exit)(&ResolvedFlags::default())
    }

    /// Run the handler bound to `command`/`argument`.
    pub fn dispatch(&self, command: &str, argument: &str, flags: &ResolvedFlags) -> Vec<u8> {
        // Dispatch is only reached with labels resolved against the same
        // grammar the bindings were built from, so the lookup cannot miss.
        self.commands
            .get(command)
            .and_then(|arguments| arguments.get(argument))
            .map_or_else(Vec::new, |handler| handler(flags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_grammar::{Argument, Command, OptionDef};
    use parlance_resolve::resolve_flags;

    fn sample_grammar() -> Grammar {
        Grammar {
            prompt: "> ".to_string(),
            commands: vec![Command {
                label: "show".to_string(),
                arguments: vec![
                    Argument {
                        label: String::new(),
                        options: Vec::new(),
                        exec_func: "ShowTasks".to_string(),
                        help: "Show the task list".to_string(),
                    },
                    Argument {
                        label: "daily-tasks".to_string(),
                        options: Vec::new(),
                        exec_func: String::new(),
                        help: "Show tasks due today".to_string(),
                    },
                ],
            }],
            exit_cmd: "exit".to_string(),
            help_cmd: "help".to_string(),
            init_func: "Welcome".to_string(),
            exit_func: String::new(),
        }
    }

    #[test]
    fn binds_handlers_by_name() {
        let registry = Registry::new()
            .register("Welcome", |_| b"hello\n".to_vec())
            .register("ShowTasks", |_| b"tasks\n".to_vec());
        let grammar = sample_grammar();
        let bindings = bind(&grammar, &registry).unwrap();

        assert_eq!(bindings.init_output(), b"hello\n");
        assert_eq!(bindings.exit_output(), b"");
        assert_eq!(bindings.dispatch("show", "", &ResolvedFlags::default()), b"tasks\n");
    }

    #[test]
    fn missing_handler_fails_at_bind_time() {
        let registry = Registry::new().register("Welcome", |_| Vec::new());
        let grammar = sample_grammar();
        let err = bind(&grammar, &registry).err().unwrap();
        assert_eq!(err.to_string(), "unable to find handler \"ShowTasks\"");
    }

    #[test]
    fn unconfigured_argument_gets_placeholder_output() {
        let registry = Registry::new()
            .register("Welcome", |_| Vec::new())
            .register("ShowTasks", |_| Vec::new());
        let grammar = sample_grammar();
        let bindings = bind(&grammar, &registry).unwrap();

        let output = bindings.dispatch("show", "daily-tasks", &ResolvedFlags::default());
        assert_eq!(output, b"\"\" is not configured\n");
    }

    #[test]
    fn handlers_receive_resolved_flags() {
        let registry = Registry::new().register("ShowTasks", |flags| {
            if flags.is_set("readOnly") {
                b"read only\n".to_vec()
            } else {
                b"writable\n".to_vec()
            }
        });
        let mut grammar = sample_grammar();
        grammar.init_func = String::new();
        grammar.commands[0].arguments.truncate(1);
        grammar.commands[0].arguments[0].options = vec![OptionDef {
            label: "readOnly".to_string(),
            short: Some("-r".to_string()),
            long: Some("--read-only".to_string()),
            ..Default::default()
        }];
        let bindings = bind(&grammar, &registry).unwrap();

        let argument = &grammar.commands[0].arguments[0];
        let unset = resolve_flags("", argument).unwrap();
        assert_eq!(bindings.dispatch("show", "", &unset), b"writable\n");

        let set = resolve_flags(" -r", argument).unwrap();
        assert_eq!(bindings.dispatch("show", "", &set), b"read only\n");
    }
}
