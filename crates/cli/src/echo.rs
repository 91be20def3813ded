//! Stand-in handlers for grammars served straight from the command line.
//!
//! `parlance run` has no real program behind the grammar, so every handler
//! name the grammar mentions gets an echo handler that prints its own name
//! and the flags it was called with. Good enough to try a grammar out
//! before wiring it into an embedding program.

use std::collections::BTreeSet;

use parlance_grammar::Grammar;
use parlance_resolve::ResolvedFlags;
use parlance_shell::Registry;

/// Build a registry covering every handler name in the grammar.
pub fn registry_for(grammar: &Grammar) -> Registry {
    let mut registry = Registry::new();
    for name in handler_names(grammar) {
        registry = registry.register(name.clone(), move |flags| echo(&name, flags));
    }
    registry
}

fn handler_names(grammar: &Grammar) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for name in [&grammar.init_func, &grammar.exit_func] {
        if !name.is_empty() {
            names.insert(name.clone());
        }
    }
    for command in &grammar.commands {
        for argument in &command.arguments {
            if !argument.exec_func.is_empty() {
                names.insert(argument.exec_func.clone());
            }
        }
    }
    names
}

fn echo(name: &str, flags: &ResolvedFlags) -> Vec<u8> {
    let mut out = format!("{name}\n");

    // Label order over hash order, so transcripts are stable.
    let mut entries: Vec<_> = flags.iter().collect();
    entries.sort_by_key(|(label, _)| *label);

    for (label, state) in entries {
        if !state.is_set {
            continue;
        }
        if state.has_value {
            out.push_str(&format!("  {label} = {}\n", state.value));
        } else {
            out.push_str(&format!("  {label}\n"));
        }
    }

    out.into_bytes()
}
