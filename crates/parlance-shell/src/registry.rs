use std::collections::HashMap;
use std::sync::Arc;

use parlance_resolve::ResolvedFlags;

use crate::ShellError;

/// An action invoked for a dispatched line. It receives the resolved flags
/// of the selected argument and returns the bytes to print.
pub type Handler = Arc<dyn Fn(&ResolvedFlags) -> Vec<u8> + Send + Sync>;

/// Named handlers supplied by the embedding program.
///
/// Grammars refer to handlers by name (`execFunc`, `initFunc`, `exitFunc`);
/// the registry is where those names gain meaning. Registration is
/// builder-style:
///
/// ```
/// use parlance_shell::Registry;
///
/// let registry = Registry::new()
///     .register("Welcome", |_| b"hello\n".to_vec())
///     .register("ShowTasks", |flags| {
///         if flags.is_set("readOnly") { b"(read only)\n".to_vec() } else { Vec::new() }
///     });
/// assert!(registry.contains("Welcome"));
/// ```
#[derive(Default, Clone)]
pub struct Registry {
    handlers: HashMap<String, Handler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler under `name`, replacing any previous one.
    pub fn register<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&ResolvedFlags) -> Vec<u8> + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Look up a handler by name.
    pub fn resolve(&self, name: &str) -> Result<Handler, ShellError> {
        self.handlers
            .get(name)
            .cloned()
            .ok_or_else(|| ShellError::UnknownHandler(name.to_string()))
    }
}
