use std::fs;
use std::path::Path;

use parlance_grammar::Grammar;

use crate::ShellError;

/// Load a grammar from a JSON file and validate it.
///
/// The file holds one [`Grammar`] object in camelCase keys. Anything a
/// handler name refers to stays unchecked here; binding against a
/// [`Registry`](crate::Registry) is where names are verified.
pub fn load_grammar(path: impl AsRef<Path>) -> Result<Grammar, ShellError> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|error| ShellError::ReadGrammar {
        path: path.to_path_buf(),
        error,
    })?;
    let grammar: Grammar =
        serde_json::from_str(&contents).map_err(|error| ShellError::ParseGrammar {
            path: path.to_path_buf(),
            error,
        })?;

    grammar.validate()?;
    Ok(grammar)
}
