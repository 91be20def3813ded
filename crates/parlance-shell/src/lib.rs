//! Grammar loading, handler binding and the interactive shell loop.
//!
//! The pieces assemble in a fixed order: [`load_grammar`] reads and
//! validates a JSON grammar file, the embedding program fills a [`Registry`]
//! with named handlers, and [`App::new`] binds the two together, failing up
//! front on any handler name the registry does not know. From then on the
//! [`App`] evaluates one line at a time ([`App::eval`]) or drives a whole
//! session over any async reader/writer pair ([`App::run_with`]), stdin and
//! stdout by default ([`App::run`]).

mod app;
mod bind;
mod config;
mod error;
mod registry;

pub use app::{App, Outcome};
pub use bind::{Bindings, bind};
pub use config::load_grammar;
pub use error::ShellError;
pub use registry::{Handler, Registry};
