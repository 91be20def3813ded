use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use parlance_grammar::{Grammar, WHITESPACE_CHARS};
use parlance_resolve::{help, resolve_argument, resolve_command, resolve_flags};

use crate::ShellError;
use crate::bind::{Bindings, bind};
use crate::registry::Registry;

/// A validated grammar bound to its handlers, ready to serve a session.
pub struct App {
    grammar: Grammar,
    bindings: Bindings,
}

/// Result of evaluating one input line.
#[derive(Debug)]
pub enum Outcome {
    /// Bytes to print; the session continues.
    Output(Vec<u8>),
    /// Bytes to print; the session is over.
    Exit(Vec<u8>),
}

impl App {
    /// Validate the grammar and bind every handler name it mentions.
    pub fn new(grammar: Grammar, registry: &Registry) -> Result<Self, ShellError> {
        grammar.validate()?;
        let bindings = bind(&grammar, registry)?;
        Ok(Self { grammar, bindings })
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Evaluate one input line.
    ///
    /// The line is trimmed of surrounding whitespace first. An empty line
    /// yields empty output. The exit word wins over everything else,
    /// including a grammar that also uses it as a help topic. A line ending
    /// in the help word is routed to help output for whatever precedes the
    /// word. Anything else goes through command, argument and flag
    /// resolution to a handler; resolution errors come back as printable
    /// output, never as panics.
    pub fn eval(&self, line: &str) -> Outcome {
        let input = line.trim_matches(WHITESPACE_CHARS);
        if input.is_empty() {
            return Outcome::Output(Vec::new());
        }
        if input == self.grammar.exit_cmd {
            return Outcome::Exit(self.bindings.exit_output());
        }
        if let Some(rest) = input.strip_suffix(self.grammar.help_cmd.as_str()) {
            let topic = rest.trim_end_matches(WHITESPACE_CHARS);
            return Outcome::Output(self.help_output(topic));
        }
        Outcome::Output(self.dispatch_output(input))
    }

    /// Help for `topic`: the whole grammar, one command, or one argument.
    fn help_output(&self, topic: &str) -> Vec<u8> {
        if topic.is_empty() {
            return help::grammar_help(&self.grammar).into_bytes();
        }

        let (command, remainder) = match resolve_command(topic, &self.grammar) {
            Ok(found) => found,
            Err(err) => return format!("{err}\n").into_bytes(),
        };
        if remainder.is_empty() {
            return help::command_help(command).into_bytes();
        }

        match resolve_argument(remainder, command) {
            Ok((argument, _)) => help::argument_help(command, argument).into_bytes(),
            Err(err) => format!("{err}\n").into_bytes(),
        }
    }

    fn dispatch_output(&self, input: &str) -> Vec<u8> {
        let result = resolve_command(input, &self.grammar).and_then(|(command, remainder)| {
            let (argument, options_text) = resolve_argument(remainder, command)?;
            let flags = resolve_flags(&options_text, argument)?;
            Ok(self.bindings.dispatch(&command.label, &argument.label, &flags))
        });

        match result {
            Ok(output) => output,
            Err(err) => format!("{err}\n").into_bytes(),
        }
    }

    /// Serve an interactive session on stdin/stdout.
    pub async fn run(&self) -> io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Serve a session on the given reader and writer.
    ///
    /// Prints the opening output, then loops: prompt, read a line, print
    /// the outcome. The session ends on the exit word (closing output
    /// printed), on end of input, or on Ctrl-C (nothing further printed).
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(&self.bindings.init_output()).await?;
        writer.flush().await?;

        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        let mut lines = reader.lines();
        loop {
            writer.write_all(self.grammar.prompt.as_bytes()).await?;
            writer.flush().await?;

            tokio::select! {
                _ = &mut ctrl_c => break,
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    match self.eval(&line) {
                        Outcome::Output(output) => {
                            writer.write_all(&output).await?;
                            writer.flush().await?;
                        }
                        Outcome::Exit(output) => {
                            writer.write_all(&output).await?;
                            writer.flush().await?;
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
