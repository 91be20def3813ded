mod echo;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

use parlance_resolve::help;
use parlance_shell::{App, load_grammar};

#[derive(Parser)]
#[command(name = "parlance")]
#[command(version, about = "Grammar-driven interactive command-line shells", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a grammar file
    Check(CheckArgs),

    /// Print the help text a grammar produces
    Usage(UsageArgs),

    /// Serve an interactive session for a grammar
    Run(RunArgs),
}

#[derive(Parser)]
struct CheckArgs {
    /// Path to the grammar JSON file
    #[arg(value_name = "FILE")]
    grammar: PathBuf,
}

#[derive(Parser)]
struct UsageArgs {
    /// Path to the grammar JSON file
    #[arg(value_name = "FILE")]
    grammar: PathBuf,

    /// Show a single command instead of the whole grammar
    #[arg(short, long, value_name = "LABEL")]
    command: Option<String>,

    /// Show a single argument of the selected command
    #[arg(short, long, value_name = "LABEL", requires = "command")]
    argument: Option<String>,
}

#[derive(Parser)]
struct RunArgs {
    /// Path to the grammar JSON file
    #[arg(value_name = "FILE")]
    grammar: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            match cli.command {
                Commands::Check(args) => check(args),
                Commands::Usage(args) => usage(args),
                Commands::Run(args) => run(args).await,
            }
        })
}

fn check(args: CheckArgs) -> Result<()> {
    tracing::debug!("executing check command");

    let grammar = load_grammar(&args.grammar)?;

    let arguments: usize = grammar
        .commands
        .iter()
        .map(|command| command.arguments.len())
        .sum();
    eprintln!(
        "OK: {} ({} command(s), {} argument(s))",
        args.grammar.display(),
        grammar.commands.len(),
        arguments
    );

    Ok(())
}

fn usage(args: UsageArgs) -> Result<()> {
    tracing::debug!("executing usage command");

    let grammar = load_grammar(&args.grammar)?;

    let Some(command_label) = &args.command else {
        print!("{}", help::grammar_help(&grammar));
        return Ok(());
    };
    let command = grammar
        .commands
        .iter()
        .find(|command| command.label == *command_label)
        .with_context(|| format!("no command labelled \"{command_label}\""))?;

    let Some(argument_label) = &args.argument else {
        print!("{}", help::command_help(command));
        return Ok(());
    };
    let argument = command
        .arguments
        .iter()
        .find(|argument| argument.label == *argument_label)
        .with_context(|| format!("no \"{argument_label}\" argument under \"{command_label}\""))?;

    print!("{}", help::argument_help(command, argument));
    Ok(())
}

async fn run(args: RunArgs) -> Result<()> {
    tracing::debug!("executing run command");

    let grammar = load_grammar(&args.grammar)?;
    let registry = echo::registry_for(&grammar);
    let app = App::new(grammar, &registry)?;

    eprintln!(
        "Serving {} with echo handlers; \"{}\" or Ctrl-C quits",
        args.grammar.display(),
        app.grammar().exit_cmd
    );
    app.run().await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
