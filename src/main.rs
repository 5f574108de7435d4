//! CLI tool to inspect how command text is tokenized.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use cmdlex::{CommandSource, SourceLocation, Token, render, tokenize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log tokenizer activity (overridden by `RUST_LOG`)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a command typed as one string
    Tokenize {
        /// Command text
        text: String,
    },

    /// Tokenize a pre-split argument vector
    Args {
        /// Arguments, one token each
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show a caret marker under a span of the command text
    Annotate {
        /// Command text
        text: String,

        /// First character of the span
        #[arg(long)]
        start: usize,

        /// Last character of the span, inclusive (defaults to start)
        #[arg(long)]
        end: Option<usize>,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_tokens(tokens: &[Token]) {
    for token in tokens {
        println!(
            "{:<14} {:<8} {:?}",
            format!("{:?}", token.kind),
            token.span.to_string(),
            token.text
        );
    }
}

fn run_tokenize(source: &CommandSource) -> ExitCode {
    match tokenize(source) {
        Ok(tokens) => {
            print_tokens(&tokens);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.report());
            ExitCode::from(1)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Tokenize { text } => run_tokenize(&CommandSource::from_string(text)),
        Commands::Args { args } => run_tokenize(&CommandSource::from_args(args)),
        Commands::Annotate { text, start, end } => {
            let source = CommandSource::from_string(text);
            let location =
                SourceLocation::new(source.clone(), start.into(), end.unwrap_or(start).into());
            debug!(%location, "annotating");
            println!("{}", render(&source, &location));
            ExitCode::SUCCESS
        }
    }
}
