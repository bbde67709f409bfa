//! CLI tool to run turtle drawing programs and inspect their tokens and trees.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use turtle_lang::{ParseError, Turtle, evaluate, format, parse, tokenize};

#[derive(Parser)]
#[command(name = "turtle", version, about = "Run a turtle drawing program")]
struct Args {
    /// Program file. Reads stdin when absent or `-`.
    input: Option<PathBuf>,

    /// What to print.
    #[arg(long, value_enum, default_value_t = Emit::Segments)]
    emit: Emit,

    /// Fixed number of decimal places for segment coordinates.
    #[arg(long)]
    precision: Option<usize>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Ignored when `RUST_LOG` is set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Emit {
    /// Evaluate and print one line per drawn segment.
    Segments,
    /// Print the token sequence.
    Tokens,
    /// Print the parse tree.
    Tree,
    /// Print the program in canonical form.
    Source,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("{path}: {source}")]
    Read { path: String, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("write failed: {0}")]
    Write(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    } else {
        builder.parse_filters(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        });
    }
    builder.init();
}

fn read_input(path: Option<&Path>) -> Result<String, Error> {
    let result = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => io::read_to_string(io::stdin()),
    };
    result.map_err(|source| Error::Read {
        path: path.map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string()),
        source,
    })
}

fn run(args: &Args) -> Result<(), Error> {
    let source = read_input(args.input.as_deref())?;
    let tokens = tokenize(&source);
    let mut out = io::stdout().lock();

    match args.emit {
        Emit::Tokens => {
            for token in &tokens {
                writeln!(out, "{}: {}", token.line, token.kind)?;
            }
        }
        Emit::Tree => writeln!(out, "{:#?}", parse(&tokens)?)?,
        Emit::Source => write!(out, "{}", format(&parse(&tokens)?))?,
        Emit::Segments => {
            let program = parse(&tokens)?;
            let mut turtle = Turtle::new();
            evaluate(&program, &mut turtle);
            log::info!("drew {} segment(s)", turtle.segments().len());

            for segment in turtle.segments() {
                if let Some(p) = args.precision {
                    writeln!(out, "{segment:.p$}")?;
                } else {
                    writeln!(out, "{segment}")?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}
