//! Command-line front end: prints the token stream for a code sample.

use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use highlight::{Error, ErrorTip, Language, LanguageScanner};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tokenize a code sample the way the documentation highlighter does.
#[derive(Parser, Debug)]
#[command(name = "highlight")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize code samples for syntax highlighting", long_about = None)]
struct Cli {
    /// File to read, or `-` / nothing for stdin
    file: Option<PathBuf>,

    /// Language tag (js, ts, tsx, py, html, ...). Defaults to the file extension
    #[arg(short, long, env = "HIGHLIGHT_LANGUAGE")]
    language: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json, env = "HIGHLIGHT_FORMAT")]
    format: Format,

    /// Fail on an unknown --language instead of printing plain text
    #[arg(long)]
    strict: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, env = "HIGHLIGHT_VERBOSE")]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// `[{"type": ..., "value": ...}]`
    Json,
    /// One `kind ("value")` line per token
    Tokens,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();
}

fn run(cli: &Cli) -> Result<(), Error> {
    let code = read_input(cli.file.as_ref())?;
    let language = resolve_language(cli)?;
    debug!(%language, bytes = code.len(), "highlighting input");

    let tokens = language.scanner().scan(&code);
    debug!(tokens = tokens.len(), "tokenized input");

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&tokens)?),
        Format::Tokens => {
            for token in &tokens {
                println!("{}", token);
            }
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String, Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            read_to_string(path).map_err(|error| Error::io(path.to_string_lossy(), error))
        }
        _ => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .map_err(|error| Error::io("<stdin>", error))?;
            Ok(code)
        }
    }
}

/// `--language` wins, then the file extension, then plain text.
fn resolve_language(cli: &Cli) -> Result<Language, Error> {
    match (&cli.language, &cli.file) {
        (Some(language), _) if cli.strict => language.parse::<Language>(),
        (Some(language), _) => Ok(Language::from_alias(language)),
        (None, Some(path)) => Ok(Language::from_path(path)),
        (None, None) => Ok(Language::PlainText),
    }
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!(
            "Error: {} ({})\n  {}",
            error.get_error_name(),
            error,
            error.get_tip()
        );
    }
}
