// crates/kata_cli/src/main.rs
//
// Wires up exit codes, error mapping, logging, and the three demo commands.
// Demo output goes to stdout; diagnostics go to stderr through tracing.

mod args;
mod demo;

mod exitcodes {
    pub const OK: i32 = 0;
    pub const VALIDATION: i32 = 2;
    pub const IO: i32 = 4;
    pub const ARITHMETIC: i32 = 5;
}

use std::process::ExitCode;

use args::{parse_and_validate, Args, Command, ParseFailure};
use kata_core::CoreError;
use kata_io::IoError;
use tracing::Level;

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
pub(crate) enum MainError {
    /// Bad operands, malformed/invalid catalog input.
    Validation(String),
    /// Read/write/path/limit failures.
    Io(String),
    /// Fraction arithmetic that could not be represented (overflow, index).
    Arithmetic(String),
}

impl std::fmt::Display for MainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MainError::Validation(m) => write!(f, "{m}"),
            MainError::Io(m) => write!(f, "{m}"),
            MainError::Arithmetic(m) => write!(f, "{m}"),
        }
    }
}

impl From<CoreError> for MainError {
    fn from(e: CoreError) -> Self {
        if e.is_invalid_argument() {
            MainError::Validation(e.to_string())
        } else {
            MainError::Arithmetic(e.to_string())
        }
    }
}

impl From<IoError> for MainError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Json { .. } | IoError::Invalid { .. } => MainError::Validation(e.to_string()),
            IoError::Path(_) | IoError::Limit(_) => MainError::Io(e.to_string()),
        }
    }
}

impl From<std::io::Error> for MainError {
    fn from(e: std::io::Error) -> Self {
        MainError::Io(format!("stdout: {e}"))
    }
}

fn main() -> ExitCode {
    let args = match parse_and_validate() {
        Ok(a) => a,
        Err(ParseFailure::Clap(e)) => {
            // --help/--version print and exit 0; usage errors exit 2
            let _ = e.print();
            let rc = if e.use_stderr() { exitcodes::VALIDATION } else { exitcodes::OK };
            return ExitCode::from(rc as u8);
        }
        Err(ParseFailure::Cli(e)) => {
            eprintln!("kata: error: {e}");
            return ExitCode::from(exitcodes::VALIDATION as u8);
        }
    };

    init_logging(&args);

    let rc = match run(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            eprintln!("kata: error: {e}");
            map_error(&e)
        }
    };
    ExitCode::from(rc as u8)
}

fn init_logging(args: &Args) {
    let level = if args.quiet {
        Level::WARN
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let res = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
    if let Err(e) = res {
        eprintln!("kata: logging disabled: {e}");
    }
}

fn run(args: &Args) -> Result<(), MainError> {
    let mut out = std::io::stdout().lock();
    match &args.command {
        Command::Fraction(cmd) => demo::fraction(cmd, &mut out),
        Command::Profile { name, bio } => demo::profile(name.as_deref(), bio.as_deref(), &mut out),
        Command::Catalog { catalog, seed, json } => {
            demo::catalog(catalog.as_deref(), *seed, *json, &mut out)
        }
    }
}

fn map_error(e: &MainError) -> i32 {
    use exitcodes::*;
    match e {
        MainError::Validation(_) => VALIDATION,
        MainError::Io(_) => IO,
        MainError::Arithmetic(_) => ARITHMETIC,
    }
}
