// crates/kata_cli/src/args.rs
//
// CLI surface for the demo harness:
// - `fraction demo` / `fraction calc <lhs> <op> <rhs>`
// - `profile [--name] [--bio]`
// - `catalog [--catalog FILE | --seed N] [--json]`
// - Global: --quiet / -v
// Paths must be local (no scheme://); seeds are u64 decimal or 0x-hex (≤16 nybbles).

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "kata",
    disable_help_subcommand = true,
    about = "Console demos for fractions, transforming holders and catalog utilities"
)]
pub struct Args {
    /// Only log warnings and errors.
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug events (stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Fraction value type.
    #[command(subcommand)]
    Fraction(FractionCmd),

    /// Transforming string holders on a user profile.
    Profile {
        /// Name written after the defaults are shown (stored uppercased).
        #[arg(long)]
        name: Option<String>,
        /// Bio written after the defaults are shown (stored trimmed).
        #[arg(long)]
        bio: Option<String>,
    },

    /// Run every catalog utility against the sample or a loaded catalog.
    Catalog {
        /// Local catalog JSON file (default: built-in sample).
        #[arg(long, conflicts_with = "seed")]
        catalog: Option<PathBuf>,
        /// Seed for sample ids. Decimal u64 or 0x-hex (≤16 hex digits).
        #[arg(long, value_parser = parse_seed)]
        seed: Option<u64>,
        /// Print the canonical JSON summary instead of the text sections.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Subcommand, Clone)]
pub enum FractionCmd {
    /// Print every fraction operation with its result.
    Demo,
    /// Evaluate `<lhs> <op> <rhs>`; operands are `n` or `n/d`.
    Calc {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        #[arg(value_parser = CalcOp::from_str)]
        op: CalcOp,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcOp {
    Add,
    Mul,
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl FromStr for CalcOp {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "+" => CalcOp::Add,
            "*" => CalcOp::Mul,
            "<" => CalcOp::Lt,
            "<=" => CalcOp::Le,
            ">" => CalcOp::Gt,
            ">=" => CalcOp::Ge,
            "==" => CalcOp::Eq,
            other => return Err(format!("unknown operator `{other}` (expected + * < <= > >= ==)")),
        })
    }
}

impl fmt::Display for CalcOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CalcOp::Add => "+",
            CalcOp::Mul => "*",
            CalcOp::Lt => "<",
            CalcOp::Le => "<=",
            CalcOp::Gt => ">",
            CalcOp::Ge => ">=",
            CalcOp::Eq => "==",
        })
    }
}

/// Errors from post-parse checks. Messages stay short and stable for scripts.
#[derive(Debug)]
pub enum CliError {
    NonLocalPath(String),
    NotFound(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NonLocalPath(p) => write!(f, "only local paths are accepted: {p}"),
            CliError::NotFound(p) => write!(f, "not found: {p}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse argv, then check that every path flag is local and inputs exist.
pub fn parse_and_validate() -> Result<Args, ParseFailure> {
    let args = Args::try_parse().map_err(ParseFailure::Clap)?;
    validate(&args).map_err(ParseFailure::Cli)?;
    Ok(args)
}

/// clap errors keep their own rendering (help/version are not failures).
#[derive(Debug)]
pub enum ParseFailure {
    Clap(clap::Error),
    Cli(CliError),
}

pub fn validate(args: &Args) -> Result<(), CliError> {
    if let Command::Catalog { catalog: Some(p), .. } = &args.command {
        ensure_local_path(p)?;
        if !p.is_file() {
            return Err(CliError::NotFound(format!("--catalog {}", p.display())));
        }
    }
    Ok(())
}

/// Decimal u64 or 0x-prefixed hex with 1..=16 digits.
pub fn parse_seed(s: &str) -> Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty seed".into());
    }
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        if rest.is_empty() || rest.len() > 16 || !rest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err("hex seed must be 1..16 hex digits".into());
        }
        u64::from_str_radix(rest, 16).map_err(|_| "hex seed out of range".into())
    } else {
        s.parse::<u64>().map_err(|_| "decimal seed must be a valid u64".into())
    }
}

fn ensure_local_path(p: &Path) -> Result<(), CliError> {
    let s = p.to_string_lossy();
    if kata_io::looks_like_url_strict(&s) {
        return Err(CliError::NonLocalPath(s.into_owned()));
    }
    Ok(())
}
