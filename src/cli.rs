//! Command-line front end
//!
//! The exit codes are part of the tool's contract with the scripts that call
//! it, so every outcome is mapped to one explicitly:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | hash printed, or `--help` |
//! | 1    | random source or stdout failure |
//! | 2    | malformed command line |
//! | 10   | empty password |
//! | 20   | unknown algorithm |

use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::{ArgAction, CommandFactory, Parser};
use log::{debug, error};
use thiserror::Error;

use crate::algorithm::{Algorithm, HashError, Salt, SaltedHash};

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_BAD_ARGUMENTS: i32 = 2;
pub const EXIT_EMPTY_PASSWORD: i32 = 10;
pub const EXIT_UNKNOWN_ALGORITHM: i32 = 20;

#[derive(Parser, Debug)]
#[command(name = "rabbitmq-hash")]
#[command(about = "Generate RabbitMQ password hash")]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Hash algorithm sha256 or md5
    #[arg(long, default_value = "sha256")]
    pub algorithm: String,

    /// Password
    #[arg(long, allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    pub password: Option<OsString>,

    /// Use the all-zero salt of earlier releases instead of a random one
    #[arg(long)]
    pub zero_salt: bool,

    /// This help information
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("help requested")]
    Help,

    #[error("password must not be empty")]
    EmptyPassword,

    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    BadArguments(String),

    #[error(transparent)]
    RandomSource(HashError),

    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Help => EXIT_OK,
            CliError::EmptyPassword => EXIT_EMPTY_PASSWORD,
            CliError::UnknownAlgorithm(_) => EXIT_UNKNOWN_ALGORITHM,
            CliError::BadArguments(_) => EXIT_BAD_ARGUMENTS,
            CliError::RandomSource(_) | CliError::Output(_) => EXIT_FAILURE,
        }
    }

    /// Whether the usage text goes to stderr alongside this outcome
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            CliError::Help | CliError::UnknownAlgorithm(_) | CliError::BadArguments(_)
        )
    }
}

/// Usage text, starting with the one-line tool description
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Parse `args`, hash, and write the result to `out`.
///
/// Returns the process exit code. Nothing is written to `out` unless a hash
/// was produced; usage text goes to `err`.
pub fn run<I, T, O, E>(args: I, out: &mut O, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    E: Write,
{
    let result = Cli::try_parse_from(args)
        .map_err(|e| CliError::BadArguments(parse_error_line(&e)))
        .and_then(|cli| execute(&cli))
        .and_then(|encoded| emit(out, &encoded).map_err(CliError::from));

    match result {
        Ok(()) => EXIT_OK,
        Err(e) => {
            match &e {
                CliError::RandomSource(_) | CliError::Output(_) => error!("{:#}", e),
                CliError::BadArguments(reason) => {
                    let _ = writeln!(err, "error: {}", reason);
                }
                _ => debug!("{}", e),
            }
            if e.shows_usage() {
                let _ = write!(err, "{}", usage());
            }
            e.exit_code()
        }
    }
}

/// Produce the encoded hash for a parsed command line
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    if cli.help {
        return Err(CliError::Help);
    }

    // Hash whatever bytes arrived in argv, UTF-8 or not
    let password = match cli.password.as_deref() {
        Some(p) if !p.is_empty() => p.as_encoded_bytes(),
        _ => return Err(CliError::EmptyPassword),
    };

    let salt = if cli.zero_salt {
        Salt::ZERO
    } else {
        Salt::random().map_err(CliError::RandomSource)?
    };

    let algorithm: Algorithm = cli
        .algorithm
        .parse()
        .map_err(|_| CliError::UnknownAlgorithm(cli.algorithm.clone()))?;

    debug!(
        "hashing with algorithm={} salt={}",
        algorithm,
        hex::encode(salt.as_bytes())
    );

    Ok(SaltedHash::new(salt, algorithm, password).encode())
}

/// First line of a clap error, without its `error: ` prefix
fn parse_error_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let line = rendered.lines().next().unwrap_or_default().trim();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn emit<O: Write>(out: &mut O, encoded: &str) -> anyhow::Result<()> {
    writeln!(out, "{}", encoded).context("failed to write hash to stdout")?;
    out.flush().context("failed to flush stdout")?;
    Ok(())
}
