//! `abjad` command-line front end for the classical cipher library.
//!
//! Reads the cipher name, key and text from flags (or stdin), runs the
//! dispatcher and prints the result.

use std::io::{self, Read, Write};
use std::process;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use abjad_ciphers::{Alphabet, CipherKind, Direction};

#[derive(Debug, Parser)]
#[command(
    name = "abjad",
    version,
    about = "Classical ciphers over the 36-symbol Arabic alphabet (not secure)"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Encrypt plaintext.
    Encrypt(CipherArgs),
    /// Decrypt ciphertext.
    Decrypt(CipherArgs),
    /// List the supported ciphers and their key formats.
    List,
}

#[derive(Debug, Args)]
struct CipherArgs {
    /// Cipher name, e.g. Shift, Vigenère, Rail-Fence (see `abjad list`).
    #[arg(short, long, env = "ABJAD_CIPHER")]
    cipher: String,

    /// Cipher key, in the format the cipher expects (see `abjad list`).
    #[arg(short, long, env = "ABJAD_KEY", allow_hyphen_values = true)]
    key: String,

    /// Input text. Read from stdin when omitted.
    text: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = execute(
        cli.command,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    if code != 0 {
        process::exit(code);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Runs `command` and reports failure on `err`. Returns the exit status.
fn execute(
    command: Command,
    input: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32 {
    match run(command, input, out) {
        Ok(()) => 0,
        Err(e) => {
            // Nothing left to report to if stderr itself fails.
            let _ = writeln!(err, "error: {e:#}");
            1
        }
    }
}

fn run(command: Command, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let (direction, args) = match command {
        Command::Encrypt(args) => (Direction::Encrypt, args),
        Command::Decrypt(args) => (Direction::Decrypt, args),
        Command::List => {
            for kind in CipherKind::ALL {
                writeln!(out, "{:<22} key: {}", kind.name(), kind.key_shape())?;
            }
            out.flush()?;
            return Ok(());
        }
    };

    let kind = CipherKind::from_name(&args.cipher)?;
    let text = match args.text {
        Some(text) => text,
        None => read_input(input)?,
    };
    debug!(cipher = %kind, %direction, "dispatching");

    let output = kind
        .run(Alphabet::arabic(), direction, &text, &args.key)
        .with_context(|| format!("{kind} {direction} failed"))?;
    writeln!(out, "{output}")?;
    out.flush()?;
    Ok(())
}

fn read_input(input: &mut dyn Read) -> Result<String> {
    let mut buf = String::new();
    input
        .read_to_string(&mut buf)
        .context("failed to read text from stdin")?;
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}
