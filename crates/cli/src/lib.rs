//! `tg-base64` — encode or decode base64 from the command line.
//!
//! Provides the logic used by the binary entry point. Input defaults to
//! stdin and output to stdout; `--input`/`--output` switch to files.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

#[derive(Debug, Parser)]
#[command(name = "tg-base64", version, about = "Standard base64 encoder/decoder")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode binary input to padded base64 text
    Encode {
        #[command(flatten)]
        io: IoArgs,
    },
    /// Decode base64 text, skipping characters outside the alphabet
    Decode {
        /// Reject input with a bad length or misplaced padding
        #[arg(long)]
        strict: bool,
        #[command(flatten)]
        io: IoArgs,
    },
}

#[derive(Debug, Args)]
pub struct IoArgs {
    /// Read from this file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Command {
    fn io(&self) -> &IoArgs {
        match self {
            Command::Encode { io } | Command::Decode { io, .. } => io,
        }
    }
}

/// Runs one command against the given streams.
pub fn process(command: &Command, input: &[u8], output: &mut impl Write) -> Result<()> {
    match command {
        Command::Encode { .. } => {
            let mut text = tuxguitar_base64::encode_to_vec(input);
            debug!("encoded {} bytes into {} symbols", input.len(), text.len());
            text.push(b'\n');
            output.write_all(&text)?;
        }
        Command::Decode { strict, .. } => {
            let bytes = if *strict {
                tuxguitar_base64::decode_strict(input).context("invalid base64 input")?
            } else {
                tuxguitar_base64::decode(input)
            };
            debug!("decoded {} input bytes into {} bytes", input.len(), bytes.len());
            output.write_all(&bytes)?;
        }
    }
    output.flush()?;
    Ok(())
}

/// Resolves the command's input and output, then runs it.
pub fn run(cli: &Cli) -> Result<()> {
    let io_args = cli.command.io();

    let mut input = Vec::new();
    match &io_args.input {
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut input))
                .with_context(|| format!("failed to read {}", path.display()))?;
        }
        None => {
            io::stdin()
                .read_to_end(&mut input)
                .context("failed to read stdin")?;
        }
    }

    match &io_args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            process(&cli.command, &input, &mut BufWriter::new(file))
        }
        None => process(&cli.command, &input, &mut io::stdout().lock()),
    }
}
