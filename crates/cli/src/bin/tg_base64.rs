//! `tg-base64` — base64 encode/decode stdin or a file.
//!
//! Usage:
//!   tg-base64 encode [--input FILE] [--output FILE]
//!   tg-base64 decode [--strict] [--input FILE] [--output FILE]
//!
//! Set `RUST_LOG=debug` to see byte counts.

use clap::Parser;
use tuxguitar_base64_cli::{run, Cli};

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
