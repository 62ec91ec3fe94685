//! Seedword - a command-line tool for BIP-39 mnemonics.
//!
//! Recover the entropy behind a mnemonic, check its checksum, or expand
//! abbreviated words.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Decode(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
        Commands::Expand(cmd) => cmd.execute()?,
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` applies unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
