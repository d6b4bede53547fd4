// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # linkchain CLI
//!
//! Entry point for the `linkchain` binary. Parses CLI arguments, initializes
//! logging, and drives a [`Chain`] from operator input.
//!
//! The binary supports five subcommands:
//!
//! - `run`    : interactive session, then print the chain
//! - `batch`  : one block per input line, then print the chain
//! - `verify` : validate a chain printed with `--format json`
//! - `digest` : print the identifier of a piece of text
//! - `version`: print build version information

mod cli;
mod logging;
mod render;
mod session;
mod snapshot;

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use clap::Parser;

use linkchain::config::{DIGEST_ALGORITHM, VERSION};
use linkchain::{digest_str, Chain};

use cli::{Commands, LinkchainCli};

fn main() -> Result<()> {
    let cli = LinkchainCli::parse();
    logging::init_logging(logging::DEFAULT_FILTER, cli.log_format);

    match cli.command {
        Commands::Run(args) => run_session(args),
        Commands::Batch(args) => run_batch(args),
        Commands::Verify(args) => verify_chain(args),
        Commands::Digest(args) => {
            println!("{}", digest_str(&args.text));
            Ok(())
        }
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Prompts for block contents on stdin, then prints the chain. With
/// `--format json` the prompts go to stderr so stdout stays parseable.
fn run_session(args: cli::RunArgs) -> Result<()> {
    let mut chain = Chain::with_config(args.chain_config());
    tracing::info!(max_blocks = ?chain.capacity_limit(), "starting interactive session");

    let mut prompts: Box<dyn Write> = if args.format.is_machine_readable() {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };
    let (appended, end) = session::interactive(&mut chain, &mut io::stdin().lock(), &mut prompts)
        .context("interactive session failed")?;
    drop(prompts);
    tracing::info!(appended, blocks = chain.len(), reason = ?end, "session finished");

    render::render(&chain, args.format, &mut io::stdout().lock()).context("failed to print chain")
}

/// Appends one block per line of the input file (or stdin), then prints
/// the chain.
fn run_batch(args: cli::BatchArgs) -> Result<()> {
    let mut chain = Chain::with_config(args.chain_config());

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            session::ingest_lines(&mut chain, BufReader::new(file))?;
        }
        None => {
            session::ingest_lines(&mut chain, io::stdin().lock())?;
        }
    }

    render::render(&chain, args.format, &mut io::stdout().lock())
        .context("failed to print chain")
}

/// Loads a printed chain and validates it. A violation is returned as the
/// command's error, so the process exits non-zero.
fn verify_chain(args: cli::VerifyArgs) -> Result<()> {
    let chain = snapshot::load(&args.path)?;
    tracing::info!(path = %args.path.display(), blocks = chain.len(), "chain loaded");

    chain
        .validate()
        .with_context(|| format!("{} failed validation", args.path.display()))?;

    println!("chain valid ({} blocks)", chain.len());
    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("linkchain {}", env!("CARGO_PKG_VERSION"));
    println!("core      {}", VERSION);
    println!("digest    {}", DIGEST_ALGORITHM);
}
