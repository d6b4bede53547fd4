//! # CLI Interface
//!
//! Defines the command-line argument structure for `linkchain` using
//! `clap` derive. Supports five subcommands: `run`, `batch`, `verify`,
//! `digest`, and `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use linkchain::config::DEFAULT_DRIVER_MAX_BLOCKS;
use linkchain::ChainConfig;

use crate::logging::LogFormat;
use crate::render::OutputFormat;

/// Tamper-evident chain of text records.
///
/// Builds a hash-linked chain from operator input, prints it, and checks
/// previously printed chains for edits.
#[derive(Parser, Debug)]
#[command(
    name = "linkchain",
    about = "Tamper-evident chain of text records",
    version,
    propagate_version = true
)]
pub struct LinkchainCli {
    /// Log output format. Logs always go to stderr.
    #[arg(
        long,
        global = true,
        value_enum,
        env = "LINKCHAIN_LOG_FORMAT",
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the `linkchain` binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for block contents interactively, then print the chain.
    Run(RunArgs),
    /// Append one block per input line, then print the chain.
    Batch(BatchArgs),
    /// Check a chain previously printed with `--format json`.
    Verify(VerifyArgs),
    /// Print the identifier of a piece of text.
    Digest(DigestArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Maximum number of blocks, genesis included.
    #[arg(
        long,
        env = "LINKCHAIN_MAX_BLOCKS",
        default_value_t = DEFAULT_DRIVER_MAX_BLOCKS,
        conflicts_with = "unbounded"
    )]
    pub max_blocks: usize,

    /// Keep prompting until the operator declines, with no block limit.
    #[arg(long)]
    pub unbounded: bool,

    /// How to print the finished chain.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl RunArgs {
    pub fn chain_config(&self) -> ChainConfig {
        if self.unbounded {
            ChainConfig::unbounded()
        } else {
            ChainConfig::unbounded().with_max_blocks(self.max_blocks)
        }
    }
}

/// Arguments for the `batch` subcommand.
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// File to read block contents from, one per line. Reads stdin when
    /// omitted.
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Maximum number of blocks, genesis included. Unbounded when omitted.
    #[arg(long, env = "LINKCHAIN_MAX_BLOCKS")]
    pub max_blocks: Option<usize>,

    /// How to print the finished chain.
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl BatchArgs {
    pub fn chain_config(&self) -> ChainConfig {
        ChainConfig {
            max_blocks: self.max_blocks,
        }
    }
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// JSON file produced by `linkchain run --format json` or
    /// `linkchain batch --format json`.
    pub path: PathBuf,
}

/// Arguments for the `digest` subcommand.
#[derive(Parser, Debug)]
pub struct DigestArgs {
    /// Text to digest, taken as its UTF-8 bytes.
    pub text: String,
}
