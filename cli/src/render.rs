//! Chain rendering.
//!
//! `text` reproduces the classic console layout. `json` writes the chain as
//! `{ "blocks": [...] }`, which `linkchain verify` reads back.

use std::io::{self, Write};

use clap::ValueEnum;

use linkchain::Chain;

/// Output format for a finished chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Whether stdout must carry nothing but the rendering. Interactive
    /// prompts go to stderr for these formats.
    pub fn is_machine_readable(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

pub fn render<W: Write>(chain: &Chain, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(chain, out),
        OutputFormat::Json => render_json(chain, out),
    }
}

pub fn render_text<W: Write>(chain: &Chain, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== Blockchain ===")?;
    for (index, block) in chain.iter().enumerate() {
        writeln!(out, "Block {index}:")?;
        writeln!(out, "  Data      : {}", block.content())?;
        writeln!(out, "  Prev Hash : {}", block.previous_identifier())?;
        writeln!(out, "  Hash      : {}", block.identifier())?;
        writeln!(out)?;
    }
    out.flush()
}

pub fn render_json<W: Write>(chain: &Chain, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, chain)?;
    writeln!(out)?;
    out.flush()
}
