//! Walkthrough of the linkchain lifecycle.
//!
//! Builds a short chain, prints it, then edits a rendered copy in three
//! different ways and shows what validation reports for each.
//!
//! Run with:
//!   cargo run -p linkchain --example demo

use linkchain::{Block, Chain, Identifier};

// ---------------------------------------------------------------------------
// ANSI color constants
// ---------------------------------------------------------------------------

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn section(title: &str) {
    println!();
    println!("{BOLD}{CYAN}== {title} =={RESET}");
}

fn print_chain(chain: &Chain) {
    for (index, block) in chain.iter().enumerate() {
        println!(
            "  {DIM}#{index}{RESET} {:<24} {DIM}prev{RESET} {}  {DIM}id{RESET} {}",
            format!("{:?}", block.content()),
            block.previous_identifier(),
            block.identifier(),
        );
    }
}

fn report(label: &str, chain: &Chain) {
    match chain.validate() {
        Ok(()) => println!("  {label:<28} {GREEN}valid{RESET}"),
        Err(violation) => println!("  {label:<28} {RED}{violation}{RESET}"),
    }
}

/// Copy `chain`, replacing block `index` with `replacement`.
fn with_block(chain: &Chain, index: usize, replacement: Block) -> Chain {
    let mut blocks = chain.blocks().to_vec();
    blocks[index] = replacement;
    Chain::from_untrusted_blocks(blocks).expect("non-empty")
}

fn main() {
    section("Building");
    let mut chain = Chain::new();
    for content in ["Alice pays Bob 5", "Bob pays Carol 2", "Carol pays Dave 1"] {
        chain.append(content).expect("unbounded chain");
    }
    print_chain(&chain);
    report("as built", &chain);

    section("Tampering");
    let target = chain.blocks()[2].clone();

    let edited = with_block(
        &chain,
        2,
        Block::from_parts("Bob pays Carol 200", target.previous_identifier(), target.identifier()),
    );
    report("edit content", &edited);

    let relinked = with_block(
        &chain,
        2,
        Block::from_parts(
            target.content(),
            Identifier::from_accumulator(0xDEAD_BEEF),
            target.identifier(),
        ),
    );
    report("overwrite previous id", &relinked);

    let rehashed = with_block(
        &chain,
        2,
        Block::new("Bob pays Carol 200", target.previous_identifier()),
    );
    report("edit and recompute id", &rehashed);
}
