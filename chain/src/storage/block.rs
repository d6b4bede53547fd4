//! # Block Structure
//!
//! A block is one record in the chain: a text payload, the identifier of
//! the block before it, and its own identifier.
//!
//! ## Block Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  content: String                             │
//! │  previous_identifier: Identifier             │
//! │  identifier: Identifier                      │
//! │      = digest(content ++ previous_identifier)│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The preimage is the content bytes followed by the eight ASCII digits of
//! the previous identifier, exactly as they render. The genesis block uses
//! [`Identifier::SENTINEL`] as its predecessor.

use serde::{Deserialize, Serialize};

use crate::config::GENESIS_CONTENT;
use crate::crypto::digest::{Identifier, WeightedSum};

// ---------------------------------------------------------------------------
// Block
// ---------------------------------------------------------------------------

/// An immutable chain record.
///
/// Fields are private. A block built with [`Block::new`] always satisfies
/// `identifier == digest(content ++ previous_identifier)`; only
/// [`Block::from_parts`] can produce one that does not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    content: String,
    previous_identifier: Identifier,
    identifier: Identifier,
}

impl Block {
    /// Construct a block linked to `previous_identifier`.
    ///
    /// Accepts any content, including the empty string.
    pub fn new(content: impl Into<String>, previous_identifier: Identifier) -> Self {
        let content = content.into();
        let identifier = compute_block_identifier(&content, previous_identifier);
        Block {
            content,
            previous_identifier,
            identifier,
        }
    }

    /// The genesis block: fixed content, sentinel predecessor.
    ///
    /// Deterministic, so every fresh chain starts from the same identifier.
    pub fn genesis() -> Self {
        Self::new(GENESIS_CONTENT, Identifier::SENTINEL)
    }

    /// Rebuild a stored block as-is, without recomputing its identifier.
    ///
    /// Use this when reading blocks back from an untrusted source, then let
    /// [`Chain::validate`](crate::Chain::validate) decide whether to believe
    /// them.
    pub fn from_parts(
        content: impl Into<String>,
        previous_identifier: Identifier,
        identifier: Identifier,
    ) -> Self {
        Block {
            content: content.into(),
            previous_identifier,
            identifier,
        }
    }

    /// Recompute the identifier from the stored content and predecessor.
    pub fn compute_identifier(&self) -> Identifier {
        compute_block_identifier(&self.content, self.previous_identifier)
    }

    /// Whether the stored identifier matches the recomputed one.
    pub fn is_intact(&self) -> bool {
        self.identifier == self.compute_identifier()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn previous_identifier(&self) -> Identifier {
        self.previous_identifier
    }

    pub fn identifier(&self) -> Identifier {
        self.identifier
    }
}

// ---------------------------------------------------------------------------
// Identifier Computation
// ---------------------------------------------------------------------------

/// `digest(content ++ previous.to_hex())`, streamed.
fn compute_block_identifier(content: &str, previous: Identifier) -> Identifier {
    WeightedSum::new()
        .update(content)
        .update(previous.to_hex_bytes())
        .finalize()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
