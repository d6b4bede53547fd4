//! # Chain
//!
//! Ordered, append-only sequence of blocks. The chain owns every block it
//! holds and hands out shared references only, so the one way to grow it
//! is [`Chain::append`], which always links the new block to the tip.
//!
//! ## Validation
//!
//! [`Chain::validate`] is a single read-only pass over the blocks:
//!
//! ```text
//! block 0      previous == SENTINEL                      else GenesisMalformed
//! block i ≥ 1  previous == block[i-1].identifier         else LinkageBroken(i)
//! block i      identifier == digest(content ++ previous) else ContentTampered(i)
//! ```
//!
//! Linkage is checked before content at each position, and the scan stops at
//! the first violation. Append never revalidates: a chain built only through
//! `append` is valid by construction, and `validate` exists for chains that
//! were rebuilt from outside data.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::block::Block;
use crate::config::ChainConfig;
use crate::crypto::digest::Identifier;

// ---------------------------------------------------------------------------
// Error Types
// ---------------------------------------------------------------------------

/// Errors returned by chain construction and append.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// The configured block limit is already reached. The chain is unchanged.
    #[error("chain is full: capacity of {limit} blocks reached")]
    CapacityExceeded { limit: usize },

    /// A chain cannot be rebuilt from zero blocks.
    #[error("cannot rebuild a chain from an empty block list")]
    Empty,
}

/// Which invariant a [`Violation`] broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    Linkage,
    ContentTamper,
    GenesisMalformed,
}

/// The first integrity failure found by [`Chain::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A block's stored predecessor does not match the block before it.
    #[error("linkage broken at block {index}: expected previous identifier {expected}, found {found}")]
    LinkageBroken {
        index: usize,
        expected: Identifier,
        found: Identifier,
    },

    /// A block's stored identifier does not match its own content.
    #[error("content tampered at block {index}: stored identifier {stored}, computed {computed}")]
    ContentTampered {
        index: usize,
        stored: Identifier,
        computed: Identifier,
    },

    /// The first block does not point at the sentinel.
    #[error("genesis block malformed: previous identifier is {found}, expected {}", Identifier::SENTINEL)]
    GenesisMalformed { found: Identifier },
}

impl Violation {
    /// Position of the offending block. Genesis problems are at index 0.
    pub fn index(&self) -> usize {
        match self {
            Self::LinkageBroken { index, .. } | Self::ContentTampered { index, .. } => *index,
            Self::GenesisMalformed { .. } => 0,
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::LinkageBroken { .. } => ViolationKind::Linkage,
            Self::ContentTampered { .. } => ViolationKind::ContentTamper,
            Self::GenesisMalformed { .. } => ViolationKind::GenesisMalformed,
        }
    }
}

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// Ordered chain of blocks. Never empty: the genesis block is always at
/// index 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chain {
    blocks: Vec<Block>,
    #[serde(skip)]
    config: ChainConfig,
}

impl Chain {
    /// A fresh, unbounded chain holding only the genesis block.
    pub fn new() -> Self {
        Self::with_config(ChainConfig::default())
    }

    /// A fresh chain holding only the genesis block, with a capacity policy.
    pub fn with_config(config: ChainConfig) -> Self {
        Chain {
            blocks: vec![Block::genesis()],
            config,
        }
    }

    /// Rebuild a chain from blocks read back from outside, without checking
    /// them. Call [`validate`](Self::validate) before trusting the result.
    ///
    /// # Errors
    ///
    /// [`ChainError::Empty`] when `blocks` is empty.
    pub fn from_untrusted_blocks(blocks: Vec<Block>) -> Result<Self, ChainError> {
        if blocks.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(Chain {
            blocks,
            config: ChainConfig::default(),
        })
    }

    /// Append `content` as a new block linked to the current tip.
    ///
    /// Returns the block that was added.
    ///
    /// # Errors
    ///
    /// [`ChainError::CapacityExceeded`] when a configured `max_blocks` is
    /// already reached. The chain is left untouched.
    pub fn append(&mut self, content: impl Into<String>) -> Result<&Block, ChainError> {
        if let Some(limit) = self.config.max_blocks {
            if self.blocks.len() >= limit {
                return Err(ChainError::CapacityExceeded { limit });
            }
        }

        let block = Block::new(content, self.tip().identifier());
        debug!(
            index = self.blocks.len(),
            identifier = %block.identifier(),
            previous = %block.previous_identifier(),
            "block appended"
        );
        self.blocks.push(block);
        Ok(self.tip())
    }

    /// Walk the chain once, front to back, and report the first block that
    /// breaks linkage or content integrity.
    pub fn validate(&self) -> Result<(), Violation> {
        let result = self.scan();
        if let Err(violation) = &result {
            warn!(
                index = violation.index(),
                kind = ?violation.kind(),
                "chain validation failed: {}",
                violation
            );
        }
        result
    }

    fn scan(&self) -> Result<(), Violation> {
        let genesis = self.genesis();
        if !genesis.previous_identifier().is_sentinel() {
            return Err(Violation::GenesisMalformed {
                found: genesis.previous_identifier(),
            });
        }

        let mut previous: Option<&Block> = None;
        for (index, block) in self.blocks.iter().enumerate() {
            if let Some(prev) = previous {
                if block.previous_identifier() != prev.identifier() {
                    return Err(Violation::LinkageBroken {
                        index,
                        expected: prev.identifier(),
                        found: block.previous_identifier(),
                    });
                }
            }

            let computed = block.compute_identifier();
            if computed != block.identifier() {
                return Err(Violation::ContentTampered {
                    index,
                    stored: block.identifier(),
                    computed,
                });
            }

            previous = Some(block);
        }

        Ok(())
    }

    /// Shorthand for `validate().is_ok()`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// All blocks in chain order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Number of blocks, genesis included. Always at least 1.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn genesis(&self) -> &Block {
        &self.blocks[0]
    }

    /// The most recently appended block.
    pub fn tip(&self) -> &Block {
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn config(&self) -> ChainConfig {
        self.config
    }

    /// The configured block limit, if any.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.config.max_blocks
    }

    /// Whether the next append would be refused.
    pub fn is_full(&self) -> bool {
        self.config
            .max_blocks
            .is_some_and(|limit| self.blocks.len() >= limit)
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
