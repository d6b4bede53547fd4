//! Thread-safe chain handle.
//!
//! `append` reads the tip and pushes a block linked to it. If two writers
//! interleaved those steps, both would link to the same predecessor and the
//! chain would silently fork. [`SharedChain`] puts the whole chain behind a
//! single `parking_lot::RwLock`:
//!
//! - appends hold the write lock from tip read to push;
//! - validation and reads hold the read lock, so a scan never observes a
//!   half-finished append.

use std::sync::Arc;

use parking_lot::RwLock;

use super::block::Block;
use super::chain::{Chain, ChainError, Violation};
use crate::config::ChainConfig;

/// Cloneable handle to one chain shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SharedChain {
    inner: Arc<RwLock<Chain>>,
}

impl SharedChain {
    pub fn new() -> Self {
        Self::from_chain(Chain::new())
    }

    pub fn with_config(config: ChainConfig) -> Self {
        Self::from_chain(Chain::with_config(config))
    }

    pub fn from_chain(chain: Chain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    /// Append under the write lock. Returns a copy of the new block.
    pub fn append(&self, content: impl Into<String>) -> Result<Block, ChainError> {
        let mut chain = self.inner.write();
        chain.append(content).cloned()
    }

    /// Validate against a consistent view of the chain.
    pub fn validate(&self) -> Result<(), Violation> {
        self.inner.read().validate()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Always false; a chain holds at least its genesis block.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn tip(&self) -> Block {
        self.inner.read().tip().clone()
    }

    /// Copy of every block, taken under one read lock.
    pub fn snapshot(&self) -> Vec<Block> {
        self.inner.read().blocks().to_vec()
    }

    /// Run `f` with shared access to the chain.
    pub fn read<R>(&self, f: impl FnOnce(&Chain) -> R) -> R {
        let chain = self.inner.read();
        f(&chain)
    }
}

impl From<Chain> for SharedChain {
    fn from(chain: Chain) -> Self {
        Self::from_chain(chain)
    }
}
