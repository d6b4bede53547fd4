//! # Storage Module
//!
//! In-memory data structures that make linkchain a chain rather than a list.
//!
//! ## Architecture
//!
//! ```text
//! block.rs  : Block record, genesis block, identifier recomputation
//! chain.rs  : Owning chain: append, read access, validation, errors
//! shared.rs : RwLock-guarded handle for multi-threaded appenders
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! content ──► Chain::append ──► Block::new(content, tip.identifier)
//!                                    │
//!                                    ▼
//!                     digest(content ++ previous_identifier)
//! ```
//!
//! Nothing here touches the disk. A chain lives exactly as long as the value
//! that owns it.

pub mod block;
pub mod chain;
pub mod shared;

pub use block::Block;
pub use chain::{Chain, ChainError, Violation, ViolationKind};
pub use shared::SharedChain;
