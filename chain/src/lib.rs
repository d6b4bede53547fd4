// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # linkchain Core Library
//!
//! An append-only chain of text records where every block's identifier is
//! derived from its own content and from the identifier of the block before
//! it. Change one byte anywhere and validation points at the exact block
//! where the chain stops adding up.
//!
//! ## Architecture
//!
//! - **crypto**: The weighted-sum digest and the fixed-width [`Identifier`]
//!   it produces. Deterministic and portable, not cryptographic.
//! - **storage**: [`Block`], the owning [`Chain`], and [`SharedChain`] for
//!   callers that need to append from more than one thread.
//! - **config**: Well-known constants (genesis label, sentinel) and the
//!   optional capacity policy in [`ChainConfig`].
//!
//! ## Quick Start
//!
//! ```
//! use linkchain::Chain;
//!
//! let mut chain = Chain::new();
//! chain.append("Hello").expect("unbounded chain");
//!
//! assert_eq!(chain.len(), 2);
//! assert!(chain.validate().is_ok());
//! assert_eq!(chain.tip().previous_identifier(), chain.genesis().identifier());
//! ```

pub mod config;
pub mod crypto;
pub mod storage;

pub use config::ChainConfig;
pub use crypto::{digest, digest_str, Identifier, IdentifierError};
pub use storage::{Block, Chain, ChainError, SharedChain, Violation, ViolationKind};
