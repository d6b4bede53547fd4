//! # Content Addressing
//!
//! The one hash function linkchain uses: a position-weighted byte sum folded
//! into 32 bits and printed as eight hex digits. It is deterministic across
//! platforms and sensitive to byte order, and that is the whole contract.
//! It is not a cryptographic hash. Anyone can forge a collision by hand, so
//! never use an [`Identifier`] to authenticate anything.

pub mod digest;

pub use digest::{accumulate, digest, digest_str, Identifier, IdentifierError, WeightedSum};
