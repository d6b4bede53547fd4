//! # Chain Configuration & Constants
//!
//! Every well-known value in linkchain lives here. Two chains built by two
//! different processes agree on their genesis block only because both read
//! the same constants, so treat changes here as format breaks.

// ---------------------------------------------------------------------------
// Versioning
// ---------------------------------------------------------------------------

/// Crate version, assembled at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---------------------------------------------------------------------------
// Digest Parameters
// ---------------------------------------------------------------------------

/// Name of the digest construction: 32-bit wrapping weighted byte sum,
/// rendered as hex with the least-significant nibble first.
pub const DIGEST_ALGORITHM: &str = "weighted-sum-32/lsn-hex";

/// Number of hex digits in an identifier. One per nibble of a `u32`.
pub const IDENTIFIER_WIDTH: usize = 8;

/// Digit alphabet used when rendering identifiers. Uppercase only.
pub const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

// ---------------------------------------------------------------------------
// Genesis
// ---------------------------------------------------------------------------

/// Content of the genesis block. Every fresh chain starts with it.
pub const GENESIS_CONTENT: &str = "Genesis Block";

/// Predecessor identifier carried by the genesis block, as rendered.
/// [`Identifier::SENTINEL`](crate::Identifier::SENTINEL) is the same value.
///
/// The digest can produce this value too (any input whose weighted sum is a
/// multiple of 2^32 does), so it marks "no predecessor" by convention only.
pub const SENTINEL_IDENTIFIER: &str = "00000000";

// ---------------------------------------------------------------------------
// Capacity Policy
// ---------------------------------------------------------------------------

/// Block limit applied by the interactive driver unless told otherwise.
/// The chain itself has no inherent maximum.
pub const DEFAULT_DRIVER_MAX_BLOCKS: usize = 10;

/// Runtime policy for a [`Chain`](crate::Chain).
///
/// The default is unbounded. Drivers that want the classic ten-block demo
/// set `max_blocks` explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainConfig {
    /// Maximum number of blocks, genesis included. `None` means unbounded.
    pub max_blocks: Option<usize>,
}

impl ChainConfig {
    /// An unbounded configuration. Same as `ChainConfig::default()`.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Cap the chain at `limit` blocks, genesis included.
    ///
    /// A limit of 0 or 1 leaves room for the genesis block only; genesis is
    /// never refused.
    pub fn with_max_blocks(mut self, limit: usize) -> Self {
        self.max_blocks = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_has_identifier_width() {
        assert_eq!(SENTINEL_IDENTIFIER.len(), IDENTIFIER_WIDTH);
        assert!(SENTINEL_IDENTIFIER
            .bytes()
            .all(|b| HEX_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_hex_alphabet_is_uppercase() {
        assert!(HEX_ALPHABET
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn test_default_config_is_unbounded() {
        assert_eq!(ChainConfig::default().max_blocks, None);
        assert_eq!(ChainConfig::unbounded(), ChainConfig::default());
    }

    #[test]
    fn test_with_max_blocks() {
        let config = ChainConfig::unbounded().with_max_blocks(DEFAULT_DRIVER_MAX_BLOCKS);
        assert_eq!(config.max_blocks, Some(10));
    }
}
