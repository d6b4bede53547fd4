//! # Weighted-Sum Digest
//!
//! ## Construction
//!
//! ```text
//! acc = Σ byte[i] × (i + 1)        (u32, wrapping on overflow)
//! hex = nibble0 nibble1 … nibble7  (least-significant nibble first)
//! ```
//!
//! Bytes are unsigned (0–255) and positions are 1-based. Every multiply and
//! add wraps modulo 2^32, so the same input gives the same identifier on
//! every target regardless of the host's native integer width.
//!
//! The output is written least-significant nibble first: `"Hello"` sums to
//! 1585 (`0x631`) and renders as `"13600000"`, not `"00000631"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{HEX_ALPHABET, IDENTIFIER_WIDTH};

// ---------------------------------------------------------------------------
// Error Type
// ---------------------------------------------------------------------------

/// A string that is not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("identifier must be 8 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid identifier digit {digit:?} at position {position}")]
    InvalidDigit { position: usize, digit: char },
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Fixed-width block identifier.
///
/// Holds the 32-bit accumulator; the eight-digit string is derived on
/// demand. The mapping between the two is a bijection, so comparing
/// accumulators is the same as comparing the rendered strings.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(u32);

impl Identifier {
    /// Predecessor identifier of the genesis block. Renders as
    /// [`SENTINEL_IDENTIFIER`](crate::config::SENTINEL_IDENTIFIER).
    pub const SENTINEL: Identifier = Identifier(0);

    /// Wrap a raw accumulator value.
    pub const fn from_accumulator(acc: u32) -> Self {
        Self(acc)
    }

    /// The raw accumulator this identifier encodes.
    pub const fn to_accumulator(self) -> u32 {
        self.0
    }

    /// Whether this is the genesis sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Render as ASCII hex digits, least-significant nibble first.
    pub fn to_hex_bytes(self) -> [u8; IDENTIFIER_WIDTH] {
        let mut out = [0u8; IDENTIFIER_WIDTH];
        for (d, slot) in out.iter_mut().enumerate() {
            let nibble = (self.0 >> (4 * d)) & 0xF;
            *slot = HEX_ALPHABET[nibble as usize];
        }
        out
    }

    /// Render as an eight-character string.
    pub fn to_hex(self) -> String {
        self.to_hex_bytes().iter().map(|&b| b as char).collect()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.to_hex_bytes() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identifier({})", self)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    /// Parse the rendered form. Only uppercase digits are accepted, so every
    /// identifier has exactly one spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != IDENTIFIER_WIDTH {
            return Err(IdentifierError::InvalidLength(count));
        }

        let mut acc = 0u32;
        for (position, digit) in s.chars().enumerate() {
            let value = HEX_ALPHABET
                .iter()
                .position(|&b| b as char == digit)
                .ok_or(IdentifierError::InvalidDigit { position, digit })?;
            acc |= (value as u32) << (4 * position);
        }
        Ok(Self(acc))
    }
}

impl TryFrom<String> for Identifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.to_hex()
    }
}

// ---------------------------------------------------------------------------
// Incremental Hasher
// ---------------------------------------------------------------------------

/// Streaming form of [`digest`].
///
/// Feeding `a` then `b` yields the same identifier as digesting `a ++ b`,
/// which lets block construction hash `content ++ previous` without
/// allocating the concatenation.
#[derive(Debug, Clone, Default)]
pub struct WeightedSum {
    acc: u32,
    /// 1-based weight of the next byte, modulo 2^32.
    position: u32,
}

impl WeightedSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        for &byte in data.as_ref() {
            self.position = self.position.wrapping_add(1);
            self.acc = self
                .acc
                .wrapping_add(u32::from(byte).wrapping_mul(self.position));
        }
        self
    }

    pub fn accumulator(&self) -> u32 {
        self.acc
    }

    pub fn finalize(&self) -> Identifier {
        Identifier(self.acc)
    }
}

// ---------------------------------------------------------------------------
// One-shot Functions
// ---------------------------------------------------------------------------

/// The weighted byte sum of `input`, before hex encoding.
pub fn accumulate(input: &[u8]) -> u32 {
    WeightedSum::new().update(input).accumulator()
}

/// Digest an arbitrary byte sequence. Total: empty input gives `"00000000"`.
///
/// # Example
///
/// ```
/// use linkchain::digest;
///
/// assert_eq!(digest(b"Hello").to_string(), "13600000");
/// assert_ne!(digest(b"ab"), digest(b"ba"));
/// ```
pub fn digest(input: &[u8]) -> Identifier {
    Identifier(accumulate(input))
}

/// Digest the UTF-8 bytes of `input`.
pub fn digest_str(input: &str) -> Identifier {
    digest(input.as_bytes())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(accumulate(b""), 0);
        assert_eq!(digest(b"").to_string(), "00000000");
        assert!(digest(b"").is_sentinel());
    }

    #[test]
    fn hello_matches_worked_example() {
        // 72*1 + 101*2 + 108*3 + 108*4 + 111*5
        assert_eq!(accumulate(b"Hello"), 1585);
        assert_eq!(digest_str("Hello").to_string(), "13600000");
    }

    #[test]
    fn digest_is_deterministic() {
        let input = b"the same bytes, twice";
        assert_eq!(digest(input), digest(input));
    }

    #[test]
    fn digest_is_order_sensitive() {
        assert_eq!(digest_str("ab").to_string(), "52100000");
        assert_eq!(digest_str("ba").to_string(), "42100000");
        assert_ne!(digest_str("ab"), digest_str("ba"));
    }

    #[test]
    fn non_ascii_bytes_are_unsigned() {
        // "é" is 0xC3 0xA9 in UTF-8: 195*1 + 169*2 = 533.
        assert_eq!(accumulate("é".as_bytes()), 533);
    }

    #[test]
    fn accumulator_wraps_at_32_bits() {
        let input = vec![b'x'; 100_000];
        // Σ 120*i for i in 1..=100000 = 600006000000, mod 2^32.
        let expected = (600_006_000_000u64 % (1u64 << 32)) as u32;
        assert_eq!(accumulate(&input), expected);
        assert_eq!(digest(&input).to_string(), "08DF423B");
    }

    #[test]
    fn streaming_matches_one_shot() {
        let mut hasher = WeightedSum::new();
        hasher.update("Genesis Block").update("00000000");
        assert_eq!(hasher.finalize(), digest_str("Genesis Block00000000"));
    }

    #[test]
    fn hex_is_least_significant_nibble_first() {
        let id = Identifier::from_accumulator(0x1234_ABCD);
        assert_eq!(id.to_string(), "DCBA4321");
        assert_eq!(id.to_hex(), id.to_string());
    }

    #[test]
    fn sentinel_matches_its_rendered_constant() {
        use crate::config::SENTINEL_IDENTIFIER;

        assert_eq!(Identifier::SENTINEL.to_string(), SENTINEL_IDENTIFIER);
        assert_eq!(SENTINEL_IDENTIFIER.parse::<Identifier>(), Ok(Identifier::SENTINEL));
    }

    #[test]
    fn parse_inverts_display() {
        for acc in [0u32, 1, 1585, 0xFFFF_FFFF, 0x8000_0000] {
            let id = Identifier::from_accumulator(acc);
            let parsed: Identifier = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
            assert_eq!(parsed.to_accumulator(), acc);
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "1234".parse::<Identifier>(),
            Err(IdentifierError::InvalidLength(4))
        );
        assert_eq!(
            "123456789".parse::<Identifier>(),
            Err(IdentifierError::InvalidLength(9))
        );
    }

    #[test]
    fn parse_rejects_lowercase() {
        assert_eq!(
            "b6c30000".parse::<Identifier>(),
            Err(IdentifierError::InvalidDigit {
                position: 0,
                digit: 'b'
            })
        );
    }

    #[test]
    fn serde_uses_hex_string() {
        let id = digest_str("Hello");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"13600000\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"nothex!!\"").is_err());
    }
}
