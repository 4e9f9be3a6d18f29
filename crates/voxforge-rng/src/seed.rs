//! Seed values and string-seed hashing

use std::time::{SystemTime, UNIX_EPOCH};

/// A generation seed: either a number or a piece of text.
///
/// Textual seeds hash deterministically to a `u32`, so the same text
/// always maps to the same stream. The hash is the classic rolling
/// `h = h * 31 + unit` over UTF-16 code units, in wrapping 32-bit
/// arithmetic, with the sign dropped at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Number(u32),
    Text(String),
}

impl Seed {
    /// Resolve the seed to the numeric value that initializes a stream
    pub fn value(&self) -> u32 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => hash_text(s),
        }
    }

    /// Derive a fresh seed from the current time (epoch milliseconds,
    /// truncated to 32 bits). Used when a caller passes no seed; the
    /// resulting value is returned on the output record so the object
    /// can be regenerated later.
    pub fn from_time() -> u32 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        millis as u32
    }
}

impl From<u32> for Seed {
    fn from(n: u32) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

fn hash_text(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        // (h << 5) - h == h * 31, kept in shifted form to wrap the
        // same way on every platform.
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_seed_passes_through() {
        assert_eq!(Seed::Number(42).value(), 42);
        assert_eq!(Seed::from(42u32).value(), 42);
    }

    #[test]
    fn same_text_same_value() {
        assert_eq!(Seed::from("hello").value(), Seed::from("hello").value());
    }

    #[test]
    fn different_text_different_value() {
        assert_ne!(Seed::from("hello").value(), Seed::from("world").value());
    }

    #[test]
    fn text_hash_is_stable() {
        // Pinned so a hash change can never slip in silently; every
        // saved textual seed depends on this exact mapping.
        assert_eq!(hash_text(""), 0);
        assert_eq!(hash_text("a"), 97);
        assert_eq!(hash_text("ab"), 97 * 31 + 98);
    }

    #[test]
    fn from_time_is_nonzero() {
        assert_ne!(Seed::from_time(), 0);
    }
}
