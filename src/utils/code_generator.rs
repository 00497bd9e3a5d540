//! Short identifier generation.
//!
//! Identifiers are drawn uniformly from the base62 alphabet (`[0-9A-Za-z]`).
//! At the default length of 8 that is 62^8 ≈ 2.18×10^14 combinations.
//! Generation does not guarantee uniqueness; the store's `create` does.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Shortest identifier length accepted by configuration (62^7 ≈ 3.5×10^12).
pub const MIN_ID_LENGTH: usize = 7;

/// Longest identifier length accepted by configuration and by lookups.
pub const MAX_ID_LENGTH: usize = 32;

/// Generates random base62 identifiers of a fixed length.
#[derive(Debug, Clone, Copy)]
pub struct IdGenerator {
    length: usize,
}

impl IdGenerator {
    /// Creates a generator producing identifiers of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Produces a fresh identifier from the thread-local CSPRNG.
    pub fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LENGTH)
    }
}

/// Returns true if `id` could have been produced by an [`IdGenerator`].
///
/// Lets lookups reject garbage without touching the store.
pub fn is_well_formed_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_ID_LENGTH && id.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_configured_length() {
        assert_eq!(IdGenerator::default().generate().len(), DEFAULT_ID_LENGTH);
        assert_eq!(IdGenerator::new(12).generate().len(), 12);
    }

    #[test]
    fn test_generate_base62_characters() {
        let generator = IdGenerator::default();
        for _ in 0..100 {
            let id = generator.generate();
            assert!(id.chars().all(|c| c.is_ascii_alphanumeric()), "{id}");
        }
    }

    #[test]
    fn test_generate_produces_unique_ids() {
        let generator = IdGenerator::default();
        let ids: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_generated_ids_are_well_formed() {
        let id = IdGenerator::default().generate();
        assert!(is_well_formed_id(&id));
    }

    #[test]
    fn test_well_formed_rejects_garbage() {
        assert!(!is_well_formed_id(""));
        assert!(!is_well_formed_id("abc-123"));
        assert!(!is_well_formed_id("abc 123"));
        assert!(!is_well_formed_id("../etc"));
        assert!(!is_well_formed_id(&"a".repeat(MAX_ID_LENGTH + 1)));
    }

    #[test]
    fn test_well_formed_accepts_legacy_lengths() {
        assert!(is_well_formed_id("abc1234"));
        assert!(is_well_formed_id("nonexistent"));
    }
}
