//! Random password generator.
//!
//! Draws characters independently and uniformly from a fixed pool. The
//! source is the thread-local PRNG, which is not suitable for
//! security-sensitive secret generation; swap in a CSPRNG before using the
//! output as a real credential.

use rand::Rng;

/// Length used when no explicit length is requested.
pub const DEFAULT_GENERATED_LENGTH: usize = 10;

/// Shorter requests are clamped up to this floor.
pub const MIN_GENERATED_LENGTH: usize = 10;

/// The fixed character pool: ASCII letters, digits and `!@#$%^&*()`.
pub const POOL: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                          abcdefghijklmnopqrstuvwxyz\
                          0123456789!@#$%^&*()";

/// Generates a random password of the given length.
///
/// Lengths below [`MIN_GENERATED_LENGTH`] are clamped up to it. Each
/// character is drawn independently, so there is no class-coverage
/// guarantee; a generated password could in principle fail the evaluator's
/// own rules.
pub fn generate(length: usize) -> String {
    let length = length.max(MIN_GENERATED_LENGTH);
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..POOL.len());
            POOL[idx] as char
        })
        .collect()
}

/// Generates a password of [`DEFAULT_GENERATED_LENGTH`].
pub fn generate_default() -> String {
    generate(DEFAULT_GENERATED_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_request_clamped_to_floor() {
        assert_eq!(generate(5).chars().count(), 10);
        assert_eq!(generate(0).chars().count(), 10);
    }

    #[test]
    fn test_requested_length_honored_above_floor() {
        assert_eq!(generate(15).chars().count(), 15);
        assert_eq!(generate(32).chars().count(), 32);
    }

    #[test]
    fn test_default_length() {
        assert_eq!(generate_default().chars().count(), DEFAULT_GENERATED_LENGTH);
    }

    #[test]
    fn test_every_char_drawn_from_pool() {
        for _ in 0..20 {
            let pwd = generate(24);
            for c in pwd.chars() {
                assert!(
                    POOL.contains(&(c as u8)),
                    "character '{c}' not in the fixed pool"
                );
            }
        }
    }

    #[test]
    fn test_pool_has_no_whitespace() {
        assert!(!POOL.iter().any(|b| b.is_ascii_whitespace()));
        assert_eq!(POOL.len(), 26 + 26 + 10 + 10);
    }
}
