//! Character-class rules - uppercase, lowercase, digits, special characters.

/// The fixed special-character set recognized by the evaluator.
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks if the candidate contains at least one uppercase ASCII letter.
pub fn has_uppercase(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks if the candidate contains at least one lowercase ASCII letter.
pub fn has_lowercase(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks if the candidate contains at least one ASCII digit.
pub fn has_digit(candidate: &str) -> bool {
    candidate.chars().any(|c| c.is_ascii_digit())
}

/// Checks if the candidate contains at least one character from
/// [`SPECIAL_CHARS`]. Other punctuation does not count.
pub fn has_special(candidate: &str) -> bool {
    candidate.chars().any(|c| SPECIAL_CHARS.contains(c))
}
