//! Length rule - checks password minimum length.

/// Minimum acceptable password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Checks if the candidate meets the minimum length.
///
/// Length is counted in characters, not bytes, so multi-byte input is not
/// penalized.
pub fn meets_min_length(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_LENGTH
}
