//! Denylist rule - rejects passwords containing known-weak substrings.

use crate::denylist::is_denylisted;

/// Checks that the candidate contains no denylisted substring.
pub fn passes_denylist(candidate: &str) -> bool {
    !is_denylisted(candidate)
}
