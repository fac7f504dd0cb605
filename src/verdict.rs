//! Verdict types - rating, score and the per-evaluation result.

use std::fmt;

/// Three-level strength rating derived from the 0-6 complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rating {
    Weak,
    Medium,
    Strong,
}

impl Rating {
    /// Maps a complexity score to a rating.
    ///
    /// Thresholds: 0-2 -> `Weak`, 3-4 -> `Medium`, 5-6 -> `Strong`.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=2 => Rating::Weak,
            3..=4 => Rating::Medium,
            _ => Rating::Strong,
        }
    }

    /// Fill level for a strength gauge, in percent.
    pub fn gauge_percent(&self) -> u8 {
        match self {
            Rating::Weak => 25,
            Rating::Medium => 50,
            Rating::Strong => 75,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Weak => write!(f, "Weak"),
            Rating::Medium => write!(f, "Medium"),
            Rating::Strong => write!(f, "Strong"),
        }
    }
}

/// Complexity score in the range 0-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 6;

    /// Creates a score, capping at [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Score(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Result of a single password evaluation.
///
/// Produced fresh per call and never mutated afterwards. `accepted` is true
/// iff `violations` is empty; `rating` uses its own thresholds, so a rejected
/// password can still rate `Medium` or `Strong`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub violations: Vec<String>,
    pub rating: Rating,
    pub score: Score,
}

impl Verdict {
    /// Human-readable feedback for this evaluation.
    ///
    /// `"Password is Strong!"` when accepted, otherwise `"Password "`
    /// followed by the violated-rule phrases joined with `", "`.
    pub fn message(&self) -> String {
        if self.accepted {
            "Password is Strong!".to_string()
        } else {
            format!("Password {}", self.violations.join(", "))
        }
    }
}
