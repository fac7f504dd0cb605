//! Password evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::rules::{self, RULE_SET};
use crate::verdict::{Rating, Score, Verdict};

/// Evaluates a password against the fixed rule set and returns a verdict.
///
/// Every rule is applied, in order, without short-circuiting; the verdict
/// collects one feedback phrase per violated rule. Acceptance and rating are
/// independent: the rating comes from [`complexity_score`], which uses its
/// own thresholds.
///
/// Total over all inputs - an empty string fails every length and class
/// check and rates `Weak`, it never errors.
pub fn evaluate(password: &SecretString) -> Verdict {
    let pwd = password.expose_secret();

    let mut violations = Vec::new();
    for rule in RULE_SET {
        if !(rule.check)(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("rule violated: {}", rule.name);
            violations.push(rule.feedback.to_string());
        }
    }

    let score = complexity_score(password);
    let rating = Rating::from_score(score);

    Verdict {
        accepted: violations.is_empty(),
        violations,
        rating,
        score,
    }
}

/// Computes the 0-6 complexity score.
///
/// Length contributes +2 at 12 characters, +1 at 8; each present character
/// class (uppercase, lowercase, digit, special) contributes +1.
pub fn complexity_score(password: &SecretString) -> Score {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();

    let mut score: u8 = 0;
    if len >= 12 {
        score += 2;
    } else if len >= 8 {
        score += 1;
    }
    if rules::has_uppercase(pwd) {
        score += 1;
    }
    if rules::has_lowercase(pwd) {
        score += 1;
    }
    if rules::has_digit(pwd) {
        score += 1;
    }
    if rules::has_special(pwd) {
        score += 1;
    }

    Score::new(score)
}
