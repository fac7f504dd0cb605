//! Render-ready check reports.
//!
//! The original tool wired evaluation results straight into shared widget
//! state. Here the front end instead calls [`check_password`] with the
//! submitted text and gets back everything it needs to render, plus any
//! logging failure as a side note.

use secrecy::SecretString;

use crate::evaluator::evaluate;
use crate::logger::{AttemptLogger, LogError};
use crate::verdict::Rating;

/// Everything a display layer needs for one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub accepted: bool,
    pub message: String,
    pub rating: Rating,
    /// Strength gauge fill, in percent (Weak 25, Medium 50, Strong 75).
    pub gauge_percent: u8,
}

/// A check report together with the outcome of the log write.
///
/// A failed log write never discards the verdict already computed; it is
/// surfaced here for the caller to report.
#[derive(Debug)]
pub struct CheckOutcome {
    pub report: CheckReport,
    pub log_error: Option<LogError>,
}

/// Evaluates a submitted password and records the attempt.
pub fn check_password(password: &SecretString, logger: &AttemptLogger) -> CheckOutcome {
    let verdict = evaluate(password);
    let log_error = logger.log_attempt(password, &verdict).err();

    CheckOutcome {
        report: CheckReport {
            accepted: verdict.accepted,
            message: verdict.message(),
            rating: verdict.rating,
            gauge_percent: verdict.rating.gauge_percent(),
        },
        log_error,
    }
}
