//! Attempt logger - append-only plain-text record of check attempts.
//!
//! Each attempt becomes one free-text line:
//!
//! ```text
//! 2026-08-23 10:14:02,123 - Password: '**********' - Result: Password is Strong! - Strength: Strong
//! ```
//!
//! The password field is masked by default. The original tool logged
//! passwords in cleartext; [`AttemptLogger::with_plaintext_passwords`]
//! restores that behavior for compatibility with legacy logs.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::verdict::Verdict;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to append to attempt log: {0}")]
    IoFailure(#[from] std::io::Error),
}

/// Appends timestamped check attempts to a plain-text file.
///
/// The file is opened per write in append mode and created on first use.
/// No rotation, no size bound.
pub struct AttemptLogger {
    path: PathBuf,
    log_plaintext: bool,
}

impl AttemptLogger {
    /// Creates a logger writing to `path`, with password masking on.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        AttemptLogger {
            path: path.as_ref().to_path_buf(),
            log_plaintext: false,
        }
    }

    /// Creates a logger from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_ATTEMPT_LOG_PATH`
    /// 2. Default path `./password_log.txt`
    pub fn from_env() -> Self {
        let path = std::env::var("PWD_ATTEMPT_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./password_log.txt"));
        Self::new(path)
    }

    /// Logs passwords in cleartext instead of masking them.
    pub fn with_plaintext_passwords(mut self) -> Self {
        self.log_plaintext = true;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one attempt record.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::IoFailure`] if the file cannot be opened or
    /// written. The verdict itself is unaffected; callers decide whether a
    /// failed write matters.
    pub fn log_attempt(&self, password: &SecretString, verdict: &Verdict) -> Result<(), LogError> {
        let pwd = password.expose_secret();
        let shown = if self.log_plaintext {
            pwd.to_string()
        } else {
            "*".repeat(pwd.chars().count())
        };

        let line = format!(
            "{} - Password: '{}' - Result: {} - Strength: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            shown,
            verdict.message(),
            verdict.rating,
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        #[cfg(feature = "tracing")]
        tracing::debug!("attempt logged to {:?}", self.path);

        Ok(())
    }
}
