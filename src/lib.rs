//! Password rule checking library
//!
//! This library evaluates candidate passwords against a fixed, ordered rule
//! set, rates them on a three-level strength scale, generates random
//! passwords, and appends check attempts to a plain-text log.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to extra denylist file
//!   (default: `./assets/denylist.txt`)
//! - `PWD_ATTEMPT_LOG_PATH`: Custom path to the attempt log
//!   (default: `./password_log.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_check::{evaluate, Rating};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Str0ng!Pass".to_string().into());
//! let verdict = evaluate(&password);
//!
//! assert!(verdict.accepted);
//! assert_eq!(verdict.message(), "Password is Strong!");
//! assert_eq!(verdict.rating, Rating::Strong);
//! ```

// Internal modules
mod denylist;
mod evaluator;
mod generator;
mod logger;
mod report;
mod rules;
mod verdict;

// Public API
pub use denylist::{
    DenylistError, get_denylist, init_denylist, init_denylist_from_path, is_denylisted,
};
pub use evaluator::{complexity_score, evaluate};
pub use generator::{DEFAULT_GENERATED_LENGTH, MIN_GENERATED_LENGTH, generate, generate_default};
pub use logger::{AttemptLogger, LogError};
pub use report::{CheckOutcome, CheckReport, check_password};
pub use verdict::{Rating, Score, Verdict};
