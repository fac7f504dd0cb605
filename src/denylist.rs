//! Denylist management module
//!
//! Holds the built-in known-weak substrings and optional extra entries
//! loaded from an external file.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Substrings rejected regardless of other rule compliance.
/// Matching is case-sensitive.
const BUILTIN_DENYLIST: &[&str] = &["123456", "password", "ABCDE1234", "abc123"];

static EXTRA_ENTRIES: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Returns the extra-denylist file path.
///
/// Priority:
/// 1. Environment variable `PWD_DENYLIST_PATH`
/// 2. Default path `./assets/denylist.txt`
pub fn get_denylist_path() -> PathBuf {
    std::env::var("PWD_DENYLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/denylist.txt"))
}

/// Loads extra denylist entries from an external file.
///
/// The built-in entries always apply; calling this is optional and only
/// extends the list. Idempotent: after the first successful load, later
/// calls return the loaded count without touching the file.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_denylist() -> Result<usize, DenylistError> {
    let path = get_denylist_path();
    init_denylist_from_path(&path)
}

/// Loads extra denylist entries from a specific file path.
///
/// Use this when the path is known directly instead of relying on the
/// environment variable. Entries are trimmed but otherwise kept verbatim,
/// since matching is case-sensitive.
pub fn init_denylist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, DenylistError> {
    {
        let guard = EXTRA_ENTRIES.read().unwrap();
        if let Some(entries) = guard.as_ref() {
            return Ok(entries.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: FileNotFound {}", path.display());
        return Err(DenylistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Denylist initialization FAILED: Empty file {}", path.display());
        return Err(DenylistError::EmptyFile);
    }

    let entries: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect();

    let count = entries.len();
    {
        let mut guard = EXTRA_ENTRIES.write().unwrap();
        *guard = Some(entries);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Denylist extended: {} entries from {:?}", count, path);

    Ok(count)
}

/// Returns the full denylist: built-in entries plus any loaded extras.
pub fn get_denylist() -> Vec<String> {
    let mut entries: Vec<String> = BUILTIN_DENYLIST.iter().map(|s| s.to_string()).collect();
    let guard = EXTRA_ENTRIES.read().unwrap();
    if let Some(extras) = guard.as_ref() {
        entries.extend(extras.iter().cloned());
    }
    entries
}

/// Checks if a candidate contains any denylisted substring.
///
/// Containment is case-sensitive: `"mypassword123"` matches the entry
/// `"password"`, `"MyPassword123"` does not.
pub fn is_denylisted(candidate: &str) -> bool {
    if BUILTIN_DENYLIST.iter().any(|p| candidate.contains(p)) {
        return true;
    }
    let guard = EXTRA_ENTRIES.read().unwrap();
    guard
        .as_ref()
        .map(|extras| extras.iter().any(|p| candidate.contains(p)))
        .unwrap_or(false)
}

/// Resets the loaded extra entries for testing purposes.
#[cfg(test)]
pub fn reset_denylist_for_testing() {
    let mut guard = EXTRA_ENTRIES.write().unwrap();
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_default() {
        remove_env("PWD_DENYLIST_PATH");

        let path = get_denylist_path();
        assert_eq!(path, PathBuf::from("./assets/denylist.txt"));
    }

    #[test]
    #[serial]
    fn test_get_denylist_path_from_env() {
        let custom_path = "/custom/path/denylist.txt";
        set_env("PWD_DENYLIST_PATH", custom_path);

        let path = get_denylist_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_file_not_found() {
        reset_denylist_for_testing();
        set_env("PWD_DENYLIST_PATH", "/nonexistent/path/denylist.txt");

        let result = init_denylist();
        assert!(matches!(result, Err(DenylistError::FileNotFound(_))));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_empty_file() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "").expect("Failed to write empty content");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let result = init_denylist();
        assert!(matches!(result, Err(DenylistError::EmptyFile)));

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_init_denylist_success() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        writeln!(temp_file, "letmein").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let result = init_denylist();
        assert_eq!(result.unwrap(), 2);

        remove_env("PWD_DENYLIST_PATH");
    }

    #[test]
    #[serial]
    fn test_builtin_entries_always_apply() {
        reset_denylist_for_testing();

        // No file loaded; the built-in list still matches
        assert!(is_denylisted("123456"));
        assert!(is_denylisted("xx123456xx"));
        assert!(is_denylisted("abc123def"));
        assert!(!is_denylisted("unrelated"));
    }

    #[test]
    #[serial]
    fn test_is_denylisted_case_sensitive() {
        reset_denylist_for_testing();

        assert!(is_denylisted("mypassword123"));
        assert!(!is_denylisted("MyPassword123"));
        assert!(is_denylisted("ABCDE1234"));
        assert!(!is_denylisted("abcde1234"));
    }

    #[test]
    #[serial]
    fn test_extra_entries_extend_builtin() {
        reset_denylist_for_testing();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "qwerty").expect("Failed to write");

        let path = temp_file.path().to_str().unwrap();
        set_env("PWD_DENYLIST_PATH", path);

        let _ = init_denylist();

        assert!(is_denylisted("xqwertyx"));
        assert!(is_denylisted("password"));
        assert!(get_denylist().contains(&"qwerty".to_string()));

        remove_env("PWD_DENYLIST_PATH");
    }
}
