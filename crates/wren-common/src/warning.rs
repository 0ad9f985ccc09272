//! De-duplicated diagnostics.
//!
//! Tools built on Wren report recoverable problems through [`warn_once`].
//! Each distinct message is forwarded to the [`log`] facade a single time, so
//! a document with the same error on every line does not flood the log.
//!
//! The set of seen messages lives for the whole process. Callers pass keys
//! drawn from a small fixed vocabulary (an error code, not an offset).

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already logged.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Log a warning for `component` the first time `message` is seen.
///
/// Returns `true` if the message was new and has been logged.
///
/// # Example
/// ```
/// use wren_common::warning::{clear_warnings, warn_once};
///
/// clear_warnings();
/// assert!(warn_once("HTML Tokenizer", "eof-in-tag"));
/// assert!(!warn_once("HTML Tokenizer", "eof-in-tag"));
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let is_new = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if is_new {
        log::warn!(target: "wren", "[{component}] {message}");
    }
    is_new
}

/// Forget every recorded warning (call before processing a new document).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
