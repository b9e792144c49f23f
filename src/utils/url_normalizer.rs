//! URL normalization and validation.
//!
//! Normalization only guarantees a scheme prefix; the URL is otherwise stored
//! exactly as submitted. Validation is a separate step so callers decide how
//! to report a rejection.

use url::Url;

/// Prepends `https://` unless the input already starts with `http://` or
/// `https://`. Surrounding whitespace is trimmed.
///
/// Idempotent: `normalize(&normalize(u)) == normalize(u)`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize("example.com"), "https://example.com");
/// assert_eq!(normalize("http://example.com"), "http://example.com");
/// ```
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Returns true if `url` parses and has a non-empty host.
///
/// Control characters are rejected up front: the parser drops tabs and
/// newlines silently, but the stored string must still fit a `Location` header.
pub fn is_valid(url: &str) -> bool {
    if url.chars().any(char::is_control) {
        return false;
    }

    match Url::parse(url) {
        Ok(parsed) => parsed.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}
