//! Redirect target validation.
//!
//! Targets must be absolute HTTP(S) URLs. ASCII input is stored exactly as
//! given, so a resolved redirect returns the very string that was registered.
//! Non-ASCII input (IDN hosts, unencoded paths) is stored in its serialized
//! form, which punycodes the host and percent-encodes the rest so the target
//! is always a valid `Location` header value.

use url::Url;

/// Longest accepted target, in bytes.
pub const MAX_TARGET_LENGTH: usize = 2048;

/// Errors that can occur during target validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is required")]
    Empty,

    #[error("URL must be at most 2048 characters")]
    TooLong,

    #[error("URL must not contain whitespace or control characters")]
    IllegalCharacters,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must be absolute, in the form scheme://host")]
    NotAbsolute,
}

/// Validates a redirect target and returns the string to persist.
///
/// # Rules
///
/// 1. Not empty, at most [`MAX_TARGET_LENGTH`] bytes
/// 2. No whitespace or control characters anywhere
/// 3. Parses as an absolute URL
/// 4. Scheme is `http` or `https` (rejects `javascript:`, `data:`, `file:`, ...)
/// 5. Has a host
/// 6. Written as `scheme://host...` with no backslashes, so the stored string
///    is absolute exactly as given and not only after the parser repairs it
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that is violated.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     validate_target("https://example.com/a").unwrap(),
///     "https://example.com/a"
/// );
/// assert!(validate_target("not-a-url").is_err());
/// ```
pub fn validate_target(input: &str) -> Result<String, UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.len() > MAX_TARGET_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    let after_scheme = input.get(url.scheme().len()..).unwrap_or_default();
    if !after_scheme.starts_with("://") || input.contains('\\') {
        return Err(UrlValidationError::NotAbsolute);
    }

    if input.is_ascii() {
        Ok(input.to_string())
    } else {
        Ok(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url_verbatim() {
        assert_eq!(
            validate_target("https://example.com/a").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_keeps_ascii_input_unnormalized() {
        assert_eq!(
            validate_target("HTTPS://Example.COM:443").unwrap(),
            "HTTPS://Example.COM:443"
        );
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        let url = "http://example.com/search?q=rust&lang=en#results";
        assert_eq!(validate_target(url).unwrap(), url);
    }

    #[test]
    fn test_rejects_scheme_without_slashes() {
        assert_eq!(
            validate_target("http:example.com"),
            Err(UrlValidationError::NotAbsolute)
        );
        assert_eq!(
            validate_target("https:/example.com/a"),
            Err(UrlValidationError::NotAbsolute)
        );
    }

    #[test]
    fn test_rejects_backslashes() {
        assert_eq!(
            validate_target("https:\\\\evil.example"),
            Err(UrlValidationError::NotAbsolute)
        );
        assert_eq!(
            validate_target("https://example.com\\path"),
            Err(UrlValidationError::NotAbsolute)
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_target(""), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_plain_word() {
        assert!(matches!(
            validate_target("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative_path() {
        assert!(matches!(
            validate_target("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert_eq!(
            validate_target(" https://example.com"),
            Err(UrlValidationError::IllegalCharacters)
        );
        assert_eq!(
            validate_target("https://example.com/a b"),
            Err(UrlValidationError::IllegalCharacters)
        );
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in [
            "javascript:alert(1)",
            "data:text/html,hi",
            "file:///etc/passwd",
            "ftp://example.com",
        ] {
            assert_eq!(
                validate_target(input),
                Err(UrlValidationError::UnsupportedProtocol),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_too_long() {
        let input = format!("https://example.com/{}", "a".repeat(MAX_TARGET_LENGTH));
        assert_eq!(validate_target(&input), Err(UrlValidationError::TooLong));
    }

    #[test]
    fn test_serializes_non_ascii_target() {
        let stored = validate_target("https://bücher.example/straße").unwrap();
        assert!(stored.is_ascii());
        assert!(stored.starts_with("https://xn--bcher-kva.example/"));
    }
}
