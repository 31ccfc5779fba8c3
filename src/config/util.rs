//! Configuration utility functions.

use crate::config::{ConfigDiagnostics, FieldPath, Rule};

/// Check that a string is a well-formed absolute URL with an http(s)
/// scheme and a host, reporting a diagnostic against `field` otherwise.
///
/// Uses the `url` crate for strict parsing, so port numbers, auth info,
/// query strings and fragments are all handled.
pub(crate) fn check_absolute_url(url_str: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    match url::Url::parse(url_str) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    Rule::MalformedUrl,
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    "use format like https://example.com",
                );
            } else if parsed.host_str().is_none() {
                diag.error_with_hint(
                    Rule::MalformedUrl,
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                Rule::MalformedUrl,
                field,
                format!("invalid URL '{url_str}': {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Like [`check_absolute_url`] but for optional fields where an absent or
/// empty value is the documented "no URL" state.
pub(crate) fn check_optional_url(
    url_str: Option<&str>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if let Some(url_str) = url_str
        && !url_str.is_empty()
    {
        check_absolute_url(url_str, field, diag);
    }
}

/// Returns true if `value` is an absolute URL (has a scheme).
///
/// # Examples
/// ```ignore
/// has_url_scheme("https://example.com/a.png") -> true
/// has_url_scheme("/avatar.png")               -> false
/// has_url_scheme("avatar.png")                -> false
/// ```
pub(crate) fn has_url_scheme(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

// ============================================================================
// tests
// ============================================================================
