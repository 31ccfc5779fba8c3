//! `[[site.favicon]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[site.favicon]]
//! src = "/favicon/icon-light.png"
//! theme = "light"
//! sizes = "32x32"
//!
//! [[site.favicon]]
//! src = "/favicon/icon-dark.png"
//! theme = "dark"
//! sizes = "32x32"
//! ```
//!
//! An empty set means "use the theme's default favicon".

use crate::config::{ConfigDiagnostics, FieldPath, Rule};
use serde::{Deserialize, Serialize};

/// A single favicon entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FaviconConfig {
    /// Favicon path, relative to the public directory.
    pub src: String,

    /// Set only when light and dark mode use different favicons.
    pub theme: Option<FaviconTheme>,

    /// Icon dimensions as `<W>x<H>`, e.g. `32x32`. Set only when serving
    /// favicons of different sizes.
    pub sizes: Option<String>,
}

impl FaviconConfig {
    /// Validate one entry. `index` identifies the entry in diagnostics.
    pub fn validate(&self, index: usize, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.src.is_empty() {
            diag.error(
                Rule::MissingRequiredField,
                field,
                format!("entry {index}: src must not be empty"),
            );
        }

        if let Some(sizes) = &self.sizes
            && !is_dimensions(sizes)
        {
            diag.error_with_hint(
                Rule::MalformedDimensions,
                field,
                format!("entry {index}: sizes '{sizes}' does not match <W>x<H>"),
                "use a value like \"32x32\"",
            );
        }
    }
}

/// Color-scheme variant a favicon applies to (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaviconTheme {
    Light,
    Dark,
}

/// Returns true for strings of the form `<W>x<H>` with positive integers.
fn is_dimensions(value: &str) -> bool {
    let Some((w, h)) = value.split_once('x') else {
        return false;
    };
    matches!(
        (w.parse::<u32>(), h.parse::<u32>()),
        (Ok(w), Ok(h)) if w > 0 && h > 0
    )
}

// ============================================================================
// tests
// ============================================================================
