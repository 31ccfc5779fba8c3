//! `[license]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [license]
//! enable = true
//! name = "CC BY-NC-SA 4.0"
//! url = "https://creativecommons.org/licenses/by-nc-sa/4.0/"
//! ```

use crate::config::util::check_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// License block shown under each post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LicenseConfig {
    /// Display the license block.
    pub enable: bool,

    /// License name, e.g. "CC BY-NC-SA 4.0".
    pub name: String,

    /// Link to the license text.
    pub url: String,
}

impl Default for LicenseConfig {
    fn default() -> Self {
        Self {
            enable: true,
            name: "CC BY-NC-SA 4.0".into(),
            url: "https://creativecommons.org/licenses/by-nc-sa/4.0/".into(),
        }
    }
}

pub struct LicenseFields {
    pub url: FieldPath,
}

impl LicenseConfig {
    pub const FIELDS: LicenseFields = LicenseFields {
        url: FieldPath::new("license.url"),
    };

    /// Validate the section. With the block disabled, `name` and `url` are
    /// never rendered and pass unchecked.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable {
            check_absolute_url(&self.url, Self::FIELDS.url, diag);
        }
    }
}

// ============================================================================
// tests
// ============================================================================
