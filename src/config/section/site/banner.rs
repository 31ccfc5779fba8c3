//! `[site.banner]` configuration.
//!
//! # Example
//!
//! ```toml
//! [site.banner]
//! enable = true
//! position = "center"
//! list = [
//!     "https://example.com/banner-1.webp",
//!     "https://example.com/banner-2.webp",
//! ]
//!
//! [site.banner.credit]
//! enable = true
//! text = "Artist Name"
//! url = "https://example.com/artwork"
//! ```
//!
//! With more than one entry in `list`, the renderer rotates through the
//! images in order.

use crate::config::util::{check_absolute_url, check_optional_url};
use crate::config::{ConfigDiagnostics, FieldPath, Rule};
use serde::{Deserialize, Serialize};

/// Banner image settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BannerConfig {
    /// Show the banner at the top of pages.
    pub enable: bool,

    /// Vertical crop anchor, equivalent to CSS `object-position`.
    pub position: BannerPosition,

    /// Attribution for the banner artwork.
    pub credit: BannerCreditConfig,

    /// Banner image URLs, in display order. Must be non-empty when the
    /// banner is enabled.
    pub list: Vec<String>,
}

pub struct BannerFields {
    pub list: FieldPath,
}

impl BannerConfig {
    pub const FIELDS: BannerFields = BannerFields {
        list: FieldPath::new("site.banner.list"),
    };

    /// Validate the banner settings.
    ///
    /// `enable` is authoritative: with the banner disabled, `list` and
    /// `credit` contents are left unchecked.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.enable {
            return;
        }

        if self.list.is_empty() {
            diag.error_with_hint(
                Rule::MissingRequiredField,
                Self::FIELDS.list,
                "banner is enabled but list is empty",
                "add at least one image URL, or set site.banner.enable = false",
            );
        }

        for (i, image) in self.list.iter().enumerate() {
            let mut image_diag = ConfigDiagnostics::new();
            check_absolute_url(image, Self::FIELDS.list, &mut image_diag);
            for err in image_diag.errors() {
                diag.error(err.rule, err.field, format!("entry {i}: {}", err.message));
            }
        }

        self.credit.validate(diag);
    }
}

/// Vertical position of the banner crop (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Attribution for the banner artwork.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BannerCreditConfig {
    /// Display the credit text over the banner.
    pub enable: bool,

    /// Credit text, e.g. the artist's name.
    pub text: String,

    /// Link to the original artwork or the artist's page.
    /// Absent (or empty) means the credit is text-only.
    pub url: Option<String>,
}

pub struct BannerCreditFields {
    pub url: FieldPath,
}

impl BannerCreditConfig {
    pub const FIELDS: BannerCreditFields = BannerCreditFields {
        url: FieldPath::new("site.banner.credit.url"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable {
            check_optional_url(self.url.as_deref(), Self::FIELDS.url, diag);
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(config: &crate::config::ThemeConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        config.site.banner.validate(&mut diag);
        diag
    }

    #[test]
    fn test_banner_disabled_skips_list_checks() {
        // enable is authoritative: disabled banner with empty list is fine
        let config = test_parse_config("[site.banner]\nenable = false");
        assert!(validate(&config).is_empty());

        // ...and so are unparseable list entries
        let config =
            test_parse_config("[site.banner]\nenable = false\nlist = [\"not a url\"]");
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_banner_enabled_requires_list() {
        let config = test_parse_config("[site.banner]\nenable = true");
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].rule, Rule::MissingRequiredField);
        assert_eq!(diag.errors()[0].field.as_str(), "site.banner.list");
    }

    #[test]
    fn test_banner_list_entries_must_be_urls() {
        let config = test_parse_config(
            "[site.banner]\nenable = true\nlist = [\"https://example.com/a.webp\", \"b.webp\"]",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].rule, Rule::MalformedUrl);
        assert!(diag.errors()[0].message.contains("entry 1"));
    }

    #[test]
    fn test_banner_position_closed_set() {
        for (tag, position) in [
            ("top", BannerPosition::Top),
            ("center", BannerPosition::Center),
            ("bottom", BannerPosition::Bottom),
        ] {
            let config = test_parse_config(&format!("[site.banner]\nposition = \"{tag}\""));
            assert_eq!(config.site.banner.position, position);
        }

        // "left" is not a vertical anchor
        let result =
            crate::config::ThemeConfig::from_str("[site.banner]\nposition = \"left\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_credit_url_optional() {
        // Absent URL: text-only credit
        let config = test_parse_config(
            "[site.banner]\nenable = true\nlist = [\"https://example.com/a.webp\"]\n\
             [site.banner.credit]\nenable = true\ntext = \"Sakura Miku\"",
        );
        assert!(validate(&config).is_empty());
        assert_eq!(config.site.banner.credit.text, "Sakura Miku");
        assert_eq!(config.site.banner.credit.url, None);

        // Empty string is the documented "absent" sentinel
        let config = test_parse_config(
            "[site.banner]\nenable = true\nlist = [\"https://example.com/a.webp\"]\n\
             [site.banner.credit]\nenable = true\ntext = \"Sakura Miku\"\nurl = \"\"",
        );
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_credit_url_must_parse_when_present() {
        let config = test_parse_config(
            "[site.banner]\nenable = true\nlist = [\"https://example.com/a.webp\"]\n\
             [site.banner.credit]\nenable = true\ntext = \"x\"\nurl = \"not a url\"",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.banner.credit.url");
        assert_eq!(diag.errors()[0].rule, Rule::MalformedUrl);
    }
}
