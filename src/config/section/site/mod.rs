//! `[site]` section configuration.
//!
//! Site identity and appearance: title, language, theme color, banner,
//! table of contents, and favicons.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "My Blog"
//! subtitle = "thoughts, mostly"
//! lang = "en"
//!
//! [site.theme_color]
//! hue = 250
//! fixed = false
//!
//! [site.banner]
//! enable = true
//! position = "center"
//! list = ["https://example.com/banner-1.webp"]
//!
//! [site.banner.credit]
//! enable = true
//! text = "Artist Name"
//! url = "https://example.com/artwork"
//!
//! [site.toc]
//! enable = true
//! depth = 2
//!
//! [[site.favicon]]
//! src = "/favicon/icon-light.png"
//! theme = "light"
//! sizes = "32x32"
//! ```

mod banner;
mod favicon;

pub use banner::{BannerConfig, BannerCreditConfig, BannerPosition};
pub use favicon::{FaviconConfig, FaviconTheme};

use crate::config::{ConfigDiagnostics, FieldPath, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Site identity and appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the header and browser tab.
    pub title: String,

    /// Subtitle, shown next to the title. Empty means no subtitle.
    pub subtitle: String,

    /// UI language. One of `en`, `zh_CN`, `zh_TW`, `ja`, `ko`.
    pub lang: Lang,

    /// Theme color settings.
    pub theme_color: ThemeColorConfig,

    /// Banner image settings.
    pub banner: BannerConfig,

    /// Table-of-contents settings for posts.
    pub toc: TocConfig,

    /// Favicon set. Leave empty to use the default favicon.
    pub favicon: Vec<FaviconConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            lang: Lang::En,
            theme_color: ThemeColorConfig::default(),
            banner: BannerConfig::default(),
            toc: TocConfig::default(),
            favicon: Vec::new(),
        }
    }
}

pub struct SiteFields {
    pub favicon: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteFields = SiteFields {
        favicon: FieldPath::new("site.favicon"),
    };

    /// Validate the section, fields in declaration order.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.theme_color.validate(diag);
        self.banner.validate(diag);
        self.toc.validate(diag);

        for (i, favicon) in self.favicon.iter().enumerate() {
            favicon.validate(i, Self::FIELDS.favicon, diag);
        }
    }
}

// ============================================================================
// Lang
// ============================================================================

/// Supported UI languages (closed set).
///
/// Tags match the theme's translation files, so an unsupported tag is a
/// deserialization error rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lang {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh_CN")]
    ZhCn,
    #[serde(rename = "zh_TW")]
    ZhTw,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
}

impl Lang {
    /// The tag as written in `hoshi.toml`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ThemeColorConfig
// ============================================================================

/// Theme color settings.
///
/// The hue drives the theme's color-generation scheme; it is not a literal
/// color value. The renderer maps it to actual colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeColorConfig {
    /// Default hue for the theme color, 0 to 360.
    /// e.g. red: 0, teal: 200, cyan: 250, pink: 345.
    pub hue: i32,

    /// Hide the theme color picker from visitors.
    pub fixed: bool,
}

impl Default for ThemeColorConfig {
    fn default() -> Self {
        Self {
            hue: 250,
            fixed: false,
        }
    }
}

pub struct ThemeColorFields {
    pub hue: FieldPath,
}

impl ThemeColorConfig {
    pub const FIELDS: ThemeColorFields = ThemeColorFields {
        hue: FieldPath::new("site.theme_color.hue"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(0..=360).contains(&self.hue) {
            diag.error_with_hint(
                Rule::OutOfRange,
                Self::FIELDS.hue,
                format!("hue = {} not in [0, 360]", self.hue),
                "pick a hue on the color wheel, e.g. 250 for cyan",
            );
        }
    }
}

// ============================================================================
// TocConfig
// ============================================================================

/// Table-of-contents settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TocConfig {
    /// Display the table of contents on the right side of the post.
    pub enable: bool,

    /// Maximum heading depth to show in the table, 1 to 3.
    pub depth: u8,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enable: true,
            depth: 2,
        }
    }
}

pub struct TocFields {
    pub depth: FieldPath,
}

impl TocConfig {
    pub const FIELDS: TocFields = TocFields {
        depth: FieldPath::new("site.toc.depth"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(1..=3).contains(&self.depth) {
            diag.error_with_hint(
                Rule::OutOfRange,
                Self::FIELDS.depth,
                format!("depth = {} not in [1, 3]", self.depth),
                "use 1, 2 or 3",
            );
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

    #[test]
    fn test_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.subtitle, "");
        assert_eq!(config.site.lang, Lang::En);
        assert_eq!(config.site.theme_color.hue, 250);
        assert!(!config.site.theme_color.fixed);
        assert!(config.site.toc.enable);
        assert_eq!(config.site.toc.depth, 2);
        assert!(config.site.favicon.is_empty());
    }

    #[test]
    fn test_lang_supported_set() {
        for (tag, lang) in [
            ("en", Lang::En),
            ("zh_CN", Lang::ZhCn),
            ("zh_TW", Lang::ZhTw),
            ("ja", Lang::Ja),
            ("ko", Lang::Ko),
        ] {
            let config = test_parse_config(&format!("lang = \"{tag}\""));
            assert_eq!(config.site.lang, lang);
            assert_eq!(lang.as_str(), tag);
        }
    }

    #[test]
    fn test_lang_rejects_unsupported_tag() {
        // "fr" is not in the translation set; closed enum rejects it at parse
        let result = crate::config::ThemeConfig::from_str("[site]\nlang = \"fr\"");
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("parsing"), "{err}");
    }

    #[test]
    fn test_hue_bounds() {
        for hue in [0, 1, 250, 359, 360] {
            let config = test_parse_config(&format!("[site.theme_color]\nhue = {hue}"));
            let mut diag = ConfigDiagnostics::new();
            config.site.validate(&mut diag);
            assert!(diag.is_empty(), "hue = {hue} should be valid");
        }

        for hue in [-1, 361, 500] {
            let config = test_parse_config(&format!("[site.theme_color]\nhue = {hue}"));
            let mut diag = ConfigDiagnostics::new();
            config.site.validate(&mut diag);
            assert_eq!(diag.len(), 1, "hue = {hue} should be rejected");
            assert_eq!(diag.errors()[0].rule, Rule::OutOfRange);
            assert_eq!(diag.errors()[0].field.as_str(), "site.theme_color.hue");
        }
    }

    #[test]
    fn test_toc_depth_bounds() {
        for depth in [1, 2, 3] {
            let config = test_parse_config(&format!("[site.toc]\ndepth = {depth}"));
            let mut diag = ConfigDiagnostics::new();
            config.site.validate(&mut diag);
            assert!(diag.is_empty(), "depth = {depth} should be valid");
        }

        for depth in [0, 4, 9] {
            let config = test_parse_config(&format!("[site.toc]\ndepth = {depth}"));
            let mut diag = ConfigDiagnostics::new();
            config.site.validate(&mut diag);
            assert_eq!(diag.len(), 1, "depth = {depth} should be rejected");
            assert_eq!(diag.errors()[0].rule, Rule::OutOfRange);
            assert_eq!(diag.errors()[0].field.as_str(), "site.toc.depth");
        }
    }

    #[test]
    fn test_theme_color_fixed_flag() {
        let config = test_parse_config("[site.theme_color]\nhue = 345\nfixed = true");
        assert_eq!(config.site.theme_color.hue, 345);
        assert!(config.site.theme_color.fixed);
    }
}
