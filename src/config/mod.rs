//! Theme configuration management for `hoshi.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] (theme_color, banner, toc, favicon)
//! │   ├── navbar     # [navbar]
//! │   ├── profile    # [profile]
//! │   └── license    # [license]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, Rule, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # ThemeConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Identity, language, theme color, banner, toc   |
//! | `[navbar]`  | Navigation links (presets and custom)          |
//! | `[profile]` | Author avatar, name, bio, social links         |
//! | `[license]` | License block under posts                      |
//!
//! The document is accepted or rejected as a unit: parsing rejects unknown
//! keys and closed-set violations, then [`ThemeConfig::validate`] walks
//! the sections in a fixed order (site → navbar → profile → license) and
//! collects every remaining invariant violation.

pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    AvatarSource, BannerConfig, BannerCreditConfig, BannerPosition, CustomLink, FaviconConfig,
    FaviconTheme, Lang, LicenseConfig, LinkPreset, NavBarConfig, NavBarLink, PresetLink,
    ProfileConfig, ProfileLink, SiteConfig, ThemeColorConfig, TocConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, Rule};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hoshi.toml.
///
/// All four sections are always present; `#[serde(default)]` fills in the
/// theme defaults for anything the document omits. After a successful
/// [`load`](Self::load) the value is complete and validated — hand
/// consumers a `&ThemeConfig` and never mutate it again.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// Site identity and appearance.
    pub site: SiteConfig,

    /// Navigation bar links.
    pub navbar: NavBarConfig,

    /// Author profile card.
    pub profile: ProfileConfig,

    /// License block under posts.
    pub license: LicenseConfig,
}

impl ThemeConfig {
    /// Load and validate configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from TOML content.
    ///
    /// Unknown keys anywhere in the document are an error: a typo like
    /// `them_color` silently falling back to defaults would be worse than
    /// failing the build.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;

        if !ignored.is_empty() {
            return Err(ConfigError::UnknownFields(ignored));
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Validate every invariant the type system could not express.
    ///
    /// Collects all violations and returns them at once, traversing
    /// site → navbar → profile → license with fields in declaration
    /// order, so diagnostics are deterministic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.navbar.validate(&mut diag);
        self.profile.validate(&mut diag);
        self.license.validate(&mut diag);

        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with a minimal `[site]` section plus `extra` appended.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> ThemeConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = ThemeConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
