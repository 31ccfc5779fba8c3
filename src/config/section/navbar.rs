//! `[navbar]` section configuration.
//!
//! Navigation entries are either presets (strings from a closed set, whose
//! name, url, and icon the theme fixes) or custom links written out in
//! full. Order in `links` is display order; duplicates are allowed.
//!
//! # Example
//!
//! ```toml
//! [navbar]
//! links = [
//!     "home",
//!     "archive",
//!     "about",
//!     { name = "GitHub", url = "https://github.com/example/", external = true },
//! ]
//! ```

use crate::config::util::check_absolute_url;
use crate::config::{ConfigDiagnostics, FieldPath, Rule};
use serde::{Deserialize, Serialize};

/// Navigation bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavBarConfig {
    /// Navigation entries, in display order.
    pub links: Vec<NavBarLink>,
}

impl Default for NavBarConfig {
    fn default() -> Self {
        Self {
            links: vec![
                NavBarLink::Preset(LinkPreset::Home),
                NavBarLink::Preset(LinkPreset::Archive),
                NavBarLink::Preset(LinkPreset::About),
            ],
        }
    }
}

pub struct NavBarFields {
    pub links: FieldPath,
}

impl NavBarConfig {
    pub const FIELDS: NavBarFields = NavBarFields {
        links: FieldPath::new("navbar.links"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, link) in self.links.iter().enumerate() {
            if let NavBarLink::Custom(link) = link {
                link.validate(i, Self::FIELDS.links, diag);
            }
        }
    }
}

// ============================================================================
// NavBarLink
// ============================================================================

/// A single navigation entry: preset reference or custom link.
///
/// Presets must stay before `Custom` for `#[serde(untagged)]`: a bare
/// string is tried as a preset tag first, a table deserializes as a custom
/// link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NavBarLink {
    Preset(LinkPreset),
    Custom(CustomLink),
}

/// Built-in navigation targets (closed set).
///
/// Tags outside this set fail deserialization; there is no free-text
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPreset {
    Home,
    Archive,
    About,
}

/// The fixed (name, url, icon) triple a preset stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetLink {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

impl LinkPreset {
    /// Resolve the preset. Pure lookup, no failure mode: the set is closed
    /// at the type level.
    pub const fn resolve(self) -> PresetLink {
        match self {
            Self::Home => PresetLink {
                name: "Home",
                url: "/",
                icon: "material-symbols:home-outline-rounded",
            },
            Self::Archive => PresetLink {
                name: "Archive",
                url: "/archive/",
                icon: "material-symbols:archive-outline-rounded",
            },
            Self::About => PresetLink {
                name: "About",
                url: "/about/",
                icon: "material-symbols:person-outline-rounded",
            },
        }
    }
}

/// A navigation link written out by the author.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomLink {
    /// Label shown in the navigation bar.
    pub name: String,

    /// Target. External links are absolute URLs; internal links are site
    /// paths without the base path, which the renderer prepends.
    pub url: String,

    /// Show an external-link icon and open in a new tab.
    #[serde(default)]
    pub external: bool,
}

impl CustomLink {
    fn validate(&self, index: usize, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(
                Rule::MissingRequiredField,
                field,
                format!("entry {index}: name must not be empty"),
            );
        }

        if self.external {
            let mut url_diag = ConfigDiagnostics::new();
            check_absolute_url(&self.url, field, &mut url_diag);
            for err in url_diag.errors() {
                diag.error(err.rule, err.field, format!("entry {index}: {}", err.message));
            }
        } else if !self.url.starts_with('/') {
            diag.error_with_hint(
                Rule::MalformedUrl,
                field,
                format!(
                    "entry {index}: internal link '{}' must start with '/'",
                    self.url
                ),
                "write a site path like \"/friends/\", or set external = true",
            );
        }
    }
}

// ============================================================================
// tests
// ============================================================================
