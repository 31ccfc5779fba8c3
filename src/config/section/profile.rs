//! `[profile]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [profile]
//! avatar = "assets/avatar.png"
//! name = "Alice"
//! bio = "writes about compilers and tea"
//!
//! [[profile.links]]
//! name = "GitHub"
//! icon = "fa6-brands:github"
//! url = "https://github.com/alice"
//! ```

use crate::config::util::{check_absolute_url, has_url_scheme};
use crate::config::{ConfigDiagnostics, FieldPath, Rule};
use serde::{Deserialize, Serialize};

/// Author profile shown in the sidebar.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProfileConfig {
    /// Avatar image. An absolute URL is fetched as-is; a `/`-prefixed path
    /// is relative to the public directory; anything else is relative to
    /// the source asset directory. See [`ProfileConfig::avatar_source`].
    pub avatar: String,

    /// Display name.
    pub name: String,

    /// Short bio line under the name.
    pub bio: String,

    /// Social links, in display order. `icon` is an icon-font identifier,
    /// e.g. `fa6-brands:github`.
    pub links: Vec<ProfileLink>,
}

pub struct ProfileFields {
    pub links: FieldPath,
}

impl ProfileConfig {
    pub const FIELDS: ProfileFields = ProfileFields {
        links: FieldPath::new("profile.links"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (i, link) in self.links.iter().enumerate() {
            link.validate(i, Self::FIELDS.links, diag);
        }
    }

    /// Classify the avatar string for the renderer.
    ///
    /// Pure lookup on the string shape; joining the path against an actual
    /// directory is the renderer's job.
    pub fn avatar_source(&self) -> AvatarSource<'_> {
        if has_url_scheme(&self.avatar) {
            AvatarSource::Remote(&self.avatar)
        } else if let Some(path) = self.avatar.strip_prefix('/') {
            AvatarSource::PublicRoot(path)
        } else {
            AvatarSource::SourceRelative(&self.avatar)
        }
    }
}

/// Where an avatar string points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarSource<'a> {
    /// Absolute URL, used verbatim.
    Remote(&'a str),
    /// Path under the public asset directory (leading `/` stripped).
    PublicRoot(&'a str),
    /// Path under the source asset directory.
    SourceRelative(&'a str),
}

/// A social link in the profile card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileLink {
    /// Label, shown as tooltip or next to the icon.
    pub name: String,

    /// Icon-font identifier, resolved by the renderer's icon set.
    pub icon: String,

    /// Link target, an absolute URL.
    pub url: String,
}

impl ProfileLink {
    fn validate(&self, index: usize, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.name.is_empty() {
            diag.error(
                Rule::MissingRequiredField,
                field,
                format!("entry {index}: name must not be empty"),
            );
        }

        let mut url_diag = ConfigDiagnostics::new();
        check_absolute_url(&self.url, field, &mut url_diag);
        for err in url_diag.errors() {
            diag.error(err.rule, err.field, format!("entry {index}: {}", err.message));
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
        config.profile.validate(&mut diag);
        diag
    }

    #[test]
    fn test_profile_parses() {
        let config = test_parse_config(
            "[profile]\navatar = \"https://avatars.githubusercontent.com/u/485441\"\n\
             name = \"Teletha\"\nbio = \"これやこの　行くも帰るも　別れては\"\n\
             [[profile.links]]\nname = \"Twitter\"\nicon = \"fa6-brands:twitter\"\n\
             url = \"https://twitter.com/TelethaT\"\n\
             [[profile.links]]\nname = \"GitHub\"\nicon = \"fa6-brands:github\"\n\
             url = \"https://github.com/teletha/\"",
        );

        assert_eq!(config.profile.name, "Teletha");
        assert_eq!(config.profile.links.len(), 2);
        assert_eq!(config.profile.links[1].icon, "fa6-brands:github");
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_avatar_source_three_way() {
        let mut profile = ProfileConfig {
            avatar: "https://host/x.png".into(),
            ..ProfileConfig::default()
        };
        assert_eq!(
            profile.avatar_source(),
            AvatarSource::Remote("https://host/x.png")
        );

        profile.avatar = "/avatar.png".into();
        assert_eq!(profile.avatar_source(), AvatarSource::PublicRoot("avatar.png"));

        profile.avatar = "avatar.png".into();
        assert_eq!(
            profile.avatar_source(),
            AvatarSource::SourceRelative("avatar.png")
        );
    }

    #[test]
    fn test_link_urls_validated() {
        let config = test_parse_config(
            "[[profile.links]]\nname = \"GitHub\"\nicon = \"fa6-brands:github\"\nurl = \"github.com\"",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].rule, Rule::MalformedUrl);
        assert_eq!(diag.errors()[0].field.as_str(), "profile.links");
    }

    #[test]
    fn test_link_name_required() {
        let config = test_parse_config(
            "[[profile.links]]\nname = \"\"\nicon = \"fa6-brands:github\"\nurl = \"https://github.com\"",
        );
        let diag = validate(&config);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].rule, Rule::MissingRequiredField);
    }
}
