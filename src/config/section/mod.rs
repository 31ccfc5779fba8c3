//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hoshi.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `site`    | `[site]`     | Title, language, theme, banner, toc  |
//! | `navbar`  | `[navbar]`   | Navigation links and presets         |
//! | `profile` | `[profile]`  | Author avatar, bio, social links     |
//! | `license` | `[license]`  | Post license display                 |

mod license;
mod navbar;
mod profile;
pub mod site;

// Re-export section configs
pub use license::LicenseConfig;
pub use navbar::{CustomLink, LinkPreset, NavBarConfig, NavBarLink, PresetLink};
pub use profile::{AvatarSource, ProfileConfig, ProfileLink};
pub use site::{
    BannerConfig, BannerCreditConfig, BannerPosition, FaviconConfig, FaviconTheme, Lang,
    SiteConfig, ThemeColorConfig, TocConfig,
};
