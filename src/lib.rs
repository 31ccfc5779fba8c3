//! Typed configuration for the hoshi blog theme.
//!
//! The theme reads a single `hoshi.toml` (or an in-process literal) into
//! [`ThemeConfig`]: four sections covering site identity, navigation,
//! author profile, and license display. The config is loaded and validated
//! once at build start and treated as read-only afterwards — consumers take
//! `&ThemeConfig` and never mutate it.
//!
//! ```no_run
//! use hoshi_config::ThemeConfig;
//!
//! let config = ThemeConfig::load("hoshi.toml".as_ref())?;
//! println!("{}", config.site.title);
//! # Ok::<(), hoshi_config::ConfigError>(())
//! ```
//!
//! Validation rejects the whole document as a unit: every invariant
//! violation is collected into [`ConfigError::Diagnostics`] so the author
//! can fix them in one pass.

pub mod config;

pub use config::{
    AvatarSource, BannerConfig, BannerCreditConfig, BannerPosition, ConfigDiagnostics, ConfigError,
    CustomLink, FaviconConfig, FaviconTheme, FieldPath, Lang, LicenseConfig, LinkPreset,
    NavBarConfig, NavBarLink, PresetLink, ProfileConfig, ProfileLink, Rule, SiteConfig,
    ThemeColorConfig, ThemeConfig, TocConfig,
};
