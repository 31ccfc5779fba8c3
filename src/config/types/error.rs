//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors.
///
/// Closed-set fields (`lang`, `banner.position`, favicon `theme`, nav
/// presets) are typed enums, so unknown tags and missing required keys are
/// reported by the deserializer as [`ConfigError::Toml`]. Everything the
/// type system cannot express (ranges, URL syntax, conditional
/// requirements) is collected post-parse into
/// [`ConfigError::Diagnostics`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// Rule
// ============================================================================

/// The rule a diagnostic reports a violation of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A field restricted to a closed set holds an unrecognized value.
    InvalidEnumValue,
    /// A numeric field violates its documented bound.
    OutOfRange,
    /// A required field is absent or empty.
    MissingRequiredField,
    /// A URL-typed field is non-empty and not a syntactically valid URI.
    MalformedUrl,
    /// A navigation entry references a preset outside the closed set.
    UnknownPreset,
    /// A dimension string does not match `<W>x<H>`.
    MalformedDimensions,
}

impl Rule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEnumValue => "invalid enum value",
            Self::OutOfRange => "out of range",
            Self::MissingRequiredField => "missing required field",
            Self::MalformedUrl => "malformed URL",
            Self::UnknownPreset => "unknown preset",
            Self::MalformedDimensions => "malformed dimensions",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "site.theme_color.hue")
    pub field: FieldPath,
    /// Violated rule category
    pub rule: Rule,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(rule: Rule, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            rule,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, rule category dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.rule.as_str().dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// Accumulator for validation errors.
///
/// Validation walks the config in a fixed order (site → navbar → profile →
/// license, fields in declaration order) and collects every violation, so
/// the author sees all problems in one run instead of fixing them one
/// rebuild at a time.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, rule: Rule, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(rule, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        rule: Rule,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(rule, field, message).with_hint(hint));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("hoshi.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("hoshi.toml"));

        let unknown = ConfigError::UnknownFields(vec!["site.colour".into()]);
        let display = format!("{unknown}");
        assert!(display.contains("site.colour"));
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(
            Rule::OutOfRange,
            FieldPath::new("site.theme_color.hue"),
            "hue = 500 not in [0, 360]",
        );
        diag.error_with_hint(
            Rule::OutOfRange,
            FieldPath::new("site.toc.depth"),
            "depth = 9 not in [1, 3]",
            "use 1, 2 or 3",
        );

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "site.theme_color.hue");
        assert_eq!(diag.errors()[1].rule, Rule::OutOfRange);
        assert!(diag.errors()[1].hint.is_some());

        let err = diag.into_result().unwrap_err();
        let display = format!("{err}");
        assert!(display.contains("site.theme_color.hue"));
        assert!(display.contains("site.toc.depth"));
    }

    #[test]
    fn test_empty_diagnostics_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
