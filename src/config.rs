use std::collections::BTreeMap;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::{
    clock::Clock,
    date::DATE_FORMAT,
    error::ConfigError,
    format::PatternFormatter,
    policy::IntervalPolicy,
    str::DEFAULT_PLACEHOLDER,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// How intervals are rendered for humans.
///
/// ```
/// # use datintrval::{DateInterval, FixedClock, RenderConfig};
/// let config = RenderConfig::from_toml_str(r#"
///     placeholder = "open"
///     locale = "de_DE"
///
///     [patterns]
///     de_DE = "%d.%m.%Y"
/// "#).unwrap();
///
/// let policy = config.policy(FixedClock::new("2024-01-01 00:00:00"));
/// let interval = DateInterval::since("2024-03-05");
/// assert_eq!(policy.to_interval_string_default(&interval), "[05.03.2024; open]");
/// ```
pub struct RenderConfig {
    /// Rendered in place of an open bound.
    pub placeholder: String,
    /// Locale passed to the formatter, `None` for the default pattern.
    pub locale: Option<String>,
    /// `strftime` pattern for locales without their own entry.
    pub default_pattern: String,
    /// `strftime` patterns keyed by locale.
    pub patterns: BTreeMap<String, String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            locale: None,
            default_pattern: DATE_FORMAT.to_owned(),
            patterns: BTreeMap::new(),
        }
    }
}

impl RenderConfig {
    /// Parse and [validate][Self::validate] a TOML document.
    ///
    /// # Errors
    ///
    /// Return [`ConfigError`] on malformed TOML or an unusable pattern.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every pattern is understood by `chrono`.
    ///
    /// # Errors
    ///
    /// Return [`ConfigError::InvalidPattern`] for the first broken pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pattern("the default pattern", &self.default_pattern)?;
        for (locale, pattern) in &self.patterns {
            check_pattern(&format!("locale {locale:?}"), pattern)?;
        }
        Ok(())
    }

    pub fn formatter(&self) -> PatternFormatter {
        self.patterns.iter().fold(
            PatternFormatter::new(self.default_pattern.clone()),
            |formatter, (locale, pattern)| formatter.with_locale(locale.clone(), pattern.clone()),
        )
    }

    /// Build an [`IntervalPolicy`] rendering with these settings.
    pub fn policy<C: Clock>(&self, clock: C) -> IntervalPolicy<PatternFormatter, C> {
        let policy =
            IntervalPolicy::new(self.formatter(), clock).with_placeholder(self.placeholder.clone());
        match &self.locale {
            Some(locale) => policy.with_locale(locale.clone()),
            None => policy,
        }
    }
}

fn check_pattern(target: &str, pattern: &str) -> Result<(), ConfigError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidPattern {
            target: target.to_owned(),
            pattern: pattern.to_owned(),
        });
    }
    Ok(())
}
