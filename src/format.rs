use core::fmt::Write as _;
use std::collections::BTreeMap;

use tracing::debug;

use crate::date::{ComparableDate, DATE_FORMAT};

/// Turns a canonical date into its human-readable, possibly localized form.
///
/// Any `Fn(&ComparableDate, Option<&str>) -> String` closure is a formatter.
pub trait Formatter {
    /// Format `date` for the given `locale` (`None` for the default format).
    fn as_date(&self, date: &ComparableDate, locale: Option<&str>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&ComparableDate, Option<&str>) -> String,
{
    fn as_date(&self, date: &ComparableDate, locale: Option<&str>) -> String {
        self(date, locale)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Leaves dates in their canonical form, ignoring the locale.
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn as_date(&self, date: &ComparableDate, _locale: Option<&str>) -> String {
        date.as_str().to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Formats dates with a `strftime` pattern picked by locale.
///
/// Dates that do not denote a real calendar value
/// (or patterns `chrono` cannot render) fall back to the canonical form.
///
/// ```
/// # use datintrval::{ComparableDate, Formatter, PatternFormatter};
/// let formatter = PatternFormatter::default().with_locale("de_DE", "%d.%m.%Y");
/// let date = ComparableDate::new("2024-03-05");
/// assert_eq!(formatter.as_date(&date, Some("de_DE")), "05.03.2024");
/// assert_eq!(formatter.as_date(&date, Some("fr_FR")), "2024-03-05");
/// assert_eq!(formatter.as_date(&date, None), "2024-03-05");
/// ```
pub struct PatternFormatter {
    default_pattern: String,
    patterns: BTreeMap<String, String>,
}

impl Default for PatternFormatter {
    fn default() -> Self {
        Self::new(DATE_FORMAT)
    }
}

impl PatternFormatter {
    /// A formatter using `default_pattern` for every locale.
    pub fn new(default_pattern: impl Into<String>) -> Self {
        Self {
            default_pattern: default_pattern.into(),
            patterns: BTreeMap::new(),
        }
    }

    #[must_use]
    /// Use `pattern` for the given `locale`.
    pub fn with_locale(mut self, locale: impl Into<String>, pattern: impl Into<String>) -> Self {
        let _ = self.patterns.insert(locale.into(), pattern.into());
        self
    }

    /// The pattern applied to the given `locale`.
    pub fn pattern_for(&self, locale: Option<&str>) -> &str {
        locale
            .and_then(|locale| self.patterns.get(locale))
            .unwrap_or(&self.default_pattern)
    }
}

impl Formatter for PatternFormatter {
    fn as_date(&self, date: &ComparableDate, locale: Option<&str>) -> String {
        let pattern = self.pattern_for(locale);
        let Some(value) = date.to_naive() else {
            debug!(%date, "not a calendar date, keeping canonical form");
            return date.as_str().to_owned();
        };

        let mut out = String::new();
        if write!(out, "{}", value.format(pattern)).is_err() {
            debug!(%date, pattern, "unusable date pattern, keeping canonical form");
            return date.as_str().to_owned();
        }
        out
    }
}
