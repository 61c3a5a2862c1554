use core::{cmp::Ordering, fmt};

use chrono::{NaiveDate, NaiveDateTime};

/// `strftime` pattern of a canonical date-only value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `strftime` pattern of a canonical point-in-time value.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
/// A date in its canonical, fixed-width, zero-padded string form
/// (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`).
///
/// The value is never parsed for comparisons: the lexicographic order
/// of canonical strings is the chronological one.
/// No calendar validation takes place either, so `2024-02-30` is accepted.
///
/// ```
/// # use datintrval::ComparableDate;
/// let new_year = ComparableDate::new("2024-01-01");
/// assert!(new_year < ComparableDate::new("2024-01-01 00:00:00"));
/// assert!(new_year < ComparableDate::new("2024-01-02"));
/// ```
pub struct ComparableDate(String);

impl ComparableDate {
    /// Wrap an already canonical string.
    pub fn new(canonical: impl Into<String>) -> Self {
        Self(canonical.into())
    }

    /// The canonical string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap the canonical string.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the value carries a date only (no time-of-day part).
    pub fn is_date_only(&self) -> bool {
        self.0.len() == "YYYY-MM-DD".len()
    }

    /// Interpret the canonical string as a calendar value.
    ///
    /// Date-only values resolve to their midnight.
    /// Returns `None` for strings that do not denote a real calendar value.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.0, DATETIME_FORMAT)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(&self.0, DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }
}

impl From<&str> for ComparableDate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComparableDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<NaiveDate> for ComparableDate {
    fn from(value: NaiveDate) -> Self {
        Self(value.format(DATE_FORMAT).to_string())
    }
}

impl From<NaiveDateTime> for ComparableDate {
    fn from(value: NaiveDateTime) -> Self {
        Self(value.format(DATETIME_FORMAT).to_string())
    }
}

impl From<ComparableDate> for String {
    fn from(value: ComparableDate) -> Self {
        value.0
    }
}

impl AsRef<str> for ComparableDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ComparableDate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ComparableDate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<str> for ComparableDate {
    fn partial_cmp(&self, other: &str) -> Option<Ordering> {
        Some(self.0.as_str().cmp(other))
    }
}

impl fmt::Display for ComparableDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_chronological() {
        let dates = [
            "1999-12-31",
            "2000-01-01",
            "2000-01-01 00:00:00",
            "2000-01-01 23:59:59",
            "2000-01-02",
            "2000-10-01",
        ];
        for pair in dates.windows(2) {
            assert!(ComparableDate::new(pair[0]) < ComparableDate::new(pair[1]));
        }
    }

    #[test]
    fn from_chrono() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(ComparableDate::from(date), "2024-03-05");

        let datetime = date.and_hms_opt(7, 8, 9).unwrap();
        assert_eq!(ComparableDate::from(datetime), "2024-03-05 07:08:09");
    }

    #[test]
    fn to_naive() {
        let midnight = ComparableDate::new("2024-03-05").to_naive().unwrap();
        assert_eq!(ComparableDate::from(midnight), "2024-03-05 00:00:00");

        let exact = ComparableDate::new("2024-03-05 10:11:12").to_naive().unwrap();
        assert_eq!(ComparableDate::from(exact), "2024-03-05 10:11:12");
    }

    #[test]
    fn calendar_nonsense_is_kept_but_not_interpreted() {
        let bogus = ComparableDate::new("2024-02-30");
        assert!(bogus > ComparableDate::new("2024-02-29"));
        assert!(bogus.to_naive().is_none());
    }

    #[test]
    fn date_only() {
        assert!(ComparableDate::new("2024-03-05").is_date_only());
        assert!(!ComparableDate::new("2024-03-05 00:00:00").is_date_only());
    }
}

#[cfg(all(feature = "serde", test))]
mod deser_tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn transparent_string() {
        let date: ComparableDate = serde_json::from_value(json!("2024-01-01")).unwrap();
        assert_eq!(date, "2024-01-01");
        assert_eq!(serde_json::to_value(&date).unwrap(), json!("2024-01-01"));
    }
}
