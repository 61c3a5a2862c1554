use tracing::trace;

use crate::{
    clock::{Clock, SystemClock},
    date::ComparableDate,
    error::InvalidBound,
    format::{CanonicalFormatter, Formatter},
    str::DEFAULT_PLACEHOLDER,
    DateInterval,
};

#[derive(Debug, Clone)]
/// Every operation on a [`DateInterval`], with the capabilities
/// they need (a [`Formatter`] for rendering and a [`Clock`] for "now")
/// injected at construction.
///
/// ```
/// # use datintrval::{DateInterval, FixedClock, IntervalPolicy};
/// let policy = IntervalPolicy::new(
///     |date: &datintrval::ComparableDate, _: Option<&str>| format!("<{date}>"),
///     FixedClock::new("2024-05-01 09:00:00"),
/// );
///
/// let mut interval = DateInterval::since("2024-01-01");
/// assert!(policy.is_current(&interval));
/// assert_eq!(policy.to_interval_string(&interval, "?"), "[<2024-01-01>; ?]");
///
/// assert!(policy.set_start(&mut interval, None).is_err());
/// ```
pub struct IntervalPolicy<F, C> {
    formatter: F,
    clock: C,
    locale: Option<String>,
    placeholder: String,
}

impl Default for IntervalPolicy<CanonicalFormatter, SystemClock> {
    fn default() -> Self {
        Self::new(CanonicalFormatter, SystemClock)
    }
}

impl<F, C> IntervalPolicy<F, C> {
    pub fn new(formatter: F, clock: C) -> Self {
        Self {
            formatter,
            clock,
            locale: None,
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }

    #[must_use]
    /// Pass `locale` to the formatter on every rendering.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    #[must_use]
    /// Render open bounds as `placeholder` in [`Self::to_interval_string_default`].
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub const fn formatter(&self) -> &F {
        &self.formatter
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Replace the start of `interval`.
    ///
    /// # Errors
    ///
    /// See [`DateInterval::set_start`].
    pub fn set_start(
        &self,
        interval: &mut DateInterval,
        start: Option<ComparableDate>,
    ) -> Result<(), InvalidBound> {
        interval.set_start(start)
    }

    /// Replace the end of `interval`.
    ///
    /// # Errors
    ///
    /// See [`DateInterval::set_end`].
    pub fn set_end(
        &self,
        interval: &mut DateInterval,
        end: Option<ComparableDate>,
    ) -> Result<(), InvalidBound> {
        interval.set_end(end)
    }

    pub fn contains_date(&self, interval: &DateInterval, date: &ComparableDate) -> bool {
        interval.contains(date)
    }

    pub fn contains_interval(&self, outer: &DateInterval, inner: &DateInterval) -> bool {
        outer.contains_interval(inner)
    }

    pub fn overlaps_with(&self, a: &DateInterval, b: &DateInterval) -> bool {
        a.overlaps(b)
    }
}

impl<F, C: Clock> IntervalPolicy<F, C> {
    /// Whether `interval` contains the current point in time.
    ///
    /// A date-only end bound does not cover any time of its own day,
    /// since `YYYY-MM-DD HH:MM:SS` sorts after `YYYY-MM-DD`.
    pub fn is_current(&self, interval: &DateInterval) -> bool {
        let now = self.clock.now();
        let current = interval.contains(&now);
        trace!(%interval, %now, current, "checked interval against clock");
        current
    }
}

impl<F: Formatter, C> IntervalPolicy<F, C> {
    /// Render `interval` as `[start; end]` with dates localized by the formatter
    /// and `empty` in place of an open bound.
    pub fn to_interval_string(&self, interval: &DateInterval, empty: &str) -> String {
        let locale = self.locale();
        interval.render_with(empty, |date| self.formatter.as_date(date, locale))
    }

    /// [`Self::to_interval_string`] with the configured placeholder.
    pub fn to_interval_string_default(&self, interval: &DateInterval) -> String {
        self.to_interval_string(interval, &self.placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock::FixedClock, error::Rejection, format::PatternFormatter};

    fn d(s: &str) -> ComparableDate {
        ComparableDate::new(s)
    }

    fn policy_at(now: &str) -> IntervalPolicy<CanonicalFormatter, FixedClock> {
        IntervalPolicy::new(CanonicalFormatter, FixedClock::new(now))
    }

    #[test]
    fn is_current() {
        let policy = policy_at("2024-05-01 09:00:00");
        assert!(policy.is_current(&DateInterval::since("2024-01-01")));
        assert!(policy.is_current(&DateInterval::until("2024-05-02")));
        assert!(!policy.is_current(&DateInterval::since("2024-05-02")));
        assert!(!policy.is_current(&DateInterval::until("2024-04-30")));
    }

    #[test]
    fn is_current_on_last_day() {
        // the canonical datetime sorts after the bare date of the same day
        let policy = policy_at("2024-05-01 09:00:00");
        let interval = DateInterval::between("2024-04-01", "2024-05-01").unwrap();
        assert!(!policy.is_current(&interval));

        let interval = DateInterval::between("2024-04-01", "2024-05-01 23:59:59").unwrap();
        assert!(policy.is_current(&interval));
    }

    #[test]
    fn setters_delegate() {
        let policy = policy_at("2024-05-01 09:00:00");
        let mut interval = DateInterval::until("2024-06-01");

        let err = policy.set_end(&mut interval, None).unwrap_err();
        assert_eq!(err.reason(), Rejection::BothSidesOpen);

        policy.set_end(&mut interval, Some(d("2024-07-01"))).unwrap();
        assert_eq!(interval, DateInterval::until("2024-07-01"));

        let err = policy.set_start(&mut interval, Some(d("2024-01-01"))).unwrap_err();
        assert_eq!(err.reason(), Rejection::OppositeSideBounded);
        assert_eq!(interval, DateInterval::until("2024-07-01"));
    }

    #[test]
    fn queries_delegate() {
        let policy: IntervalPolicy<CanonicalFormatter, SystemClock> = IntervalPolicy::default();
        let year = DateInterval::between("2024-01-01", "2024-12-31").unwrap();
        let may = DateInterval::between("2024-05-01", "2024-05-31").unwrap();

        assert!(policy.contains_date(&year, &d("2024-05-05")));
        assert!(policy.contains_interval(&year, &may));
        assert!(!policy.contains_interval(&may, &year));
        assert!(policy.overlaps_with(&may, &year));
    }

    #[test]
    fn rendering_uses_locale_and_placeholder() {
        let formatter = PatternFormatter::default().with_locale("de_DE", "%d.%m.%Y");
        let policy = IntervalPolicy::new(formatter, FixedClock::new("2024-01-01 00:00:00"))
            .with_locale("de_DE")
            .with_placeholder("offen");

        let interval = DateInterval::since("2024-03-05");
        assert_eq!(
            policy.to_interval_string_default(&interval),
            "[05.03.2024; offen]"
        );
        assert_eq!(policy.to_interval_string(&interval, "?"), "[05.03.2024; ?]");
    }

    #[test]
    fn formatter_receives_locale() {
        let formatter = |date: &ComparableDate, locale: Option<&str>| {
            format!("{}:{}", locale.unwrap_or("none"), date)
        };
        let policy = IntervalPolicy::new(formatter, FixedClock::new("2024-01-01 00:00:00"));
        let interval = DateInterval::until("2024-01-01");
        assert_eq!(policy.to_interval_string(&interval, "?"), "[?; none:2024-01-01]");

        let policy = policy.with_locale("en_US");
        assert_eq!(policy.to_interval_string(&interval, "?"), "[?; en_US:2024-01-01]");
    }
}
