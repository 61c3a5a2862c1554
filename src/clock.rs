use chrono::Local;

use crate::date::ComparableDate;

/// A source of the current point in time.
///
/// Any `Fn() -> ComparableDate` closure is a clock.
pub trait Clock {
    /// The current point in time in its canonical `YYYY-MM-DD HH:MM:SS` form.
    fn now(&self) -> ComparableDate;
}

impl<F> Clock for F
where
    F: Fn() -> ComparableDate,
{
    fn now(&self) -> ComparableDate {
        self()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// The local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ComparableDate {
        Local::now().naive_local().into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A clock stopped at the given point in time.
pub struct FixedClock(pub ComparableDate);

impl FixedClock {
    pub fn new(now: impl Into<ComparableDate>) -> Self {
        Self(now.into())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> ComparableDate {
        self.0.clone()
    }
}
