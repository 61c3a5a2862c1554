use core::ops::{Bound, RangeBounds, RangeFrom, RangeInclusive, RangeToInclusive};

use crate::{date::ComparableDate, error::InvalidBound, DateInterval};

impl From<RangeFrom<ComparableDate>> for DateInterval {
    fn from(RangeFrom { start }: RangeFrom<ComparableDate>) -> Self {
        Self::since(start)
    }
}

impl From<RangeToInclusive<ComparableDate>> for DateInterval {
    fn from(RangeToInclusive { end }: RangeToInclusive<ComparableDate>) -> Self {
        Self::until(end)
    }
}

impl TryFrom<RangeInclusive<ComparableDate>> for DateInterval {
    type Error = InvalidBound;

    fn try_from(value: RangeInclusive<ComparableDate>) -> Result<Self, Self::Error> {
        let (start, end) = value.into_inner();
        Self::between(start, end)
    }
}

impl RangeBounds<ComparableDate> for DateInterval {
    fn start_bound(&self) -> Bound<&ComparableDate> {
        self.lower().into_bound()
    }

    fn end_bound(&self) -> Bound<&ComparableDate> {
        self.upper().into_bound()
    }
}

impl DateInterval {
    /// Whether the given interval is completely contained
    /// within this interval.
    ///
    /// An inner interval open towards the future is only contained
    /// in an outer one that is open towards the future too.
    ///
    /// An open start of `self` is never checked against the inner start,
    /// and an inner interval open towards the past is never contained
    /// in an outer one with a concrete start.
    ///
    /// ```
    /// # use datintrval::DateInterval;
    /// let year = DateInterval::since("2024-01-01");
    /// let february = DateInterval::between("2024-02-01", "2024-02-29").unwrap();
    /// assert!(year.contains_interval(&february));
    /// assert!(!february.contains_interval(&year));
    /// ```
    pub fn contains_interval(&self, inner: &Self) -> bool {
        self.lower() <= inner.lower() && inner.upper() <= self.upper()
    }

    /// Whether the two intervals share at least one date.
    ///
    /// ```
    /// # use datintrval::DateInterval;
    /// let before = DateInterval::until("2024-03-01");
    /// let after = DateInterval::since("2024-02-01");
    /// assert!(before.overlaps(&after));
    /// assert!(!before.overlaps(&DateInterval::since("2024-03-02")));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.lower().precedes(&other.upper()) && other.lower().precedes(&self.upper())
    }
}
