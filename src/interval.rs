use tracing::{debug, trace};

use crate::{
    bounds::{BothBounds, Endpoint, LEFT, RIGHT},
    date::ComparableDate,
    error::{InvalidBound, Rejection, Side},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RawDateInterval", into = "RawDateInterval")
)]
/// An inclusive range of dates where at most one side may be open.
///
/// Two invariants hold for every value of this type:
/// - the start and the end are never open at the same time;
/// - when both are set, the start does not lie after the end.
///
/// ```
/// # use datintrval::{ComparableDate, DateInterval};
/// let q1 = DateInterval::between("2024-01-01", "2024-03-31").unwrap();
/// assert!(q1.contains(&ComparableDate::new("2024-02-15")));
/// assert!(!q1.contains(&ComparableDate::new("2024-04-01")));
///
/// assert!(DateInterval::between("2024-03-31", "2024-01-01").is_err());
/// ```
pub struct DateInterval {
    start: Option<ComparableDate>,
    end: Option<ComparableDate>,
}

impl DateInterval {
    /// An interval starting at the given date and open towards the future.
    pub fn since(start: impl Into<ComparableDate>) -> Self {
        Self {
            start: Some(start.into()),
            end: None,
        }
    }

    /// An interval ending at the given date and open towards the past.
    pub fn until(end: impl Into<ComparableDate>) -> Self {
        Self {
            start: None,
            end: Some(end.into()),
        }
    }

    /// A closed interval `[start; end]`.
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] if `start` lies after `end`.
    pub fn between(
        start: impl Into<ComparableDate>,
        end: impl Into<ComparableDate>,
    ) -> Result<Self, InvalidBound> {
        Self::new(Some(start.into()), Some(end.into()))
    }

    /// Create an interval from a pair of optional bounds.
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] if both bounds are open
    /// or if the start lies after the end.
    pub fn new(
        start: Option<ComparableDate>,
        end: Option<ComparableDate>,
    ) -> Result<Self, InvalidBound> {
        match (&start, &end) {
            (None, None) => Err(InvalidBound::new(Side::End, Rejection::BothSidesOpen)),
            (Some(s), Some(e)) if s > e => Err(InvalidBound::new(Side::Start, Rejection::Inverted)),
            _ => Ok(Self { start, end }),
        }
    }

    /// The inclusive lower bound, `None` when open.
    pub const fn start(&self) -> Option<&ComparableDate> {
        self.start.as_ref()
    }

    /// The inclusive upper bound, `None` when open.
    pub const fn end(&self) -> Option<&ComparableDate> {
        self.end.as_ref()
    }

    /// Whether the interval is unbounded towards the past.
    pub const fn is_open_start(&self) -> bool {
        self.start.is_none()
    }

    /// Whether the interval is unbounded towards the future.
    pub const fn is_open_end(&self) -> bool {
        self.end.is_none()
    }

    pub fn lower(&self) -> Endpoint<LEFT, &ComparableDate> {
        self.start.as_ref().into()
    }

    pub fn upper(&self) -> Endpoint<RIGHT, &ComparableDate> {
        self.end.as_ref().into()
    }

    /// Convert the interval into its start and end endpoints.
    pub fn into_bounds(self) -> BothBounds<ComparableDate> {
        (self.start.into(), self.end.into())
    }

    /// Check whether the start may be replaced with `start`.
    ///
    /// Only the open/bounded state of the current end is consulted:
    /// - an open start is refused while the end is open too;
    /// - a concrete start is refused while the end is bounded,
    ///   whatever the relative order of the two dates.
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] describing the refusal.
    pub fn check_start(&self, start: Option<&ComparableDate>) -> Result<(), InvalidBound> {
        check_bound(Side::Start, start.is_some(), self.end.is_some())
    }

    /// Check whether the end may be replaced with `end`.
    ///
    /// The mirror image of [`Self::check_start`].
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] describing the refusal.
    pub fn check_end(&self, end: Option<&ComparableDate>) -> Result<(), InvalidBound> {
        check_bound(Side::End, end.is_some(), self.start.is_some())
    }

    /// Replace the start after [checking][Self::check_start] it.
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] and leave the interval as is when refused.
    ///
    /// ```
    /// # use datintrval::{DateInterval, Rejection};
    /// let mut interval = DateInterval::since("2024-01-01");
    /// let err = interval.set_start(None).unwrap_err();
    /// assert_eq!(err.reason(), Rejection::BothSidesOpen);
    /// assert_eq!(interval, DateInterval::since("2024-01-01"));
    ///
    /// interval.set_start(Some("2023-01-01".into())).unwrap();
    /// assert_eq!(interval, DateInterval::since("2023-01-01"));
    /// ```
    pub fn set_start(&mut self, start: Option<ComparableDate>) -> Result<(), InvalidBound> {
        if let Err(err) = self.check_start(start.as_ref()) {
            debug!(interval = %self, new_start = ?start, %err, "start bound rejected");
            return Err(err);
        }

        trace!(interval = %self, new_start = ?start, "start bound replaced");
        self.start = start;
        Ok(())
    }

    /// Replace the end after [checking][Self::check_end] it.
    ///
    /// # Errors
    ///
    /// Return [`InvalidBound`] and leave the interval as is when refused.
    pub fn set_end(&mut self, end: Option<ComparableDate>) -> Result<(), InvalidBound> {
        if let Err(err) = self.check_end(end.as_ref()) {
            debug!(interval = %self, new_end = ?end, %err, "end bound rejected");
            return Err(err);
        }

        trace!(interval = %self, new_end = ?end, "end bound replaced");
        self.end = end;
        Ok(())
    }

    /// Whether the interval contains a given point (both bounds inclusive).
    pub fn contains<U>(&self, point: &U) -> bool
    where
        U: ?Sized,
        ComparableDate: PartialOrd<U>,
    {
        self.lower().admits(&point) && self.upper().admits(&point)
    }
}

fn check_bound(side: Side, assigning: bool, opposite_bounded: bool) -> Result<(), InvalidBound> {
    match (assigning, opposite_bounded) {
        (false, false) => Err(InvalidBound::new(side, Rejection::BothSidesOpen)),
        (true, true) => Err(InvalidBound::new(side, Rejection::OppositeSideBounded)),
        _ => Ok(()),
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDateInterval {
    start: Option<ComparableDate>,
    end: Option<ComparableDate>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDateInterval> for DateInterval {
    type Error = InvalidBound;

    fn try_from(RawDateInterval { start, end }: RawDateInterval) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

#[cfg(feature = "serde")]
impl From<DateInterval> for RawDateInterval {
    fn from(DateInterval { start, end }: DateInterval) -> Self {
        Self { start, end }
    }
}


#[cfg(all(feature = "serde", test))]
mod deser_tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn open_end() {
        let j = json!({ "start": "2024-01-01", "end": null });
        let i: DateInterval = serde_json::from_value(j).unwrap();
        assert_eq!(i, DateInterval::since("2024-01-01"));
    }

    #[test]
    fn serialize() {
        let i = DateInterval::until("2024-01-01");
        assert_eq!(
            serde_json::to_value(&i).unwrap(),
            json!({ "start": null, "end": "2024-01-01" })
        );
    }

    #[test]
    fn invalid_is_rejected() {
        let j = json!({ "start": null, "end": null });
        assert!(serde_json::from_value::<DateInterval>(j).is_err());

        let j = json!({ "start": "2024-02-01", "end": "2024-01-01" });
        assert!(serde_json::from_value::<DateInterval>(j).is_err());
    }
}
