use core::{cmp::Ordering, ops::Bound};

pub const LEFT: bool = false;
pub const RIGHT: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// One bound of a date interval.
///
/// Interval bounds are always inclusive, so a bound is either a concrete
/// value or open (unbounded in its direction).
pub enum Endpoint<const SIDE: bool, T> {
    /// The value belongs to the interval.
    Included(T),
    /// The interval is unbounded in this direction.
    Open,
}

/// The lower and upper bound of an interval.
pub type BothBounds<T> = (Endpoint<LEFT, T>, Endpoint<RIGHT, T>);

impl<const SIDE: bool, T> Endpoint<SIDE, T> {
    /// Convert [`Endpoint`] into a [`Bound`].
    pub fn into_bound(self) -> Bound<T> {
        match self {
            Self::Included(v) => Bound::Included(v),
            Self::Open => Bound::Unbounded,
        }
    }

    /// Represent the result of operation `Open.cmp(Included)`:
    /// - for the `LEFT` side: `Open == -inf < x == Included`;
    /// - for the `RIGHT` side: `Open == +inf > x == Included`.
    pub(crate) const fn to_inf_ordering() -> Ordering {
        #[allow(clippy::match_bool)]
        match SIDE {
            LEFT => Ordering::Less,
            RIGHT => Ordering::Greater,
        }
    }

    /// Whether the given point lies on the inner side of this endpoint.
    pub fn admits<U>(&self, point: &U) -> bool
    where
        T: PartialOrd<U>,
        U: ?Sized,
    {
        #[allow(clippy::match_bool)]
        match (self, SIDE) {
            (Self::Open, _) => true,
            (Self::Included(start), LEFT) => start <= point,
            (Self::Included(end), RIGHT) => end >= point,
        }
    }
}

impl<T> Endpoint<LEFT, T> {
    /// Whether this lower endpoint lies no later than the given upper one.
    ///
    /// An open endpoint on either side always precedes.
    pub fn precedes<U>(&self, upper: &Endpoint<RIGHT, U>) -> bool
    where
        T: PartialOrd<U>,
    {
        match (self, upper) {
            (Self::Included(start), Endpoint::Included(end)) => start <= end,
            _ => true,
        }
    }
}

impl<const SIDE: bool, T> From<Option<T>> for Endpoint<SIDE, T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Open, Self::Included)
    }
}

impl<const SIDE: bool, T: PartialOrd> PartialOrd for Endpoint<SIDE, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let to_inf_ordering = Self::to_inf_ordering();

        match (self, other) {
            (Self::Open, Self::Open) => Some(Ordering::Equal),
            (Self::Open, _) => Some(to_inf_ordering),
            (_, Self::Open) => Some(to_inf_ordering.reverse()),
            (Self::Included(a), Self::Included(b)) => a.partial_cmp(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn left(x: Option<i32>) -> Endpoint<LEFT, i32> {
        x.into()
    }

    fn right(x: Option<i32>) -> Endpoint<RIGHT, i32> {
        x.into()
    }

    #[test]
    fn open_infimum() {
        assert!(left(None) == left(None));
        assert!(left(None) < left(Some(i32::MIN)));
        assert!(left(None) < left(Some(0)));
        assert!(left(Some(0)) < left(Some(1)));
    }

    #[test]
    fn open_supremum() {
        assert!(right(None) == right(None));
        assert!(right(None) > right(Some(i32::MAX)));
        assert!(right(None) > right(Some(0)));
        assert!(right(Some(1)) > right(Some(0)));
    }

    #[test]
    fn admits_inclusive() {
        assert!(left(Some(5)).admits(&5));
        assert!(left(Some(5)).admits(&6));
        assert!(!left(Some(5)).admits(&4));
        assert!(left(None).admits(&i32::MIN));

        assert!(right(Some(5)).admits(&5));
        assert!(right(Some(5)).admits(&4));
        assert!(!right(Some(5)).admits(&6));
        assert!(right(None).admits(&i32::MAX));
    }

    #[test]
    fn precedes() {
        assert!(left(Some(1)).precedes(&right(Some(1))));
        assert!(left(Some(1)).precedes(&right(Some(2))));
        assert!(!left(Some(2)).precedes(&right(Some(1))));
        assert!(left(None).precedes(&right(Some(i32::MIN))));
        assert!(left(Some(i32::MAX)).precedes(&right(None)));
    }

    #[test]
    fn into_bound() {
        assert_eq!(left(Some(3)).into_bound(), Bound::Included(3));
        assert_eq!(right(None).into_bound(), Bound::Unbounded);
    }
}
