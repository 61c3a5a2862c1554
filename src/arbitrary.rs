use proptest::prelude::*;

use crate::{date::ComparableDate, DateInterval};

/// Canonical date-only values between the years 1970 and 2099.
///
/// Days stop at 28 so that every generated value is a real calendar date.
pub fn canonical_date() -> impl Strategy<Value = ComparableDate> {
    (1970_i32..2100, 1_u32..=12, 1_u32..=28)
        .prop_map(|(y, m, d)| ComparableDate::new(format!("{y:04}-{m:02}-{d:02}")))
}

impl Arbitrary for ComparableDate {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        canonical_date().boxed()
    }
}

impl Arbitrary for DateInterval {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            any::<ComparableDate>().prop_map(Self::since),
            any::<ComparableDate>().prop_map(Self::until),
            (any::<ComparableDate>(), any::<ComparableDate>()).prop_filter_map(
                "closed interval bounds",
                |(a, b)| {
                    let (start, end) = if a <= b { (a, b) } else { (b, a) };
                    Self::between(start, end).ok()
                }
            ),
        ]
        .boxed()
    }
}
