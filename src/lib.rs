//! Date intervals with possibly-open bounds.
//!
//! A [`DateInterval`] is an inclusive range of canonical dates where
//! the start or the end (but never both) may be open.
//! The algebra on it (guarded mutation, containment, overlap, rendering)
//! is available directly on the type and through an [`IntervalPolicy`]
//! that carries the injected [`Formatter`] and [`Clock`].
//!
//! ```
//! # use datintrval::{CanonicalFormatter, DateInterval, FixedClock, IntervalPolicy};
//! let policy = IntervalPolicy::new(CanonicalFormatter, FixedClock::new("2024-02-10 08:00:00"));
//!
//! let membership = DateInterval::since("2024-01-01");
//! let trial = DateInterval::between("2024-01-01", "2024-01-31").unwrap();
//!
//! assert!(policy.is_current(&membership));
//! assert!(!policy.is_current(&trial));
//! assert!(policy.contains_interval(&membership, &trial));
//! assert!(policy.overlaps_with(&trial, &membership));
//! assert_eq!(policy.to_interval_string(&membership, "open"), "[2024-01-01; open]");
//! ```

#[cfg(any(test, feature = "arbitrary"))]
mod arbitrary;
pub(crate) mod bounds;
mod clock;
#[cfg(feature = "config")]
mod config;
mod date;
mod error;
mod format;
mod interval;
mod ops;
mod policy;
mod str;

#[cfg(feature = "arbitrary")]
pub use self::arbitrary::canonical_date;

#[cfg(feature = "config")]
pub use self::{config::RenderConfig, error::ConfigError};

pub use self::{
    bounds::{BothBounds, Endpoint, LEFT, RIGHT},
    clock::{Clock, FixedClock, SystemClock},
    date::{ComparableDate, DATETIME_FORMAT, DATE_FORMAT},
    error::{InvalidBound, Rejection, Side},
    format::{CanonicalFormatter, Formatter, PatternFormatter},
    interval::DateInterval,
    policy::IntervalPolicy,
    str::DEFAULT_PLACEHOLDER,
};
