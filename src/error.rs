use core::fmt;

use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// The side of a [`DateInterval`][crate::DateInterval] a bound belongs to.
pub enum Side {
    /// The lower (start) bound.
    Start,
    /// The upper (end) bound.
    End,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Why a bound was refused.
pub enum Rejection {
    /// Opening this side would leave the interval unbounded on both sides.
    BothSidesOpen,
    /// A bound can only be assigned while the opposite side is open.
    OppositeSideBounded,
    /// The start lies after the end.
    Inverted,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothSidesOpen => f.write_str("the opposite side is already open"),
            Self::OppositeSideBounded => f.write_str("the opposite side is already bounded"),
            Self::Inverted => f.write_str("the start lies after the end"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid {side} bound: {reason}")]
/// A bound could not be applied to a [`DateInterval`][crate::DateInterval].
///
/// The interval it was meant for is left untouched.
pub struct InvalidBound {
    side: Side,
    reason: Rejection,
}

impl InvalidBound {
    pub(crate) const fn new(side: Side, reason: Rejection) -> Self {
        Self { side, reason }
    }

    /// The side whose bound was rejected.
    pub const fn side(&self) -> Side {
        self.side
    }

    /// The reason for the rejection.
    pub const fn reason(&self) -> Rejection {
        self.reason
    }
}

#[cfg(feature = "config")]
#[derive(Debug, Error)]
/// Failure to load a [`RenderConfig`][crate::RenderConfig].
pub enum ConfigError {
    #[error("failed to parse render configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid date pattern {pattern:?} for {target}")]
    InvalidPattern { target: String, pattern: String },
}
