//! Base rings which parameterize module-like categories.
use core::fmt;

use num_rational::Rational64;

/// A base ring: the ring of integers `ZZ` or the field of rationals `QQ`.
///
/// Scalars of both rings are stored as [`Rational64`]; [`Ring::contains`] decides membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ring {
    Integers,
    Rationals,
}

pub const ZZ: Ring = Ring::Integers;
pub const QQ: Ring = Ring::Rationals;

impl Ring {
    pub fn is_field(&self) -> bool {
        matches!(self, Ring::Rationals)
    }

    pub fn contains(&self, x: &Rational64) -> bool {
        match self {
            Ring::Integers => x.is_integer(),
            Ring::Rationals => true,
        }
    }

    pub fn latex(&self) -> &'static str {
        match self {
            Ring::Integers => "\\Bold{Z}",
            Ring::Rationals => "\\Bold{Q}",
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ring::Integers => write!(f, "Integer Ring"),
            Ring::Rationals => write!(f, "Rational Field"),
        }
    }
}
