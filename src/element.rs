//! Elements of parents.
use core::fmt;

use num_rational::Rational64;

/// A value belonging to some [`crate::parent::Parent`].
///
/// Parents are heterogeneous (a cartesian product may mix words of a free monoid with integers
/// and rationals), so elements are a small dynamic value type. The derived ordering is only used
/// to normalize set-like inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Integer(i64),
    Rational(Rational64),
    /// Labels and words, displayed quoted: `'abcd'`
    Str(String),
    /// Elements of cartesian products: `('a', 1)`
    Tuple(Vec<Element>),
    /// Coordinate vectors: `(1, 0, 1/2)`
    Vector(Vec<Rational64>),
}

impl Element {
    pub fn tuple<I: IntoIterator<Item = Element>>(items: I) -> Self {
        Element::Tuple(items.into_iter().collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Element::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[Element]> {
        match self {
            Element::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// The value as a rational number, if it is numeric.
    pub fn as_rational(&self) -> Option<Rational64> {
        match self {
            Element::Integer(n) => Some(Rational64::from_integer(*n)),
            Element::Rational(q) => Some(*q),
            _ => None,
        }
    }
}

impl From<i64> for Element {
    fn from(n: i64) -> Self {
        Element::Integer(n)
    }
}

impl From<i32> for Element {
    fn from(n: i32) -> Self {
        Element::Integer(n.into())
    }
}

impl From<Rational64> for Element {
    fn from(q: Rational64) -> Self {
        Element::Rational(q)
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Element::Str(s.to_string())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Element::Str(s)
    }
}

impl From<char> for Element {
    fn from(c: char) -> Self {
        Element::Str(c.to_string())
    }
}

impl From<Vec<Element>> for Element {
    fn from(items: Vec<Element>) -> Self {
        Element::Tuple(items)
    }
}

pub(crate) fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Integer(n) => write!(f, "{n}"),
            Element::Rational(q) => write!(f, "{q}"),
            Element::Str(s) => write!(f, "'{s}'"),
            Element::Tuple(items) => {
                write!(f, "(")?;
                write_separated(f, items)?;
                // a 1-tuple keeps its trailing comma
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Element::Vector(entries) => {
                write!(f, "(")?;
                write_separated(f, entries)?;
                write!(f, ")")
            }
        }
    }
}
