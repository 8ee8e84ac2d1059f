//! Boundary topology tags.
//!
//! Shape matching only cares about *which* endpoints are infinite and in which
//! direction a bounded interval runs, never about the finite values
//! themselves. [`classify`] reduces an endpoint pair to a pair of [`Tag`]s and
//! [`Signature`] combines the x and y pairs of a [`Borders`].
//!
//! | endpoints            | tags         |
//! |----------------------|--------------|
//! | `(a, b)`, `a < b`    | `(-1, 1)`    |
//! | `(a, b)`, `a >= b`   | `(1, -1)`    |
//! | `(-inf, a)`          | `(-2, 0)`    |
//! | `(a, +inf)`          | `(0, 2)`     |
//! | `(+inf, -inf)`       | `(2, -2)`    |

use std::fmt;
use std::ops::Neg;

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::border::Borders;

/// Topological tag of one interval endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i8)]
pub enum Tag {
    /// Negative infinity.
    NegInf = -2,
    /// Lower end of a bounded interval.
    Start = -1,
    /// Finite end of a half-bounded interval.
    HalfOpen = 0,
    /// Upper end of a bounded interval.
    End = 1,
    /// Positive infinity.
    PosInf = 2,
}

impl Tag {
    /// Numeric value of the tag, `-2..=2`.
    pub const fn value(self) -> i8 {
        self as i8
    }
}

impl Neg for Tag {
    type Output = Tag;

    /// Reflects the endpoint through zero.
    fn neg(self) -> Tag {
        match self {
            Tag::NegInf => Tag::PosInf,
            Tag::Start => Tag::End,
            Tag::HalfOpen => Tag::HalfOpen,
            Tag::End => Tag::Start,
            Tag::PosInf => Tag::NegInf,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Tags an endpoint pair.
///
/// Two finite endpoints encode only the direction of the interval. Otherwise
/// each endpoint is tagged on its own and a finite one becomes
/// [`Tag::HalfOpen`].
///
/// # Examples
///
/// ```rust
/// use bimap::{Tag, classify};
///
/// assert_eq!(classify(2.0, 5.0), (Tag::Start, Tag::End));
/// assert_eq!(classify(5.0, 2.0), (Tag::End, Tag::Start));
/// assert_eq!(classify(3.0, f64::INFINITY), (Tag::HalfOpen, Tag::PosInf));
/// ```
pub fn classify<T: Float>(n1: T, n2: T) -> (Tag, Tag) {
    if !n1.is_infinite() && !n2.is_infinite() {
        return if n1 < n2 {
            (Tag::Start, Tag::End)
        } else {
            (Tag::End, Tag::Start)
        };
    }

    (tag_of(n1), tag_of(n2))
}

fn tag_of<T: Float>(n: T) -> Tag {
    if n == T::neg_infinity() {
        Tag::NegInf
    } else if n == T::infinity() {
        Tag::PosInf
    } else {
        Tag::HalfOpen
    }
}

/// Combined tags of the x and y intervals of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    pub x: (Tag, Tag),
    pub y: (Tag, Tag),
}

impl Signature {
    pub const fn new(x: (Tag, Tag), y: (Tag, Tag)) -> Self {
        Self { x, y }
    }

    /// Classifies both axes of `borders`.
    pub fn of<T: Float>(borders: &Borders<T>) -> Self {
        Self {
            x: classify(borders.x1, borders.x2),
            y: classify(borders.y1, borders.y2),
        }
    }

    /// The four reflections under which a shape may serve this request.
    ///
    /// In order: identity; x reflected (endpoints swapped on both axes);
    /// both axes reflected; y reflected.
    pub fn symmetries(&self) -> [Signature; 4] {
        let (u1, u2) = self.x;
        let (u3, u4) = self.y;
        [
            Signature::new((u1, u2), (u3, u4)),
            Signature::new((-u2, -u1), (u4, u3)),
            Signature::new((-u2, -u1), (-u4, -u3)),
            Signature::new((u1, u2), (-u3, -u4)),
        ]
    }

    /// True when a shape with the `native` signature can be fitted to this
    /// request.
    pub fn is_compatible(&self, native: &Signature) -> bool {
        self.symmetries().iter().any(|s| s == native)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.x.0, self.x.1, self.y.0, self.y.1
        )
    }
}
