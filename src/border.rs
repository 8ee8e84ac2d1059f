//! Interval boundaries and reference points.
//!
//! A [`Borders`] value describes both axes of a mapping at once: the
//! x-interval `(x1, x2)` and the y-interval `(y1, y2)`, where `y1` is the
//! value approached as `x` approaches `x1` and `y2` the value approached as
//! `x` approaches `x2`. Any endpoint may be infinite; infinities use the
//! float type's own signed infinity.
//!
//! # Examples
//!
//! ```rust
//! use bimap::Borders;
//!
//! // (3, +inf) mapped onto (-inf, +inf)
//! let borders = Borders::new(3.0, f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY);
//! assert_eq!(borders.finite_x(), Some(3.0));
//!
//! // The default is the whole real line on both axes.
//! let full = Borders::<f64>::default();
//! assert!(full.x1.is_infinite() && full.y2.is_infinite());
//! ```

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boundaries of a mapping on both axes.
///
/// Endpoint order is significant: `x1` maps to `y1` and `x2` maps to `y2`, so
/// `(x1, x2) = (0, 1)` with `(y1, y2) = (1, 0)` describes a decreasing mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Borders<T = f64> {
    /// Start of the x-interval.
    pub x1: T,
    /// End of the x-interval.
    pub x2: T,
    /// Value of the mapping at `x1`.
    pub y1: T,
    /// Value of the mapping at `x2`.
    pub y2: T,
}

impl<T> Borders<T> {
    /// Creates borders from the four endpoints.
    pub const fn new(x1: T, x2: T, y1: T, y2: T) -> Self {
        Self { x1, x2, y1, y2 }
    }
}

impl<T: Float> Borders<T> {
    /// The finite endpoint of the x-interval, preferring `x1`.
    ///
    /// Returns `None` only when both endpoints are infinite.
    pub fn finite_x(&self) -> Option<T> {
        finite_of(self.x1, self.x2)
    }

    /// The finite endpoint of the y-interval, preferring `y1`.
    pub fn finite_y(&self) -> Option<T> {
        finite_of(self.y1, self.y2)
    }

    /// Applies `f` to the x endpoints and `g` to the y endpoints.
    pub fn map_axes(self, f: impl Fn(T) -> T, g: impl Fn(T) -> T) -> Self {
        Self::new(f(self.x1), f(self.x2), g(self.y1), g(self.y2))
    }
}

impl<T: Float> Default for Borders<T> {
    fn default() -> Self {
        Self::new(
            T::neg_infinity(),
            T::infinity(),
            T::neg_infinity(),
            T::infinity(),
        )
    }
}

fn finite_of<T: Float>(a: T, b: T) -> Option<T> {
    if !a.is_infinite() {
        Some(a)
    } else if !b.is_infinite() {
        Some(b)
    } else {
        None
    }
}

/// A reference point known to lie on the final mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T = f64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a new reference point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}
