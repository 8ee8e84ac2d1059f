//! The mapping facade.
//!
//! [`Mapping`] ties the pieces together: it classifies the requested borders,
//! picks the matching elementary shape, installs the borders and feeds the
//! reference points in order. The result is a fitted, read-only function.
//!
//! # Examples
//!
//! ## Half-bounded onto unbounded
//!
//! ```rust
//! use bimap::{Borders, Mapping, Point, ShapeKind};
//!
//! let inf = f64::INFINITY;
//! let e = std::f64::consts::E;
//!
//! // (3, inf) onto (-inf, inf), through (4, 5) and (3 + e, 9)
//! let mapping = Mapping::new(
//!     Borders::new(3.0, inf, -inf, inf),
//!     [Point::new(4.0, 5.0), Point::new(3.0 + e, 9.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(mapping.shape(), ShapeKind::Logarithm);
//! assert!((mapping.evaluate(3.0 + e * e) - 13.0).abs() < 1e-9);
//! ```
//!
//! ## Unbounded onto bounded
//!
//! ```rust
//! use bimap::{Borders, Mapping, Point, ShapeKind};
//!
//! let inf = f64::INFINITY;
//! let mapping = Mapping::new(
//!     Borders::new(-inf, inf, 0.0, 100.0),
//!     [Point::new(0.0, 50.0), Point::new(10.0, 75.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(mapping.shape(), ShapeKind::Arctangent);
//! assert!(mapping.evaluate(1e9) < 100.0);
//! assert!(mapping.evaluate(-1e9) > 0.0);
//! println!("{mapping}"); // Plot(... * ATan(... * x + ...) + 50)
//! ```
//!
//! ## Rejected topology
//!
//! ```rust
//! use bimap::{Borders, Mapping, MappingError, Point};
//!
//! let result = Mapping::new(
//!     Borders::new(2.0, 5.0, 1.0, 4.0),
//!     [Point::new(3.0, 2.0), Point::new(4.0, 3.0)],
//! );
//! assert!(matches!(result, Err(MappingError::UnsupportedTopology { .. })));
//! ```

use std::fmt;

use crate::border::{Borders, Point};
use crate::error::{MappingError, Result};
use crate::function::Function;
use crate::log::debug;
use crate::matcher::match_shape;
use crate::shape::{Real, ShapeKind};
use crate::signature::Signature;

/// A fitted one-to-one mapping between two intervals.
#[derive(Debug)]
pub struct Mapping<T: Real = f64> {
    function: Function<T>,
}

impl<T: Real> Mapping<T> {
    /// Builds the mapping for `borders` through two reference points.
    ///
    /// The points must lie on the desired mapping, differ from each other and
    /// stay off the shape's asymptotes.
    ///
    /// # Errors
    ///
    /// - [`MappingError::UnsupportedTopology`] when no elementary shape serves
    ///   the borders.
    /// - [`MappingError::SingularFit`] when the points do not determine the
    ///   shape's parameters.
    pub fn new(borders: Borders<T>, points: [Point<T>; 2]) -> Result<Self> {
        Self::from_points(borders, &points)
    }

    /// Builds the mapping from an ordered slice of reference points.
    ///
    /// Only the leading points the selected shape needs are used.
    ///
    /// # Errors
    ///
    /// As [`Mapping::new`], plus [`MappingError::NotEnoughPoints`] when the
    /// slice is too short.
    pub fn from_points(borders: Borders<T>, points: &[Point<T>]) -> Result<Self> {
        let signature = Signature::of(&borders);
        debug!(%signature, "classified borders");

        let kind = match_shape(&signature)?;
        let mut function = Function::new(kind);
        function.set_border(borders)?;

        let required = function.refer_point_count();
        if points.len() < required {
            return Err(MappingError::NotEnoughPoints {
                required,
                supplied: points.len(),
            });
        }
        for point in &points[..required] {
            function.set_point(*point)?;
        }

        Ok(Self { function })
    }

    /// Maps `x` through the fitted function.
    pub fn evaluate(&self, x: T) -> T {
        self.function.calc(x)
    }

    /// The elementary shape selected for the borders.
    pub fn shape(&self) -> ShapeKind {
        self.function.kind()
    }

    pub fn borders(&self) -> &Borders<T> {
        self.function.borders()
    }

    /// The reference points the mapping was fitted to.
    pub fn reference_points(&self) -> &[Point<T>] {
        self.function.points()
    }

    pub fn function(&self) -> &Function<T> {
        &self.function
    }

    /// SpeQ plot expression of the fitted formula, e.g. `Plot(2 * x + 1)`.
    pub fn describe(&self) -> String {
        self.function.plot_opt().unwrap_or_default()
    }
}

impl<T: Real> fmt::Display for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
