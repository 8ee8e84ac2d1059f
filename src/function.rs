//! Border and reference-point bookkeeping around a single shape.

use std::fmt;

use crate::border::{Borders, Point};
use crate::error::{MappingError, Result};
use crate::shape::{Real, Shape, ShapeKind};
use crate::signature::Signature;

/// A shape together with the borders and reference points it is fitted to.
///
/// A `Function` starts out with the shape's basic borders and no points.
/// [`Function::set_border`] installs final borders and [`Function::set_point`]
/// accumulates reference points; the shape is fitted as soon as both are in
/// place, whichever arrives last.
///
/// Once fitted, further points are recorded but do not change the fit: the
/// first [`Function::refer_point_count`] points are authoritative.
///
/// # Examples
///
/// ```rust
/// use bimap::{Borders, Function, Point, ShapeKind};
///
/// let mut f = Function::<f64>::new(ShapeKind::Exponential);
/// f.set_border(Borders::new(f64::NEG_INFINITY, f64::INFINITY, 1.0, f64::INFINITY))
///     .unwrap();
/// assert_eq!(f.calc_opt(0.0), None);
///
/// f.set_point(Point::new(0.0, 2.0)).unwrap();
/// f.set_point(Point::new(1.0, 1.0 + std::f64::consts::E)).unwrap();
/// assert!((f.calc(2.0) - (1.0 + (2.0f64).exp())).abs() < 1e-9);
/// ```
pub struct Function<T: Real = f64> {
    shape: Box<dyn Shape<Value = T>>,
    borders: Borders<T>,
    points: Vec<Point<T>>,
}

impl<T: Real> Function<T> {
    /// Creates an unfitted function of the given shape.
    pub fn new(kind: ShapeKind) -> Self {
        Self::from_shape(kind.build())
    }

    /// Wraps an existing shape, starting from its basic borders.
    pub fn from_shape(shape: Box<dyn Shape<Value = T>>) -> Self {
        let borders = shape.basic_borders();
        Self {
            shape,
            borders,
            points: Vec::new(),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &dyn Shape<Value = T> {
        self.shape.as_ref()
    }

    /// Current borders: basic until [`Function::set_border`] succeeds.
    pub fn borders(&self) -> &Borders<T> {
        &self.borders
    }

    /// Reference points received so far, in order.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn refer_point_count(&self) -> usize {
        self.shape.refer_point_count()
    }

    pub fn is_fitted(&self) -> bool {
        self.shape.is_fitted()
    }

    /// Installs final borders, refitting if enough points are already held.
    ///
    /// Borders whose signature the shape cannot serve are rejected with
    /// [`MappingError::UnsupportedTopology`]. On any error the previous
    /// borders and fit are kept.
    pub fn set_border(&mut self, borders: Borders<T>) -> Result<()> {
        let signature = Signature::of(&borders);
        if !signature.is_compatible(&Signature::of(&self.shape.basic_borders())) {
            return Err(MappingError::UnsupportedTopology { signature });
        }

        if self.points.len() >= self.refer_point_count() {
            self.shape.fit(&borders, &self.points)?;
        }
        self.borders = borders;
        Ok(())
    }

    /// Appends a reference point, fitting once enough points are held.
    ///
    /// A point whose arrival makes the fit fail is not recorded, so a
    /// replacement may be supplied.
    pub fn set_point(&mut self, point: Point<T>) -> Result<()> {
        self.points.push(point);

        if self.shape.is_fitted() || self.points.len() < self.refer_point_count() {
            return Ok(());
        }

        if let Err(err) = self.shape.fit(&self.borders, &self.points) {
            self.points.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Evaluates the final form, or `None` before the fit.
    pub fn calc_opt(&self, x: T) -> Option<T> {
        self.shape.calc_opt(x)
    }

    /// Evaluates the final form.
    ///
    /// # Panics
    ///
    /// Panics before the shape is fitted.
    pub fn calc(&self, x: T) -> T {
        self.shape.calc(x)
    }

    /// Evaluates the basic form.
    pub fn basic(&self, x: T) -> T {
        self.shape.basic(x)
    }

    /// SpeQ plot expression of the final form.
    pub fn plot_opt(&self) -> Option<String> {
        self.shape.plot_opt()
    }
}

impl<T: Real> fmt::Debug for Function<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("kind", &self.kind())
            .field("borders", &self.borders)
            .field("points", &self.points)
            .field("fitted", &self.is_fitted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INF: f64 = f64::INFINITY;

    #[test]
    fn starts_with_basic_borders() {
        let f = Function::<f64>::new(ShapeKind::Reciprocal);
        assert_eq!(*f.borders(), Borders::new(0.0, INF, INF, 0.0));
        assert!(f.points().is_empty());
        assert!(!f.is_fitted());
        assert_eq!(f.basic(4.0), 0.25);
    }

    #[test]
    fn fits_when_second_point_arrives() {
        let mut f = Function::<f64>::new(ShapeKind::Linear);
        f.set_border(Borders::default()).unwrap();
        f.set_point(Point::new(0.0, 1.0)).unwrap();
        assert!(!f.is_fitted());
        f.set_point(Point::new(1.0, 3.0)).unwrap();
        assert!(f.is_fitted());
        assert_eq!(f.calc(2.0), 5.0);
    }

    #[test]
    fn fits_when_borders_arrive_last() {
        let mut f = Function::<f64>::new(ShapeKind::Reciprocal);
        // Against the basic borders (0, inf) -> (inf, 0).
        f.set_point(Point::new(1.0, 2.0)).unwrap();
        f.set_point(Point::new(2.0, 1.0)).unwrap();
        assert_eq!(f.calc(4.0), 0.5);

        // Re-bordering refits: the horizontal asymptote moves to y = 1.
        f.set_border(Borders::new(0.0, INF, INF, 1.0)).unwrap();
        assert_eq!(f.calc(4.0), 1.25);
    }

    #[test]
    fn extra_points_do_not_change_the_fit() {
        let mut f = Function::<f64>::new(ShapeKind::Linear);
        f.set_point(Point::new(0.0, 0.0)).unwrap();
        f.set_point(Point::new(1.0, 1.0)).unwrap();
        f.set_point(Point::new(2.0, 10.0)).unwrap();
        assert_eq!(f.points().len(), 3);
        assert_eq!(f.calc(2.0), 2.0);
    }

    #[test]
    fn failing_point_is_dropped() {
        let mut f = Function::<f64>::new(ShapeKind::Linear);
        f.set_point(Point::new(1.0, 0.0)).unwrap();
        let err = f.set_point(Point::new(1.0, 5.0)).unwrap_err();
        assert_eq!(
            err,
            MappingError::SingularFit {
                kind: ShapeKind::Linear
            }
        );
        assert_eq!(f.points().len(), 1);

        f.set_point(Point::new(2.0, 5.0)).unwrap();
        assert_eq!(f.calc(3.0), 10.0);
    }

    #[test]
    fn incompatible_borders_are_rejected() {
        let mut f = Function::<f64>::new(ShapeKind::Exponential);
        let err = f.set_border(Borders::new(0.0, 1.0, 0.0, 1.0)).unwrap_err();
        assert!(matches!(err, MappingError::UnsupportedTopology { .. }));
        assert_eq!(*f.borders(), Borders::new(-INF, INF, 0.0, INF));
    }

    #[test]
    fn debug_output_names_the_shape() {
        let f = Function::<f64>::new(ShapeKind::Tangent);
        let debug = format!("{f:?}");
        assert!(debug.starts_with("Function { kind: Tangent"), "{debug}");
    }
}
