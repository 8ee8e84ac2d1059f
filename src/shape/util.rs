use num_traits::Float;

use crate::border::{Borders, Point};
use crate::error::{MappingError, Result};
use crate::shape::ShapeKind;
use crate::signature::Signature;

/// Distance kept from an asymptote placed exactly on a finite border of an
/// interval spanning `span`.
///
/// Tangent borders are pushed outward and arctangent borders pulled inward by
/// this amount so the fitted curve stays finite strictly inside the interval.
/// The margin is 1e-8, or one machine epsilon of the span when that is larger,
/// so it does not vanish in rounding for `f32` or very wide intervals.
pub fn asymptote_margin<T: Float>(span: T) -> T {
    T::from(1e-8).unwrap().max(span.abs() * T::epsilon())
}

/// `span` with both ends moved outward by [`asymptote_margin`], whichever way
/// the interval runs.
pub fn widen<T: Float>(span: T) -> T {
    span + two_margins(span)
}

/// `span` with both ends moved inward by [`asymptote_margin`].
pub fn narrow<T: Float>(span: T) -> T {
    span - two_margins(span)
}

fn two_margins<T: Float>(span: T) -> T {
    (asymptote_margin(span) + asymptote_margin(span)) * span.signum()
}

/// The first two reference points.
pub fn leading_pair<T: Float>(points: &[Point<T>]) -> Result<(Point<T>, Point<T>)> {
    match points {
        [p1, p2, ..] => Ok((*p1, *p2)),
        _ => Err(MappingError::NotEnoughPoints {
            required: 2,
            supplied: points.len(),
        }),
    }
}

/// The finite x border of a half-bounded interval.
pub fn finite_x<T: Float>(borders: &Borders<T>) -> Result<T> {
    borders.finite_x().ok_or_else(|| unsupported(borders))
}

/// The finite y border of a half-bounded interval.
pub fn finite_y<T: Float>(borders: &Borders<T>) -> Result<T> {
    borders.finite_y().ok_or_else(|| unsupported(borders))
}

/// Fails with [`MappingError::SingularFit`] unless every parameter is finite.
pub fn ensure_finite<T: Float>(kind: ShapeKind, params: &[T]) -> Result<()> {
    if params.iter().all(|p| p.is_finite()) {
        Ok(())
    } else {
        Err(singular(kind))
    }
}

pub fn singular(kind: ShapeKind) -> MappingError {
    crate::log::debug!(%kind, "singular fit");
    MappingError::SingularFit { kind }
}

fn unsupported<T: Float>(borders: &Borders<T>) -> MappingError {
    MappingError::UnsupportedTopology {
        signature: Signature::of(borders),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_survives_f32_rounding() {
        assert_eq!(asymptote_margin(10.0f64), 1e-8);
        let narrowed = narrow(100.0f32);
        assert!(narrowed < 100.0 && narrowed > 99.99);
        assert!(widen(100.0f32) > 100.0);
    }

    #[test]
    fn widen_follows_interval_direction() {
        assert!(widen(10.0) > 10.0);
        assert!(widen(-10.0) < -10.0);
        assert!(narrow(10.0) < 10.0);
        assert!(narrow(-10.0) > -10.0);
        assert_eq!(narrow(-10.0), -narrow(10.0));
    }

    #[test]
    fn leading_pair_ignores_extra_points() {
        let points = [Point::new(1.0, 2.0), Point::new(3.0, 4.0), Point::new(5.0, 6.0)];
        let (p1, p2) = leading_pair(&points).unwrap();
        assert_eq!(p1, Point::new(1.0, 2.0));
        assert_eq!(p2, Point::new(3.0, 4.0));
    }

    #[test]
    fn leading_pair_needs_two_points() {
        let err = leading_pair(&[Point::new(1.0, 2.0)]).unwrap_err();
        assert_eq!(
            err,
            MappingError::NotEnoughPoints {
                required: 2,
                supplied: 1
            }
        );
    }

    #[test]
    fn finite_borders_of_unbounded_axis_are_unsupported() {
        let borders = Borders::<f64>::default();
        assert!(matches!(
            finite_x(&borders),
            Err(MappingError::UnsupportedTopology { .. })
        ));
        assert!(matches!(
            finite_y(&borders),
            Err(MappingError::UnsupportedTopology { .. })
        ));
    }

    #[test]
    fn ensure_finite_reports_kind() {
        assert!(ensure_finite(ShapeKind::Linear, &[1.0, -2.0]).is_ok());
        assert_eq!(
            ensure_finite(ShapeKind::Exponential, &[1.0, f64::NAN]),
            Err(MappingError::SingularFit {
                kind: ShapeKind::Exponential
            })
        );
    }
}
