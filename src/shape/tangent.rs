use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;
use crate::solve::solve;

/// Fitted parameters of `y = c*tan(A*x + B) + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TangentParams<T> {
    /// Angular scale `A`.
    pub angular: T,
    /// Phase `B`.
    pub phase: T,
    pub c: T,
    pub d: T,
}

/// Tangent shape: maps a bounded interval onto `(-inf, inf)`.
///
/// `A` and `B` place the two asymptotes just outside the x borders, widening
/// the interval by [`asymptote_margin`](util::asymptote_margin) on each side,
/// so evaluation stays finite everywhere inside it. The reference points then
/// fix `c` and `d` through a linear solve.
#[derive(Debug, Clone, Default)]
pub struct Tangent<T> {
    fit: Fit<TangentParams<T>>,
}

impl<T: Real> Tangent<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&TangentParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Tangent<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Tangent
    }

    fn basic(&self, x: T) -> T {
        x.tan()
    }

    fn fit(&mut self, borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p1, p2) = util::leading_pair(points)?;
        let two = T::one() + T::one();
        let angular = T::PI() / util::widen(borders.x2 - borders.x1);
        let phase = -angular * (borders.x2 + borders.x1) / two;
        util::ensure_finite(self.kind(), &[angular, phase])?;

        let t1 = (angular * p1.x + phase).tan();
        let t2 = (angular * p2.x + phase).tan();
        let (c, d) = solve(t1, T::one(), p1.y, t2, T::one(), p2.y)
            .ok_or_else(|| util::singular(self.kind()))?;

        let params = TangentParams {
            angular,
            phase,
            c,
            d,
        };
        crate::log::debug!(?params, "fitted tangent shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.c * (p.angular * x + p.phase).tan() + p.d)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!(
            "Plot({} * Tan({} * x + {}) + {})",
            p.c, p.angular, p.phase, p.d
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MappingError;

    const INF: f64 = f64::INFINITY;

    fn fitted(borders: Borders<f64>, points: [(f64, f64); 2]) -> Tangent<f64> {
        let mut shape = Tangent::new();
        shape.fit(&borders, &points.map(Point::from)).unwrap();
        shape
    }

    #[test]
    fn symmetric_interval() {
        // 2*tan(x) + 1 on (-pi/2, pi/2)
        let half_pi = std::f64::consts::FRAC_PI_2;
        let f = |x: f64| 2.0 * x.tan() + 1.0;
        let shape = fitted(
            Borders::new(-half_pi, half_pi, -INF, INF),
            [(0.0, f(0.0)), (0.5, f(0.5))],
        );

        for x in [-1.5, -0.7, 0.25, 1.2, 1.5] {
            let expected = f(x);
            assert!(
                ((shape.calc(x) - expected) / expected).abs() < 1e-6,
                "x = {x}: {} != {expected}",
                shape.calc(x)
            );
        }
    }

    #[test]
    fn asymptotes_sit_outside_borders() {
        let shape = fitted(
            Borders::new(0.0, 10.0, -INF, INF),
            [(2.0, -1.0), (5.0, 0.0)],
        );
        let p = shape.params().unwrap();

        // The argument at the borders stays strictly inside (-pi/2, pi/2).
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert!(p.angular * 0.0 + p.phase > -half_pi);
        assert!(p.angular * 10.0 + p.phase < half_pi);
        assert!(shape.calc(0.0).is_finite());
        assert!(shape.calc(10.0).is_finite());
    }

    #[test]
    fn reversed_y_range_decreases() {
        // (0, 10) -> (inf, -inf): y falls from +inf to -inf as x grows.
        let shape = fitted(
            Borders::new(0.0, 10.0, INF, -INF),
            [(2.0, 1.0), (5.0, 0.0)],
        );
        assert!(shape.calc(1.0) > shape.calc(3.0));
        assert!(shape.calc(3.0) > shape.calc(9.0));
    }

    #[test]
    fn f32_interval_keeps_its_margin() {
        let mut shape = Tangent::<f32>::new();
        shape
            .fit(
                &Borders::new(0.0, 100.0, f32::NEG_INFINITY, f32::INFINITY),
                &[Point::new(20.0, -1.0), Point::new(50.0, 0.0)],
            )
            .unwrap();
        // Period of the fitted tangent, i.e. the distance between asymptotes.
        let period = std::f32::consts::PI / shape.params().unwrap().angular;
        assert!(period > 100.0, "{period}");
    }

    #[test]
    fn duplicate_points_are_singular() {
        let mut shape = Tangent::<f64>::new();
        let err = shape
            .fit(
                &Borders::new(0.0, 1.0, -INF, INF),
                &[Point::new(0.3, 1.0), Point::new(0.3, 1.0)],
            )
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::SingularFit {
                kind: ShapeKind::Tangent
            }
        );
    }
}
