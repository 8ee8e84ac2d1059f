use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;
use crate::solve::solve;

/// Fitted parameters of `y = c*ln(A*x + B) + d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmParams<T> {
    /// Orientation `A`: `1` when the interval opens towards `+inf`, `-1` otherwise.
    pub orientation: T,
    /// Shift `B`, placing the singularity on the finite x border.
    pub shift: T,
    pub c: T,
    pub d: T,
}

/// Logarithm shape: maps `(0, inf)` onto `(-inf, inf)`.
#[derive(Debug, Clone, Default)]
pub struct Logarithm<T> {
    fit: Fit<LogarithmParams<T>>,
}

impl<T: Real> Logarithm<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&LogarithmParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Logarithm<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Logarithm
    }

    fn basic(&self, x: T) -> T {
        x.ln()
    }

    fn fit(&mut self, borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p1, p2) = util::leading_pair(points)?;

        // A half-bounded interval sums to +inf exactly when it opens upward.
        let orientation = if borders.x1 + borders.x2 == T::infinity() {
            T::one()
        } else {
            -T::one()
        };
        let shift = -orientation * util::finite_x(borders)?;

        let l1 = (orientation * p1.x + shift).ln();
        let l2 = (orientation * p2.x + shift).ln();
        let (c, d) = solve(l1, T::one(), p1.y, l2, T::one(), p2.y)
            .ok_or_else(|| util::singular(self.kind()))?;

        let params = LogarithmParams {
            orientation,
            shift,
            c,
            d,
        };
        crate::log::debug!(?params, "fitted logarithm shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.c * (p.orientation * x + p.shift).ln() + p.d)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!(
            "Plot({} * Ln({} * x + {}) + {})",
            p.c, p.orientation, p.shift, p.d
        ))
    }
}
