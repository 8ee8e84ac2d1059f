use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;

/// Fitted parameters of `y = c*exp(a*x) + D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialParams<T> {
    pub a: T,
    pub c: T,
    /// Horizontal asymptote `D`.
    pub d: T,
}

/// Exponential shape: maps `(-inf, inf)` onto `(0, inf)`.
///
/// The finite y border is the horizontal asymptote; the rate and scale follow
/// in closed form from the two reference points.
#[derive(Debug, Clone, Default)]
pub struct Exponential<T> {
    fit: Fit<ExponentialParams<T>>,
}

impl<T: Real> Exponential<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&ExponentialParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Exponential<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Exponential
    }

    fn basic(&self, x: T) -> T {
        x.exp()
    }

    fn fit(&mut self, borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p1, p2) = util::leading_pair(points)?;

        let d = util::finite_y(borders)?;
        let a = ((p2.y - d) / (p1.y - d)).ln() / (p2.x - p1.x);
        let c = (p1.y - d) / (a * p1.x).exp();

        util::ensure_finite(self.kind(), &[a, c])?;
        if a == T::zero() || c == T::zero() {
            return Err(util::singular(self.kind()));
        }

        let params = ExponentialParams { a, c, d };
        crate::log::debug!(?params, "fitted exponential shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.c * (p.a * x).exp() + p.d)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!("Plot({} * Exp({} * x) + {})", p.c, p.a, p.d))
    }
}
