use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;

/// Fitted parameters of `y = c/(x + B) + D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReciprocalParams<T> {
    pub c: T,
    pub b: T,
    pub d: T,
}

/// Reciprocal shape: maps `(0, inf)` onto `(inf, 0)`.
///
/// The vertical asymptote sits on the finite x border and the horizontal one
/// on the finite y border, so a single reference point fixes the scale. The
/// second point is not consulted.
#[derive(Debug, Clone, Default)]
pub struct Reciprocal<T> {
    fit: Fit<ReciprocalParams<T>>,
}

impl<T: Real> Reciprocal<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&ReciprocalParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Reciprocal<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Reciprocal
    }

    fn basic(&self, x: T) -> T {
        x.recip()
    }

    fn fit(&mut self, borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p, _) = util::leading_pair(points)?;

        let b = -util::finite_x(borders)?;
        let d = util::finite_y(borders)?;
        let c = (p.y - d) * (p.x + b);

        util::ensure_finite(self.kind(), &[c])?;
        if c == T::zero() {
            return Err(util::singular(self.kind()));
        }

        let params = ReciprocalParams { c, b, d };
        crate::log::debug!(?params, "fitted reciprocal shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.c / (x + p.b) + p.d)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!("Plot({} / (x + {}) + {})", p.c, p.b, p.d))
    }
}
