use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;
use crate::solve::solve;

/// Fitted parameters of `y = C*atan(a*x + b) + D`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArctangentParams<T> {
    pub a: T,
    pub b: T,
    /// Range scale `C`.
    pub scale: T,
    /// Range centre `D`.
    pub offset: T,
}

/// Arctangent shape: maps `(-inf, inf)` onto a bounded interval.
///
/// `C` and `D` come from the y borders alone, with the range narrowed by the
/// asymptote margin. Each reference point is pulled back through `tan` so
/// that `a` and `b` solve a linear system.
#[derive(Debug, Clone, Default)]
pub struct Arctangent<T> {
    fit: Fit<ArctangentParams<T>>,
}

impl<T: Real> Arctangent<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&ArctangentParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Arctangent<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Arctangent
    }

    fn basic(&self, x: T) -> T {
        x.atan()
    }

    fn fit(&mut self, borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p1, p2) = util::leading_pair(points)?;
        let two = T::one() + T::one();
        let scale = util::narrow(borders.y2 - borders.y1) / T::PI();
        let offset = (borders.y1 + borders.y2) / two;
        util::ensure_finite(self.kind(), &[scale, offset])?;

        let u1 = ((p1.y - offset) / scale).tan();
        let u2 = ((p2.y - offset) / scale).tan();
        let (a, b) = solve(p1.x, T::one(), u1, p2.x, T::one(), u2)
            .ok_or_else(|| util::singular(self.kind()))?;

        let params = ArctangentParams {
            a,
            b,
            scale,
            offset,
        };
        crate::log::debug!(?params, "fitted arctangent shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.scale * (p.a * x + p.b).atan() + p.offset)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!(
            "Plot({} * ATan({} * x + {}) + {})",
            p.scale, p.a, p.b, p.offset
        ))
    }
}
