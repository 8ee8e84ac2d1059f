use super::{Fit, Real, Shape, ShapeKind, util};
use crate::border::{Borders, Point};
use crate::error::Result;
use crate::solve::solve;

/// Fitted parameters of `y = a*x + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearParams<T> {
    pub a: T,
    pub b: T,
}

/// Linear shape: maps `(-inf, inf)` onto `(-inf, inf)`.
///
/// The final form `a*x + b` is the straight line through the two reference
/// points; borders carry no information beyond the topology.
///
/// # Examples
///
/// ```rust
/// use bimap::{Borders, Point, Shape, shape::Linear};
///
/// let mut line = Linear::<f64>::new();
/// line.fit(
///     &Borders::default(),
///     &[Point::new(0.0, 1.0), Point::new(2.0, 5.0)],
/// )
/// .unwrap();
///
/// assert_eq!(line.calc(1.0), 3.0);
/// assert_eq!(line.plot_opt().unwrap(), "Plot(2 * x + 1)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Linear<T> {
    fit: Fit<LinearParams<T>>,
}

impl<T: Real> Linear<T> {
    pub fn new() -> Self {
        Self { fit: Fit::Pending }
    }

    pub fn params(&self) -> Option<&LinearParams<T>> {
        self.fit.params()
    }
}

impl<T: Real> Shape for Linear<T> {
    type Value = T;

    fn kind(&self) -> ShapeKind {
        ShapeKind::Linear
    }

    fn basic(&self, x: T) -> T {
        x
    }

    fn fit(&mut self, _borders: &Borders<T>, points: &[Point<T>]) -> Result<()> {
        let (p1, p2) = util::leading_pair(points)?;
        let one = T::one();

        let (a, b) = solve(p1.x, one, p1.y, p2.x, one, p2.y)
            .ok_or_else(|| util::singular(self.kind()))?;

        let params = LinearParams { a, b };
        crate::log::debug!(?params, "fitted linear shape");
        self.fit = Fit::Ready(params);
        Ok(())
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_ready()
    }

    fn calc_opt(&self, x: T) -> Option<T> {
        let p = self.fit.params()?;
        Some(p.a * x + p.b)
    }

    fn plot_opt(&self) -> Option<String> {
        let p = self.fit.params()?;
        Some(format!("Plot({} * x + {})", p.a, p.b))
    }
}
