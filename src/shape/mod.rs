//! Elementary function shapes.
//!
//! Every shape has a *basic* form, the unscaled elementary function on its
//! native interval, and a *final* form whose free parameters are fitted to the
//! caller's borders and reference points.
//!
//! | Shape                        | Basic domain   | Basic range    | Final form             |
//! |------------------------------|----------------|----------------|------------------------|
//! | [`Linear`]                   | `(-inf, inf)`  | `(-inf, inf)`  | `a*x + b`              |
//! | [`Reciprocal`]               | `(0, inf)`     | `(inf, 0)`     | `c/(x + B) + D`        |
//! | [`Tangent`]                  | `(-pi/2, pi/2)`| `(-inf, inf)`  | `c*tan(A*x + B) + d`   |
//! | [`Arctangent`]               | `(-inf, inf)`  | `(-pi/2, pi/2)`| `C*atan(a*x + b) + D`  |
//! | [`Exponential`]              | `(-inf, inf)`  | `(0, inf)`     | `c*exp(a*x) + D`       |
//! | [`Logarithm`]                | `(0, inf)`     | `(-inf, inf)`  | `c*ln(A*x + B) + d`    |
//!
//! Shapes are driven through the [`Shape`] trait so a [`Function`](crate::Function)
//! can hold any of them behind a `Box<dyn Shape<Value = T>>`.

mod arctangent;
mod exponential;
mod linear;
mod logarithm;
mod reciprocal;
mod tangent;
pub(crate) mod util;

use std::fmt;

use num_traits::{Float, FloatConst};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::border::{Borders, Point};
use crate::error::Result;
use crate::signature::Signature;

pub use arctangent::{Arctangent, ArctangentParams};
pub use exponential::{Exponential, ExponentialParams};
pub use linear::{Linear, LinearParams};
pub use logarithm::{Logarithm, LogarithmParams};
pub use reciprocal::{Reciprocal, ReciprocalParams};
pub use tangent::{Tangent, TangentParams};

/// Floating-point types a mapping can be computed in.
///
/// Implemented for every type meeting the bounds, in practice `f32` and `f64`.
pub trait Real: Float + FloatConst + fmt::Display + fmt::Debug + 'static {}

impl<T> Real for T where T: Float + FloatConst + fmt::Display + fmt::Debug + 'static {}

/// Identity of an elementary shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    Linear,
    Reciprocal,
    Tangent,
    Arctangent,
    Exponential,
    Logarithm,
}

impl ShapeKind {
    /// All shapes, in the order the matcher tries them.
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Linear,
        ShapeKind::Reciprocal,
        ShapeKind::Tangent,
        ShapeKind::Arctangent,
        ShapeKind::Exponential,
        ShapeKind::Logarithm,
    ];

    /// Creates an unfitted shape of this kind.
    pub fn build<T: Real>(self) -> Box<dyn Shape<Value = T>> {
        match self {
            ShapeKind::Linear => Box::new(Linear::<T>::new()),
            ShapeKind::Reciprocal => Box::new(Reciprocal::<T>::new()),
            ShapeKind::Tangent => Box::new(Tangent::<T>::new()),
            ShapeKind::Arctangent => Box::new(Arctangent::<T>::new()),
            ShapeKind::Exponential => Box::new(Exponential::<T>::new()),
            ShapeKind::Logarithm => Box::new(Logarithm::<T>::new()),
        }
    }

    /// Native boundaries of the basic form.
    pub fn basic_borders<T: Real>(self) -> Borders<T> {
        let inf = T::infinity();
        let half_pi = T::FRAC_PI_2();
        match self {
            ShapeKind::Linear => Borders::new(-inf, inf, -inf, inf),
            ShapeKind::Reciprocal => Borders::new(T::zero(), inf, inf, T::zero()),
            ShapeKind::Tangent => Borders::new(-half_pi, half_pi, -inf, inf),
            ShapeKind::Arctangent => Borders::new(-inf, inf, -half_pi, half_pi),
            ShapeKind::Exponential => Borders::new(-inf, inf, T::zero(), inf),
            ShapeKind::Logarithm => Borders::new(T::zero(), inf, -inf, inf),
        }
    }

    /// Boundary signature of the basic form.
    pub fn native_signature(self) -> Signature {
        Signature::of(&self.basic_borders::<f64>())
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Linear => "x",
            ShapeKind::Reciprocal => "1/x",
            ShapeKind::Tangent => "tan",
            ShapeKind::Arctangent => "atan",
            ShapeKind::Exponential => "exp",
            ShapeKind::Logarithm => "ln",
        };
        f.write_str(name)
    }
}

/// Fitting state of a shape's final-form parameters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fit<P> {
    /// Parameters not yet determined.
    #[default]
    Pending,
    /// Parameters fitted to borders and reference points.
    Ready(P),
}

impl<P> Fit<P> {
    /// The fitted parameters, if any.
    pub fn params(&self) -> Option<&P> {
        match self {
            Fit::Pending => None,
            Fit::Ready(params) => Some(params),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Fit::Ready(_))
    }
}

/// An elementary function shape.
///
/// Implementors fix their basic form at construction and learn their final
/// form through [`Shape::fit`]. Until a fit succeeds the `_opt` methods return
/// `None` and the non-`_opt` methods panic.
pub trait Shape {
    /// Float type the shape computes in.
    type Value: Real;

    fn kind(&self) -> ShapeKind;

    /// Native boundaries of the basic form.
    fn basic_borders(&self) -> Borders<Self::Value> {
        self.kind().basic_borders()
    }

    /// Evaluates the basic (unscaled) form.
    fn basic(&self, x: Self::Value) -> Self::Value;

    /// Number of reference points [`Shape::fit`] needs.
    fn refer_point_count(&self) -> usize {
        2
    }

    /// Fits the final-form parameters.
    ///
    /// `borders` must be compatible with [`Shape::basic_borders`]; only the
    /// first [`Shape::refer_point_count`] entries of `points` are used. On
    /// error the previous fitting state is left untouched.
    fn fit(
        &mut self,
        borders: &Borders<Self::Value>,
        points: &[Point<Self::Value>],
    ) -> Result<()>;

    fn is_fitted(&self) -> bool;

    /// Evaluates the final form, or `None` before a successful fit.
    fn calc_opt(&self, x: Self::Value) -> Option<Self::Value>;

    /// Evaluates the final form.
    ///
    /// # Panics
    ///
    /// Panics when called before a successful [`Shape::fit`].
    fn calc(&self, x: Self::Value) -> Self::Value {
        match self.calc_opt(x) {
            Some(y) => y,
            None => panic!(
                "{} shape evaluated before its parameters were fitted",
                self.kind()
            ),
        }
    }

    /// SpeQ plot expression of the final form, or `None` before a fit.
    fn plot_opt(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Tag;

    #[test]
    fn native_signatures() {
        use Tag::*;
        let expected = [
            (ShapeKind::Linear, (NegInf, PosInf), (NegInf, PosInf)),
            (ShapeKind::Reciprocal, (HalfOpen, PosInf), (PosInf, HalfOpen)),
            (ShapeKind::Tangent, (Start, End), (NegInf, PosInf)),
            (ShapeKind::Arctangent, (NegInf, PosInf), (Start, End)),
            (ShapeKind::Exponential, (NegInf, PosInf), (HalfOpen, PosInf)),
            (ShapeKind::Logarithm, (HalfOpen, PosInf), (NegInf, PosInf)),
        ];
        for (kind, x, y) in expected {
            assert_eq!(kind.native_signature(), Signature::new(x, y), "{kind}");
        }
    }

    #[test]
    fn build_preserves_kind() {
        for kind in ShapeKind::ALL {
            let shape = kind.build::<f64>();
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.refer_point_count(), 2);
            assert!(!shape.is_fitted());
            assert_eq!(shape.calc_opt(1.0), None);
            assert_eq!(shape.plot_opt(), None);
        }
    }

    #[test]
    fn basic_forms_hit_their_borders() {
        let inf = f64::INFINITY;
        assert_eq!(ShapeKind::Reciprocal.build::<f64>().basic(0.0), inf);
        assert_eq!(ShapeKind::Exponential.build::<f64>().basic(-inf), 0.0);
        assert_eq!(ShapeKind::Logarithm.build::<f64>().basic(0.0), -inf);
        let atan = ShapeKind::Arctangent.build::<f64>();
        assert_eq!(atan.basic(inf), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    #[should_panic(expected = "exp shape evaluated before its parameters were fitted")]
    fn calc_before_fit_panics() {
        ShapeKind::Exponential.build::<f64>().calc(0.0);
    }

    #[test]
    fn fit_state() {
        let mut fit: Fit<(f64, f64)> = Fit::default();
        assert!(!fit.is_ready());
        assert_eq!(fit.params(), None);
        fit = Fit::Ready((1.0, 2.0));
        assert_eq!(fit.params(), Some(&(1.0, 2.0)));
    }
}
