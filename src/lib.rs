//! One-to-one mappings between numeric intervals
//!
//! `bimap` builds a continuous, monotonic mapping between two intervals, each
//! of which may be bounded, half-bounded or unbounded. The shape of the
//! mapping is not chosen by the caller: it follows from which endpoints are
//! infinite.
//!
//! # Core Concepts
//!
//! ## Borders and signatures
//!
//! A request is a [`Borders`] value `(x1, x2) -> (y1, y2)`. Each endpoint pair
//! is reduced by [`classify`] to a pair of [`Tag`]s that only records its
//! topology: which ends are infinite, and in which direction a bounded
//! interval runs. The four tags form a [`Signature`].
//!
//! ## Elementary shapes
//!
//! Six elementary functions cover the supported topologies:
//! - [`shape::Linear`] - `(-inf, inf)` onto `(-inf, inf)`
//! - [`shape::Reciprocal`] - half-bounded onto half-bounded
//! - [`shape::Tangent`] - bounded onto `(-inf, inf)`
//! - [`shape::Arctangent`] - `(-inf, inf)` onto bounded
//! - [`shape::Exponential`] - `(-inf, inf)` onto half-bounded
//! - [`shape::Logarithm`] - half-bounded onto `(-inf, inf)`
//!
//! A shape serves a request when its native signature equals the request's
//! signature up to reflection of either axis (see [`Signature::symmetries`]).
//! Bounded onto bounded is never served.
//!
//! ## Fitting
//!
//! The selected shape's free parameters come from the borders (asymptotes,
//! ranges) and from two reference points known to lie on the mapping. Fitting
//! is closed form or a single 2x2 linear [`solve`].
//!
//! # Examples
//!
//! ```rust
//! use bimap::{Borders, Mapping, Point, ShapeKind};
//!
//! let inf = f64::INFINITY;
//!
//! // (0, 10) onto (-inf, inf): a tangent through (5, 0) and (7.5, 1)
//! let mapping = Mapping::new(
//!     Borders::new(0.0, 10.0, -inf, inf),
//!     [Point::new(5.0, 0.0), Point::new(7.5, 1.0)],
//! )
//! .unwrap();
//!
//! assert_eq!(mapping.shape(), ShapeKind::Tangent);
//! assert!(mapping.evaluate(5.0).abs() < 1e-9);
//! assert!(mapping.evaluate(9.99) > 100.0);
//! ```
//!
//! # Features
//!
//! - `tracing`: debug events for shape selection and parameter fitting.
//! - `serde`: `Serialize`/`Deserialize` for borders, points and signatures.

#[doc(hidden)]
pub mod log;

pub mod border;
pub mod error;
pub mod function;
pub mod mapping;
pub mod matcher;
pub mod shape;
pub mod signature;
pub mod solve;

pub use border::{Borders, Point};
pub use error::{MappingError, Result};
pub use function::Function;
pub use mapping::Mapping;
pub use matcher::{find_compatible, match_shape};
pub use num_traits::Float;
pub use shape::{Fit, Real, Shape, ShapeKind};
pub use signature::{Signature, Tag, classify};
pub use solve::solve;
