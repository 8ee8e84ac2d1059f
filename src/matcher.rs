//! Selection of the elementary shape serving a boundary signature.

use crate::error::{MappingError, Result};
use crate::log::debug;
use crate::shape::ShapeKind;
use crate::signature::Signature;

/// First shape among `candidates` whose native signature is compatible with
/// `request`.
pub fn find_compatible(request: &Signature, candidates: &[ShapeKind]) -> Option<ShapeKind> {
    candidates
        .iter()
        .copied()
        .find(|kind| request.is_compatible(&kind.native_signature()))
}

/// Picks the shape for `request`, trying [`ShapeKind::ALL`] in order.
///
/// # Examples
///
/// ```rust
/// use bimap::{Borders, ShapeKind, Signature, match_shape};
///
/// let inf = f64::INFINITY;
/// let request = Signature::of(&Borders::new(3.0, inf, -inf, inf));
/// assert_eq!(match_shape(&request), Ok(ShapeKind::Logarithm));
///
/// // No elementary shape maps a bounded interval onto a bounded interval.
/// let request = Signature::of(&Borders::new(2.0, 5.0, 1.0, 4.0));
/// assert!(match_shape(&request).is_err());
/// ```
pub fn match_shape(request: &Signature) -> Result<ShapeKind> {
    match find_compatible(request, &ShapeKind::ALL) {
        Some(kind) => {
            debug!(%request, %kind, "matched shape");
            Ok(kind)
        }
        None => {
            debug!(%request, "no compatible shape");
            Err(MappingError::UnsupportedTopology {
                signature: *request,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::Borders;

    const INF: f64 = f64::INFINITY;

    fn matched(x1: f64, x2: f64, y1: f64, y2: f64) -> Result<ShapeKind> {
        match_shape(&Signature::of(&Borders::new(x1, x2, y1, y2)))
    }

    #[test]
    fn every_shape_matches_its_own_borders() {
        for kind in ShapeKind::ALL {
            assert_eq!(match_shape(&kind.native_signature()), Ok(kind));
        }
    }

    #[test]
    fn reflections_select_the_same_shape() {
        // Reciprocal: (0, inf) -> (inf, 0) and its reflections.
        assert_eq!(matched(3.0, INF, INF, 5.0), Ok(ShapeKind::Reciprocal));
        assert_eq!(matched(3.0, INF, -INF, -5.0), Ok(ShapeKind::Reciprocal));
        assert_eq!(matched(-INF, -3.0, 5.0, INF), Ok(ShapeKind::Reciprocal));
        assert_eq!(matched(-INF, -3.0, -5.0, -INF), Ok(ShapeKind::Reciprocal));

        // Exponential decaying towards a finite asymptote.
        assert_eq!(matched(-INF, INF, INF, 1.0), Ok(ShapeKind::Exponential));
        assert_eq!(matched(-INF, INF, -1.0, -INF), Ok(ShapeKind::Exponential));

        // Decreasing tangent and arctangent.
        assert_eq!(matched(0.0, 1.0, INF, -INF), Ok(ShapeKind::Tangent));
        assert_eq!(matched(-INF, INF, 1.0, 0.0), Ok(ShapeKind::Arctangent));

        // Logarithm opening towards -inf.
        assert_eq!(matched(-INF, 0.0, INF, -INF), Ok(ShapeKind::Logarithm));
    }

    #[test]
    fn linear_covers_decreasing_lines() {
        assert_eq!(matched(-INF, INF, INF, -INF), Ok(ShapeKind::Linear));
        assert_eq!(matched(-INF, INF, -INF, INF), Ok(ShapeKind::Linear));
    }

    #[test]
    fn impossible_topologies_are_rejected() {
        for (x1, x2, y1, y2) in [
            (2.0, 5.0, 1.0, 4.0),
            (0.0, INF, 0.0, INF),
            (0.0, INF, 0.0, 1.0),
            (0.0, 1.0, 0.0, INF),
            // A reversed unbounded x axis is not a reflection of (-inf, inf).
            (INF, -INF, -INF, INF),
        ] {
            let err = matched(x1, x2, y1, y2).unwrap_err();
            assert_eq!(
                err,
                MappingError::UnsupportedTopology {
                    signature: Signature::of(&Borders::new(x1, x2, y1, y2))
                }
            );
        }
    }

    #[test]
    fn candidate_order_decides_ties() {
        let request = ShapeKind::Logarithm.native_signature();
        assert_eq!(
            find_compatible(&request, &[ShapeKind::Tangent, ShapeKind::Logarithm]),
            Some(ShapeKind::Logarithm)
        );
        assert_eq!(find_compatible(&request, &[ShapeKind::Linear]), None);
    }
}
