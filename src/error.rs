//! Errors raised while selecting and fitting a mapping.

use thiserror::Error;

use crate::shape::ShapeKind;
use crate::signature::Signature;

/// Failure to build a mapping.
///
/// None of these are transient: the same inputs always fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    /// No elementary shape covers the requested boundary topology under any
    /// of the allowed reflections.
    #[error("no compatible shape for boundary signature {signature}")]
    UnsupportedTopology { signature: Signature },

    /// The reference points do not determine the shape's parameters
    /// (duplicate points, or points sitting on an asymptote).
    #[error("reference points do not determine a unique {kind} mapping")]
    SingularFit { kind: ShapeKind },

    /// Fewer reference points than the selected shape needs.
    #[error("{required} reference points required, {supplied} supplied")]
    NotEnoughPoints { required: usize, supplied: usize },
}

pub type Result<T, E = MappingError> = std::result::Result<T, E>;
