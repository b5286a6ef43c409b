//! Error type reported by curve construction, evaluation and sampling.

use thiserror::Error;

/// Everything that can go wrong when defining, sampling or evaluating a curve.
///
/// All of these are deterministic input validation failures.
/// There is no point in retrying any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A curve needs at least two control points to have a degree of at least one.
    #[error("a curve needs at least two control points, got {0}")]
    TooFewPoints(usize),

    /// Weights must be positive since back projection divides by an interpolated weight.
    #[error("control point {index} has a non-positive weight")]
    NonPositiveWeight {
        /// Index of the offending point in the control polygon
        index: usize,
    },

    /// The sample step must lie in the half open interval `(0, 1]`.
    #[error("sample step must lie in (0, 1]")]
    StepOutOfRange,

    /// The curve parameter must be a finite number.
    ///
    /// Values outside `[0, 1]` are fine (they extrapolate), NaN and infinity are not.
    #[error("curve parameter is not finite")]
    NonFiniteParameter,

    /// The interpolated weight reached zero, so the curve point is at infinity.
    #[error("interpolated weight reached zero, the curve point is at infinity")]
    DegenerateWeight,
}
