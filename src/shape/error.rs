use crate::math::Real;

/// Error returned when a shape is configured with invalid parameters.
///
/// Every fallible shape mutator leaves the shape untouched when it returns one
/// of these errors.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// An up-axis index other than `0` (X), `1` (Y), or `2` (Z) was given.
    #[error("invalid up-axis index {0}: expected 0 (X), 1 (Y), or 2 (Z).")]
    InvalidUpAxis(usize),
    /// A local scaling component is zero, negative, or not finite.
    ///
    /// Scaling updates divide by the previous scaling factor, so a zero factor
    /// would poison every subsequent update. Negative factors are rejected too: a
    /// mirrored radial axis would be averaged with the other one and could turn the
    /// radius of a cone or cylinder negative.
    #[error("invalid local scaling {value} along axis {axis}: scaling factors must be finite and positive.")]
    InvalidScaling {
        /// The offending axis.
        axis: usize,
        /// The rejected scaling factor.
        value: Real,
    },
    /// A dimension (radius, height) is negative or not finite.
    #[error("invalid {dimension} {value}: dimensions must be finite and non-negative.")]
    InvalidDimension {
        /// The name of the offending dimension.
        dimension: &'static str,
        /// The rejected value.
        value: Real,
    },
    /// A collision margin is negative or not finite.
    #[error("invalid collision margin {0}: margins must be finite and non-negative.")]
    InvalidMargin(Real),
}
