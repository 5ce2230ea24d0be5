//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};
use na::Unit;

/// Trait of convex shapes representable by a support mapping function.
///
/// The support mapping of a convex shape associates a direction `dir` to the point of
/// the shape maximizing its dot product with `dir`. The points returned here are
/// those of the exact geometry: collision margins are never included.
pub trait SupportMap {
    /// Evaluates the support function of this shape in its local-space.
    ///
    /// `dir` does not need to be normalized and may be zero, in which case any
    /// point of the shape is a valid answer.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// Same as `self.local_support_point` except that `dir` is normalized.
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        self.local_support_point(dir.as_ref())
    }

    /// Evaluates the support function of this shape transformed by `transform`.
    ///
    /// Both `dir` and the returned point are expressed in the frame `transform` maps to.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = transform.inverse_transform_vector(dir);
        transform * self.local_support_point(&local_dir)
    }
}
