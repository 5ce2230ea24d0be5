use crate::math::{Real, Vector, DEFAULT_MARGIN, DIM};
use crate::shape::ShapeError;

/// State shared by every convex shape: its collision margin and its local scaling.
///
/// The margin is a small inflation distance added around the exact geometry of the
/// shape to make collision queries numerically robust. The local scaling is the
/// per-axis scale currently applied to the geometry of the shape; shapes store their
/// dimensions already scaled and use this value to compute the ratio applied by the
/// next scaling update.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "ConvexBaseDesc"))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConvexBase {
    margin: Real,
    local_scaling: Vector<Real>,
}

impl Default for ConvexBase {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            local_scaling: Vector::repeat(1.0),
        }
    }
}

impl ConvexBase {
    /// The collision margin.
    #[inline]
    pub fn margin(&self) -> Real {
        self.margin
    }

    /// The local scaling.
    #[inline]
    pub fn local_scaling(&self) -> &Vector<Real> {
        &self.local_scaling
    }

    /// Sets the collision margin.
    ///
    /// Fails if `margin` is negative or not finite.
    pub fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        if !margin.is_finite() || margin < 0.0 {
            log::warn!("Rejected collision margin {}.", margin);
            return Err(ShapeError::InvalidMargin(margin));
        }

        self.margin = margin;
        Ok(())
    }

    /// Checks `scaling` and returns the component-wise ratio between it and the current
    /// local scaling.
    ///
    /// This does not modify `self`: geometry must be rescaled with this ratio before
    /// [`Self::store_local_scaling`] overwrites the old scaling.
    pub fn scaling_ratio(&self, scaling: &Vector<Real>) -> Result<Vector<Real>, ShapeError> {
        check_scaling(scaling)?;
        Ok(scaling.component_div(&self.local_scaling))
    }

    /// Overwrites the stored local scaling.
    ///
    /// Shapes call this last, once their geometry has been rescaled.
    #[inline]
    pub fn store_local_scaling(&mut self, scaling: Vector<Real>) {
        self.local_scaling = scaling;
    }
}

fn check_scaling(scaling: &Vector<Real>) -> Result<(), ShapeError> {
    for axis in 0..DIM {
        let value = scaling[axis];

        if !value.is_finite() || value <= 0.0 {
            log::warn!("Rejected local scaling {} along axis {}.", value, axis);
            return Err(ShapeError::InvalidScaling { axis, value });
        }
    }

    Ok(())
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct ConvexBaseDesc {
    margin: Real,
    local_scaling: Vector<Real>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<ConvexBaseDesc> for ConvexBase {
    type Error = ShapeError;

    fn try_from(desc: ConvexBaseDesc) -> Result<Self, ShapeError> {
        check_scaling(&desc.local_scaling)?;
        let mut result = ConvexBase {
            local_scaling: desc.local_scaling,
            ..ConvexBase::default()
        };
        result.set_margin(desc.margin)?;
        Ok(result)
    }
}
