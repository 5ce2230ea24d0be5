//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{
    AxisPermutation, ConvexBase, ConvexShape, ShapeError, ShapeType, SupportMap, TypedShape,
    UpAxis,
};
use crate::utils::WSign;
use na::ComplexField;

/// Cylinder shape with its principal axis aligned with one of the coordinate axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The half-height of the cylinder.
    pub half_height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
    axes: AxisPermutation,
    base: ConvexBase,
}

impl Cylinder {
    /// Creates a new cylinder aligned with the `y` axis.
    ///
    /// # Arguments:
    /// * `half_height` - the half length of the cylinder along the `y` axis.
    /// * `radius` - the length of the cylinder along all other axis.
    pub fn new(half_height: Real, radius: Real) -> Cylinder {
        Self::with_up_axis(half_height, radius, UpAxis::Y)
    }

    /// Creates a new cylinder aligned with the given axis.
    pub fn with_up_axis(half_height: Real, radius: Real, up: UpAxis) -> Cylinder {
        assert!(half_height.is_sign_positive() && radius.is_sign_positive());

        Cylinder {
            half_height,
            radius,
            axes: AxisPermutation::new(up),
            base: ConvexBase::default(),
        }
    }

    /// The axis this cylinder is aligned with.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        self.axes.up_axis()
    }
}

impl SupportMap for Cylinder {
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let (a, up, b) = self.axes.split(dir);
        let planar_norm = ComplexField::sqrt(a * a + b * b);
        let up = up.copy_sign_to(self.half_height);

        if planar_norm > DEFAULT_EPSILON {
            let scale = self.radius / planar_norm;
            self.axes.compose(a * scale, up, b * scale)
        } else {
            self.axes.compose(0.0, up, 0.0)
        }
    }
}

impl ConvexShape for Cylinder {
    fn convex_base(&self) -> &ConvexBase {
        &self.base
    }

    fn convex_base_mut(&mut self) -> &mut ConvexBase {
        &mut self.base
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cylinder
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cylinder(self)
    }

    fn name(&self) -> &'static str {
        "Cylinder"
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let ratio = self.base.scaling_ratio(scaling)?;
        let (ratio_a, ratio_up, ratio_b) = self.axes.split(&ratio);

        self.half_height *= ratio_up;
        self.radius *= (ratio_a + ratio_b) / 2.0;
        self.base.store_local_scaling(*scaling);
        Ok(())
    }
}
