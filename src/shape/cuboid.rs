//! Support mapping based Cuboid shape.

use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexBase, ConvexShape, ShapeError, ShapeType, SupportMap, TypedShape};
use crate::utils::WSign;

/// Shape of a box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
    base: ConvexBase,
}

impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid {
            half_extents,
            base: ConvexBase::default(),
        }
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        dir.copy_sign_to(self.half_extents).into()
    }
}

impl ConvexShape for Cuboid {
    fn convex_base(&self) -> &ConvexBase {
        &self.base
    }

    fn convex_base_mut(&mut self) -> &mut ConvexBase {
        &mut self.base
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cuboid
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cuboid(self)
    }

    fn name(&self) -> &'static str {
        "Cuboid"
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let ratio = self.base.scaling_ratio(scaling)?;
        self.half_extents.component_mul_assign(&ratio);
        self.base.store_local_scaling(*scaling);
        Ok(())
    }
}
