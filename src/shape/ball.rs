use crate::math::{Point, PrincipalAngularInertia, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{ConvexBase, ConvexShape, ShapeError, ShapeType, SupportMap, TypedShape};
use na::Unit;

/// A Ball shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The radius of the ball.
    pub radius: Real,
    base: ConvexBase,
}

impl Ball {
    /// Creates a new ball from its radius.
    #[inline]
    pub fn new(radius: Real) -> Ball {
        Ball {
            radius,
            base: ConvexBase::default(),
        }
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match Unit::try_new(*dir, DEFAULT_EPSILON) {
            Some(dir) => self.local_support_point_toward(&dir),
            None => Point::new(self.radius, 0.0, 0.0),
        }
    }

    #[inline]
    fn local_support_point_toward(&self, dir: &Unit<Vector<Real>>) -> Point<Real> {
        Point::from(**dir * self.radius)
    }
}

impl ConvexShape for Ball {
    fn convex_base(&self) -> &ConvexBase {
        &self.base
    }

    fn convex_base_mut(&mut self) -> &mut ConvexBase {
        &mut self.base
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Ball
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Ball(self)
    }

    fn name(&self) -> &'static str {
        "Ball"
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let ratio = self.base.scaling_ratio(scaling)?;
        self.radius *= (ratio.x + ratio.y + ratio.z) / 3.0;
        self.base.store_local_scaling(*scaling);
        Ok(())
    }

    /// The exact inertia of a solid ball with the radius of this ball dilated by its margin.
    fn local_inertia(&self, mass: Real) -> PrincipalAngularInertia<Real> {
        let radius = self.radius + self.margin();
        Vector::repeat(radius * radius * mass * 2.0 / 5.0)
    }
}
