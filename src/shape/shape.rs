use crate::bounding_volume::{self, Aabb, BoundingVolume};
use crate::mass_properties::MassProperties;
use crate::math::{
    Isometry, Point, Point4, PrincipalAngularInertia, Real, Vector, DEFAULT_EPSILON,
};
use crate::shape::{Ball, Cone, ConvexBase, Cuboid, Cylinder, ShapeError, SupportMap};
use downcast_rs::{impl_downcast, DowncastSync};
use na::Unit;
use num_derive::FromPrimitive;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
/// Enum representing the type of a shape.
pub enum ShapeType {
    /// A ball shape.
    Ball = 0,
    /// A cuboid shape.
    Cuboid,
    /// A cylindrical shape.
    Cylinder,
    /// A conical shape.
    Cone,
    /// A custom user-defined shape.
    Custom,
}

#[derive(Copy, Clone)]
/// Enum representing the shape with its actual type
pub enum TypedShape<'a> {
    /// A ball shape.
    Ball(&'a Ball),
    /// A cuboid shape.
    Cuboid(&'a Cuboid),
    /// A cylindrical shape.
    Cylinder(&'a Cylinder),
    /// A conical shape.
    Cone(&'a Cone),
    /// A custom user-defined shape.
    Custom(&'a dyn ConvexShape),
}

impl<'a> TypedShape<'a> {
    /// The type tag of the referenced shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            TypedShape::Ball(_) => ShapeType::Ball,
            TypedShape::Cuboid(_) => ShapeType::Cuboid,
            TypedShape::Cylinder(_) => ShapeType::Cylinder,
            TypedShape::Cone(_) => ShapeType::Cone,
            TypedShape::Custom(_) => ShapeType::Custom,
        }
    }

    /// The referenced shape, as a trait-object.
    pub fn as_convex_shape(&self) -> &'a dyn ConvexShape {
        match *self {
            TypedShape::Ball(s) => s,
            TypedShape::Cuboid(s) => s,
            TypedShape::Cylinder(s) => s,
            TypedShape::Cone(s) => s,
            TypedShape::Custom(s) => s,
        }
    }
}

/// The capabilities every convex shape exposes to collision detection and dynamics.
///
/// The exact geometry is given by the [`SupportMap`] supertrait. On top of it, this
/// trait adds the collision margin and local scaling stored in the shape's
/// [`ConvexBase`], bounding boxes, and an approximation of the angular inertia.
///
/// # Margins
/// [`Self::local_supporting_vertex`] is the entry point for queries expecting the
/// margin-inflated shape. None of the shapes of this crate inflate their geometry
/// themselves, so it returns the same point as
/// [`Self::local_supporting_vertex_without_margin`]. Callers wanting the inflated
/// support point apply [`Self::local_support_point_with_margin`], which works the
/// same way for every shape.
pub trait ConvexShape: SupportMap + DowncastSync {
    /// The margin and local scaling of this shape.
    fn convex_base(&self) -> &ConvexBase;

    /// Mutable access to the margin and local scaling of this shape.
    fn convex_base_mut(&mut self) -> &mut ConvexBase;

    /// Gets the type tag of this shape.
    fn shape_type(&self) -> ShapeType;

    /// Gets the underlying shape as an enum.
    fn as_typed_shape(&self) -> TypedShape<'_>;

    /// A human-readable name of the kind of this shape.
    fn name(&self) -> &'static str;

    /// Rescales the geometry of this shape.
    ///
    /// The dimensions of the shape are multiplied by the ratio between `scaling` and
    /// the current local scaling, then `scaling` becomes the new local scaling. The
    /// shape is left unchanged if any component of `scaling` is zero, negative, or
    /// not finite.
    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError>;

    /// The local scaling currently applied to this shape.
    fn local_scaling(&self) -> Vector<Real> {
        *self.convex_base().local_scaling()
    }

    /// The collision margin of this shape.
    fn margin(&self) -> Real {
        self.convex_base().margin()
    }

    /// Sets the collision margin of this shape.
    fn set_margin(&mut self, margin: Real) -> Result<(), ShapeError> {
        self.convex_base_mut().set_margin(margin)
    }

    /// The support point of this shape, as seen by margin-aware queries.
    fn local_supporting_vertex(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point(dir)
    }

    /// The support point of the exact geometry of this shape.
    fn local_supporting_vertex_without_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        self.local_support_point(dir)
    }

    /// The support point of this shape dilated by its collision margin.
    ///
    /// A zero `dir` is dilated along `(-1, -1, -1)`.
    fn local_support_point_with_margin(&self, dir: &Vector<Real>) -> Point<Real> {
        let pt = self.local_supporting_vertex(dir);
        let margin = self.margin();

        if margin == 0.0 {
            return pt;
        }

        let normal = Unit::try_new(*dir, DEFAULT_EPSILON)
            .unwrap_or_else(|| Unit::new_normalize(Vector::repeat(-1.0)));
        pt + *normal * margin
    }

    /// Computes the exact support point along each of `dirs`.
    ///
    /// The i-th support point is written to `out[i]`, with its fourth component set
    /// to zero. This gives the same results as calling
    /// [`Self::local_supporting_vertex_without_margin`] on each direction.
    ///
    /// # Panics
    /// Panics if `out` is shorter than `dirs`.
    fn batch_local_supporting_vertices_without_margin(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point4<Real>],
    ) {
        assert!(
            out.len() >= dirs.len(),
            "Batched support points: the output buffer is too small."
        );

        for (dir, res) in dirs.iter().zip(out.iter_mut()) {
            *res = homogeneous(self.local_supporting_vertex_without_margin(dir));
        }
    }

    /// Parallel version of [`Self::batch_local_supporting_vertices_without_margin`].
    #[cfg(feature = "parallel")]
    fn batch_local_supporting_vertices_without_margin_par(
        &self,
        dirs: &[Vector<Real>],
        out: &mut [Point4<Real>],
    ) {
        use rayon::prelude::*;

        assert!(
            out.len() >= dirs.len(),
            "Batched support points: the output buffer is too small."
        );

        dirs.par_iter()
            .zip(out.par_iter_mut())
            .for_each(|(dir, res)| {
                *res = homogeneous(self.local_supporting_vertex_without_margin(dir));
            });
    }

    /// Computes the AABB of this shape, including its margin.
    fn compute_local_aabb(&self) -> Aabb {
        bounding_volume::details::local_support_map_aabb(self).loosened(self.margin())
    }

    /// Computes the AABB of this shape with the given position, including its margin.
    fn compute_aabb(&self, position: &Isometry<Real>) -> Aabb {
        bounding_volume::details::support_map_aabb(position, self).loosened(self.margin())
    }

    /// Approximates the principal angular inertia of this shape.
    ///
    /// The shape is treated as a solid box with the dimensions of its local AABB
    /// (margin included) and the given `mass`. This is not the exact inertia of the
    /// shape.
    fn local_inertia(&self, mass: Real) -> PrincipalAngularInertia<Real> {
        MassProperties::box_unit_inertia(&self.compute_local_aabb().half_extents()) * mass
    }

    /// The mass properties of this shape, with its inertia given by [`Self::local_inertia`].
    fn mass_properties(&self, mass: Real) -> MassProperties {
        MassProperties::new(Point::origin(), mass, self.local_inertia(mass))
    }
}

impl_downcast!(sync ConvexShape);

#[inline]
fn homogeneous(pt: Point<Real>) -> Point4<Real> {
    Point4::new(pt.x, pt.y, pt.z, 0.0)
}

impl dyn ConvexShape {
    /// Converts this abstract shape to the given shape, if it is one.
    pub fn as_shape<T: ConvexShape>(&self) -> Option<&T> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to the given mutable shape, if it is one.
    pub fn as_shape_mut<T: ConvexShape>(&mut self) -> Option<&mut T> {
        self.downcast_mut()
    }

    /// Converts this abstract shape to a ball, if it is one.
    pub fn as_ball(&self) -> Option<&Ball> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cuboid, if it is one.
    pub fn as_cuboid(&self) -> Option<&Cuboid> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cylinder, if it is one.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        self.downcast_ref()
    }

    /// Converts this abstract shape to a cone, if it is one.
    pub fn as_cone(&self) -> Option<&Cone> {
        self.downcast_ref()
    }
}

static_assertions::assert_obj_safe!(ConvexShape);
static_assertions::assert_impl_all!(Ball: ConvexShape, Send, Sync);
static_assertions::assert_impl_all!(Cuboid: ConvexShape, Send, Sync);
static_assertions::assert_impl_all!(Cylinder: ConvexShape, Send, Sync);
static_assertions::assert_impl_all!(Cone: ConvexShape, Send, Sync);
