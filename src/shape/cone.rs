//! Support mapping based Cone shape.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::{
    AxisPermutation, ConvexBase, ConvexShape, ShapeError, ShapeType, SupportMap, TypedShape,
    UpAxis,
};
use na::ComplexField;

/// Right circular cone with its principal axis aligned with one of the coordinate axes.
///
/// The cone is centered at the origin: its apex lies at `+height / 2` along the up
/// axis and its base circle at `-height / 2`.
///
/// The sine of the apex half-angle is cached and recomputed by every mutator, so the
/// dimensions of a cone can only be changed through its methods.
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use supportmap3d::math::{Point, Vector};
/// use supportmap3d::shape::{Cone, SupportMap};
///
/// let cone = Cone::new(1.0, 2.0);
/// assert_eq!(cone.local_support_point(&Vector::y()), Point::new(0.0, 1.0, 0.0));
/// assert_eq!(cone.local_support_point(&Vector::x()), Point::new(1.0, -1.0, 0.0));
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(try_from = "ConeDesc"))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    radius: Real,
    height: Real,
    axes: AxisPermutation,
    half_angle_sine: Real,
    base: ConvexBase,
}

impl Cone {
    /// Creates a new cone aligned with the `y` axis.
    ///
    /// # Arguments:
    /// * `radius` - the radius of the base of the cone.
    /// * `height` - the distance between the base and the apex of the cone.
    ///
    /// # Panics
    /// Panics if `radius` or `height` is negative. Zero values are accepted and
    /// describe a degenerate cone (a disc or a segment).
    pub fn new(radius: Real, height: Real) -> Cone {
        Self::with_up_axis(radius, height, UpAxis::Y)
    }

    /// Creates a new cone aligned with the `x` axis.
    pub fn new_x(radius: Real, height: Real) -> Cone {
        Self::with_up_axis(radius, height, UpAxis::X)
    }

    /// Creates a new cone aligned with the `z` axis.
    pub fn new_z(radius: Real, height: Real) -> Cone {
        Self::with_up_axis(radius, height, UpAxis::Z)
    }

    /// Creates a new cone aligned with the given axis.
    pub fn with_up_axis(radius: Real, height: Real, up: UpAxis) -> Cone {
        assert!(
            radius >= 0.0 && height >= 0.0,
            "The radius and height of a cone must not be negative."
        );

        let mut result = Cone {
            radius,
            height,
            axes: AxisPermutation::new(up),
            half_angle_sine: 0.0,
            base: ConvexBase::default(),
        };
        result.update_derived_state();
        result
    }

    /// Creates a new cone aligned with the axis of index `up` (`0` for `x`, `1` for `y`,
    /// `2` for `z`).
    ///
    /// # Panics
    /// Panics if `up` is not `0`, `1`, or `2`.
    pub fn with_up_index(radius: Real, height: Real, up: usize) -> Cone {
        Self::with_up_axis(radius, height, AxisPermutation::from_up_index(up).up_axis())
    }

    /// The radius of the base of this cone.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The distance between the base and the apex of this cone.
    #[inline]
    pub fn height(&self) -> Real {
        self.height
    }

    /// Half of the height of this cone.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height * 0.5
    }

    /// The axis this cone is aligned with.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        self.axes.up_axis()
    }

    /// The component indices used by this cone's geometry.
    #[inline]
    pub fn axes(&self) -> &AxisPermutation {
        &self.axes
    }

    /// The sine of the half-angle at the apex of this cone.
    #[inline]
    pub fn half_angle_sine(&self) -> Real {
        self.half_angle_sine
    }

    /// Sets the radius of the base of this cone.
    pub fn set_radius(&mut self, radius: Real) {
        assert!(radius >= 0.0, "The radius of a cone must not be negative.");
        self.radius = radius;
        self.update_derived_state();
    }

    /// Sets the height of this cone.
    pub fn set_height(&mut self, height: Real) {
        assert!(height >= 0.0, "The height of a cone must not be negative.");
        self.height = height;
        self.update_derived_state();
    }

    fn update_derived_state(&mut self) {
        let hypot = ComplexField::sqrt(self.radius * self.radius + self.height * self.height);
        // A point-like cone has no apex angle.
        self.half_angle_sine = if hypot > 0.0 {
            self.radius / hypot
        } else {
            0.0
        };
    }
}

impl SupportMap for Cone {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let half_height = self.half_height();
        let (a, up, b) = self.axes.split(dir);

        if up > dir.norm() * self.half_angle_sine {
            return self.axes.compose(0.0, half_height, 0.0);
        }

        let planar_norm = ComplexField::sqrt(a * a + b * b);

        if planar_norm > DEFAULT_EPSILON {
            let scale = self.radius / planar_norm;
            self.axes.compose(a * scale, -half_height, b * scale)
        } else {
            self.axes.compose(0.0, -half_height, 0.0)
        }
    }
}

impl ConvexShape for Cone {
    fn convex_base(&self) -> &ConvexBase {
        &self.base
    }

    fn convex_base_mut(&mut self) -> &mut ConvexBase {
        &mut self.base
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Cone
    }

    fn as_typed_shape(&self) -> TypedShape<'_> {
        TypedShape::Cone(self)
    }

    fn name(&self) -> &'static str {
        "Cone"
    }

    fn set_local_scaling(&mut self, scaling: &Vector<Real>) -> Result<(), ShapeError> {
        let ratio = self.base.scaling_ratio(scaling)?;
        let (ratio_a, ratio_up, ratio_b) = self.axes.split(&ratio);

        // A single radius can't represent anisotropic radial scaling.
        self.height *= ratio_up;
        self.radius *= (ratio_a + ratio_b) / 2.0;
        self.update_derived_state();
        self.base.store_local_scaling(*scaling);

        log::debug!(
            "Rescaled cone to radius {} and height {}.",
            self.radius,
            self.height
        );
        Ok(())
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct ConeDesc {
    radius: Real,
    height: Real,
    axes: AxisPermutation,
    base: ConvexBase,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<ConeDesc> for Cone {
    type Error = ShapeError;

    fn try_from(desc: ConeDesc) -> Result<Self, ShapeError> {
        for (dimension, value) in [("radius", desc.radius), ("height", desc.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ShapeError::InvalidDimension { dimension, value });
            }
        }

        let mut result = Cone {
            radius: desc.radius,
            height: desc.height,
            axes: desc.axes,
            half_angle_sine: 0.0,
            base: desc.base,
        };
        result.update_derived_state();
        Ok(result)
    }
}
