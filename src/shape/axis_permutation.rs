//! Mapping of a principal "up" axis to the component indices used by axis-symmetric shapes.

use crate::math::{Point, Real, Vector};
use crate::shape::ShapeError;

/// One of the three principal axes a cone or cylinder can be aligned with.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum UpAxis {
    /// The `x` axis.
    X = 0,
    /// The `y` axis.
    #[default]
    Y = 1,
    /// The `z` axis.
    Z = 2,
}

impl UpAxis {
    /// The index of this axis in a 3D vector.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for UpAxis {
    type Error = ShapeError;

    fn try_from(index: usize) -> Result<Self, ShapeError> {
        match index {
            0 => Ok(UpAxis::X),
            1 => Ok(UpAxis::Y),
            2 => Ok(UpAxis::Z),
            _ => Err(ShapeError::InvalidUpAxis(index)),
        }
    }
}

/// The `(radial_a, up, radial_b)` component indices of an axis-symmetric shape.
///
/// Geometric formulas are written once against this triple: `up` is the symmetry
/// axis and `radial_a`/`radial_b` span the plane orthogonal to it. The three indices
/// always form a permutation of `{0, 1, 2}`. A permutation is serialized as its
/// [`UpAxis`].
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde-serialize",
    serde(from = "UpAxis", into = "UpAxis")
)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AxisPermutation {
    indices: [usize; 3],
}

impl Default for AxisPermutation {
    fn default() -> Self {
        Self::new(UpAxis::Y)
    }
}

impl AxisPermutation {
    /// The permutation associated to the given up axis.
    #[inline]
    pub fn new(up: UpAxis) -> Self {
        let indices = match up {
            UpAxis::X => [1, 0, 2],
            UpAxis::Y => [0, 1, 2],
            UpAxis::Z => [0, 2, 1],
        };

        Self { indices }
    }

    /// The permutation associated to the up axis with the given index.
    ///
    /// # Panics
    /// Panics if `up` is not `0`, `1`, or `2`. Use [`UpAxis::try_from`] to validate
    /// untrusted indices instead.
    #[inline]
    pub fn from_up_index(up: usize) -> Self {
        match UpAxis::try_from(up) {
            Ok(axis) => Self::new(axis),
            Err(err) => panic!("{}", err),
        }
    }

    /// The up axis this permutation was built from.
    #[inline]
    pub fn up_axis(&self) -> UpAxis {
        match self.indices[1] {
            0 => UpAxis::X,
            1 => UpAxis::Y,
            _ => UpAxis::Z,
        }
    }

    /// Index of the first radial axis.
    #[inline]
    pub fn radial_a(&self) -> usize {
        self.indices[0]
    }

    /// Index of the symmetry axis.
    #[inline]
    pub fn up(&self) -> usize {
        self.indices[1]
    }

    /// Index of the second radial axis.
    #[inline]
    pub fn radial_b(&self) -> usize {
        self.indices[2]
    }

    /// The `(radial_a, up, radial_b)` indices.
    #[inline]
    pub fn indices(&self) -> [usize; 3] {
        self.indices
    }

    /// Reads the `(radial_a, up, radial_b)` components of `v`.
    #[inline]
    pub fn split(&self, v: &Vector<Real>) -> (Real, Real, Real) {
        (v[self.indices[0]], v[self.indices[1]], v[self.indices[2]])
    }

    /// Builds the point whose `(radial_a, up, radial_b)` components are `(a, up, b)`.
    #[inline]
    pub fn compose(&self, a: Real, up: Real, b: Real) -> Point<Real> {
        let mut res = Point::origin();
        res[self.indices[0]] = a;
        res[self.indices[1]] = up;
        res[self.indices[2]] = b;
        res
    }
}

impl From<UpAxis> for AxisPermutation {
    fn from(up: UpAxis) -> Self {
        Self::new(up)
    }
}

impl From<AxisPermutation> for UpAxis {
    fn from(axes: AxisPermutation) -> Self {
        axes.up_axis()
    }
}
