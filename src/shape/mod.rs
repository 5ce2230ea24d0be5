//! Convex shapes and their support mapping.

pub use self::axis_permutation::{AxisPermutation, UpAxis};
pub use self::ball::Ball;
pub use self::cone::Cone;
pub use self::convex_base::ConvexBase;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::error::ShapeError;
#[doc(inline)]
pub use self::shape::{ConvexShape, ShapeType, TypedShape};
#[doc(inline)]
pub use self::support_map::SupportMap;

mod axis_permutation;
mod ball;
mod cone;
mod convex_base;
mod cuboid;
mod cylinder;
mod error;
#[doc(hidden)]
pub mod shape;
#[doc(hidden)]
pub mod support_map;
