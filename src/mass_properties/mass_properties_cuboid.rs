use crate::mass_properties::MassProperties;
use crate::math::{Point, PrincipalAngularInertia, Real, Vector};

impl MassProperties {
    /// The principal angular inertia of a solid box of unit mass with the given half-extents.
    ///
    /// Multiply the result by the mass of the box to get its actual inertia.
    pub fn box_unit_inertia(half_extents: &Vector<Real>) -> PrincipalAngularInertia<Real> {
        let ix = (half_extents.x * half_extents.x) / 3.0;
        let iy = (half_extents.y * half_extents.y) / 3.0;
        let iz = (half_extents.z * half_extents.z) / 3.0;

        Vector::new(iy + iz, ix + iz, ix + iy)
    }

    /// Computes the mass properties of a solid box with the given half-extents and density.
    pub fn from_cuboid(density: Real, half_extents: Vector<Real>) -> Self {
        let volume = half_extents.x * half_extents.y * half_extents.z * 8.0;
        let mass = volume * density;
        Self::new(
            Point::origin(),
            mass,
            Self::box_unit_inertia(&half_extents) * mass,
        )
    }
}
