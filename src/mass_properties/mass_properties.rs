use crate::math::{Point, PrincipalAngularInertia, Real};
use crate::utils;
use na::ComplexField;
use num::Zero;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
/// The local mass properties of a rigid-body.
pub struct MassProperties {
    /// The center of mass of a rigid-body expressed in its local-space.
    pub local_com: Point<Real>,
    /// The inverse of the mass of a rigid-body.
    ///
    /// If this is zero, the rigid-body is assumed to have infinite mass.
    pub inv_mass: Real,
    /// The inverse of the principal angular inertia of the rigid-body.
    ///
    /// Components set to zero are assumed to be infinite along the corresponding principal axis.
    pub inv_principal_inertia_sqrt: PrincipalAngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties from the given center-of-mass, mass, and principal angular inertia.
    ///
    /// The principal angular inertia is the angular inertia expressed along the local axes of
    /// the shape.
    pub fn new(
        local_com: Point<Real>,
        mass: Real,
        principal_inertia: PrincipalAngularInertia<Real>,
    ) -> Self {
        let inv_mass = utils::inv(mass);
        let inv_principal_inertia_sqrt =
            principal_inertia.map(|e| utils::inv(ComplexField::sqrt(e)));
        Self {
            local_com,
            inv_mass,
            inv_principal_inertia_sqrt,
        }
    }

    /// The mass.
    pub fn mass(&self) -> Real {
        utils::inv(self.inv_mass)
    }

    /// The angular inertia along the principal inertia axes of the rigid-body.
    pub fn principal_inertia(&self) -> PrincipalAngularInertia<Real> {
        self.inv_principal_inertia_sqrt.map(|e| utils::inv(e * e))
    }

    /// Changes the mass on these mass-properties.
    ///
    /// The `adjust_angular_inertia` argument should always be `true`, unless
    /// there are some specific reasons not to do so. Setting this to `true`
    /// will automatically adjust the angular inertia of `self` to account
    /// for the mass change (i.e. it will multiply the angular inertia by
    /// `new_mass / prev_mass`). Setting it to `false` will not change the
    /// current angular inertia.
    pub fn set_mass(&mut self, new_mass: Real, adjust_angular_inertia: bool) {
        let new_inv_mass = utils::inv(new_mass);

        if adjust_angular_inertia {
            let curr_mass = utils::inv(self.inv_mass);
            self.inv_principal_inertia_sqrt *=
                ComplexField::sqrt(new_inv_mass) * ComplexField::sqrt(curr_mass);
        }

        self.inv_mass = new_inv_mass;
    }
}

impl Zero for MassProperties {
    fn zero() -> Self {
        Self {
            inv_mass: 0.0,
            inv_principal_inertia_sqrt: na::zero(),
            local_com: Point::origin(),
        }
    }

    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

impl core::ops::Add<MassProperties> for MassProperties {
    type Output = Self;

    /// Sums two mass properties sharing the same principal axes.
    ///
    /// The inertia of each operand is moved to the combined center of mass with the
    /// parallel axis theorem, restricted to the diagonal terms.
    fn add(self, other: MassProperties) -> Self {
        if self.is_zero() {
            return other;
        } else if other.is_zero() {
            return self;
        }

        let m1 = self.mass();
        let m2 = other.mass();
        let total_mass = m1 + m2;
        let local_com = (self.local_com * m1 + other.local_com.coords * m2) / total_mass;

        let shifted = |props: &MassProperties, mass: Real| {
            let shift = props.local_com - local_com;
            let sq = shift.component_mul(&shift);
            props.principal_inertia()
                + PrincipalAngularInertia::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * mass
        };

        let inertia = shifted(&self, m1) + shifted(&other, m2);
        Self::new(local_com, total_mass, inertia)
    }
}

impl core::ops::AddAssign<MassProperties> for MassProperties {
    fn add_assign(&mut self, rhs: MassProperties) {
        *self = *self + rhs
    }
}
