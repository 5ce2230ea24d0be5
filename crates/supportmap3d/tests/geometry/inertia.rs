use na::Vector3;
use supportmap3d::shape::{Ball, Cone, ConvexShape, Cuboid, Cylinder};

#[test]
fn cone_inertia_is_positive_and_physical() {
    let shapes: Vec<Box<dyn ConvexShape>> = vec![
        Box::new(Cone::new(1.0, 2.0)),
        Box::new(Cone::new_x(0.3, 5.0)),
        Box::new(Cone::new_z(2.0, 0.5)),
        Box::new(Cylinder::new(1.0, 0.5)),
        Box::new(Cuboid::new(Vector3::new(0.1, 2.0, 3.0))),
        Box::new(Ball::new(0.7)),
    ];

    for shape in &shapes {
        let inertia = shape.local_inertia(3.0);
        assert!(inertia.iter().all(|i| *i > 0.0), "{}", shape.name());
        assert!(inertia.x <= inertia.y + inertia.z + 1.0e-5);
        assert!(inertia.y <= inertia.x + inertia.z + 1.0e-5);
        assert!(inertia.z <= inertia.x + inertia.y + 1.0e-5);
    }
}

#[test]
fn cone_inertia_from_bounding_box() {
    let mut cone = Cone::new(1.0, 2.0);
    cone.set_margin(0.0).unwrap();

    // Bounding box is 2x2x2: I = m / 12 * (2² + 2²).
    assert_relative_eq!(
        cone.local_inertia(6.0),
        Vector3::repeat(4.0),
        epsilon = 1.0e-5
    );
    assert_eq!(cone.local_inertia(0.0), Vector3::zeros());
}

#[test]
fn inertia_accounts_for_margin() {
    let mut cone = Cone::new(1.0, 2.0);
    cone.set_margin(0.5).unwrap();

    // Bounding box is 3x3x3: I = m / 12 * (3² + 3²).
    assert_relative_eq!(
        cone.local_inertia(2.0),
        Vector3::repeat(3.0),
        epsilon = 1.0e-5
    );
}

#[test]
fn mass_properties_of_a_cone() {
    let cone = Cone::new(1.0, 2.0);
    let props = cone.mass_properties(5.0);
    assert_relative_eq!(props.mass(), 5.0, epsilon = 1.0e-5);
    assert_relative_eq!(
        props.principal_inertia(),
        cone.local_inertia(5.0),
        epsilon = 1.0e-4
    );
}
