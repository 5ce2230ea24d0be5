use na::Vector3;
use supportmap3d::shape::{Cone, ConvexShape, ShapeError, UpAxis};

#[test]
fn cone_scaling_follows_the_up_axis() {
    let mut cone = Cone::with_up_axis(1.0, 2.0, UpAxis::X);
    cone.set_local_scaling(&Vector3::new(3.0, 2.0, 4.0)).unwrap();

    assert_relative_eq!(cone.height(), 6.0);
    assert_relative_eq!(cone.radius(), 3.0);
    assert_relative_eq!(cone.half_angle_sine(), 3.0 / 45.0f32.sqrt(), epsilon = 1.0e-6);
    assert_eq!(cone.local_scaling(), Vector3::new(3.0, 2.0, 4.0));
}

#[test]
fn identity_scaling_is_a_no_op() {
    let mut cone = Cone::new(1.25, 3.5);
    let before = cone;
    cone.set_local_scaling(&Vector3::repeat(1.0)).unwrap();
    assert_eq!(cone, before);
}

#[test]
fn invalid_scaling_is_rejected() {
    let mut cone = Cone::new(1.0, 2.0);
    let before = cone;

    for scaling in [
        Vector3::new(0.0, 1.0, 1.0),
        Vector3::new(1.0, -2.0, 1.0),
        Vector3::new(1.0, 1.0, f32::NAN),
    ] {
        assert!(matches!(
            cone.set_local_scaling(&scaling),
            Err(ShapeError::InvalidScaling { .. })
        ));
        assert_eq!(cone, before);
    }
}
