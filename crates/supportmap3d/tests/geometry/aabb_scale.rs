use na::{Isometry3, Point3, Vector3};
use supportmap3d::bounding_volume::{Aabb, BoundingVolume};
use supportmap3d::shape::{Cone, ConvexShape};

#[test]
fn cone_aabb_includes_margin_once() {
    let mut cone = Cone::new(1.0, 2.0);
    cone.set_margin(0.1).unwrap();

    let aabb = cone.compute_local_aabb();
    assert_relative_eq!(aabb.mins, Point3::new(-1.1, -1.1, -1.1), epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, Point3::new(1.1, 1.1, 1.1), epsilon = 1.0e-5);
}

#[test]
fn translated_cone_aabb() {
    let mut cone = Cone::new_x(0.5, 4.0);
    cone.set_margin(0.0).unwrap();

    let pos = Isometry3::translation(1.0, 2.0, 3.0);
    let aabb = cone.compute_aabb(&pos);
    let expected = Aabb::from_half_extents(Point3::new(1.0, 2.0, 3.0), Vector3::new(2.0, 0.5, 0.5));
    assert_relative_eq!(aabb.mins, expected.mins, epsilon = 1.0e-5);
    assert_relative_eq!(aabb.maxs, expected.maxs, epsilon = 1.0e-5);
}

#[test]
fn world_aabb_contains_transformed_local_aabb_center() {
    let cone = Cone::new(1.0, 2.0);
    let pos = Isometry3::new(Vector3::new(-3.0, 0.5, 2.0), Vector3::new(0.3, -1.2, 0.7));
    let aabb = cone.compute_aabb(&pos);
    let local = cone.compute_local_aabb().transform_by(&pos);

    assert!(aabb.contains_local_point(&(pos * Point3::new(0.0, 1.0, 0.0))));
    assert!(aabb.contains_local_point(&(pos * Point3::new(0.0, -1.0, 1.0))));
    assert!(local.loosened(1.0e-4).contains(&aabb));
}
