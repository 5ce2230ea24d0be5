use na::Vector3;
use supportmap3d::shape::{Ball, Cone, ConvexShape, Cuboid, Cylinder, ShapeType, TypedShape};

#[test]
fn typed_shapes_match_their_tags() {
    let shapes: Vec<Box<dyn ConvexShape>> = vec![
        Box::new(Ball::new(1.0)),
        Box::new(Cuboid::new(Vector3::repeat(1.0))),
        Box::new(Cylinder::new(1.0, 1.0)),
        Box::new(Cone::new(1.0, 1.0)),
    ];
    let expected = [
        ShapeType::Ball,
        ShapeType::Cuboid,
        ShapeType::Cylinder,
        ShapeType::Cone,
    ];

    for (shape, tag) in shapes.iter().zip(expected) {
        assert_eq!(shape.shape_type(), tag);
        assert_eq!(shape.as_typed_shape().shape_type(), tag);
        let dir = Vector3::new(0.3, -0.2, 0.9);
        assert_eq!(
            shape.as_typed_shape().as_convex_shape().local_supporting_vertex(&dir),
            shape.local_supporting_vertex(&dir)
        );
    }
}

#[test]
fn downcast_to_concrete_shape() {
    let mut shape: Box<dyn ConvexShape> = Box::new(Cone::new_z(2.0, 1.0));
    assert!(shape.as_cuboid().is_none());
    assert_eq!(shape.as_cone().map(|c| c.radius()), Some(2.0));

    if let Some(cone) = shape.as_shape_mut::<Cone>() {
        cone.set_radius(0.5);
    }
    assert!(matches!(shape.as_typed_shape(), TypedShape::Cone(c) if c.radius() == 0.5));
}

#[test]
fn default_margin() {
    let cone = Cone::new(1.0, 1.0);
    assert_relative_eq!(cone.margin(), supportmap3d::math::DEFAULT_MARGIN);
    assert_eq!(cone.local_scaling(), Vector3::repeat(1.0));
}
