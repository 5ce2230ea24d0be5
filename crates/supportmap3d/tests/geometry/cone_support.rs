use na::{Point3, Vector3};
use supportmap3d::math::Real;
use supportmap3d::shape::{Cone, ConvexShape, SupportMap, UpAxis};

fn random_dir(rng: &mut oorandom::Rand32) -> Vector3<Real> {
    loop {
        let v = Vector3::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );
        if v.norm() > 1.0e-3 {
            return v;
        }
    }
}

// Points of a Y-up cone: the apex and a ring of base rim points.
fn cone_samples(radius: Real, height: Real) -> Vec<Point3<Real>> {
    let mut pts = vec![Point3::new(0.0, height / 2.0, 0.0)];
    for i in 0..64 {
        let angle = i as Real / 64.0 * core::f32::consts::TAU;
        pts.push(Point3::new(
            radius * angle.cos(),
            -height / 2.0,
            radius * angle.sin(),
        ));
    }
    pts
}

#[test]
fn cone_support_points_are_apex_or_base_boundary() {
    let (radius, height) = (1.5, 4.0);
    let cone = Cone::new(radius, height);
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let dir = random_dir(&mut rng);
        let pt = cone.local_support_point(&dir);

        // Either the apex, or a base point on the rim or at the base center.
        if pt == Point3::new(0.0, height / 2.0, 0.0) {
            continue;
        }
        assert_eq!(pt.y, -height / 2.0, "{:?} is not on the base", pt);
        let radial = (pt.x * pt.x + pt.z * pt.z).sqrt();
        assert!(
            radial == 0.0 || relative_eq!(radial, radius, epsilon = 1.0e-5),
            "{:?} is neither on the rim nor at the base center",
            pt
        );
    }
}

#[test]
fn cone_support_points_are_extremal() {
    let (radius, height) = (1.0, 2.0);
    let cone = Cone::new(radius, height);
    let samples = cone_samples(radius, height);
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..500 {
        let dir = random_dir(&mut rng);
        let best = cone.local_support_point(&dir).coords.dot(&dir);

        for sample in &samples {
            assert!(sample.coords.dot(&dir) <= best + 1.0e-4);
        }
    }
}

#[test]
fn cone_apex_base_and_rim() {
    let cone = Cone::new(1.0, 2.0);

    assert_eq!(
        cone.local_support_point(&Vector3::y()),
        Point3::new(0.0, 1.0, 0.0)
    );
    assert_eq!(
        cone.local_support_point(&-Vector3::y()),
        Point3::new(0.0, -1.0, 0.0)
    );
    assert_relative_eq!(
        cone.local_support_point(&Vector3::x()),
        Point3::new(1.0, -1.0, 0.0)
    );
    assert_relative_eq!(
        cone.local_support_point(&Vector3::new(0.0, -1.0, -1.0)),
        Point3::new(0.0, -1.0, -1.0)
    );
}

#[test]
fn cone_variants_are_permutations_of_each_other() {
    let y_cone = Cone::new(0.5, 3.0);
    let x_cone = Cone::new_x(0.5, 3.0);
    let z_cone = Cone::with_up_axis(0.5, 3.0, UpAxis::Z);
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..100 {
        let dir = random_dir(&mut rng);
        let y_pt = y_cone.local_support_point(&dir);

        // Swapping X and Y maps the Y-up cone onto the X-up one.
        let x_dir = Vector3::new(dir.y, dir.x, dir.z);
        let x_pt = x_cone.local_support_point(&x_dir);
        assert_relative_eq!(x_pt, Point3::new(y_pt.y, y_pt.x, y_pt.z), epsilon = 1.0e-5);

        // Swapping Y and Z maps the Y-up cone onto the Z-up one.
        let z_dir = Vector3::new(dir.x, dir.z, dir.y);
        let z_pt = z_cone.local_support_point(&z_dir);
        assert_relative_eq!(z_pt, Point3::new(y_pt.x, y_pt.z, y_pt.y), epsilon = 1.0e-5);
    }
}

#[test]
fn batch_support_matches_single_queries() {
    let cone = Cone::new_z(0.8, 1.7);
    let mut rng = oorandom::Rand32::new(99);
    let dirs: Vec<_> = (0..32).map(|_| random_dir(&mut rng)).collect();
    let mut out = vec![na::Point4::<Real>::origin(); dirs.len() + 3];

    cone.batch_local_supporting_vertices_without_margin(&dirs, &mut out);

    for (dir, res) in dirs.iter().zip(out.iter()) {
        let expected = cone.local_supporting_vertex_without_margin(dir);
        assert_eq!(res.xyz(), expected);
        assert_eq!(res.w, 0.0);
    }

    // Extra slots are left untouched.
    assert!(out[dirs.len()..].iter().all(|pt| *pt == na::Point4::origin()));
}

#[test]
fn empty_batch_is_a_no_op() {
    let cone = Cone::new(1.0, 1.0);
    let mut out: [na::Point4<Real>; 0] = [];
    cone.batch_local_supporting_vertices_without_margin(&[], &mut out);
}

#[test]
fn margin_inflates_along_the_direction() {
    let mut cone = Cone::new(1.0, 2.0);
    cone.set_margin(0.25).unwrap();

    let dir = Vector3::new(0.0, 3.0, 0.0);
    assert_eq!(
        cone.local_supporting_vertex(&dir),
        cone.local_supporting_vertex_without_margin(&dir)
    );
    assert_relative_eq!(
        cone.local_support_point_with_margin(&dir),
        Point3::new(0.0, 1.25, 0.0)
    );
}
