use voxmesh_geom::{Aabb, Vec3, bounds_of};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_axis_constants() {
    assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
    assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
    assert_eq!(Vec3::ONE - Vec3::ONE, Vec3::ZERO);
}

#[test]
fn vec3_cell_origin_and_arrays() {
    let v = Vec3::from_cell(3, 0, 15);
    assert_eq!(v.to_array(), [3.0, 0.0, 15.0]);
    let w: Vec3 = [1.0, -2.0, 0.5].into();
    let back: [f32; 3] = w.into();
    assert_eq!(back, [1.0, -2.0, 0.5]);
    assert_eq!(-w, Vec3::new(-1.0, 2.0, -0.5));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert!(vec3_approx_eq(v.normalized(), Vec3::new(0.6, 0.8, 0.0), 1e-6));
    // zero stays zero instead of going NaN
    assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
}

#[test]
fn aabb_include_and_contains() {
    let mut bb = Aabb::point(Vec3::new(1.0, 1.0, 1.0));
    bb.include(Vec3::new(-1.0, 2.0, 0.0));
    assert_eq!(bb.min, Vec3::new(-1.0, 1.0, 0.0));
    assert_eq!(bb.max, Vec3::new(1.0, 2.0, 1.0));
    assert!(bb.contains(Vec3::new(0.0, 1.5, 0.5)));
    assert!(!bb.contains(Vec3::new(0.0, 3.0, 0.5)));
    assert_eq!(bb.size(), Vec3::new(2.0, 1.0, 1.0));
}

#[test]
fn bounds_of_empty_is_none() {
    assert!(bounds_of(std::iter::empty()).is_none());
    let bb = bounds_of([Vec3::ZERO, Vec3::ONE, Vec3::new(0.5, 4.0, 0.5)]).unwrap();
    assert_eq!(bb, Aabb::new(Vec3::ZERO, Vec3::new(1.0, 4.0, 1.0)));
}
