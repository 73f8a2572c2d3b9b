use glam::{DMat3, DQuat, DVec3};
use orient::core::geometry::{logarithm, quaternion_to_rotation, rotation_angle};
use std::f64::consts::PI;

fn axes() -> Vec<DVec3> {
    vec![
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::new(1.0, -2.0, 0.5).normalize(),
    ]
}

#[test]
fn test_identity_maps_to_zero() {
    assert_eq!(logarithm(&DMat3::IDENTITY), DVec3::ZERO);
}

#[test]
fn test_small_angle_about_z() {
    let eps = 1e-6;
    let w = logarithm(&DMat3::from_axis_angle(DVec3::Z, eps));
    println!("log(Rz({eps})) = {w:?}");
    assert!((w.length() - eps).abs() < 1e-12, "norm should equal the angle");
    assert!(w.normalize().abs_diff_eq(DVec3::Z, 1e-9), "axis should be +z");
}

#[test]
fn test_half_turn_about_x() {
    let r = DMat3::from_diagonal(DVec3::new(1.0, -1.0, -1.0));
    let w = logarithm(&r);
    assert!((w.length() - PI).abs() < 1e-12);
    // R(1,2) = 0 counts as positive, so the x component comes out positive.
    assert!(w.x > 0.0);
    assert!(w.y.abs() < 1e-12 && w.z.abs() < 1e-12);
}

#[test]
fn test_general_case_round_trip() {
    for axis in axes() {
        for degrees in [30.0_f64, 90.0, 150.0] {
            let angle = degrees.to_radians();
            let r = DMat3::from_axis_angle(axis, angle);
            let w = logarithm(&r);
            let expected = axis * angle;
            assert!(
                w.abs_diff_eq(expected, 1e-9),
                "axis {axis:?} angle {degrees}: got {w:?}, expected {expected:?}"
            );
        }
    }
}

#[test]
fn test_angle_matches_arccos_of_trace() {
    for axis in axes() {
        for angle in [0.1_f64, 1.0, 2.0, 3.0] {
            let r = DMat3::from_axis_angle(axis, angle);
            let trace = r.x_axis.x + r.y_axis.y + r.z_axis.z;
            let reference = ((trace - 1.0) / 2.0).clamp(-1.0, 1.0).acos();
            assert!((rotation_angle(&r) - reference).abs() < 1e-9);
        }
    }
}

#[test]
fn test_quaternion_input_is_logarithmed() {
    // 120° about the body diagonal.
    let axis = DVec3::ONE.normalize();
    let angle = 2.0 * PI / 3.0;
    let q = DQuat::from_axis_angle(axis, angle);
    let r = quaternion_to_rotation(q.w, q.x, q.y, q.z);
    let w = logarithm(&r);
    assert!(w.abs_diff_eq(axis * angle, 1e-9), "got {w:?}");
}

#[test]
fn test_output_is_finite_for_invalid_matrices() {
    let garbage = [
        DMat3::ZERO,
        DMat3::IDENTITY * 3.0,
        DMat3::from_cols_array(&[2.0, 0.5, -1.0, 0.0, 4.0, 1.0, 7.0, -3.0, 0.2]),
        DMat3::from_diagonal(DVec3::new(-2.0, -2.0, -2.0)),
    ];
    for m in garbage {
        let w = logarithm(&m);
        assert!(w.is_finite(), "log({m:?}) = {w:?}");
    }
}
