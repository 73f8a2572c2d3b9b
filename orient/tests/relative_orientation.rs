use glam::{DMat3, DVec3};
use orient::core::geometry::{
    Operator, compare, logarithm, relative_orientation, relative_rotation, to_display_space,
};
use orient::core::math::{Tolerance, from_rows};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_same_rotation_has_zero_magnitude() {
    let rotations = [
        DMat3::IDENTITY,
        DMat3::from_rotation_x(0.3),
        DMat3::from_axis_angle(DVec3::new(1.0, 2.0, -3.0).normalize(), 2.5),
        DMat3::from_diagonal(DVec3::new(1.0, -1.0, -1.0)),
    ];
    for r in rotations {
        let frame = relative_orientation(&r, &r);
        assert!(frame.magnitude.abs() < 1e-9, "relative({r:?}, same) = {frame:?}");
    }
}

#[test]
fn test_quarter_turn_about_z_fixture() {
    let lhs = DMat3::from_rotation_z(FRAC_PI_2);
    let frame = relative_orientation(&lhs, &DMat3::IDENTITY);

    assert!((frame.magnitude - FRAC_PI_2).abs() < 1e-12);
    // Forward column is +z; the completion from the QR basis is a -90° turn about z.
    let expected = from_rows([[0.0, 1.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert!(
        frame.rotation.abs_diff_eq(expected, 1e-12),
        "got {:?}",
        frame.rotation
    );
}

#[test]
fn test_forward_axis_tracks_relative_rotation() {
    let lhs = DMat3::from_axis_angle(DVec3::new(0.2, 0.9, -0.4).normalize(), 1.2);
    let rhs = DMat3::from_rotation_y(-0.7);

    let delta = logarithm(&relative_rotation(&lhs, &rhs));
    let frame = relative_orientation(&lhs, &rhs);
    let target = to_display_space(delta);

    assert!((frame.magnitude - delta.length()).abs() < 1e-12);
    assert!(frame.rotation.z_axis.abs_diff_eq(target.normalize(), 1e-9));
}

#[test]
fn test_operand_order_matters() {
    let a = DMat3::from_rotation_x(0.4);
    let b = DMat3::from_rotation_y(0.9);
    let ab = logarithm(&relative_rotation(&a, &b));
    let ba = logarithm(&relative_rotation(&b, &a));
    // (A Bᵀ)ᵀ = B Aᵀ: the two deltas are opposite.
    assert!(ab.abs_diff_eq(-ba, 1e-12));
}

#[test]
fn test_add_operator_is_a_gap() {
    // No composition rule exists for Add; nothing is produced.
    let lhs = DMat3::from_rotation_z(0.5);
    let rhs = DMat3::from_rotation_x(0.5);
    assert!(compare(&lhs, &rhs, Operator::Add, Tolerance::default()).is_none());
}
