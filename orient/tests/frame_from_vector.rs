use glam::{DMat3, DVec3};
use orient::config::VisualizerConfig;
use orient::core::geometry::{frame_from_vector, frame_from_vector_with, to_display_space};

fn samples() -> Vec<DVec3> {
    vec![
        // Axis aligned, both signs.
        DVec3::X,
        DVec3::Y,
        DVec3::Z,
        DVec3::NEG_X,
        DVec3::NEG_Y,
        DVec3::NEG_Z,
        DVec3::new(0.0, 3.0, 0.0),
        // Diagonals and equal components.
        DVec3::ONE,
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(2.0, 2.0, 0.0),
        DVec3::new(0.0, -1.5, -1.5),
        // Near-parallel to a basis vector.
        DVec3::new(1e-8, 1.0, 0.0),
        DVec3::new(0.0, 1e-9, 1.0),
        DVec3::new(-1.0, 0.0, 1e-10),
        // Near zero.
        DVec3::new(1e-9, 0.0, 0.0),
        DVec3::new(0.0, -1e-10, 3e-10),
        // General.
        DVec3::new(0.3, -2.1, 1.7),
        DVec3::new(-3.0, 0.4, -0.01),
    ]
}

#[test]
fn test_frames_are_orthonormal_and_right_handed() {
    let mut inputs = samples();
    inputs.push(DVec3::ZERO);

    for v in inputs {
        let frame = frame_from_vector(v);
        let m = frame.rotation;
        let gram = m.transpose() * m;
        assert!(
            gram.abs_diff_eq(DMat3::IDENTITY, 1e-9),
            "v = {v:?}: MᵀM = {gram:?}"
        );
        assert!(
            (m.determinant() - 1.0).abs() < 1e-9,
            "v = {v:?}: det = {}",
            m.determinant()
        );
    }
}

#[test]
fn test_forward_column_follows_display_vector() {
    for v in samples() {
        let frame = frame_from_vector(v);
        let target = to_display_space(v);
        let forward = frame.rotation.z_axis;

        let parallel = forward.cross(target.normalize()).length();
        assert!(parallel < 1e-9, "v = {v:?}: forward {forward:?} not parallel");
        assert!(forward.dot(target) > 0.0, "v = {v:?}: forward {forward:?} flipped");
    }
}

#[test]
fn test_magnitude_is_vector_length() {
    for v in samples() {
        let frame = frame_from_vector(v);
        assert!((frame.magnitude - v.length()).abs() < 1e-15 * v.length().max(1.0));
    }
    assert_eq!(frame_from_vector(DVec3::ZERO).magnitude, 0.0);
}

#[test]
fn test_zero_vector_gives_identity_frame() {
    let frame = frame_from_vector(DVec3::ZERO);
    assert_eq!(frame.rotation, DMat3::IDENTITY);
}

#[test]
fn test_frames_are_deterministic() {
    let v = DVec3::new(0.25, -0.5, 2.0);
    assert_eq!(frame_from_vector(v), frame_from_vector(v));
}

#[test]
fn test_tiny_configured_tolerance_keeps_alignment() {
    let config = VisualizerConfig::from_ron_str("(tolerance: 0.00000000000000000001)")
        .expect("config parses");
    assert_eq!(config.tolerance.value(), 1e-20);

    for v in [
        DVec3::new(0.0, 0.0, 1e-17),
        DVec3::new(-1e-16, 0.0, 0.0),
        DVec3::new(2e-18, -5e-18, 1e-18),
    ] {
        let frame = frame_from_vector_with(v, config.tolerance);
        let target = to_display_space(v).normalize();
        let forward = frame.rotation.z_axis;
        println!("v = {v:?}: forward {forward:?}, magnitude {}", frame.magnitude);

        assert!(frame.magnitude > 0.0, "v = {v:?} treated as zero");
        assert!(
            forward.cross(target).length() < 1e-9,
            "v = {v:?}: forward {forward:?} not parallel"
        );
        assert!(forward.dot(target) > 0.0, "v = {v:?}: forward {forward:?} flipped");
    }
}
