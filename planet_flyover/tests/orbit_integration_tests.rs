//! Integration tests for the orbital camera path
//!
//! Exercises `advance` through the public API only.
//!
//! Run with: cargo test --test orbit_integration_tests

use planet_flyover::planet::camera::{advance, OrbitParams, OrbitState};
use planet_flyover::planet::FlyoverConfig;
use std::f64::consts::PI;

fn default_params() -> OrbitParams {
    OrbitParams { sphere_radius: 200.0, camera_height: 2.0, view_tangent_length: 20.0 }
}

// ============================================================================
// PATH PROPERTIES
// ============================================================================

#[test]
fn test_integration_camera_stays_at_altitude() {
    let params = default_params();
    let mut state = OrbitState::new(PI / 1200.0);

    for _ in 0..5000 {
        let pose = advance(&mut state, &params);
        assert!((pose.position.length() - 202.0).abs() < 1e-9);
        assert_eq!(pose.position.z, 0.0);
        assert_eq!(pose.look_at.z, 0.0);
    }
}

#[test]
fn test_integration_look_at_leads_camera() {
    let params = default_params();
    let mut state = OrbitState::new(PI / 1200.0);

    for _ in 0..100 {
        let pose = advance(&mut state, &params);
        assert!((pose.look_at.length() - params.look_radius()).abs() < 1e-9);

        let camera_angle = pose.position.y.atan2(pose.position.x);
        let look_angle = pose.look_at.y.atan2(pose.look_at.x);
        let mut lead = look_angle - camera_angle;
        if lead < -PI {
            lead += 2.0 * PI;
        }
        assert!((lead - params.lead_angle()).abs() < 1e-9);
    }
}

#[test]
fn test_integration_full_revolution_returns_home() {
    let params = default_params();
    let mut state = OrbitState::new(PI / 1200.0);

    let mut pose = advance(&mut state, &params);
    for _ in 1..2400 {
        pose = advance(&mut state, &params);
    }

    // Angle keeps counting; the position wraps
    assert!((state.angle - 2.0 * PI).abs() < 1e-9);
    assert!((pose.position.x - 202.0).abs() < 1e-6);
    assert!(pose.position.y.abs() < 1e-6);
}

#[test]
fn test_integration_dyadic_velocity_is_exact() {
    let params = default_params();
    let mut state = OrbitState::new(0.125);
    for _ in 0..64 {
        advance(&mut state, &params);
    }
    assert_eq!(state.angle, 8.0);
}

#[test]
fn test_integration_reverse_direction() {
    let params = default_params();
    let mut state = OrbitState::new(-PI / 1200.0);

    let pose = advance(&mut state, &params);
    assert!(pose.position.y < 0.0);
    assert!(state.angle < 0.0);
}

#[test]
fn test_integration_up_vector_always_zero() {
    let params = default_params();
    let mut state = OrbitState::new(0.3);
    for _ in 0..20 {
        assert_eq!(advance(&mut state, &params).up.length(), 0.0);
    }
}

#[test]
fn test_integration_config_drives_orbit() {
    let config = FlyoverConfig::from_toml_str(
        r#"
        [orbit]
        sphere_radius = 50.0
        camera_height = 5.0
        view_tangent_length = 0.0
        angular_velocity = 0.5
        "#,
    )
    .unwrap();

    let params = config.orbit_params();
    let mut state = config.initial_orbit_state();
    let pose = advance(&mut state, &params);

    assert_eq!(state.angle, 0.5);
    assert!((pose.position.length() - 55.0).abs() < 1e-9);
    // Zero tangent: look straight at the point one unit above the surface
    assert!((pose.look_at.length() - 51.0).abs() < 1e-9);
    assert!((pose.look_at.normalize() - pose.position.normalize()).length() < 1e-12);
}
