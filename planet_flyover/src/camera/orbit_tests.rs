use super::*;
use std::f64::consts::PI;

const EPS: f64 = 1e-9;

fn reference_params() -> OrbitParams {
    OrbitParams {
        sphere_radius: 200.0,
        camera_height: 2.0,
        view_tangent_length: 20.0,
    }
}

// ============================================================================
// Derived quantities
// ============================================================================

#[test]
fn test_orbit_radius() {
    assert_eq!(reference_params().orbit_radius(), 202.0);
}

#[test]
fn test_lead_angle() {
    let lead = reference_params().lead_angle();
    assert!((lead - (20.0f64 / 202.0).atan()).abs() < EPS);
    assert!((lead - 0.098_688_26).abs() < 1e-7);
}

#[test]
fn test_look_radius_uses_near_surface_offset() {
    let params = reference_params();
    let look = params.look_radius();
    assert!((look - 40801.0f64.sqrt()).abs() < EPS);
    assert!((look - 201.992_574).abs() < 1e-5);

    // Not derived from the orbit radius
    let tangent_radius = (20.0f64 * 20.0 + 202.0 * 202.0).sqrt();
    assert!((look - tangent_radius).abs() > 0.5);
}

#[test]
fn test_zero_tangent_length_looks_at_near_surface_point() {
    let params = OrbitParams { view_tangent_length: 0.0, ..reference_params() };
    assert_eq!(params.lead_angle(), 0.0);
    assert_eq!(params.look_radius(), 201.0);
}

// ============================================================================
// advance
// ============================================================================

#[test]
fn test_first_advance_position() {
    let mut state = OrbitState::new(PI / 1200.0);
    let pose = advance(&mut state, &reference_params());

    assert!((state.angle - PI / 1200.0).abs() < EPS);
    assert!((pose.position.x - 201.999_307_76).abs() < 1e-6);
    assert!((pose.position.y - 0.528_834_16).abs() < 1e-6);
    assert_eq!(pose.position.z, 0.0);
}

#[test]
fn test_first_advance_look_at_leads_position() {
    let params = reference_params();
    let mut state = OrbitState::new(PI / 1200.0);
    let pose = advance(&mut state, &params);

    let expected_angle = PI / 1200.0 + params.lead_angle();
    assert!((pose.look_at.x - params.look_radius() * expected_angle.cos()).abs() < EPS);
    assert!((pose.look_at.y - params.look_radius() * expected_angle.sin()).abs() < EPS);
    assert_eq!(pose.look_at.z, 0.0);

    let position_angle = pose.position.y.atan2(pose.position.x);
    let look_angle = pose.look_at.y.atan2(pose.look_at.x);
    assert!((look_angle - position_angle - params.lead_angle()).abs() < 1e-12);
}

#[test]
fn test_position_stays_on_orbit() {
    let params = reference_params();
    let mut state = OrbitState::new(PI / 1200.0);

    for _ in 0..5000 {
        let pose = advance(&mut state, &params);
        assert!((pose.position.length() - params.orbit_radius()).abs() < 1e-9);
        assert!((pose.look_at.length() - params.look_radius()).abs() < 1e-9);
        assert_eq!(pose.position.z, 0.0);
    }
}

#[test]
fn test_angle_accumulates_exactly_for_dyadic_velocity() {
    let mut state = OrbitState::new(0.25);
    for _ in 0..1000 {
        advance(&mut state, &reference_params());
    }
    assert_eq!(state.angle, 250.0);
}

#[test]
fn test_angle_is_not_wrapped() {
    let mut state = OrbitState::new(PI / 1200.0);
    for _ in 0..2400 * 3 {
        advance(&mut state, &reference_params());
    }
    assert!(state.angle > 2.0 * PI);
    assert!((state.angle - 6.0 * PI).abs() < 1e-9);
}

#[test]
fn test_negative_velocity_orbits_backwards() {
    let mut state = OrbitState::new(-PI / 2.0);
    let pose = advance(&mut state, &reference_params());
    assert!(pose.position.x.abs() < 1e-9);
    assert!((pose.position.y + 202.0).abs() < 1e-9);
}

#[test]
fn test_zero_velocity_is_stationary() {
    let params = reference_params();
    let mut state = OrbitState { angle: 1.3, angular_velocity: 0.0 };

    let first = advance(&mut state, &params);
    for _ in 0..10 {
        assert_eq!(advance(&mut state, &params), first);
    }
    assert_eq!(state.angle, 1.3);
}

#[test]
fn test_up_vector_is_always_zero() {
    let mut state = OrbitState::new(0.1);
    for _ in 0..50 {
        assert_eq!(advance(&mut state, &reference_params()).up, DVec3::ZERO);
    }
}

#[test]
fn test_pose_at_matches_advance() {
    let params = reference_params();
    let mut state = OrbitState { angle: 0.5, angular_velocity: 0.125 };
    let pose = advance(&mut state, &params);
    assert_eq!(pose, params.pose_at(0.625));
}
