use super::*;
use crate::error::Error;
use crate::renderer::MockRenderer;
use crate::resource::{AssetRequest, AssetResult};
use std::f64::consts::PI;

/// Loader with nothing in it
struct NoAssets;

impl AssetLoader for NoAssets {
    fn load(&mut self, request: &AssetRequest, on_complete: &mut dyn FnMut(AssetResult)) {
        on_complete(Err(Error::AssetLoadFailed(request.name.clone())));
    }
}

fn small_config() -> FlyoverConfig {
    let mut config = FlyoverConfig::default();
    config.buildings.count = 5;
    config
}

fn flyover(config: FlyoverConfig) -> Flyover {
    Flyover::with_loader(config, &mut NoAssets).unwrap()
}

#[test]
fn test_new_starts_at_angle_zero() {
    let flyover = flyover(small_config());
    assert_eq!(flyover.orbit_state().angle, 0.0);
    assert_eq!(flyover.frame_count(), 0);
    assert_eq!(flyover.scene().building_count(), 5);
    assert!((flyover.camera().position().x - 202.0).abs() < 1e-4);
}

#[test]
fn test_new_without_asset_directory_succeeds() {
    let mut config = small_config();
    config.assets.base_dir = std::env::temp_dir().join("planet_flyover_no_such_dir");
    config.assets.building_model = Some("tower.glb".to_string());

    let flyover = Flyover::new(config).unwrap();
    assert_eq!(flyover.resources().asset_count(), 0);
}

#[test]
fn test_invalid_config_rejected() {
    let mut config = small_config();
    config.orbit.sphere_radius = -1.0;
    assert!(matches!(
        Flyover::with_loader(config, &mut NoAssets),
        Err(Error::InvalidConfig(_))
    ));
}

#[test]
fn test_each_frame_advances_once() {
    let mut flyover = flyover(small_config());
    let mut renderer = MockRenderer::new();
    let v = PI / 1200.0;

    for n in 1..=10u64 {
        let stats = flyover.frame(&mut renderer).unwrap();
        assert_eq!(stats.frame_index, n - 1);
        assert!((stats.angle - n as f64 * v).abs() < 1e-12);
    }
    assert_eq!(flyover.frame_count(), 10);
    assert_eq!(renderer.frame_count(), 10);
}

#[test]
fn test_first_frame_pose() {
    let mut flyover = flyover(small_config());
    let mut renderer = MockRenderer::new();

    let stats = flyover.frame(&mut renderer).unwrap();
    assert!((stats.pose.position.x - 201.99930776).abs() < 1e-6);
    assert!((stats.pose.position.y - 0.52883416).abs() < 1e-6);
    assert_eq!(stats.pose.position.z, 0.0);

    let recorded = renderer.last_frame().unwrap();
    assert_eq!(recorded.camera_position, stats.pose.position);
    assert_eq!(recorded.look_at, stats.pose.look_at);
    assert_eq!(recorded.visible.len(), stats.visible_count);
    assert_eq!(recorded.view_projection, flyover.camera().view_projection_matrix());
}

#[test]
fn test_ground_stays_visible() {
    let mut flyover = flyover(small_config());
    let mut renderer = MockRenderer::new();
    let ground = flyover.scene().ground().unwrap();

    for _ in 0..50 {
        flyover.frame(&mut renderer).unwrap();
        assert!(renderer.last_frame().unwrap().visible.contains(&ground));
    }
}

#[test]
fn test_zero_velocity_holds_pose() {
    let mut config = small_config();
    config.orbit.angular_velocity = 0.0;
    let mut flyover = flyover(config);
    let mut renderer = MockRenderer::new();

    let first = flyover.frame(&mut renderer).unwrap();
    let second = flyover.frame(&mut renderer).unwrap();
    assert_eq!(first.pose, second.pose);
    assert_eq!(second.angle, 0.0);
}

#[test]
fn test_renderer_error_propagates_after_step() {
    let mut flyover = flyover(small_config());
    let mut renderer = MockRenderer::failing_on(1);

    flyover.frame(&mut renderer).unwrap();
    let result = flyover.frame(&mut renderer);

    assert!(matches!(result, Err(Error::BackendError(_))));
    assert_eq!(flyover.frame_count(), 2);
    assert!((flyover.orbit_state().angle - 2.0 * PI / 1200.0).abs() < 1e-12);

    // The loop keeps going after a failed frame
    let stats = flyover.frame(&mut renderer).unwrap();
    assert_eq!(stats.frame_index, 2);
}

#[test]
fn test_resize_updates_aspect() {
    let mut flyover = flyover(small_config());
    let mut renderer = MockRenderer::new();

    flyover.resize(800, 800, &mut renderer);
    assert_eq!(flyover.camera().aspect(), 1.0);
    assert_eq!(renderer.size, Some((800, 800)));

    flyover.resize(0, 600, &mut renderer);
    assert_eq!(flyover.camera().aspect(), 1.0);
    assert_eq!(renderer.size, Some((0, 600)));
}
