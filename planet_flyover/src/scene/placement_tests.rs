use super::*;

fn settings(count: u32) -> BuildingSettings {
    BuildingSettings { count, ..BuildingSettings::default() }
}

#[test]
fn test_generates_requested_count() {
    let placements = PlacementGenerator::new(1).generate(&settings(100), 200.0);
    assert_eq!(placements.len(), 100);
    assert!(PlacementGenerator::new(1).generate(&settings(0), 200.0).is_empty());
}

#[test]
fn test_same_seed_same_city() {
    let a = PlacementGenerator::new(42).generate(&settings(50), 200.0);
    let b = PlacementGenerator::new(42).generate(&settings(50), 200.0);
    assert_eq!(a, b);

    let c = PlacementGenerator::new(43).generate(&settings(50), 200.0);
    assert_ne!(a, c);
}

#[test]
fn test_placements_within_ranges() {
    let s = settings(500);
    for p in PlacementGenerator::new(7).generate(&s, 200.0) {
        for angle in p.rotation.to_array() {
            assert!((0.0..TAU).contains(&angle) || angle == TAU);
        }
        assert!(p.height >= 220.0 && p.height <= 250.0);
        assert!(p.footprint.x >= 4.0 && p.footprint.x <= 8.0);
        assert!(p.footprint.y >= 4.0 && p.footprint.y <= 8.0);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.position, Vec3::ZERO);
    }
}

#[test]
fn test_scale_range_is_sampled() {
    let s = BuildingSettings { count: 200, min_scale: 0.5, max_scale: 2.0, ..BuildingSettings::default() };
    let placements = PlacementGenerator::new(9).generate(&s, 200.0);
    assert!(placements.iter().all(|p| p.scale >= 0.5 && p.scale <= 2.0));
    assert!(placements.iter().any(|p| p.scale != placements[0].scale));
}

#[test]
fn test_box_dimensions_span_both_sides() {
    let placement = BuildingPlacement {
        rotation: Vec3::ZERO,
        position: Vec3::ZERO,
        scale: 1.0,
        footprint: Vec2::new(5.0, 6.0),
        height: 230.0,
    };
    assert_eq!(placement.box_dimensions(), Vec3::new(5.0, 460.0, 6.0));
    assert_eq!(placement.protrusion(200.0), 30.0);
}

#[test]
fn test_world_matrix_applies_x_then_y_then_z_order() {
    let placement = BuildingPlacement {
        rotation: Vec3::new(0.3, 1.1, -0.7),
        position: Vec3::ZERO,
        scale: 1.0,
        footprint: Vec2::ONE,
        height: 1.0,
    };
    let expected = Mat4::from_rotation_x(0.3) * Mat4::from_rotation_y(1.1) * Mat4::from_rotation_z(-0.7);
    assert!(placement.world_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_box_world_matrix_tips_poke_out_of_sphere() {
    let radius = 200.0;
    for p in PlacementGenerator::new(3).generate(&settings(20), radius) {
        let m = p.box_world_matrix();
        let top = m.transform_point3(Vec3::new(0.0, 0.5, 0.0));
        let bottom = m.transform_point3(Vec3::new(0.0, -0.5, 0.0));
        assert!(top.length() > radius + 19.0);
        assert!(bottom.length() > radius + 19.0);
        assert!((top + bottom).length() < 1e-3);
    }
}
