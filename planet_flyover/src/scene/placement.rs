/// Building placements - the declarative description of the city.
///
/// Every building is a tall box (or model) centred on the planet's centre
/// and randomly rotated, so its two ends stick out of the sphere at
/// opposite points. Placements come from a seeded generator: same seed,
/// same city.

use std::f32::consts::TAU;
use glam::{Mat4, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::BuildingSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingPlacement {
    /// XYZ Euler angles in radians, applied as Rx * Ry * Rz
    pub rotation: Vec3,
    pub position: Vec3,
    /// Uniform scale factor
    pub scale: f32,
    /// Box width (x) and depth (z)
    pub footprint: Vec2,
    /// Half of the box's vertical extent: sphere radius plus protrusion
    pub height: f32,
}

impl BuildingPlacement {
    /// Box size before scaling: (width, full height, depth)
    pub fn box_dimensions(&self) -> Vec3 {
        Vec3::new(self.footprint.x, self.height * 2.0, self.footprint.y)
    }

    /// Translation * rotation * uniform scale
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_scale(Vec3::splat(self.scale))
    }

    /// World matrix for a unit cube stretched to `box_dimensions`
    pub fn box_world_matrix(&self) -> Mat4 {
        self.world_matrix() * Mat4::from_scale(self.box_dimensions())
    }

    /// How far the building sticks out above the surface
    pub fn protrusion(&self, ground_radius: f32) -> f32 {
        self.height * self.scale - ground_radius
    }
}

pub struct PlacementGenerator {
    rng: StdRng,
}

impl PlacementGenerator {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Produce `settings.count` placements around a sphere of `ground_radius`.
    pub fn generate(&mut self, settings: &BuildingSettings, ground_radius: f32) -> Vec<BuildingPlacement> {
        (0..settings.count)
            .map(|_| self.next_placement(settings, ground_radius))
            .collect()
    }

    fn next_placement(&mut self, settings: &BuildingSettings, ground_radius: f32) -> BuildingPlacement {
        let rotation = Vec3::new(
            self.rng.random::<f32>() * TAU,
            self.rng.random::<f32>() * TAU,
            self.rng.random::<f32>() * TAU,
        );
        let height = self.rng.random::<f32>() * settings.height_jitter + settings.min_height + ground_radius;
        let footprint = Vec2::new(
            self.rng.random::<f32>() * settings.footprint_jitter + settings.min_footprint,
            self.rng.random::<f32>() * settings.footprint_jitter + settings.min_footprint,
        );
        let scale = if settings.max_scale > settings.min_scale {
            self.rng.random_range(settings.min_scale..=settings.max_scale)
        } else {
            settings.min_scale
        };

        BuildingPlacement {
            rotation,
            position: Vec3::ZERO,
            scale,
            footprint,
            height,
        }
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
