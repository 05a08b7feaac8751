/// SceneBuilder - turns a FlyoverConfig into the static scene.
///
/// Builds the ground sphere, generates the building placements and
/// requests the optional assets. Missing assets never abort the build:
/// without an environment map the metal surfaces reflect nothing, and
/// without a building model the city falls back to boxes.

use crate::config::FlyoverConfig;
use crate::error::Result;
use crate::resource::{
    cuboid, load_or_warn, uv_sphere, AssetKey, AssetLoader, AssetRequest, MaterialDesc,
    ResourceManager,
};
use super::instance::{InstanceFlags, InstanceKind, SceneInstance, AABB};
use super::placement::PlacementGenerator;
use super::scene::Scene;

const SOURCE: &str = "planet::SceneBuilder";

pub const GROUND_MESH: &str = "ground";
pub const BUILDING_MESH: &str = "building";
pub const SURFACE_MATERIAL: &str = "surface";
pub const ENVIRONMENT_ASSET: &str = "environment";
pub const BUILDING_MODEL_ASSET: &str = "building_model";

pub struct SceneBuilder<'a> {
    config: &'a FlyoverConfig,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(config: &'a FlyoverConfig) -> Self {
        Self { config }
    }

    pub fn build(
        &self,
        resources: &mut ResourceManager,
        loader: &mut dyn AssetLoader,
    ) -> Result<Scene> {
        let ground_radius = self.config.orbit.sphere_radius as f32;

        let env_map = self.load_environment(resources, loader)?;
        let building_model = self.load_building_model(resources, loader)?;

        let ground = &self.config.ground;
        let surface = resources.add_material(SURFACE_MATERIAL, MaterialDesc::from_ground(ground, env_map))?;

        let mut scene = Scene::new();

        // Ground sphere at the origin
        let sphere = uv_sphere(ground_radius, ground.width_segments, ground.height_segments);
        let sphere_bounds = sphere.bounds();
        let sphere_key = resources.add_mesh(GROUND_MESH, sphere)?;
        scene.add_instance(SceneInstance::new(
            InstanceKind::Ground,
            sphere_key,
            surface,
            glam::Mat4::IDENTITY,
            sphere_bounds,
        ));

        // Buildings: one unit cube stretched per placement, or the loaded model
        let unit_box = cuboid(1.0, 1.0, 1.0);
        let unit_bounds = unit_box.bounds();
        let box_key = resources.add_mesh(BUILDING_MESH, unit_box)?;

        let placements = PlacementGenerator::new(self.config.buildings.seed)
            .generate(&self.config.buildings, ground_radius);

        for (index, placement) in placements.iter().enumerate() {
            let kind = InstanceKind::Building(index);
            let instance = match building_model {
                // Models keep their own proportions; the placement box only bounds them
                Some(model) => {
                    let half = placement.box_dimensions() * 0.5;
                    let proxy = AABB { min: -half, max: half };
                    SceneInstance::new(kind, box_key, surface, placement.world_matrix(), proxy)
                        .with_model(model)
                }
                None => SceneInstance::new(kind, box_key, surface, placement.box_world_matrix(), unit_bounds),
            };
            // Buildings shade the ground; the ground only receives
            scene.add_instance(instance.with_flags(InstanceFlags::all()));
        }

        crate::flyover_info!(SOURCE,
            "Scene built: ground r={} ({}x{} segments), {} {} buildings, env map: {}",
            ground_radius,
            ground.width_segments,
            ground.height_segments,
            placements.len(),
            if building_model.is_some() { "model" } else { "box" },
            if env_map.is_some() { "yes" } else { "none" });

        scene.set_placements(placements);
        Ok(scene)
    }

    /// HDR environment if configured, otherwise the cube map
    fn load_environment(
        &self,
        resources: &mut ResourceManager,
        loader: &mut dyn AssetLoader,
    ) -> Result<Option<AssetKey>> {
        let assets = &self.config.assets;
        let request = match (&assets.hdr_environment, &assets.cube_map) {
            (Some(path), _) => AssetRequest::hdr_environment(ENVIRONMENT_ASSET, path),
            (None, Some(faces)) => AssetRequest::cube_texture(ENVIRONMENT_ASSET, faces),
            (None, None) => return Ok(None),
        };

        match load_or_warn(loader, &request) {
            Some(asset) => Ok(Some(resources.add_asset(asset)?)),
            None => Ok(None),
        }
    }

    fn load_building_model(
        &self,
        resources: &mut ResourceManager,
        loader: &mut dyn AssetLoader,
    ) -> Result<Option<AssetKey>> {
        let Some(path) = &self.config.assets.building_model else {
            return Ok(None);
        };

        match load_or_warn(loader, &AssetRequest::model(BUILDING_MODEL_ASSET, path)) {
            Some(asset) => Ok(Some(resources.add_asset(asset)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
