//! Start-up configuration with TOML support.
//!
//! Every section is `#[serde(default)]`, so a partial file (say, only an
//! `[orbit]` table) overrides just the values it names. Values are read
//! once at start-up and never change afterwards.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::camera::{OrbitParams, OrbitState};
use crate::error::Result;
use crate::flyover_bail;

const SOURCE: &str = "planet::Config";

/// Top-level configuration container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct FlyoverConfig {
    pub orbit: OrbitSettings,
    pub camera: CameraSettings,
    pub ground: GroundSettings,
    pub buildings: BuildingSettings,
    pub assets: AssetSettings,
}

/// Camera path around the ground sphere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitSettings {
    /// Radius of the ground sphere.
    pub sphere_radius: f64,
    /// Altitude of the camera above the sphere surface.
    pub camera_height: f64,
    /// How far ahead along the surface the camera looks.
    pub view_tangent_length: f64,
    /// Radians advanced per frame. Sign picks the direction.
    pub angular_velocity: f64,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            sphere_radius: 200.0,
            camera_height: 2.0,
            view_tangent_length: 20.0,
            angular_velocity: PI / 1200.0,
        }
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial aspect ratio, replaced by the window's on resize.
    pub aspect: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

/// Ground sphere tessellation and surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GroundSettings {
    pub width_segments: u32,
    pub height_segments: u32,
    /// 0xRRGGBB
    pub color: u32,
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for GroundSettings {
    fn default() -> Self {
        Self {
            width_segments: 64,
            height_segments: 32,
            color: 0xffffff,
            roughness: 0.0,
            metalness: 1.0,
        }
    }
}

/// Random building field.
///
/// Each building is a box centred on the planet's centre whose half-height
/// exceeds the sphere radius, so it pokes out on both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildingSettings {
    pub count: u32,
    /// Seed for the placement generator. Same seed, same city.
    pub seed: u64,
    /// Minimum protrusion above the surface.
    pub min_height: f32,
    /// Random extra protrusion, uniform in [0, height_jitter).
    pub height_jitter: f32,
    pub min_footprint: f32,
    pub footprint_jitter: f32,
    /// Uniform scale range applied to every building (models in later scenes).
    pub min_scale: f32,
    pub max_scale: f32,
}

impl Default for BuildingSettings {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 0x5eed_c17e,
            min_height: 20.0,
            height_jitter: 30.0,
            min_footprint: 4.0,
            footprint_jitter: 4.0,
            min_scale: 1.0,
            max_scale: 1.0,
        }
    }
}

/// Optional assets. Any of them may be missing at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetSettings {
    /// Directory all asset paths are relative to.
    pub base_dir: PathBuf,
    /// Cube map faces in +x, -x, +y, -y, +z, -z order.
    pub cube_map: Option<Vec<String>>,
    /// Equirectangular HDR environment, preferred over the cube map.
    pub hdr_environment: Option<String>,
    /// Model used in place of box buildings.
    pub building_model: Option<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("textures"),
            cube_map: Some(
                ["px.png", "nx.png", "py.png", "ny.png", "pz.png", "nz.png"]
                    .iter()
                    .map(|face| face.to_string())
                    .collect(),
            ),
            hdr_environment: None,
            building_model: None,
        }
    }
}

impl FlyoverConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: FlyoverConfig = match toml::from_str(text) {
            Ok(config) => config,
            Err(e) => flyover_bail!(SOURCE, InvalidConfig, "TOML parse error: {}", e),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => flyover_bail!(SOURCE, InvalidConfig, "cannot read {}: {}", path.display(), e),
        };
        let config = Self::from_toml_str(&text)?;
        crate::flyover_info!(SOURCE, "Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        match toml::to_string_pretty(self) {
            Ok(text) => Ok(text),
            Err(e) => flyover_bail!(SOURCE, InvalidConfig, "TOML serialize error: {}", e),
        }
    }

    /// Check every value the rest of the crate relies on.
    ///
    /// `advance` itself never checks its inputs; a positive orbit radius is
    /// guaranteed here instead.
    pub fn validate(&self) -> Result<()> {
        let orbit = &self.orbit;
        if !(orbit.sphere_radius.is_finite() && orbit.sphere_radius > 0.0) {
            flyover_bail!(SOURCE, InvalidConfig,
                "orbit.sphere_radius must be positive, got {}", orbit.sphere_radius);
        }
        if !orbit.camera_height.is_finite() || orbit.sphere_radius + orbit.camera_height <= 0.0 {
            flyover_bail!(SOURCE, InvalidConfig,
                "orbit radius (sphere_radius + camera_height) must be positive, got {}",
                orbit.sphere_radius + orbit.camera_height);
        }
        if !(orbit.view_tangent_length.is_finite() && orbit.view_tangent_length >= 0.0) {
            flyover_bail!(SOURCE, InvalidConfig,
                "orbit.view_tangent_length must be >= 0, got {}", orbit.view_tangent_length);
        }
        if !orbit.angular_velocity.is_finite() {
            flyover_bail!(SOURCE, InvalidConfig, "orbit.angular_velocity must be finite");
        }

        let camera = &self.camera;
        if ![camera.fov_y_degrees, camera.near, camera.far, camera.aspect].iter().all(|v| v.is_finite()) {
            flyover_bail!(SOURCE, InvalidConfig,
                "camera settings must be finite, got fov={} near={} far={} aspect={}",
                camera.fov_y_degrees, camera.near, camera.far, camera.aspect);
        }
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            flyover_bail!(SOURCE, InvalidConfig,
                "camera.fov_y_degrees must be in (0, 180), got {}", camera.fov_y_degrees);
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            flyover_bail!(SOURCE, InvalidConfig,
                "camera planes must satisfy 0 < near < far, got near={} far={}",
                camera.near, camera.far);
        }
        if !(camera.aspect > 0.0) {
            flyover_bail!(SOURCE, InvalidConfig, "camera.aspect must be positive");
        }

        if self.ground.width_segments < 3 || self.ground.height_segments < 2 {
            flyover_bail!(SOURCE, InvalidConfig,
                "ground needs at least 3x2 segments, got {}x{}",
                self.ground.width_segments, self.ground.height_segments);
        }
        for (name, value) in [("roughness", self.ground.roughness), ("metalness", self.ground.metalness)] {
            if !(0.0..=1.0).contains(&value) {
                flyover_bail!(SOURCE, InvalidConfig, "ground.{} must be in [0, 1], got {}", name, value);
            }
        }

        let buildings = &self.buildings;
        let dimensions = [
            buildings.min_height, buildings.height_jitter, buildings.min_footprint,
            buildings.footprint_jitter, buildings.min_scale, buildings.max_scale,
        ];
        if !dimensions.iter().all(|v| v.is_finite()) {
            flyover_bail!(SOURCE, InvalidConfig,
                "building dimensions and scales must be finite, got {:?}", dimensions);
        }
        if buildings.min_height < 0.0 || buildings.height_jitter < 0.0
            || buildings.min_footprint <= 0.0 || buildings.footprint_jitter < 0.0
        {
            flyover_bail!(SOURCE, InvalidConfig,
                "building dimensions must be non-negative with a positive footprint");
        }
        if !(buildings.min_scale > 0.0 && buildings.max_scale >= buildings.min_scale) {
            flyover_bail!(SOURCE, InvalidConfig,
                "building scale range [{}, {}] is invalid",
                buildings.min_scale, buildings.max_scale);
        }

        if let Some(faces) = &self.assets.cube_map {
            if faces.len() != 6 {
                flyover_bail!(SOURCE, InvalidConfig,
                    "assets.cube_map needs 6 faces, got {}", faces.len());
            }
        }

        Ok(())
    }

    /// Fixed camera path parameters
    pub fn orbit_params(&self) -> OrbitParams {
        OrbitParams {
            sphere_radius: self.orbit.sphere_radius,
            camera_height: self.orbit.camera_height,
            view_tangent_length: self.orbit.view_tangent_length,
        }
    }

    /// Orbit state at start-up (angle 0)
    pub fn initial_orbit_state(&self) -> OrbitState {
        OrbitState::new(self.orbit.angular_velocity)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
