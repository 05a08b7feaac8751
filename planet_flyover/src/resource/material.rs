//! Physically based material description.
//!
//! Materials are plain parameter sets handed to the renderer; nothing is
//! compiled or uploaded here.

use glam::Vec3;
use crate::config::GroundSettings;
use super::resource_manager::AssetKey;

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDesc {
    /// Base color as 0xRRGGBB
    pub color: u32,
    /// 0 = mirror, 1 = fully diffuse
    pub roughness: f32,
    /// 0 = dielectric, 1 = metal
    pub metalness: f32,
    /// Environment map for reflections, if one loaded
    pub env_map: Option<AssetKey>,
}

impl MaterialDesc {
    /// Material shared by the ground and the box buildings
    pub fn from_ground(settings: &GroundSettings, env_map: Option<AssetKey>) -> Self {
        Self {
            color: settings.color,
            roughness: settings.roughness.clamp(0.0, 1.0),
            metalness: settings.metalness.clamp(0.0, 1.0),
            env_map,
        }
    }

    /// Base color as RGB components in [0, 1]
    pub fn color_rgb(&self) -> Vec3 {
        let r = (self.color >> 16) & 0xff;
        let g = (self.color >> 8) & 0xff;
        let b = self.color & 0xff;
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self::from_ground(&GroundSettings::default(), None)
    }
}
