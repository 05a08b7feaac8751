/// Camera culling strategies.
///
/// A CameraCuller picks which instances are handed to the renderer for
/// the current frame. Hidden instances (VISIBLE flag cleared) are always
/// skipped.

use glam::Mat4;
use crate::camera::Camera;
use super::instance::InstanceKey;
use super::scene::Scene;

/// Visible set for one frame. Ephemeral, rebuilt every frame.
#[derive(Debug, Clone)]
pub struct RenderView {
    view_projection: Mat4,
    visible: Vec<InstanceKey>,
}

impl RenderView {
    pub fn new(view_projection: Mat4, visible: Vec<InstanceKey>) -> Self {
        Self { view_projection, visible }
    }

    pub fn view_projection(&self) -> &Mat4 {
        &self.view_projection
    }

    pub fn visible(&self) -> &[InstanceKey] {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }
}

pub trait CameraCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView;
}

/// Tests each instance's world-space AABB against the camera frustum.
pub struct FrustumCuller;

impl CameraCuller for FrustumCuller {
    fn cull(&mut self, scene: &Scene, camera: &Camera) -> RenderView {
        let frustum = camera.frustum();
        let visible = scene
            .instances()
            .filter(|(_, instance)| {
                instance.is_visible() && frustum.intersects_aabb(&instance.world_bounds())
            })
            .map(|(key, _)| key)
            .collect();
        RenderView::new(camera.view_projection_matrix(), visible)
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
