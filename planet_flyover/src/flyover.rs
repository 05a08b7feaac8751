/// Flyover - owns the orbit, camera and scene and runs one frame at a time.
///
/// Each frame advances the orbit exactly once, places the camera on the new
/// pose, culls the scene and hands the result to a `Renderer`. Nothing here
/// is shared across threads; the caller drives `frame` from its redraw loop.

use crate::camera::{advance, Camera, CameraPose, OrbitParams, OrbitState};
use crate::config::FlyoverConfig;
use crate::error::Result;
use crate::renderer::{FrameContext, Renderer};
use crate::resource::{AssetLoader, FileAssetLoader, ResourceManager};
use crate::scene::{CameraCuller, FrustumCuller, Scene, SceneBuilder};

const SOURCE: &str = "planet::Flyover";

/// What happened during one call to `Flyover::frame`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    /// Orbit angle after this frame's step (radians, unwrapped)
    pub angle: f64,
    pub pose: CameraPose,
    pub visible_count: usize,
}

pub struct Flyover {
    params: OrbitParams,
    state: OrbitState,
    camera: Camera,
    scene: Scene,
    resources: ResourceManager,
    culler: FrustumCuller,
    frame_index: u64,
}

impl Flyover {
    /// Validate `config` and build the scene, reading assets from
    /// `config.assets.base_dir`.
    pub fn new(config: FlyoverConfig) -> Result<Self> {
        let mut loader = FileAssetLoader::new(config.assets.base_dir.clone());
        Self::with_loader(config, &mut loader)
    }

    /// Same as `new` with a caller-supplied asset loader
    pub fn with_loader(config: FlyoverConfig, loader: &mut dyn AssetLoader) -> Result<Self> {
        config.validate()?;

        let mut resources = ResourceManager::new();
        let scene = SceneBuilder::new(&config).build(&mut resources, loader)?;

        let params = config.orbit_params();
        let state = config.initial_orbit_state();
        let mut camera = Camera::from_settings(&config.camera);
        camera.apply_pose(&params.pose_at(state.angle));

        crate::flyover_info!(SOURCE,
            "Flyover ready: orbit radius {}, lead angle {:.6} rad, look radius {:.3}, {} rad/frame",
            params.orbit_radius(), params.lead_angle(), params.look_radius(), state.angular_velocity);

        Ok(Self {
            params,
            state,
            camera,
            scene,
            resources,
            culler: FrustumCuller,
            frame_index: 0,
        })
    }

    /// Run one frame: advance, apply pose, cull, render.
    ///
    /// The orbit has already moved when the renderer is called, so a
    /// renderer error still consumes the step.
    pub fn frame(&mut self, renderer: &mut dyn Renderer) -> Result<FrameStats> {
        let pose = advance(&mut self.state, &self.params);
        self.camera.apply_pose(&pose);
        let view = self.culler.cull(&self.scene, &self.camera);

        let frame_index = self.frame_index;
        self.frame_index += 1;

        crate::flyover_trace!(SOURCE, "frame {} angle {:.6} visible {}",
            frame_index, self.state.angle, view.visible_count());

        renderer.render(&FrameContext {
            frame_index,
            pose: &pose,
            camera: &self.camera,
            view: &view,
            scene: &self.scene,
            resources: &self.resources,
        })?;

        Ok(FrameStats {
            frame_index,
            angle: self.state.angle,
            pose,
            visible_count: view.visible_count(),
        })
    }

    /// Window size changed: update the aspect ratio and tell the renderer.
    /// A zero-sized window (minimized) leaves the camera untouched.
    pub fn resize(&mut self, width: u32, height: u32, renderer: &mut dyn Renderer) {
        if width > 0 && height > 0 {
            self.camera.set_aspect(width as f32 / height as f32);
        }
        renderer.resize(width, height);
    }

    // ===== GETTERS =====

    pub fn orbit_state(&self) -> &OrbitState {
        &self.state
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn resources(&self) -> &ResourceManager {
        &self.resources
    }

    /// Number of frames run so far
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }
}

#[cfg(test)]
#[path = "flyover_tests.rs"]
mod tests;
