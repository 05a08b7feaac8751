/// Renderer trait - per-frame drawing interface

use crate::camera::{Camera, CameraPose};
use crate::error::Result;
use crate::resource::ResourceManager;
use crate::scene::{RenderView, Scene};

// ============================================================================
// Frame context
// ============================================================================

/// Everything a renderer needs to draw one frame.
///
/// Borrowed from the `Flyover` for the duration of a single `render` call.
pub struct FrameContext<'a> {
    /// Zero-based index of this frame
    pub frame_index: u64,
    /// Pose produced by this frame's orbit step
    pub pose: &'a CameraPose,
    /// Camera with the pose already applied
    pub camera: &'a Camera,
    /// Instances that survived culling, plus the view-projection used
    pub view: &'a RenderView,
    pub scene: &'a Scene,
    pub resources: &'a ResourceManager,
}

// ============================================================================
// Renderer trait
// ============================================================================

/// Main renderer trait
///
/// Implemented by whatever backend draws the flyover: a GPU renderer in an
/// application, `MockRenderer` in tests.
pub trait Renderer {
    /// Draw one frame
    ///
    /// # Arguments
    ///
    /// * `frame` - Camera, visible instances and resources for this frame
    fn render(&mut self, frame: &FrameContext) -> Result<()>;

    /// Notify renderer that the window has been resized
    ///
    /// # Arguments
    ///
    /// * `width` - New window width
    /// * `height` - New window height
    fn resize(&mut self, _width: u32, _height: u32) {}
}
