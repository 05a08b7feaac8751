/// Mock Renderer for tests (no GPU required)
///
/// Records a summary of every frame it is asked to draw so tests can check
/// what the frame loop handed over. Can be told to fail on a given frame.

use glam::{DVec3, Mat4};
use crate::error::Result;
use crate::flyover_bail;
use crate::renderer::{FrameContext, Renderer};
use crate::scene::InstanceKey;

/// Snapshot of one `render` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub frame_index: u64,
    pub camera_position: DVec3,
    pub look_at: DVec3,
    pub view_projection: Mat4,
    pub visible: Vec<InstanceKey>,
}

#[derive(Debug, Default)]
pub struct MockRenderer {
    pub frames: Vec<RecordedFrame>,
    /// Last size passed to `resize`
    pub size: Option<(u32, u32)>,
    fail_on_frame: Option<u64>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `render` return a backend error for the given frame index
    pub fn failing_on(frame_index: u64) -> Self {
        Self {
            fail_on_frame: Some(frame_index),
            ..Self::default()
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self, frame: &FrameContext) -> Result<()> {
        if self.fail_on_frame == Some(frame.frame_index) {
            flyover_bail!("planet::MockRenderer", BackendError,
                "Injected failure on frame {}", frame.frame_index);
        }

        self.frames.push(RecordedFrame {
            frame_index: frame.frame_index,
            camera_position: frame.pose.position,
            look_at: frame.pose.look_at,
            view_projection: *frame.view.view_projection(),
            visible: frame.view.visible().to_vec(),
        });
        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = Some((width, height));
    }
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
