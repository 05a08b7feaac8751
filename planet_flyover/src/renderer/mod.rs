/// Renderer module
///
/// The seam between the flyover and whatever draws it.

mod renderer;
mod mock_renderer;

pub use renderer::{FrameContext, Renderer};
pub use mock_renderer::{MockRenderer, RecordedFrame};
