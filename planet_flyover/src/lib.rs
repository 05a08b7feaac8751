/*!
# Planet Flyover

Core types for a low-altitude flyover of a spherical "planet" scene.

A camera orbits a ground sphere at constant altitude, looking ahead along a
tangent line, while a field of randomly rotated buildings pokes out of the
surface. The crate owns the camera path, the static scene description and
the per-frame loop; drawing is delegated to a [`Renderer`](renderer::Renderer)
implementation supplied by the caller.

## Architecture

- **camera**: orbital path generator, camera matrices, frustum
- **scene**: building placements, scene instances, culling
- **resource**: procedural meshes, materials, asset loading
- **renderer**: the per-frame drawing seam
- **flyover**: the frame loop tying it all together
*/

// Internal modules
mod error;
mod engine;
mod flyover;
pub mod camera;
pub mod config;
pub mod log;
pub mod renderer;
pub mod resource;
pub mod scene;

// Main planet flyover namespace module
pub mod planet {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::engine::Engine;

    // Frame loop
    pub use crate::flyover::{Flyover, FrameStats};

    // Configuration
    pub use crate::config::FlyoverConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod render {
        pub use crate::renderer::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
