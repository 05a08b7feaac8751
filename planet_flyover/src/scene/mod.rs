//! Scene module
//!
//! The static flyover world (ground sphere and buildings), how it is built
//! from configuration, and how the visible subset is chosen each frame.

mod builder;
mod culler;
mod instance;
mod placement;
mod scene;

pub use builder::{
    SceneBuilder, BUILDING_MESH, BUILDING_MODEL_ASSET, ENVIRONMENT_ASSET, GROUND_MESH,
    SURFACE_MATERIAL,
};
pub use culler::{CameraCuller, FrustumCuller, RenderView};
pub use instance::{InstanceFlags, InstanceKey, InstanceKind, SceneInstance, AABB};
pub use placement::{BuildingPlacement, PlacementGenerator};
pub use scene::Scene;
