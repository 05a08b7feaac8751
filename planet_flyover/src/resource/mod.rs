//! Resource module - procedural meshes, materials and optional assets.

pub mod asset;
pub mod geometry;
pub mod material;
mod resource_manager;

pub use asset::{
    load_or_warn, AssetKind, AssetLoader, AssetRequest, AssetResult, FileAssetLoader, LoadedAsset,
};
pub use geometry::{cuboid, uv_sphere, MeshData, Vertex};
pub use material::MaterialDesc;
pub use resource_manager::{AssetKey, MaterialKey, MeshKey, ResourceManager};
