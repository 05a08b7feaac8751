//! Central store for meshes, materials and loaded assets.
//!
//! Every resource gets a stable slotmap key and a unique name.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use crate::error::Result;
use crate::flyover_bail;
use super::asset::LoadedAsset;
use super::geometry::MeshData;
use super::material::MaterialDesc;

const SOURCE: &str = "planet::ResourceManager";

new_key_type! {
    /// Stable key for a mesh in the ResourceManager
    pub struct MeshKey;
    /// Stable key for a material in the ResourceManager
    pub struct MaterialKey;
    /// Stable key for a loaded asset in the ResourceManager
    pub struct AssetKey;
}

pub struct ResourceManager {
    meshes: SlotMap<MeshKey, MeshData>,
    mesh_names: FxHashMap<String, MeshKey>,
    materials: SlotMap<MaterialKey, MaterialDesc>,
    material_names: FxHashMap<String, MaterialKey>,
    assets: SlotMap<AssetKey, LoadedAsset>,
    asset_names: FxHashMap<String, AssetKey>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self {
            meshes: SlotMap::with_key(),
            mesh_names: FxHashMap::default(),
            materials: SlotMap::with_key(),
            material_names: FxHashMap::default(),
            assets: SlotMap::with_key(),
            asset_names: FxHashMap::default(),
        }
    }

    // ===== MESHES =====

    /// Register a mesh under a unique name
    pub fn add_mesh(&mut self, name: &str, mesh: MeshData) -> Result<MeshKey> {
        if self.mesh_names.contains_key(name) {
            flyover_bail!(SOURCE, InvalidResource, "Mesh '{}' already exists", name);
        }
        if mesh.indices.iter().any(|&i| i as usize >= mesh.vertices.len()) {
            flyover_bail!(SOURCE, InvalidResource, "Mesh '{}' has out-of-range indices", name);
        }
        let key = self.meshes.insert(mesh);
        self.mesh_names.insert(name.to_string(), key);
        Ok(key)
    }

    pub fn mesh(&self, key: MeshKey) -> Option<&MeshData> {
        self.meshes.get(key)
    }

    pub fn mesh_by_name(&self, name: &str) -> Option<MeshKey> {
        self.mesh_names.get(name).copied()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // ===== MATERIALS =====

    pub fn add_material(&mut self, name: &str, material: MaterialDesc) -> Result<MaterialKey> {
        if self.material_names.contains_key(name) {
            flyover_bail!(SOURCE, InvalidResource, "Material '{}' already exists", name);
        }
        if let Some(env_map) = material.env_map {
            if !self.assets.contains_key(env_map) {
                flyover_bail!(SOURCE, InvalidResource,
                    "Material '{}' references an unknown environment map", name);
            }
        }
        let key = self.materials.insert(material);
        self.material_names.insert(name.to_string(), key);
        Ok(key)
    }

    pub fn material(&self, key: MaterialKey) -> Option<&MaterialDesc> {
        self.materials.get(key)
    }

    pub fn material_by_name(&self, name: &str) -> Option<MaterialKey> {
        self.material_names.get(name).copied()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    // ===== ASSETS =====

    /// Store a loaded asset under its own name
    pub fn add_asset(&mut self, asset: LoadedAsset) -> Result<AssetKey> {
        if self.asset_names.contains_key(&asset.name) {
            flyover_bail!(SOURCE, InvalidResource, "Asset '{}' already exists", asset.name);
        }
        let name = asset.name.clone();
        let key = self.assets.insert(asset);
        self.asset_names.insert(name, key);
        Ok(key)
    }

    pub fn asset(&self, key: AssetKey) -> Option<&LoadedAsset> {
        self.assets.get(key)
    }

    pub fn asset_by_name(&self, name: &str) -> Option<AssetKey> {
        self.asset_names.get(name).copied()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "resource_manager_tests.rs"]
mod tests;
