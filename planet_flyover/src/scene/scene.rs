/// Scene - the static flyover world: one ground sphere plus buildings.
///
/// Instances live in a SlotMap and the scene is built once at start-up;
/// nothing moves afterwards except the camera.

use slotmap::SlotMap;
use super::instance::{InstanceKey, InstanceKind, SceneInstance};
use super::placement::BuildingPlacement;

pub struct Scene {
    instances: SlotMap<InstanceKey, SceneInstance>,
    /// Placements the buildings were created from, indexed by `InstanceKind::Building`
    placements: Vec<BuildingPlacement>,
    ground: Option<InstanceKey>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            instances: SlotMap::with_key(),
            placements: Vec::new(),
            ground: None,
        }
    }

    /// Add an instance; a Ground instance replaces the scene's ground key.
    pub fn add_instance(&mut self, instance: SceneInstance) -> InstanceKey {
        let is_ground = instance.kind() == InstanceKind::Ground;
        let key = self.instances.insert(instance);
        if is_ground {
            self.ground = Some(key);
        }
        key
    }

    /// Record the placement list used for the building instances
    pub fn set_placements(&mut self, placements: Vec<BuildingPlacement>) {
        self.placements = placements;
    }

    pub fn placements(&self) -> &[BuildingPlacement] {
        &self.placements
    }

    pub fn instance(&self, key: InstanceKey) -> Option<&SceneInstance> {
        self.instances.get(key)
    }

    pub fn instance_keys(&self) -> impl Iterator<Item = InstanceKey> + '_ {
        self.instances.keys()
    }

    pub fn instances(&self) -> impl Iterator<Item = (InstanceKey, &SceneInstance)> + '_ {
        self.instances.iter()
    }

    pub fn ground(&self) -> Option<InstanceKey> {
        self.ground
    }

    pub fn building_count(&self) -> usize {
        self.instances
            .values()
            .filter(|i| matches!(i.kind(), InstanceKind::Building(_)))
            .count()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
