/// Scene instances - one per drawable object (ground, each building).

use bitflags::bitflags;
use glam::{Mat4, Vec3};
use slotmap::new_key_type;
use crate::resource::{AssetKey, MaterialKey, MeshKey};

new_key_type! {
    /// Stable key for an instance in a Scene
    pub struct InstanceKey;
}

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    pub min: Vec3,
    pub max: Vec3,
}

impl AABB {
    /// Transform this local-space AABB by a matrix (Arvo's method).
    ///
    /// Projects each matrix axis onto the box extents, giving the tight
    /// world-space box without transforming all eight corners.
    pub fn transformed(&self, matrix: &Mat4) -> AABB {
        let translation = matrix.col(3).truncate();
        let mut min = translation;
        let mut max = translation;

        for i in 0..3 {
            let axis = matrix.col(i).truncate();
            let a = axis * self.min[i];
            let b = axis * self.max[i];
            min += a.min(b);
            max += a.max(b);
        }

        AABB { min, max }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InstanceFlags: u32 {
        const VISIBLE        = 1 << 0;
        const CAST_SHADOW    = 1 << 1;
        const RECEIVE_SHADOW = 1 << 2;
    }
}

/// What an instance represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKind {
    Ground,
    /// Index into the placement list the scene was built from
    Building(usize),
}

#[derive(Debug, Clone)]
pub struct SceneInstance {
    kind: InstanceKind,
    mesh: MeshKey,
    material: MaterialKey,
    /// Loaded model drawn in place of `mesh`; the mesh then only serves as a proxy
    model: Option<AssetKey>,
    world_matrix: Mat4,
    /// Local-space bounds of the mesh
    bounds: AABB,
    flags: InstanceFlags,
}

impl SceneInstance {
    pub fn new(
        kind: InstanceKind,
        mesh: MeshKey,
        material: MaterialKey,
        world_matrix: Mat4,
        bounds: AABB,
    ) -> Self {
        Self {
            kind,
            mesh,
            material,
            model: None,
            world_matrix,
            bounds,
            flags: InstanceFlags::VISIBLE | InstanceFlags::RECEIVE_SHADOW,
        }
    }

    /// Draw a loaded model instead of the mesh
    pub fn with_model(mut self, model: AssetKey) -> Self {
        self.model = Some(model);
        self
    }

    /// Replace the default flags (VISIBLE | RECEIVE_SHADOW)
    pub fn with_flags(mut self, flags: InstanceFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn kind(&self) -> InstanceKind {
        self.kind
    }

    pub fn mesh(&self) -> MeshKey {
        self.mesh
    }

    pub fn material(&self) -> MaterialKey {
        self.material
    }

    pub fn model(&self) -> Option<AssetKey> {
        self.model
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    /// Bounds in world space, recomputed from the current world matrix
    pub fn world_bounds(&self) -> AABB {
        self.bounds.transformed(&self.world_matrix)
    }

    pub fn flags(&self) -> InstanceFlags {
        self.flags
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(InstanceFlags::VISIBLE)
    }
}
