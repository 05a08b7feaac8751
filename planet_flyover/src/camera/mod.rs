//! Camera module - orbital path, perspective camera and frustum.
//!
//! `orbit` produces a `CameraPose` per frame; `Camera` turns it into
//! view/projection matrices and a frustum for culling.

mod camera;
mod frustum;
mod orbit;

pub use camera::{Camera, basis_to_quat, look_at_basis};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use orbit::{advance, CameraPose, OrbitParams, OrbitState};
