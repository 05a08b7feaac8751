/// Frustum - six clipping planes used to cull buildings each frame.
///
/// Each plane is a Vec4 (A, B, C, D) with an inward-pointing normal; a point
/// P is inside when `A*x + B*y + C*z + D >= 0` for every plane.

use glam::{Mat4, Vec3, Vec4};
use crate::scene::AABB;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract the planes of a view-projection matrix (Gribb & Hartmann).
    ///
    /// Expects a 0..1 depth range, as produced by `Mat4::perspective_rh`.
    /// A plane whose normal has zero length is kept as is; it then accepts
    /// or rejects purely on D, which happens when the camera basis is
    /// degenerate.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let row0 = vp.row(0);
        let row1 = vp.row(1);
        let row2 = vp.row(2);
        let row3 = vp.row(3);

        let mut planes = [
            row3 + row0,
            row3 - row0,
            row3 + row1,
            row3 - row1,
            row2,
            row3 - row2,
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from a plane to a point (positive = inside)
    fn distance(plane: &Vec4, point: Vec3) -> f32 {
        plane.truncate().dot(point) + plane.w
    }

    /// Conservative AABB test using the positive vertex of each plane.
    ///
    /// Never rejects a box that is actually visible.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let p_vertex = Vec3::select(plane.truncate().cmpge(Vec3::ZERO), aabb.max, aabb.min);
            Self::distance(plane, p_vertex) >= 0.0
        })
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
