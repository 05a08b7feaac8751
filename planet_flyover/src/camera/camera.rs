/// Perspective camera driven by a `CameraPose` each frame.
///
/// The camera owns its projection parameters; view matrix and frustum are
/// recomputed whenever a pose is applied or the aspect ratio changes.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::config::CameraSettings;
use super::frustum::Frustum;
use super::orbit::CameraPose;

#[derive(Debug, Clone)]
pub struct Camera {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    eye: Vec3,
    target: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
}

impl Camera {
    /// Create a camera at the origin looking down -Z.
    ///
    /// `fov_y_degrees` is the vertical field of view.
    pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
            eye: Vec3::ZERO,
            target: Vec3::NEG_Z,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            frustum: Frustum::from_view_projection(&Mat4::IDENTITY),
        };
        camera.update_projection();
        camera.look_at(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        camera
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::perspective(settings.fov_y_degrees, settings.aspect, settings.near, settings.far)
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec3 {
        self.eye
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    // ===== SETTERS =====

    /// Change the aspect ratio (window resize). Non-positive values are ignored.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect > 0.0 && aspect.is_finite() {
            self.aspect = aspect;
            self.update_projection();
        }
    }

    /// Place the camera for this frame.
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.look_at(pose.position.as_vec3(), pose.look_at.as_vec3(), pose.up.as_vec3());
    }

    /// Position the camera at `eye` facing `target`, using `up` to fix the roll.
    ///
    /// The look-at basis goes through a quaternion before it becomes the
    /// camera's world matrix, and the view matrix is that world matrix
    /// inverted. The quaternion is not normalized, so a degenerate basis
    /// (zero `up`) still yields an invertible, skewed orientation that
    /// faces roughly towards `target`. A singular world matrix gives a
    /// zero view matrix.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        let rotation = quat_to_mat3(basis_to_quat(&look_at_basis(eye, target, up)));
        let world = Mat4::from_cols(
            rotation.x_axis.extend(0.0),
            rotation.y_axis.extend(0.0),
            rotation.z_axis.extend(0.0),
            eye.extend(1.0),
        );

        self.eye = eye;
        self.target = target;
        self.view_matrix = if world.determinant() == 0.0 {
            Mat4::ZERO
        } else {
            world.inverse()
        };
        self.update_frustum();
    }

    fn update_projection(&mut self) {
        self.projection_matrix = Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far);
        self.update_frustum();
    }

    fn update_frustum(&mut self) {
        self.frustum = Frustum::from_view_projection(&self.view_projection_matrix());
    }
}

/// Camera-to-world rotation for a camera at `eye` facing `target`.
///
/// Columns are the camera's right (x), up (y) and backward (z) axes. When
/// `up` is parallel to the view direction, z is nudged by 1e-4 and x is
/// recomputed. When `up` is the zero vector even that fails: x and y stay
/// zero and only the backward axis survives. The result is never NaN;
/// `Camera::look_at` turns the collapsed basis into a usable orientation.
pub fn look_at_basis(eye: Vec3, target: Vec3, up: Vec3) -> Mat3 {
    let mut z = eye - target;
    if z.length_squared() == 0.0 {
        z.z = 1.0;
    }
    z = z.normalize_or_zero();

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        if up.z.abs() == 1.0 {
            z.x += 0.0001;
        } else {
            z.z += 0.0001;
        }
        z = z.normalize_or_zero();
        x = up.cross(z);
    }
    let x = x.normalize_or_zero();
    let y = z.cross(x);

    Mat3::from_cols(x, y, z)
}

/// Quaternion of a rotation basis (Shoemake), without normalizing.
///
/// For an orthonormal basis the result is a unit quaternion. For the
/// collapsed basis of a zero up vector its length is about 0.707, and that
/// scale is kept.
pub fn basis_to_quat(basis: &Mat3) -> Quat {
    let (m11, m12, m13) = (basis.x_axis.x, basis.y_axis.x, basis.z_axis.x);
    let (m21, m22, m23) = (basis.x_axis.y, basis.y_axis.y, basis.z_axis.y);
    let (m31, m32, m33) = (basis.x_axis.z, basis.y_axis.z, basis.z_axis.z);
    let trace = m11 + m22 + m33;

    if trace > 0.0 {
        let s = 0.5 / (trace + 1.0).sqrt();
        Quat::from_xyzw((m32 - m23) * s, (m13 - m31) * s, (m21 - m12) * s, 0.25 / s)
    } else if m11 > m22 && m11 > m33 {
        let s = 2.0 * (1.0 + m11 - m22 - m33).sqrt();
        Quat::from_xyzw(0.25 * s, (m12 + m21) / s, (m13 + m31) / s, (m32 - m23) / s)
    } else if m22 > m33 {
        let s = 2.0 * (1.0 + m22 - m11 - m33).sqrt();
        Quat::from_xyzw((m12 + m21) / s, 0.25 * s, (m23 + m32) / s, (m13 - m31) / s)
    } else {
        let s = 2.0 * (1.0 + m33 - m11 - m22).sqrt();
        Quat::from_xyzw((m13 + m31) / s, (m23 + m32) / s, 0.25 * s, (m21 - m12) / s)
    }
}

/// Rotation matrix of a possibly non-unit quaternion.
///
/// Same expansion as `Mat3::from_quat`, which requires unit length.
fn quat_to_mat3(q: Quat) -> Mat3 {
    let (x2, y2, z2) = (q.x + q.x, q.y + q.y, q.z + q.z);
    let (xx, xy, xz) = (q.x * x2, q.x * y2, q.x * z2);
    let (yy, yz, zz) = (q.y * y2, q.y * z2, q.z * z2);
    let (wx, wy, wz) = (q.w * x2, q.w * y2, q.w * z2);

    Mat3::from_cols(
        Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
        Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
        Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
    )
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
