/// Orbital camera path - the flyover's one piece of real geometry.
///
/// The camera circles the planet in the z = 0 plane at a fixed altitude and
/// looks at a point a little ahead of it, placed by treating the line of
/// sight as a tangent of length `view_tangent_length`.

use glam::DVec3;

/// Mutable orbit progress, advanced once per frame.
///
/// The angle accumulates without wrapping; only its sine and cosine are
/// ever consumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Current orbital angle in radians
    pub angle: f64,
    /// Radians added per `advance` call. Sign sets the direction.
    pub angular_velocity: f64,
}

impl OrbitState {
    /// Start a new orbit at angle 0
    pub fn new(angular_velocity: f64) -> Self {
        Self { angle: 0.0, angular_velocity }
    }
}

/// Fixed shape of the orbit, set at start-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    pub sphere_radius: f64,
    pub camera_height: f64,
    pub view_tangent_length: f64,
}

impl OrbitParams {
    /// Distance from the planet centre to the camera
    pub fn orbit_radius(&self) -> f64 {
        self.sphere_radius + self.camera_height
    }

    /// Angle by which the look-at point leads the camera
    pub fn lead_angle(&self) -> f64 {
        (self.view_tangent_length / self.orbit_radius()).atan()
    }

    /// Distance from the planet centre to the look-at point.
    ///
    /// Measured from one unit above the surface, not from the orbit radius.
    pub fn look_radius(&self) -> f64 {
        let near_surface = self.sphere_radius + 1.0;
        (self.view_tangent_length * self.view_tangent_length + near_surface * near_surface).sqrt()
    }

    /// Pose for a given orbital angle, without touching any state
    pub fn pose_at(&self, angle: f64) -> CameraPose {
        let orbit_radius = self.orbit_radius();
        let look_radius = self.look_radius();
        let look_angle = angle + self.lead_angle();

        CameraPose {
            position: DVec3::new(orbit_radius * angle.cos(), orbit_radius * angle.sin(), 0.0),
            look_at: DVec3::new(look_radius * look_angle.cos(), look_radius * look_angle.sin(), 0.0),
            up: DVec3::ZERO,
        }
    }
}

/// Where the camera is and what it looks at for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
    /// Always zero. Orientation is left to `Camera::apply_pose`, which
    /// resolves a degenerate up vector the same way for every frame.
    pub up: DVec3,
}

/// Step the orbit by one frame and return the new camera pose.
///
/// Mutates only `state.angle`. There are no error conditions: the orbit
/// radius is positive by configuration.
pub fn advance(state: &mut OrbitState, params: &OrbitParams) -> CameraPose {
    state.angle += state.angular_velocity;
    params.pose_at(state.angle)
}

#[cfg(test)]
#[path = "orbit_tests.rs"]
mod tests;
