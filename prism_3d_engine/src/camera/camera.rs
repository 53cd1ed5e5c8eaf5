/// First-person camera with a position and a facing.
///
/// Orientation is spherical: yaw about the world vertical axis, pitch
/// about the camera's local horizontal axis. The view matrix is derived
/// on demand; nothing is cached.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use crate::math::{Mat4, Vec3};

const WORLD_UP: Vec3 = Vec3::Y;

/// Pitch stops just short of straight up/down so the look-at basis
/// (built from cross products with world up) never degenerates.
const MIN_PITCH: f32 = -FRAC_PI_2 + 0.01;
const MAX_PITCH: f32 = FRAC_PI_2 - 0.01;

/// Wrap an angle into [-pi, pi).
fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}

/// A camera with a position and facing. Mutated only through
/// `move_local` and `turn`.
#[derive(Debug, Clone)]
pub struct Camera {
    pos: Vec3,
    yaw: f32,
    pitch: f32,
}

impl Camera {
    /// Create a camera at the origin with the scene's initial facing
    /// (yaw = pi/2, pitch level).
    pub fn new() -> Self {
        Self::with_pose(Vec3::ZERO, FRAC_PI_2, 0.0)
    }

    /// Create a camera at an explicit pose. Yaw is wrapped and pitch
    /// clamped the same way `turn` does.
    pub fn with_pose(pos: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            pos,
            yaw: wrap_angle(yaw),
            pitch: pitch.clamp(MIN_PITCH, MAX_PITCH),
        }
    }

    /// Camera position in world space.
    pub fn pos(&self) -> Vec3 {
        self.pos
    }

    /// Yaw in radians, wrapped to [-pi, pi).
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in radians, clamped to (-pi/2 + 0.01, pi/2 - 0.01).
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit vector the camera is facing, derived from yaw and pitch.
    ///
    /// The negated z term encodes the right-handed, -z-forward
    /// convention: yaw = 0 faces +x, yaw = pi/2 faces -z.
    pub fn front(&self) -> Vec3 {
        Vec3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.sin() * self.pitch.cos(),
        )
        .normalize()
    }

    /// View matrix for the current pose.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.pos, self.pos + self.front(), WORLD_UP)
    }

    /// Move along the camera's local basis.
    ///
    /// `dir` is a camera-space displacement (x = right, y = up,
    /// z = backward, so forward is -z), already scaled by speed and
    /// elapsed time by the caller.
    pub fn move_local(&mut self, dir: Vec3) {
        let z_axis = -self.front(); // z axis points backward
        let x_axis = WORLD_UP.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        self.pos = self.pos + x_axis * dir.x + y_axis * dir.y + z_axis * dir.z;
    }

    /// Apply yaw/pitch deltas in radians.
    ///
    /// Yaw wraps to [-pi, pi); pitch is clamped so the camera never
    /// looks exactly along world up. The clamp is the invariant that
    /// keeps `Mat4::look_at` non-degenerate.
    pub fn turn(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = wrap_angle(self.yaw + d_yaw);
        self.pitch = (self.pitch + d_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
