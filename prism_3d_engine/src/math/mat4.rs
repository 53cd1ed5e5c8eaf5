/// 4x4 matrix value type, row-major.
///
/// Component (row i, column j) lives at index `4*i + j`. Constructors
/// always populate all 16 entries; no partial matrices exist. Stored
/// `#[repr(C)]` so the renderer boundary can upload it as 16 contiguous
/// floats without conversion.

use std::ops::Mul;
use bytemuck::{Pod, Zeroable};
use super::Vec3;

/// A 4x4 `f32` matrix in row-major order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4([f32; 16]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Mat4 = Mat4([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Build from 16 row-major components.
    pub const fn from_rows_array(m: [f32; 16]) -> Self {
        Self(m)
    }

    /// Translation by `t`: identity with `t` in the last column.
    pub fn translation(t: Vec3) -> Self {
        Mat4([
            1.0, 0.0, 0.0, t.x,
            0.0, 1.0, 0.0, t.y,
            0.0, 0.0, 1.0, t.z,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the X axis by `theta` radians.
    pub fn rotation_x(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4([
            1.0, 0.0, 0.0, 0.0,
            0.0, cos, -sin, 0.0,
            0.0, sin, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Y axis by `theta` radians.
    pub fn rotation_y(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4([
            cos, 0.0, sin, 0.0,
            0.0, 1.0, 0.0, 0.0,
            -sin, 0.0, cos, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about the Z axis by `theta` radians.
    pub fn rotation_z(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Mat4([
            cos, -sin, 0.0, 0.0,
            sin, cos, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Symmetric perspective projection.
    ///
    /// `fov` is the vertical field of view in radians. Depth maps into
    /// clip space via rows 2 and 3; row 3 is (0, 0, -1, 0) so the
    /// perspective divide happens through w.
    pub fn perspective(fov: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        let inv_tan = 1.0 / (fov / 2.0).tan();
        Mat4([
            inv_tan, 0.0, 0.0, 0.0,
            0.0, aspect_ratio * inv_tan, 0.0, 0.0,
            0.0, 0.0, -(z_far + z_near) / (z_far - z_near),
                (-2.0 * z_far * z_near) / (z_far - z_near),
            0.0, 0.0, -1.0, 0.0,
        ])
    }

    /// View matrix looking from `eye` toward `target`.
    ///
    /// Builds an orthonormal right-handed basis (the camera looks down
    /// its local -Z) and returns the inverse of the camera's world
    /// transform: basis vectors as rows, `-dot(axis, eye)` in the
    /// translation column.
    ///
    /// Degenerate when `world_up` is parallel to the view direction;
    /// the camera prevents this by clamping pitch, so no runtime check
    /// happens here.
    pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let z_axis = (eye - target).normalize(); // points backward
        let x_axis = world_up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Mat4([
            x_axis.x, x_axis.y, x_axis.z, -x_axis.dot(eye),
            y_axis.x, y_axis.y, y_axis.z, -y_axis.dot(eye),
            z_axis.x, z_axis.y, z_axis.z, -z_axis.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Component at (row, col).
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.0[4 * row + col]
    }

    /// Row `i` as a vector, ignoring the translation column.
    pub fn row3(&self, i: usize) -> Vec3 {
        Vec3::new(self.0[4 * i], self.0[4 * i + 1], self.0[4 * i + 2])
    }

    /// The 16 components in row-major order.
    pub fn to_rows_array(self) -> [f32; 16] {
        self.0
    }

    /// Borrow the 16 components in row-major order.
    pub fn as_rows_array(&self) -> &[f32; 16] {
        &self.0
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    /// Standard matrix product. Not commutative; `a * b` applies `b`
    /// first when transforming a column vector.
    fn mul(self, other: Mat4) -> Mat4 {
        let a = &self.0;
        let b = &other.0;
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                result[4 * i + j] = a[4 * i] * b[j]
                    + a[4 * i + 1] * b[4 + j]
                    + a[4 * i + 2] * b[8 + j]
                    + a[4 * i + 3] * b[12 + j];
            }
        }
        Mat4(result)
    }
}

#[cfg(test)]
#[path = "mat4_tests.rs"]
mod tests;
