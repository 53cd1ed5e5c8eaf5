//! Math module — vector and matrix value types.
//!
//! Distinct fixed-arity value types (`Vec3`, `Mat4`) rather than raw
//! float arrays, so a vector can never be passed where a matrix is
//! expected. All operations return new values; nothing mutates in place.

mod vec3;
mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
