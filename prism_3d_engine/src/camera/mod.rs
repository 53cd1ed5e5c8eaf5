//! Camera module — first-person camera with position, yaw, and pitch.
//!
//! The engine does NOT store or manage the camera — it is a tool
//! provided by the engine, owned and driven by the update loop.

mod camera;

pub use camera::Camera;
