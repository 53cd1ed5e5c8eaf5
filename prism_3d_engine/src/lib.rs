/*!
# Prism 3D Engine

Core math and loop-control types for the Prism3D rendering engine.

This crate provides the platform-agnostic core of a first-person 3D
scene: row-major vector/matrix algebra, a yaw/pitch camera, an input
aggregator, and a fixed-step frame clock driving an update/render loop.
Rendering backends, windowing, and asset loading are external
collaborators reached through the `Renderer` trait and the host's input
callbacks.

## Architecture

- **Vec3 / Mat4**: value-type algebra, row-major, Pod
- **Camera**: position + yaw/pitch, derived view matrix
- **InputState**: held buttons and accumulated pointer deltas
- **FrameClock**: bounded, regular simulation steps from irregular frames
- **Engine**: the per-frame update/render state machine
- **Renderer**: boundary trait the backend implements

Hosts drive the engine by writing input events into `InputState` and
calling `Engine::frame` once per visual frame.
*/

// Internal modules
mod clock;
mod engine;
mod error;
mod input;
pub mod camera;
pub mod log;
pub mod math;
pub mod renderer;
pub mod scene;

// Main prism3d namespace module
pub mod prism3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine and loop control
    pub use crate::engine::{Engine, EngineConfig, LoopState};
    pub use crate::clock::{FrameClock, MAX_STEP_TIME_MS, MIN_STEP_TIME_MS};
    pub use crate::input::{Action, InputState};

    // Logging sub-module
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger, NoOpLogger};
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::{Mat4, Vec3};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::Camera;
    }

    // Render sub-module
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}
