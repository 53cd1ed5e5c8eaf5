/// Prism3D Engine — the update/render loop controller.
///
/// Owns the camera, scene, input aggregator, frame clock, and logger
/// sink as a plain value (no global singletons). The host calls
/// `frame()` once per visual frame with a monotone timestamp; the
/// engine decides whether a simulation step runs, then renders exactly
/// once either way.

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::error::Result;
use crate::input::InputState;
use crate::log::{LogEntry, LogSeverity, Logger, NoOpLogger};
use crate::math::Mat4;
use crate::renderer::Renderer;
use crate::scene::Scene;

const LOG_SOURCE: &str = "prism3d::Engine";

/// Tunables fixed at engine creation.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Vertical field of view, radians.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Camera translation speed, world units per second.
    pub camera_speed: f32,
    /// Yaw/pitch radians per pointer-delta unit per second.
    pub mouse_sensitivity: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_2,
            aspect_ratio: 1024.0 / 512.0,
            z_near: 0.1,
            z_far: 100.0,
            camera_speed: 5.0,
            mouse_sensitivity: 0.1,
        }
    }
}

/// Loop state. `Stopped` is terminal; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// The engine: camera, scene, input, clock, and the loop state machine.
pub struct Engine {
    config: EngineConfig,
    camera: Camera,
    scene: Scene,
    input: InputState,
    clock: Option<FrameClock>,
    state: LoopState,
    projection: Mat4,
    logger: Box<dyn Logger>,
}

impl Engine {
    /// Create an engine with a fresh camera, an empty scene, and a
    /// no-op logger sink.
    pub fn new(config: EngineConfig) -> Self {
        let projection =
            Mat4::perspective(config.fov, config.aspect_ratio, config.z_near, config.z_far);
        Self {
            config,
            camera: Camera::new(),
            scene: Scene::new(),
            input: InputState::new(),
            clock: None,
            state: LoopState::Running,
            projection,
            logger: Box::new(NoOpLogger),
        }
    }

    /// Replace the logger sink.
    pub fn set_logger<L: Logger + 'static>(&mut self, logger: L) {
        self.logger = Box::new(logger);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Input aggregator for the host's event callbacks to write into.
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Projection matrix handed to the renderer each frame.
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    /// Run one visual frame: advance the clock, run at most one
    /// simulation step, then render exactly once.
    ///
    /// `now_ms` must come from a monotonically non-decreasing clock.
    /// Returns the loop state so the host knows whether to schedule the
    /// next frame; once `Stopped`, further calls do nothing.
    pub fn frame(&mut self, now_ms: f64, renderer: &mut dyn Renderer) -> Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Ok(LoopState::Stopped);
        }

        // First observed timestamp starts the clock with an empty
        // accumulator.
        let clock = self
            .clock
            .get_or_insert_with(|| FrameClock::new(now_ms));
        let step = clock.tick(now_ms);
        let frame_time = clock.last_frame_time_ms();
        self.logger.log(&LogEntry::new(
            LogSeverity::Trace,
            LOG_SOURCE,
            format!("frame time: {:.3} ms", frame_time),
        ));

        if let Some(dt) = step {
            self.update(dt);
        }

        self.render(renderer)?;
        Ok(self.state)
    }

    /// One simulation step of `dt` seconds.
    fn update(&mut self, dt: f32) {
        if self.input.quit_requested() {
            self.logger.log(&LogEntry::new(
                LogSeverity::Info,
                LOG_SOURCE,
                "quit requested, stopping loop".to_string(),
            ));
            self.state = LoopState::Stopped;
        }

        let move_dir = self.input.movement_dir();
        // Mandatory guard: normalize divides by length, so only a
        // nonzero movement vector may be normalized.
        if move_dir.length_squared() > 0.0 {
            self.camera
                .move_local(move_dir.normalize() * (self.config.camera_speed * dt));
        }

        let (dx, dy) = self.input.take_pointer_delta();
        // Rightward pointer motion (+x) turns clockwise about world up,
        // downward (+y) pitches toward the ground: both negated.
        let d_yaw = -(self.config.mouse_sensitivity * dx * dt);
        let d_pitch = -(self.config.mouse_sensitivity * dy * dt);
        self.camera.turn(d_yaw, d_pitch);
    }

    /// Render the latest camera/object state, once per visual frame.
    fn render(&mut self, renderer: &mut dyn Renderer) -> Result<()> {
        renderer.begin_frame()?;
        let view = self.camera.view_matrix();
        for (_key, object) in self.scene.iter() {
            renderer.draw(&self.projection, &view, &object.model_matrix())?;
        }
        renderer.end_frame()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
