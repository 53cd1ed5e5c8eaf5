//! Demo host: a winit window driving the Prism3D engine.
//!
//! All the out-of-scope plumbing lives here — window creation, key and
//! mouse event mapping, and the wall clock. The engine itself only sees
//! `InputState` writes and `frame()` calls. Rendering goes to a no-op
//! backend; diagnostics go to the console logger.

use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use prism_3d_engine::prism3d::{
    log::DefaultLogger,
    math::Vec3,
    render::NoOpRenderer,
    scene::SceneObject,
    Action, Engine, EngineConfig, LoopState,
};

/// Keyboard map. Keys outside this map are simply ignored.
fn map_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Escape => Some(Action::Quit),
        KeyCode::KeyW => Some(Action::MoveForward),
        KeyCode::KeyS => Some(Action::MoveBackward),
        KeyCode::KeyA => Some(Action::MoveLeft),
        KeyCode::KeyD => Some(Action::MoveRight),
        _ => None,
    }
}

struct DemoApp {
    engine: Engine,
    renderer: NoOpRenderer,
    window: Option<Window>,
    start: Instant,
}

impl DemoApp {
    fn new() -> Self {
        let mut engine = Engine::new(EngineConfig::default());
        engine.set_logger(DefaultLogger);
        // The scene: one textured cube off to the side
        engine
            .scene_mut()
            .add_object(SceneObject::new(Vec3::new(6.0, 0.0, -5.0)));

        Self {
            engine,
            renderer: NoOpRenderer::new(),
            window: None,
            start: Instant::now(),
        }
    }

    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title("Prism3D Demo")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 512.0));
        let window = event_loop
            .create_window(attributes)
            .expect("window creation failed");
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(action) = map_key(code) {
                    match state {
                        ElementState::Pressed => self.engine.input_mut().press(action),
                        ElementState::Released => self.engine.input_mut().release(action),
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let state = self
                    .engine
                    .frame(self.now_ms(), &mut self.renderer)
                    .unwrap_or_else(|error| {
                        eprintln!("frame failed: {}", error);
                        LoopState::Stopped
                    });
                if state == LoopState::Stopped {
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.engine.input_mut().accumulate_pointer(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = DemoApp::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}
