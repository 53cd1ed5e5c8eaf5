//! Renderer module — the boundary to the external rendering backend.
//!
//! The core computes matrices; the backend draws. Shader, texture, and
//! buffer lifecycle all live behind this trait, outside the engine.

mod renderer;
#[cfg(test)]
mod mock_renderer;

pub use renderer::{NoOpRenderer, Renderer};

#[cfg(test)]
pub use mock_renderer::MockRenderer;
