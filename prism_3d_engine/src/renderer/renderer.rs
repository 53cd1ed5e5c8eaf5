/// Rendering backend trait.
///
/// Once per visual frame the engine hands the backend a projection
/// matrix, a view matrix, and one model matrix per object — all
/// row-major, Pod, uploadable as 16 contiguous floats — and expects it
/// to issue the draws. The engine does not manage shader or texture
/// lifecycle; fatal setup failures are the backend's to surface.

use crate::error::Result;
use crate::math::Mat4;

/// Backend that turns the engine's matrices into draw submissions.
pub trait Renderer {
    /// Begin a visual frame (clear targets, bind state).
    fn begin_frame(&mut self) -> Result<()>;

    /// Draw one object with the given matrices.
    fn draw(&mut self, projection: &Mat4, view: &Mat4, model: &Mat4) -> Result<()>;

    /// Finish the visual frame (present).
    fn end_frame(&mut self) -> Result<()>;
}

/// Backend that draws nothing. Useful for headless hosts and demos
/// without a GPU context.
pub struct NoOpRenderer;

impl NoOpRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for NoOpRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, _projection: &Mat4, _view: &Mat4, _model: &Mat4) -> Result<()> {
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        Ok(())
    }
}
