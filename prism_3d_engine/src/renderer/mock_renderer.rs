/// Mock Renderer for unit tests (no GPU required)
///
/// Records every call so tests can assert on frame structure: one
/// begin/end pair per visual frame, one draw per scene object, and the
/// exact matrices handed across the boundary.

use crate::error::{Error, Result};
use crate::math::Mat4;
use super::Renderer;

/// One recorded draw call.
#[derive(Debug, Clone)]
pub struct DrawCall {
    pub projection: Mat4,
    pub view: Mat4,
    pub model: Mat4,
}

/// Renderer that records calls instead of drawing.
#[derive(Default)]
pub struct MockRenderer {
    pub frames_begun: usize,
    pub frames_ended: usize,
    pub draws: Vec<DrawCall>,
    /// When set, `draw` fails with a backend error.
    pub fail_draws: bool,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for MockRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        self.frames_begun += 1;
        Ok(())
    }

    fn draw(&mut self, projection: &Mat4, view: &Mat4, model: &Mat4) -> Result<()> {
        if self.fail_draws {
            return Err(Error::BackendError("mock draw failure".to_string()));
        }
        self.draws.push(DrawCall {
            projection: *projection,
            view: *view,
            model: *model,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.frames_ended += 1;
        Ok(())
    }
}
