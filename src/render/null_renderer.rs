use crate::error::OverlayResult;
use crate::render::{OverlayFrame, OverlayRenderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates the frame so tests catch broken overlay state before a
/// real host renderer is wired in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_annotation_count: usize,
    pub last_transform_css: Option<String>,
}

impl<C: ?Sized> OverlayRenderer<C> for NullRenderer {
    fn render(&mut self, _content: &C, frame: &OverlayFrame) -> OverlayResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_annotation_count = frame.annotations.len();
        self.last_transform_css = Some(frame.transform.to_css());
        Ok(())
    }
}
