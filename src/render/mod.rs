mod frame;
mod null_renderer;

pub use frame::{
    AnnotationPrimitive, ComparisonToggle, DrillToolbar, OverlayFrame, ToolbarLayout,
};
pub use null_renderer::NullRenderer;

use crate::error::OverlayResult;

/// Contract implemented by the host's drawing layer.
///
/// The chart content `C` is opaque to the overlay: it is handed back to the
/// renderer untouched, to be drawn beneath the transform and overlay layers.
pub trait OverlayRenderer<C: ?Sized> {
    fn render(&mut self, content: &C, frame: &OverlayFrame) -> OverlayResult<()>;
}
