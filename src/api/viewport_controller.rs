use tracing::debug;

use crate::core::{Point, ViewportState};
use crate::error::OverlayResult;
use crate::extensions::{Annotation, ComposerPhase};
use crate::interaction::PointerOutcome;

use super::{InteractivityShell, OverlayFeature, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// `true` while a drag or pan session is alive, i.e. while the host
    /// should keep document-level pointer move/up listeners attached.
    #[must_use]
    pub fn wants_global_pointer_events(&self) -> bool {
        self.annotations.is_dragging() || self.viewport.is_panning()
    }

    /// Routes a press on the chart surface. `raw` is container-relative.
    ///
    /// Priority: place an armed annotation, then grab the annotation under
    /// the pointer, then start panning.
    pub fn pointer_down(&mut self, raw: Point) -> OverlayResult<PointerOutcome> {
        if self.is_enabled(OverlayFeature::Annotations) {
            if self.annotations.composer_phase() == ComposerPhase::ArmedForPlacement {
                self.viewport.end_pan();
                let placed = self.place_annotation(raw)?;
                return Ok(PointerOutcome::AnnotationPlaced { id: placed.id });
            }

            let chart = self.viewport.state().screen_to_chart(raw);
            let hit = self
                .annotations
                .annotation_at(chart)
                .map(|annotation| (annotation.id.clone(), chart.offset_from(annotation.position)));
            if let Some((id, offset)) = hit {
                self.viewport.end_pan();
                self.annotations.drag_start(&id, offset)?;
                return Ok(PointerOutcome::DragStarted { id });
            }
        }

        if !raw.is_finite() {
            return Ok(PointerOutcome::Ignored);
        }
        self.viewport.begin_pan(raw);
        Ok(PointerOutcome::PanStarted)
    }

    /// Feeds a pointer move to the live session. Returns `false` when no
    /// session consumed it.
    pub fn pointer_move(&mut self, raw: Point) -> bool {
        if self.annotations.is_dragging() {
            let viewport = self.viewport.state();
            return self
                .annotations
                .drag_move(raw, viewport, self.container)
                .is_some();
        }
        self.viewport.update_pan(raw)
    }

    /// Ends the live session. A completed annotation drag is reported to the
    /// host exactly once and returned.
    pub fn pointer_up(&mut self) -> Option<Annotation> {
        if self.annotations.is_dragging() {
            return self.end_annotation_drag();
        }
        if self.viewport.end_pan() {
            let pan = self.viewport.pan();
            debug!(x = pan.x, y = pan.y, "viewport pan ended");
        }
        None
    }
}
