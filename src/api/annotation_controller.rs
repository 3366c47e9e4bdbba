use crate::core::{Color, Point};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{Annotation, AnnotationKind, AnnotationSize};

use super::{InteractivityShell, OverlayFeature, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    pub fn open_annotation_composer(&mut self) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        self.annotations.open_composer();
        Ok(())
    }

    pub fn cancel_annotation_composer(&mut self) -> bool {
        self.annotations.cancel_composer()
    }

    pub fn set_annotation_kind(&mut self, kind: AnnotationKind) {
        self.annotations.set_kind(kind);
    }

    pub fn set_annotation_text(&mut self, text: impl Into<String>) {
        self.annotations.set_text(text);
    }

    pub fn set_annotation_color(&mut self, color: Color) {
        self.annotations.set_color(color);
    }

    pub fn set_annotation_size(&mut self, size: AnnotationSize) {
        self.annotations.set_size(size);
    }

    /// Arms the composer for placement. Empty note text is rejected with a
    /// notice and the composer stays open.
    pub fn confirm_annotation_text(&mut self) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        match self.annotations.confirm_text() {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }

    /// Places the armed annotation at container-relative `raw` and reports it
    /// to the host.
    pub fn place_annotation(&mut self, raw: Point) -> OverlayResult<Annotation> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        let viewport = self.viewport.state();
        match self.annotations.place(raw, viewport, &self.config.author) {
            Ok(annotation) => {
                self.host.on_annotation_add(&annotation);
                Ok(annotation)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Replaces an annotation by id. Unknown ids are a silent no-op.
    pub fn update_annotation(&mut self, annotation: Annotation) -> OverlayResult<bool> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        if !annotation.position.is_finite() {
            return self.reject(OverlayError::InvalidData(
                "annotation position must be finite".to_owned(),
            ));
        }
        let id = annotation.id.clone();
        if !self.annotations.update(annotation) {
            return Ok(false);
        }
        if let Some(updated) = self.annotations.get(&id) {
            self.host.on_annotation_update(updated);
        }
        Ok(true)
    }

    pub fn delete_annotation(&mut self, id: &str) -> OverlayResult<bool> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        if self.annotations.delete(id).is_none() {
            return Ok(false);
        }
        self.host.on_annotation_delete(id);
        Ok(true)
    }

    pub fn set_annotation_visible(&mut self, id: &str, visible: bool) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        if let Some(updated) = self.annotations.set_visible(id, visible)? {
            self.host.on_annotation_update(&updated);
        }
        Ok(())
    }

    /// Hydrates annotations from host persistence. No callbacks fire.
    pub fn load_annotations(&mut self, annotations: Vec<Annotation>) -> OverlayResult<()> {
        for (index, annotation) in annotations.iter().enumerate() {
            if annotation.id.is_empty() || !annotation.position.is_finite() {
                return Err(OverlayError::InvalidData(format!(
                    "annotation at index {index} has an empty id or non-finite position"
                )));
            }
        }
        self.annotations.load(annotations);
        Ok(())
    }

    pub fn start_annotation_drag(&mut self, id: &str, pointer_offset: Point) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::Annotations)?;
        self.viewport.end_pan();
        self.annotations.drag_start(id, pointer_offset)
    }

    /// Moves the dragged annotation; `cursor` is container-relative.
    pub fn move_annotation_drag(&mut self, cursor: Point) -> Option<Point> {
        let viewport = self.viewport.state();
        self.annotations.drag_move(cursor, viewport, self.container)
    }

    pub fn end_annotation_drag(&mut self) -> Option<Annotation> {
        let annotation = self.annotations.drag_end()?;
        self.host.on_annotation_update(&annotation);
        Some(annotation)
    }
}
