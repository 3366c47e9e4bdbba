//! Freeform annotations layered over the chart.
//!
//! Creation is a two-phase workflow: the composer collects kind/text/style,
//! then the next click on the chart surface places the annotation. Existing
//! annotations can be dragged; a drag lives in a session value that is
//! created on start and destroyed on end or cancel.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Color, Point, Size, ViewportState};
use crate::error::{OverlayError, OverlayResult};

const ID_PREFIX: &str = "annotation-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    #[default]
    Note,
    Arrow,
    Highlight,
    Line,
}

impl AnnotationKind {
    #[must_use]
    pub fn requires_text(self) -> bool {
        matches!(self, Self::Note)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AnnotationSize {
    /// Box occupied on the chart; bounds drag clamping and hit-testing.
    #[must_use]
    pub fn footprint(self) -> Size {
        match self {
            Self::Small => Size::new(120.0, 40.0),
            Self::Medium => Size::new(160.0, 56.0),
            Self::Large => Size::new(200.0, 72.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AnnotationKind,
    pub position: Point,
    #[serde(default)]
    pub text: Option<String>,
    pub color: Color,
    #[serde(default)]
    pub size: AnnotationSize,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

fn default_visible() -> bool {
    true
}

impl Annotation {
    #[must_use]
    pub fn footprint(&self) -> Size {
        self.size.footprint()
    }

    #[must_use]
    pub fn contains(&self, chart_point: Point) -> bool {
        self.footprint().contains(self.position, chart_point)
    }
}

/// Work-in-progress annotation held by the composer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationDraft {
    pub kind: AnnotationKind,
    pub text: String,
    pub color: Color,
    pub size: AnnotationSize,
}

impl Default for AnnotationDraft {
    fn default() -> Self {
        Self {
            kind: AnnotationKind::Note,
            text: String::new(),
            color: Color::default(),
            size: AnnotationSize::Medium,
        }
    }
}

impl AnnotationDraft {
    fn validate(&self) -> OverlayResult<()> {
        if self.kind.requires_text() && self.text.trim().is_empty() {
            return Err(OverlayError::EmptyAnnotationText);
        }
        Ok(())
    }
}

/// Public view of the composer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComposerPhase {
    Idle,
    Composing,
    ArmedForPlacement,
}

#[derive(Debug, Clone, PartialEq)]
enum ComposerState {
    Idle,
    Composing(AnnotationDraft),
    Armed(AnnotationDraft),
}

/// Active drag of one annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer_offset: Point,
    origin: Point,
    moves: usize,
}

#[derive(Debug, Clone)]
pub struct AnnotationStore {
    annotations: IndexMap<String, Annotation>,
    composer: ComposerState,
    drag: Option<(String, DragSession)>,
    template: AnnotationDraft,
    next_id: u64,
}

impl Default for AnnotationStore {
    fn default() -> Self {
        Self::new(AnnotationDraft::default())
    }
}

impl AnnotationStore {
    /// Creates an empty store whose composer starts from `template`.
    #[must_use]
    pub fn new(template: AnnotationDraft) -> Self {
        Self {
            annotations: IndexMap::new(),
            composer: ComposerState::Idle,
            drag: None,
            template,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Annotation> {
        self.annotations.get(id)
    }

    /// Annotations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.values()
    }

    /// Replaces all annotations with ones loaded from host persistence.
    pub fn load(&mut self, annotations: impl IntoIterator<Item = Annotation>) {
        self.drag = None;
        self.annotations = annotations
            .into_iter()
            .map(|annotation| (annotation.id.clone(), annotation))
            .collect();
        let highest = self
            .annotations
            .keys()
            .filter_map(|id| id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(highest + 1);
        debug!(count = self.annotations.len(), "annotations loaded");
    }

    // composer

    #[must_use]
    pub fn composer_phase(&self) -> ComposerPhase {
        match self.composer {
            ComposerState::Idle => ComposerPhase::Idle,
            ComposerState::Composing(_) => ComposerPhase::Composing,
            ComposerState::Armed(_) => ComposerPhase::ArmedForPlacement,
        }
    }

    #[must_use]
    pub fn draft(&self) -> Option<&AnnotationDraft> {
        match &self.composer {
            ComposerState::Idle => None,
            ComposerState::Composing(draft) | ComposerState::Armed(draft) => Some(draft),
        }
    }

    /// Opens the composer with a fresh draft. No-op while already open.
    pub fn open_composer(&mut self) {
        if matches!(self.composer, ComposerState::Idle) {
            self.composer = ComposerState::Composing(self.template.clone());
            trace!("annotation composer opened");
        }
    }

    /// Discards the draft from either open phase. Returns `true` if a draft
    /// was discarded.
    pub fn cancel_composer(&mut self) -> bool {
        let was_open = !matches!(self.composer, ComposerState::Idle);
        self.composer = ComposerState::Idle;
        was_open
    }

    fn composing_draft_mut(&mut self) -> Option<&mut AnnotationDraft> {
        match &mut self.composer {
            ComposerState::Composing(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn set_kind(&mut self, kind: AnnotationKind) {
        if let Some(draft) = self.composing_draft_mut() {
            draft.kind = kind;
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(draft) = self.composing_draft_mut() {
            draft.text = text.into();
        }
    }

    pub fn set_color(&mut self, color: Color) {
        if let Some(draft) = self.composing_draft_mut() {
            draft.color = color;
        }
    }

    pub fn set_size(&mut self, size: AnnotationSize) {
        if let Some(draft) = self.composing_draft_mut() {
            draft.size = size;
        }
    }

    /// Moves Composing → ArmedForPlacement once the draft is valid.
    pub fn confirm_text(&mut self) -> OverlayResult<()> {
        let ComposerState::Composing(draft) = &self.composer else {
            return Err(OverlayError::InvalidData(
                "annotation composer is not open".to_owned(),
            ));
        };
        draft.validate()?;
        let draft = draft.clone();
        self.composer = ComposerState::Armed(draft);
        trace!("annotation armed for placement");
        Ok(())
    }

    /// Places the armed draft at a container-relative pointer position.
    ///
    /// The position is mapped through the inverse viewport transform, so the
    /// annotation stays attached to the chart content under zoom and pan.
    pub fn place(
        &mut self,
        raw: Point,
        viewport: ViewportState,
        author: &str,
    ) -> OverlayResult<Annotation> {
        let ComposerState::Armed(draft) = &self.composer else {
            return Err(OverlayError::NotArmedForPlacement);
        };
        if !raw.is_finite() {
            return Err(OverlayError::InvalidData(
                "placement position must be finite".to_owned(),
            ));
        }
        if let Err(err) = draft.validate() {
            self.composer = ComposerState::Composing(draft.clone());
            return Err(err);
        }

        let text = Some(draft.text.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        let annotation = Annotation {
            id: format!("{ID_PREFIX}{}", self.next_id),
            kind: draft.kind,
            position: viewport.screen_to_chart(raw),
            text,
            color: draft.color,
            size: draft.size,
            visible: true,
            created_at: Utc::now(),
            created_by: author.to_owned(),
        };
        self.next_id += 1;
        self.composer = ComposerState::Idle;
        self.annotations
            .insert(annotation.id.clone(), annotation.clone());
        debug!(
            id = %annotation.id,
            kind = ?annotation.kind,
            x = annotation.position.x,
            y = annotation.position.y,
            "annotation placed"
        );
        Ok(annotation)
    }

    // crud

    /// Replaces the annotation with the same id. Returns `false` if absent.
    pub fn update(&mut self, annotation: Annotation) -> bool {
        match self.annotations.get_mut(&annotation.id) {
            Some(slot) => {
                *slot = annotation;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: &str) -> Option<Annotation> {
        if self.drag.as_ref().is_some_and(|(drag_id, _)| drag_id == id) {
            self.drag = None;
        }
        let removed = self.annotations.shift_remove(id);
        if removed.is_some() {
            debug!(id, "annotation deleted");
        }
        removed
    }

    /// Sets the visible flag. Returns the updated annotation when it changed.
    pub fn set_visible(&mut self, id: &str, visible: bool) -> OverlayResult<Option<Annotation>> {
        let annotation = self
            .annotations
            .get_mut(id)
            .ok_or_else(|| OverlayError::UnknownAnnotation(id.to_owned()))?;
        if annotation.visible == visible {
            return Ok(None);
        }
        annotation.visible = visible;
        Ok(Some(annotation.clone()))
    }

    /// Topmost visible annotation whose footprint contains `chart_point`.
    #[must_use]
    pub fn annotation_at(&self, chart_point: Point) -> Option<&Annotation> {
        self.annotations
            .values()
            .rev()
            .find(|annotation| annotation.visible && annotation.contains(chart_point))
    }

    // drag

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn dragged_id(&self) -> Option<&str> {
        self.drag.as_ref().map(|(id, _)| id.as_str())
    }

    /// Starts dragging `id`; `pointer_offset` is the cursor position inside
    /// the annotation, in chart units.
    pub fn drag_start(&mut self, id: &str, pointer_offset: Point) -> OverlayResult<()> {
        if !self.annotations.contains_key(id) {
            return Err(OverlayError::UnknownAnnotation(id.to_owned()));
        }
        // Settle any live drag before recording the origin.
        self.drag_cancel();
        let annotation = self
            .annotations
            .get(id)
            .ok_or_else(|| OverlayError::UnknownAnnotation(id.to_owned()))?;
        let session = DragSession {
            pointer_offset,
            origin: annotation.position,
            moves: 0,
        };
        self.drag = Some((id.to_owned(), session));
        trace!(id, "annotation drag started");
        Ok(())
    }

    /// Moves the dragged annotation so the grab point follows `cursor`,
    /// keeping the footprint inside `container`.
    pub fn drag_move(
        &mut self,
        cursor: Point,
        viewport: ViewportState,
        container: Size,
    ) -> Option<Point> {
        let (id, session) = self.drag.as_mut()?;
        let annotation = self.annotations.get_mut(id.as_str())?;
        let chart_cursor = viewport.screen_to_chart(cursor);
        let candidate = chart_cursor.offset_from(session.pointer_offset);
        let footprint = annotation.footprint();
        let max_x = (container.width - footprint.width).max(0.0);
        let max_y = (container.height - footprint.height).max(0.0);
        let position = Point::new(
            clamp_axis(candidate.x, max_x),
            clamp_axis(candidate.y, max_y),
        );
        annotation.position = position;
        session.moves += 1;
        Some(position)
    }

    /// Finishes the drag and returns the committed annotation.
    pub fn drag_end(&mut self) -> Option<Annotation> {
        let (id, session) = self.drag.take()?;
        let annotation = self.annotations.get(&id)?.clone();
        debug!(
            id = %annotation.id,
            moves = session.moves,
            x = annotation.position.x,
            y = annotation.position.y,
            "annotation drag committed"
        );
        Some(annotation)
    }

    /// Abandons the drag and restores the pre-drag position.
    pub fn drag_cancel(&mut self) -> bool {
        let Some((id, session)) = self.drag.take() else {
            return false;
        };
        if let Some(annotation) = self.annotations.get_mut(&id) {
            annotation.position = session.origin;
        }
        trace!(id = %id, "annotation drag cancelled");
        true
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_setters_only_apply_while_composing() {
        let mut store = AnnotationStore::default();
        store.set_text("ignored");
        assert!(store.draft().is_none());

        store.open_composer();
        store.set_text("hello");
        store.confirm_text().expect("note with text");
        store.set_text("changed while armed");
        assert_eq!(store.draft().map(|d| d.text.as_str()), Some("hello"));
    }

    #[test]
    fn load_keeps_generated_ids_unique() {
        let mut store = AnnotationStore::default();
        store.load([Annotation {
            id: "annotation-7".to_owned(),
            kind: AnnotationKind::Arrow,
            position: Point::new(1.0, 1.0),
            text: None,
            color: Color::default(),
            size: AnnotationSize::Small,
            visible: true,
            created_at: Utc::now(),
            created_by: "ops".to_owned(),
        }]);

        store.open_composer();
        store.set_kind(AnnotationKind::Line);
        store.confirm_text().expect("line needs no text");
        let placed = store
            .place(Point::new(5.0, 5.0), ViewportState::default(), "ops")
            .expect("place");
        assert_eq!(placed.id, "annotation-8");
        assert_eq!(placed.text, None);
    }

    #[test]
    fn clamp_axis_maps_nan_to_zero() {
        assert_eq!(clamp_axis(f64::NAN, 10.0), 0.0);
        assert_eq!(clamp_axis(-5.0, 10.0), 0.0);
        assert_eq!(clamp_axis(15.0, 10.0), 10.0);
    }
}
