use tracing::{debug, warn};

use crate::core::{DataPoint, Size, ViewportController};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{
    AnnotationStore, ComparisonOverlay, DataPointEditor, DrillDelegate, DrillDownNavigator,
    MAX_DRILL_LEVEL,
};
use crate::interaction::{InteractionMode, KeyboardShortcutDispatcher};
use crate::render::{
    AnnotationPrimitive, ComparisonToggle, DrillToolbar, OverlayFrame, OverlayRenderer,
    ToolbarLayout,
};

use super::{Notice, NullHost, OverlayConfig, OverlayFeature, OverlayHost};

/// Composes the overlay controllers around opaque chart content `C`.
///
/// The shell holds no business state of its own: it routes input to the
/// controllers, gates them behind feature toggles and reports changes to the
/// host.
pub struct InteractivityShell<C, H: OverlayHost = NullHost> {
    pub(super) content: C,
    pub(super) host: H,
    pub(super) config: OverlayConfig,
    pub(super) container: Size,
    pub(super) points: Vec<DataPoint>,
    pub(super) viewport: ViewportController,
    pub(super) annotations: AnnotationStore,
    pub(super) drill: DrillDownNavigator,
    pub(super) editor: DataPointEditor,
    pub(super) comparison: ComparisonOverlay,
    pub(super) shortcuts: KeyboardShortcutDispatcher,
}

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    /// Builds a shell that tracks drill-down state itself.
    pub fn new(content: C, host: H, config: OverlayConfig) -> OverlayResult<Self> {
        Self::build(content, host, config, DrillDownNavigator::internal())
    }

    /// Builds a shell whose drill-down level and transitions belong to the
    /// host.
    pub fn with_external_drill(
        content: C,
        host: H,
        config: OverlayConfig,
        delegate: Box<dyn DrillDelegate>,
    ) -> OverlayResult<Self> {
        Self::build(content, host, config, DrillDownNavigator::external(delegate))
    }

    fn build(
        content: C,
        host: H,
        config: OverlayConfig,
        drill: DrillDownNavigator,
    ) -> OverlayResult<Self> {
        config.validate()?;
        debug!(
            features = ?config.features,
            external_drill = drill.is_external(),
            "interactivity shell created"
        );
        Ok(Self {
            content,
            host,
            container: config.container,
            points: Vec::new(),
            viewport: ViewportController::new(),
            annotations: AnnotationStore::new(config.annotation_template()),
            drill,
            editor: DataPointEditor::new(),
            comparison: ComparisonOverlay::new(),
            shortcuts: KeyboardShortcutDispatcher::new(config.ignore_shortcuts_in_text_entry),
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_parts(self) -> (C, H) {
        (self.content, self.host)
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    #[must_use]
    pub fn drill_navigator(&self) -> &DrillDownNavigator {
        &self.drill
    }

    #[must_use]
    pub fn data_editor(&self) -> &DataPointEditor {
        &self.editor
    }

    #[must_use]
    pub fn comparison(&self) -> &ComparisonOverlay {
        &self.comparison
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn is_enabled(&self, feature: OverlayFeature) -> bool {
        self.config.features.is_enabled(feature)
    }

    // lifecycle

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.shortcuts.is_attached()
    }

    /// Attaches the global keyboard listener.
    pub fn mount(&mut self) {
        self.shortcuts.attach();
        debug!("interactivity shell mounted");
    }

    /// Detaches the keyboard listener and tears down every live session.
    pub fn unmount(&mut self) {
        self.shortcuts.detach();
        self.cancel_interaction();
        debug!("interactivity shell unmounted");
    }

    pub fn set_container_size(&mut self, container: Size) -> OverlayResult<()> {
        self.container = container.validate()?;
        Ok(())
    }

    /// Replaces the host-owned data collection the editor works against.
    pub fn set_data(&mut self, points: Vec<DataPoint>) -> OverlayResult<()> {
        for (index, point) in points.iter().enumerate() {
            point.validate()?;
            if points[..index].iter().any(|other| other.id == point.id) {
                return Err(OverlayError::InvalidData(format!(
                    "duplicate data point id `{}`",
                    point.id
                )));
            }
        }
        self.points = points;
        Ok(())
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        if self.annotations.is_dragging() {
            InteractionMode::DraggingAnnotation
        } else if self.viewport.is_panning() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    // internal helpers

    pub(super) fn ensure_enabled(&self, feature: OverlayFeature) -> OverlayResult<()> {
        if self.is_enabled(feature) {
            Ok(())
        } else {
            Err(OverlayError::FeatureDisabled(feature))
        }
    }

    /// Forwards the user-visible part of a rejection to the host and hands
    /// the error back.
    pub(super) fn reject<T>(&mut self, error: OverlayError) -> OverlayResult<T> {
        warn!(error = %error, "overlay operation rejected");
        if let Some(notice) = Notice::for_rejection(&error) {
            self.host.on_notice(&notice);
        }
        Err(error)
    }

    // presentation

    #[must_use]
    pub fn toolbar(&self) -> ToolbarLayout {
        let features = self.config.features;
        ToolbarLayout {
            zoom_percent: (self.viewport.zoom() * 100.0).round() as u32,
            annotations: features
                .enable_annotations
                .then(|| self.annotations.composer_phase()),
            drill_down: features.enable_drill_down.then(|| DrillToolbar {
                level: self.drill.level(),
                max_level: MAX_DRILL_LEVEL,
                can_drill_down: self.drill.can_drill_down(),
                can_drill_up: self.drill.can_drill_up(),
                path: self.drill.path().to_vec(),
            }),
            comparison: features.enable_comparison.then(|| {
                self.comparison
                    .series()
                    .iter()
                    .map(|series| ComparisonToggle {
                        id: series.id.clone(),
                        title: series.title.clone(),
                        visible: series.visible,
                    })
                    .collect()
            }),
            data_editing: features.enable_data_editing,
        }
    }

    #[must_use]
    pub fn frame(&self) -> OverlayFrame {
        let features = self.config.features;
        let dragged = self.annotations.dragged_id();
        let annotations = if features.enable_annotations {
            self.annotations
                .iter()
                .filter(|annotation| annotation.visible)
                .map(|annotation| AnnotationPrimitive {
                    id: annotation.id.clone(),
                    kind: annotation.kind,
                    position: annotation.position,
                    footprint: annotation.footprint(),
                    text: annotation.text.clone(),
                    color: annotation.color,
                    dragging: dragged == Some(annotation.id.as_str()),
                })
                .collect()
        } else {
            Vec::new()
        };
        let visible_comparisons = if features.enable_comparison {
            self.comparison
                .visible_series()
                .map(|series| series.id.clone())
                .collect()
        } else {
            Vec::new()
        };

        OverlayFrame {
            container: self.container,
            transform: self.viewport.transform(),
            mode: self.interaction_mode(),
            annotations,
            toolbar: self.toolbar(),
            editing: self
                .editor
                .working_copy()
                .filter(|_| features.enable_data_editing),
            visible_comparisons,
        }
    }

    /// Hands the chart content and current overlay frame to `renderer`.
    pub fn render<R: OverlayRenderer<C>>(&self, renderer: &mut R) -> OverlayResult<()> {
        let frame = self.frame();
        renderer.render(&self.content, &frame)
    }
}
