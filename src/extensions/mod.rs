//! Overlay feature controllers.
//!
//! Each controller owns its state and exposes a narrow method surface; the
//! shell in `api` composes them and gates each behind its feature toggle.

pub mod annotations;
pub mod comparison;
pub mod data_editor;
pub mod drill_down;

pub use annotations::{
    Annotation, AnnotationDraft, AnnotationKind, AnnotationSize, AnnotationStore, ComposerPhase,
};
pub use comparison::{ComparisonOverlay, ComparisonSeries, RenderType};
pub use data_editor::{DataPointDraft, DataPointEditor};
pub use drill_down::{DrillDelegate, DrillDownNavigator, DrillPath, DrillState, MAX_DRILL_LEVEL};
