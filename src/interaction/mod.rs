pub mod shortcuts;

use serde::{Deserialize, Serialize};

pub use shortcuts::{FocusTarget, KeyInput, KeyboardShortcutDispatcher, ShortcutAction};

/// What the pointer is currently doing on the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// Click-drag panning of the whole viewport.
    Panning,
    /// Repositioning one annotation.
    DraggingAnnotation,
}

/// Outcome of a pointer press, reported back to the host so it can attach
/// global move/up listeners only when a session started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerOutcome {
    /// The armed annotation draft was placed.
    AnnotationPlaced { id: String },
    /// A drag session started for this annotation.
    DragStarted { id: String },
    PanStarted,
    /// The press was rejected or landed on nothing actionable.
    Ignored,
}

impl PointerOutcome {
    #[must_use]
    pub fn starts_session(&self) -> bool {
        matches!(self, Self::DragStarted { .. } | Self::PanStarted)
    }
}
