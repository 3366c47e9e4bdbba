use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::OverlayError;
use crate::extensions::Annotation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-visible message for the host's toast layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Maps a rejection to the message shown to the user. Programmatic misuse
    /// (disabled feature, nothing armed) stays silent.
    #[must_use]
    pub fn for_rejection(error: &OverlayError) -> Option<Self> {
        let notice = match error {
            OverlayError::EmptyAnnotationText => {
                Self::new(NoticeLevel::Error, "Please enter annotation text")
            }
            OverlayError::MaxDrillDepthReached { .. } => {
                Self::new(NoticeLevel::Warning, "Maximum drill-down depth reached")
            }
            OverlayError::AlreadyAtTopLevel => {
                Self::new(NoticeLevel::Warning, "Already at top level")
            }
            OverlayError::InvalidData(_) | OverlayError::UnknownDataPoint(_) => {
                Self::new(NoticeLevel::Error, error.to_string())
            }
            OverlayError::InvalidContainer { .. }
            | OverlayError::NotArmedForPlacement
            | OverlayError::UnknownAnnotation(_)
            | OverlayError::NoActiveEdit
            | OverlayError::FeatureDisabled(_) => return None,
        };
        Some(notice)
    }
}

/// Host-side reactions to overlay changes.
///
/// Every method has a no-op default, so hosts implement only what they
/// persist or display. Callbacks run synchronously after local state has
/// changed and are never awaited or rolled back.
pub trait OverlayHost {
    fn on_data_update(&mut self, _points: &[DataPoint]) {}

    fn on_annotation_add(&mut self, _annotation: &Annotation) {}

    fn on_annotation_update(&mut self, _annotation: &Annotation) {}

    fn on_annotation_delete(&mut self, _id: &str) {}

    fn on_notice(&mut self, _notice: &Notice) {}
}

/// Host that ignores every notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullHost;

impl OverlayHost for NullHost {}

impl<T: OverlayHost + ?Sized> OverlayHost for Box<T> {
    fn on_data_update(&mut self, points: &[DataPoint]) {
        (**self).on_data_update(points);
    }

    fn on_annotation_add(&mut self, annotation: &Annotation) {
        (**self).on_annotation_add(annotation);
    }

    fn on_annotation_update(&mut self, annotation: &Annotation) {
        (**self).on_annotation_update(annotation);
    }

    fn on_annotation_delete(&mut self, id: &str) {
        (**self).on_annotation_delete(id);
    }

    fn on_notice(&mut self, notice: &Notice) {
        (**self).on_notice(notice);
    }
}
