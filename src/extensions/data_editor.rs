use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, XValue, replace_by_id};
use crate::error::{OverlayError, OverlayResult};

/// The user-editable slice of a data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPointDraft {
    pub x: XValue,
    pub y: f64,
    pub label: Option<String>,
}

impl DataPointDraft {
    fn from_point(point: &DataPoint) -> Self {
        Self {
            x: point.x.clone(),
            y: point.y,
            label: point.label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct EditSession {
    original: DataPoint,
    draft: DataPointDraft,
}

impl EditSession {
    /// Original point with the draft fields applied. `id`, `editable` and
    /// `metadata` always come from the point the session was opened on.
    fn merged(&self) -> DataPoint {
        DataPoint {
            x: self.draft.x.clone(),
            y: self.draft.y,
            label: self.draft.label.clone(),
            ..self.original.clone()
        }
    }
}

/// Holds at most one in-flight edit of a data point.
///
/// The editor never owns the collection: `save` takes the host collection and
/// returns a full replacement.
#[derive(Debug, Clone, Default)]
pub struct DataPointEditor {
    session: Option<EditSession>,
}

impl DataPointEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn editing_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|session| session.original.id.as_str())
    }

    /// The point as it would be saved right now.
    #[must_use]
    pub fn working_copy(&self) -> Option<DataPoint> {
        self.session.as_ref().map(EditSession::merged)
    }

    pub fn draft_mut(&mut self) -> Option<&mut DataPointDraft> {
        self.session.as_mut().map(|session| &mut session.draft)
    }

    /// Opens an edit session. Non-editable points are ignored and `false` is
    /// returned.
    pub fn edit(&mut self, point: &DataPoint) -> bool {
        if !point.editable {
            return false;
        }
        self.session = Some(EditSession {
            original: point.clone(),
            draft: DataPointDraft::from_point(point),
        });
        debug!(id = %point.id, "data point edit opened");
        true
    }

    /// Commits the draft into a new collection and closes the session.
    ///
    /// On error the session stays open so the user can correct the draft.
    pub fn save(&mut self, collection: &[DataPoint]) -> OverlayResult<Vec<DataPoint>> {
        let merged = self
            .session
            .as_ref()
            .map(EditSession::merged)
            .ok_or(OverlayError::NoActiveEdit)?;
        merged.validate()?;
        let updated = replace_by_id(collection, &merged)?;
        debug!(id = %merged.id, y = merged.y, "data point edit saved");
        self.session = None;
        Ok(updated)
    }

    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}
