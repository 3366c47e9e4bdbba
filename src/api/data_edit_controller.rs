use crate::error::{OverlayError, OverlayResult};
use crate::extensions::DataPointDraft;

use super::{InteractivityShell, OverlayFeature, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    /// Opens an edit for point `id`. Returns `Ok(false)` for non-editable
    /// points, which are ignored without a notice.
    pub fn edit_data_point(&mut self, id: &str) -> OverlayResult<bool> {
        self.ensure_enabled(OverlayFeature::DataEditing)?;
        let Some(point) = self.points.iter().find(|point| point.id == id) else {
            return self.reject(OverlayError::UnknownDataPoint(id.to_owned()));
        };
        Ok(self.editor.edit(point))
    }

    /// Draft of the open edit. Only `x`, `y` and `label` are editable; the
    /// point's id, editable flag and metadata are fixed by the session.
    pub fn editing_point_mut(&mut self) -> Option<&mut DataPointDraft> {
        self.editor.draft_mut()
    }

    /// Commits the working copy and emits the full replacement collection.
    pub fn save_data_edit(&mut self) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::DataEditing)?;
        let updated = match self.editor.save(&self.points) {
            Ok(updated) => updated,
            Err(err) => return self.reject(err),
        };
        self.points = updated;
        self.host.on_data_update(&self.points);
        Ok(())
    }

    pub fn cancel_data_edit(&mut self) -> bool {
        self.editor.cancel()
    }
}
