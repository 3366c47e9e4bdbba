use tracing::trace;

use crate::interaction::{KeyInput, ShortcutAction};

use super::{InteractivityShell, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    /// Handles a key press from the host's document-level listener.
    ///
    /// Returns the action that was applied. Nothing resolves while the shell
    /// is unmounted or while focus sits in a text field.
    pub fn handle_key(&mut self, input: &KeyInput) -> Option<ShortcutAction> {
        let action = self.shortcuts.dispatch(input)?;
        match action {
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::ResetView => self.reset_view(),
            ShortcutAction::OpenAnnotationComposer => {
                if self.open_annotation_composer().is_err() {
                    return None;
                }
            }
            ShortcutAction::Cancel => {
                if !self.cancel_interaction() {
                    return None;
                }
            }
        }
        trace!(?action, key = %input.key, "shortcut applied");
        Some(action)
    }

    /// Abandons every in-flight interaction: drag (position restored), pan,
    /// composer draft and data edit. Returns `true` if anything was open.
    pub fn cancel_interaction(&mut self) -> bool {
        let dragged = self.annotations.drag_cancel();
        let panned = self.viewport.end_pan();
        let composing = self.annotations.cancel_composer();
        let editing = self.editor.cancel();
        dragged || panned || composing || editing
    }
}
