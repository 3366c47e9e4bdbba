//! Keyboard shortcut mapping.
//!
//! Ctrl is treated as Cmd so the same bindings work on every platform.
//! The dispatcher only resolves keys while attached, which the shell ties to
//! its mount lifecycle.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutAction {
    ZoomIn,
    ZoomOut,
    ResetView,
    OpenAnnotationComposer,
    /// Escape: abandons the composer, drag, pan or edit in progress.
    Cancel,
}

/// Element that had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FocusTarget {
    #[default]
    Document,
    /// Input, textarea or contenteditable.
    TextEntry,
}

/// One key press as seen by the host's global listener.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyInput {
    /// `KeyboardEvent.key` value, e.g. `"+"`, `"a"`, `"Escape"`.
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
    #[serde(default)]
    pub focus: FocusTarget,
}

impl KeyInput {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    #[must_use]
    pub fn in_text_entry(mut self) -> Self {
        self.focus = FocusTarget::TextEntry;
        self
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardShortcutDispatcher {
    attached: bool,
    ignore_text_entry: bool,
}

impl Default for KeyboardShortcutDispatcher {
    fn default() -> Self {
        Self::new(true)
    }
}

impl KeyboardShortcutDispatcher {
    #[must_use]
    pub fn new(ignore_text_entry: bool) -> Self {
        Self {
            attached: false,
            ignore_text_entry,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Resolves `input` to an action, honoring attachment and focus guards.
    #[must_use]
    pub fn dispatch(&self, input: &KeyInput) -> Option<ShortcutAction> {
        if !self.attached {
            return None;
        }
        if self.ignore_text_entry && input.focus == FocusTarget::TextEntry {
            trace!(key = %input.key, "shortcut ignored inside text entry");
            return None;
        }
        resolve(input)
    }
}

/// Pure key → action mapping, independent of lifecycle.
#[must_use]
pub fn resolve(input: &KeyInput) -> Option<ShortcutAction> {
    if input.command() && !input.alt {
        return match input.key.as_str() {
            // `=` is the unshifted `+` key on US layouts.
            "+" | "=" => Some(ShortcutAction::ZoomIn),
            "-" | "_" => Some(ShortcutAction::ZoomOut),
            "0" => Some(ShortcutAction::ResetView),
            "a" | "A" => Some(ShortcutAction::OpenAnnotationComposer),
            _ => None,
        };
    }

    match input.key.as_str() {
        "Escape" | "Esc" => Some(ShortcutAction::Cancel),
        _ => None,
    }
}
