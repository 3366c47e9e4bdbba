use crate::error::OverlayResult;

use super::{InteractivityShell, OverlayFeature, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    #[must_use]
    pub fn drill_level(&self) -> u8 {
        self.drill.level()
    }

    #[must_use]
    pub fn drill_path(&self) -> &[String] {
        self.drill.path()
    }

    /// Descends one level. Internally tracked depth is bounded; in external
    /// mode the request goes straight to the host delegate.
    pub fn drill_down(&mut self, segment: &str) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::DrillDown)?;
        match self.drill.drill_down(segment) {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }

    pub fn drill_up(&mut self) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::DrillDown)?;
        match self.drill.drill_up() {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }
}
