use crate::error::OverlayResult;
use crate::extensions::ComparisonSeries;

use super::{InteractivityShell, OverlayFeature, OverlayHost};

impl<C, H: OverlayHost> InteractivityShell<C, H> {
    pub fn add_comparison_series(&mut self, series: ComparisonSeries) -> OverlayResult<()> {
        self.ensure_enabled(OverlayFeature::Comparison)?;
        match self.comparison.add_series(series) {
            Ok(()) => Ok(()),
            Err(err) => self.reject(err),
        }
    }

    /// Flips a series' visibility; `Ok(None)` when `id` is unknown.
    pub fn toggle_comparison_series(&mut self, id: &str) -> OverlayResult<Option<bool>> {
        self.ensure_enabled(OverlayFeature::Comparison)?;
        Ok(self.comparison.toggle(id))
    }

    pub fn remove_comparison_series(
        &mut self,
        id: &str,
    ) -> OverlayResult<Option<ComparisonSeries>> {
        self.ensure_enabled(OverlayFeature::Comparison)?;
        Ok(self.comparison.remove_series(id))
    }
}
