use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Color, DataPoint};
use crate::error::{OverlayError, OverlayResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    Bar,
    #[default]
    Line,
    Area,
    Pie,
}

/// Extra series drawn by the host next to the primary chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSeries {
    pub id: String,
    pub title: String,
    pub data: Vec<DataPoint>,
    pub render_type: RenderType,
    pub color: Color,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl ComparisonSeries {
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            data,
            render_type: RenderType::default(),
            color: Color::rgb(0x63, 0x66, 0xf1),
            visible: true,
        }
    }

    #[must_use]
    pub fn with_render_type(mut self, render_type: RenderType) -> Self {
        self.render_type = render_type;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Ordered list of togglable comparison series. Purely presentational.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonOverlay {
    series: Vec<ComparisonSeries>,
}

impl ComparisonOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn series(&self) -> &[ComparisonSeries] {
        &self.series
    }

    pub fn visible_series(&self) -> impl Iterator<Item = &ComparisonSeries> {
        self.series.iter().filter(|series| series.visible)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ComparisonSeries> {
        self.series.iter().find(|series| series.id == id)
    }

    /// Appends `series`, forcing it visible.
    pub fn add_series(&mut self, mut series: ComparisonSeries) -> OverlayResult<()> {
        if series.id.is_empty() {
            return Err(OverlayError::InvalidData(
                "comparison series id must not be empty".to_owned(),
            ));
        }
        if self.get(&series.id).is_some() {
            return Err(OverlayError::InvalidData(format!(
                "comparison series `{}` already exists",
                series.id
            )));
        }
        series.visible = true;
        debug!(id = %series.id, points = series.data.len(), "comparison series added");
        self.series.push(series);
        Ok(())
    }

    /// Flips visibility. Returns the new flag, or `None` when `id` is unknown.
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let series = self.series.iter_mut().find(|series| series.id == id)?;
        series.visible = !series.visible;
        Some(series.visible)
    }

    pub fn remove_series(&mut self, id: &str) -> Option<ComparisonSeries> {
        let position = self.series.iter().position(|series| series.id == id)?;
        Some(self.series.remove(position))
    }
}
