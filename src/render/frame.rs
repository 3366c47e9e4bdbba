use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint, Point, Size, ViewportTransform};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{AnnotationKind, ComposerPhase};
use crate::interaction::InteractionMode;

/// One annotation as it should appear in the overlay layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPrimitive {
    pub id: String,
    pub kind: AnnotationKind,
    /// Chart-space origin; the overlay layer sits inside the viewport
    /// transform, so hosts position by this value directly.
    pub position: Point,
    pub footprint: Size,
    pub text: Option<String>,
    pub color: Color,
    pub dragging: bool,
}

impl AnnotationPrimitive {
    fn validate(&self) -> OverlayResult<()> {
        if !self.position.is_finite() {
            return Err(OverlayError::InvalidData(format!(
                "annotation `{}` position must be finite",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillToolbar {
    pub level: u8,
    pub max_level: u8,
    pub can_drill_down: bool,
    pub can_drill_up: bool,
    pub path: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonToggle {
    pub id: String,
    pub title: String,
    pub visible: bool,
}

/// Toolbar sections. A disabled feature has no section at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolbarLayout {
    pub zoom_percent: u32,
    pub annotations: Option<ComposerPhase>,
    pub drill_down: Option<DrillToolbar>,
    pub comparison: Option<Vec<ComparisonToggle>>,
    pub data_editing: bool,
}

/// Everything a host needs to draw the overlay above its chart content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayFrame {
    pub container: Size,
    pub transform: ViewportTransform,
    pub mode: InteractionMode,
    pub annotations: Vec<AnnotationPrimitive>,
    pub toolbar: ToolbarLayout,
    /// Draft of the data point being edited, if any.
    pub editing: Option<DataPoint>,
    /// Ids of comparison series the host should draw.
    pub visible_comparisons: Vec<String>,
}

impl OverlayFrame {
    pub fn validate(&self) -> OverlayResult<()> {
        self.container.validate()?;
        if !self.transform.scale.is_finite() || self.transform.scale <= 0.0 {
            return Err(OverlayError::InvalidData(
                "overlay transform scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.transform.translate.is_finite() {
            return Err(OverlayError::InvalidData(
                "overlay transform translation must be finite".to_owned(),
            ));
        }
        for annotation in &self.annotations {
            annotation.validate()?;
        }
        Ok(())
    }
}
