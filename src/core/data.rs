use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// X coordinate of a data point: a category label or a numeric ordinal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Ordinal(f64),
    Label(String),
}

impl From<&str> for XValue {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for XValue {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

impl From<f64> for XValue {
    fn from(value: f64) -> Self {
        Self::Ordinal(value)
    }
}

/// One element of the host-owned chart data collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub id: String,
    pub x: XValue,
    pub y: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl DataPoint {
    #[must_use]
    pub fn new(id: impl Into<String>, x: impl Into<XValue>, y: f64) -> Self {
        Self {
            id: id.into(),
            x: x.into(),
            y,
            label: None,
            editable: false,
            metadata: serde_json::Value::Null,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub(crate) fn validate(&self) -> OverlayResult<()> {
        if self.id.is_empty() {
            return Err(OverlayError::InvalidData(
                "data point id must not be empty".to_owned(),
            ));
        }
        if !self.y.is_finite() {
            return Err(OverlayError::InvalidData(format!(
                "data point `{}` y value must be finite",
                self.id
            )));
        }
        if let XValue::Ordinal(x) = self.x {
            if !x.is_finite() {
                return Err(OverlayError::InvalidData(format!(
                    "data point `{}` x ordinal must be finite",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// Returns a new collection where the element sharing `replacement.id` is
/// swapped out. Length and order are preserved.
pub fn replace_by_id(
    points: &[DataPoint],
    replacement: &DataPoint,
) -> OverlayResult<Vec<DataPoint>> {
    let position = points
        .iter()
        .position(|point| point.id == replacement.id)
        .ok_or_else(|| OverlayError::UnknownDataPoint(replacement.id.clone()))?;

    let mut next = points.to_vec();
    next[position] = replacement.clone();
    Ok(next)
}
