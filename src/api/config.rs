use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Color, Size};
use crate::error::{OverlayError, OverlayResult};
use crate::extensions::{AnnotationDraft, AnnotationKind, AnnotationSize};

fn default_true() -> bool {
    true
}

fn default_author() -> String {
    "anonymous".to_owned()
}

fn default_container() -> Size {
    Size::new(800.0, 400.0)
}

/// Individually togglable overlay features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayFeature {
    Annotations,
    DataEditing,
    DrillDown,
    Comparison,
}

impl fmt::Display for OverlayFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Annotations => "annotations",
            Self::DataEditing => "data_editing",
            Self::DrillDown => "drill_down",
            Self::Comparison => "comparison",
        };
        f.write_str(name)
    }
}

/// Feature toggles. Each one gates its toolbar section and interactions as a
/// whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFeatures {
    #[serde(default = "default_true")]
    pub enable_annotations: bool,
    #[serde(default = "default_true")]
    pub enable_data_editing: bool,
    #[serde(default = "default_true")]
    pub enable_drill_down: bool,
    #[serde(default = "default_true")]
    pub enable_comparison: bool,
}

impl Default for OverlayFeatures {
    fn default() -> Self {
        Self {
            enable_annotations: true,
            enable_data_editing: true,
            enable_drill_down: true,
            enable_comparison: true,
        }
    }
}

impl OverlayFeatures {
    #[must_use]
    pub fn none() -> Self {
        Self {
            enable_annotations: false,
            enable_data_editing: false,
            enable_drill_down: false,
            enable_comparison: false,
        }
    }

    #[must_use]
    pub fn is_enabled(self, feature: OverlayFeature) -> bool {
        match feature {
            OverlayFeature::Annotations => self.enable_annotations,
            OverlayFeature::DataEditing => self.enable_data_editing,
            OverlayFeature::DrillDown => self.enable_drill_down,
            OverlayFeature::Comparison => self.enable_comparison,
        }
    }

    #[must_use]
    pub fn with(mut self, feature: OverlayFeature, enabled: bool) -> Self {
        match feature {
            OverlayFeature::Annotations => self.enable_annotations = enabled,
            OverlayFeature::DataEditing => self.enable_data_editing = enabled,
            OverlayFeature::DrillDown => self.enable_drill_down = enabled,
            OverlayFeature::Comparison => self.enable_comparison = enabled,
        }
        self
    }
}

/// Shell bootstrap configuration.
///
/// Serializable so dashboards can keep overlay setup next to their chart
/// definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    #[serde(default)]
    pub features: OverlayFeatures,
    /// Stamped into `created_by` of new annotations.
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_container")]
    pub container: Size,
    #[serde(default = "default_true")]
    pub ignore_shortcuts_in_text_entry: bool,
    #[serde(default)]
    pub default_annotation_kind: AnnotationKind,
    #[serde(default)]
    pub default_annotation_color: Color,
    #[serde(default)]
    pub default_annotation_size: AnnotationSize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            features: OverlayFeatures::default(),
            author: default_author(),
            container: default_container(),
            ignore_shortcuts_in_text_entry: true,
            default_annotation_kind: AnnotationKind::default(),
            default_annotation_color: Color::default(),
            default_annotation_size: AnnotationSize::default(),
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_features(mut self, features: OverlayFeatures) -> Self {
        self.features = features;
        self
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    #[must_use]
    pub fn with_shortcut_text_entry_guard(mut self, enabled: bool) -> Self {
        self.ignore_shortcuts_in_text_entry = enabled;
        self
    }

    #[must_use]
    pub fn with_annotation_defaults(
        mut self,
        kind: AnnotationKind,
        color: Color,
        size: AnnotationSize,
    ) -> Self {
        self.default_annotation_kind = kind;
        self.default_annotation_color = color;
        self.default_annotation_size = size;
        self
    }

    pub(crate) fn annotation_template(&self) -> AnnotationDraft {
        AnnotationDraft {
            kind: self.default_annotation_kind,
            text: String::new(),
            color: self.default_annotation_color,
            size: self.default_annotation_size,
        }
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.container.validate()?;
        if self.author.trim().is_empty() {
            return Err(OverlayError::InvalidData(
                "overlay author must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> OverlayResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            OverlayError::InvalidData(format!("failed to serialize overlay config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> OverlayResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            OverlayError::InvalidData(format!("failed to parse overlay config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
