use thiserror::Error;

use crate::api::OverlayFeature;

pub type OverlayResult<T> = Result<T, OverlayError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OverlayError {
    #[error("invalid container size: width={width}, height={height}")]
    InvalidContainer { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("annotation text must not be empty for notes")]
    EmptyAnnotationText,

    #[error("no annotation is armed for placement")]
    NotArmedForPlacement,

    #[error("unknown annotation `{0}`")]
    UnknownAnnotation(String),

    #[error("unknown data point `{0}`")]
    UnknownDataPoint(String),

    #[error("no data point edit is in progress")]
    NoActiveEdit,

    #[error("maximum drill-down depth reached (level {max_level})")]
    MaxDrillDepthReached { max_level: u8 },

    #[error("already at top drill-down level")]
    AlreadyAtTopLevel,

    #[error("feature `{0}` is disabled")]
    FeatureDisabled(OverlayFeature),
}
