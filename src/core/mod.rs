pub mod data;
pub mod types;
pub mod viewport;

pub use data::{DataPoint, XValue, replace_by_id};
pub use types::{Color, Point, Size};
pub use viewport::{
    DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, PanSession, ViewportController, ViewportState,
    ViewportTransform, ZOOM_STEP,
};
