mod annotation_controller;
mod comparison_controller;
mod config;
mod data_edit_controller;
mod drill_controller;
mod host;
mod keyboard_controller;
mod shell;
mod snapshot;
mod viewport_controller;

pub use config::{OverlayConfig, OverlayFeature, OverlayFeatures};
pub use host::{Notice, NoticeLevel, NullHost, OverlayHost};
pub use shell::InteractivityShell;
pub use snapshot::{
    OVERLAY_SNAPSHOT_JSON_SCHEMA_V1, OverlaySnapshot, OverlaySnapshotJsonContractV1,
};
