//! chart-overlay: headless interactivity layer for externally rendered charts.
//!
//! The crate never draws chart primitives. It owns the interaction state that
//! sits on top of a chart (zoom/pan, annotations, drill-down, inline data
//! edits, comparison toggles) and reports changes to the embedding host.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractivityShell, OverlayConfig, OverlayHost};
pub use error::{OverlayError, OverlayResult};
