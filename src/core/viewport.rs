use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::types::Point;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.1;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom scalar plus pan offset applied to the whole chart presentation.
///
/// `pan` is expressed in screen pixels; `zoom` is always inside
/// `[MIN_ZOOM, MAX_ZOOM]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub zoom: f64,
    pub pan: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Point::ORIGIN,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn transform(self) -> ViewportTransform {
        ViewportTransform {
            scale: self.zoom,
            translate: Point::new(self.pan.x / self.zoom, self.pan.y / self.zoom),
        }
    }

    /// Maps a container-relative pointer position into chart space.
    #[must_use]
    pub fn screen_to_chart(self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    #[must_use]
    pub fn chart_to_screen(self, chart: Point) -> Point {
        Point::new(
            chart.x * self.zoom + self.pan.x,
            chart.y * self.zoom + self.pan.y,
        )
    }
}

/// Renderable transform: `scale(scale)` followed by `translate(translate)`,
/// where `translate` is in pre-scale units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTransform {
    pub scale: f64,
    pub translate: Point,
}

impl ViewportTransform {
    /// CSS-style transform string for web hosts.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "scale({}) translate({}px, {}px)",
            self.scale, self.translate.x, self.translate.y
        )
    }
}

/// Live click-drag pan. Exists only between `begin_pan` and `end_pan`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSession {
    origin: Point,
    pan_at_start: Point,
}

#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    state: ViewportState,
    pan_session: Option<PanSession>,
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    #[must_use]
    pub fn pan(&self) -> Point {
        self.state.pan
    }

    #[must_use]
    pub fn transform(&self) -> ViewportTransform {
        self.state.transform()
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan_session.is_some()
    }

    pub fn zoom_in(&mut self) {
        self.step_zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(-ZOOM_STEP);
    }

    fn step_zoom(&mut self, delta: f64) {
        // Snap to one decimal so repeated steps don't drift (0.1 is not exact).
        let next = ((self.state.zoom + delta) * 10.0).round() / 10.0;
        let next = next.clamp(MIN_ZOOM, MAX_ZOOM);
        if next != self.state.zoom {
            debug!(from = self.state.zoom, to = next, "viewport zoom changed");
        }
        self.state.zoom = next;
    }

    pub fn reset(&mut self) {
        self.pan_session = None;
        self.state = ViewportState::default();
        debug!("viewport reset");
    }

    pub fn begin_pan(&mut self, origin: Point) {
        self.pan_session = Some(PanSession {
            origin,
            pan_at_start: self.state.pan,
        });
    }

    /// Returns `false` when no pan is in progress.
    pub fn update_pan(&mut self, cursor: Point) -> bool {
        let Some(session) = self.pan_session else {
            return false;
        };
        let delta = cursor.offset_from(session.origin);
        self.state.pan = Point::new(
            session.pan_at_start.x + delta.x,
            session.pan_at_start.y + delta.y,
        );
        trace!(x = self.state.pan.x, y = self.state.pan.y, "viewport pan updated");
        true
    }

    pub fn end_pan(&mut self) -> bool {
        self.pan_session.take().is_some()
    }
}
