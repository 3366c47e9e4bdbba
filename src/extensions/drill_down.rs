use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{OverlayError, OverlayResult};

pub const MAX_DRILL_LEVEL: u8 = 2;

pub type DrillPath = SmallVec<[String; MAX_DRILL_LEVEL as usize]>;

/// Host-side drill-down handler used in external mode.
///
/// The host owns the level entirely; the navigator only forwards intent.
pub trait DrillDelegate {
    fn level(&self) -> u8;
    fn on_drill_down(&mut self, segment: &str);
    fn on_drill_up(&mut self);
}

/// Internally tracked drill position. `path.len() == level` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDrillState")]
pub struct DrillState {
    level: u8,
    path: DrillPath,
}

#[derive(Deserialize)]
struct RawDrillState {
    level: u8,
    path: DrillPath,
}

impl TryFrom<RawDrillState> for DrillState {
    type Error = OverlayError;

    fn try_from(raw: RawDrillState) -> Result<Self, Self::Error> {
        if raw.level > MAX_DRILL_LEVEL || raw.path.len() != usize::from(raw.level) {
            return Err(OverlayError::InvalidData(format!(
                "drill state level {} with {} path segments is out of bounds",
                raw.level,
                raw.path.len()
            )));
        }
        Ok(Self {
            level: raw.level,
            path: raw.path,
        })
    }
}

impl DrillState {
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

enum DrillStrategy {
    Internal(DrillState),
    External(Box<dyn DrillDelegate>),
}

/// Bounded level/path navigator. Internal vs. host-driven mode is fixed when
/// the navigator is built.
pub struct DrillDownNavigator {
    strategy: DrillStrategy,
}

impl std::fmt::Debug for DrillDownNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.strategy {
            DrillStrategy::Internal(state) => f
                .debug_struct("DrillDownNavigator")
                .field("mode", &"internal")
                .field("state", state)
                .finish(),
            DrillStrategy::External(delegate) => f
                .debug_struct("DrillDownNavigator")
                .field("mode", &"external")
                .field("level", &delegate.level())
                .finish(),
        }
    }
}

impl Default for DrillDownNavigator {
    fn default() -> Self {
        Self::internal()
    }
}

impl DrillDownNavigator {
    #[must_use]
    pub fn internal() -> Self {
        Self {
            strategy: DrillStrategy::Internal(DrillState::default()),
        }
    }

    #[must_use]
    pub fn external(delegate: Box<dyn DrillDelegate>) -> Self {
        Self {
            strategy: DrillStrategy::External(delegate),
        }
    }

    #[must_use]
    pub fn is_external(&self) -> bool {
        matches!(self.strategy, DrillStrategy::External(_))
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        match &self.strategy {
            DrillStrategy::Internal(state) => state.level,
            DrillStrategy::External(delegate) => delegate.level().min(MAX_DRILL_LEVEL),
        }
    }

    /// Internal path. Empty in external mode, where the host owns the path.
    #[must_use]
    pub fn path(&self) -> &[String] {
        match &self.strategy {
            DrillStrategy::Internal(state) => state.path(),
            DrillStrategy::External(_) => &[],
        }
    }

    /// Internal state snapshot; `None` in external mode.
    #[must_use]
    pub fn state(&self) -> Option<&DrillState> {
        match &self.strategy {
            DrillStrategy::Internal(state) => Some(state),
            DrillStrategy::External(_) => None,
        }
    }

    #[must_use]
    pub fn can_drill_down(&self) -> bool {
        self.level() < MAX_DRILL_LEVEL
    }

    #[must_use]
    pub fn can_drill_up(&self) -> bool {
        self.level() > 0
    }

    pub fn drill_down(&mut self, segment: &str) -> OverlayResult<()> {
        match &mut self.strategy {
            DrillStrategy::Internal(state) => {
                if state.level >= MAX_DRILL_LEVEL {
                    return Err(OverlayError::MaxDrillDepthReached {
                        max_level: MAX_DRILL_LEVEL,
                    });
                }
                state.level += 1;
                state.path.push(segment.to_owned());
                debug!(level = state.level, segment, "drilled down");
            }
            DrillStrategy::External(delegate) => {
                debug!(segment, "forwarding drill down to host");
                delegate.on_drill_down(segment);
            }
        }
        Ok(())
    }

    pub fn drill_up(&mut self) -> OverlayResult<()> {
        match &mut self.strategy {
            DrillStrategy::Internal(state) => {
                if state.level == 0 {
                    return Err(OverlayError::AlreadyAtTopLevel);
                }
                state.level -= 1;
                state.path.pop();
                debug!(level = state.level, "drilled up");
            }
            DrillStrategy::External(delegate) => {
                debug!("forwarding drill up to host");
                delegate.on_drill_up();
            }
        }
        Ok(())
    }
}
